// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsing, validation and formatting of phone numbers.
//!
//! The engine is driven by a numbering-plan dataset embedded in the crate. A
//! shared instance is available as [`PHONE_NUMBER_UTIL`]:
//!
//! ```no_run
//! use telparse::{PHONE_NUMBER_UTIL, PhoneNumberFormat};
//!
//! let number = PHONE_NUMBER_UTIL.parse("+1 650 253 0000", None).unwrap();
//! assert!(PHONE_NUMBER_UTIL.is_valid_number(&number));
//! assert_eq!(
//!     "(650) 253-0000",
//!     PHONE_NUMBER_UTIL.format(&number, PhoneNumberFormat::National)
//! );
//! ```

pub mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod metadata;
mod phonenumber;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod prefix_mapper;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::{CarrierLookup, CarrierLookupMode, Geocoder, TimeZoneLookup};
pub use metadata::{MetadataStore, NumberDesc, NumberFormat, RegionMetadata};
pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumberutil::{
    enums, errors, PHONE_NUMBER_UTIL,
    phonenumberutil::PhoneNumberUtil,
    enums::{MatchType, NumberLengthType, ParseErrorType, PhoneNumberFormat, PhoneNumberType},
    errors::{
        ExtractNumberError, MetadataError, NotANumberError, NotFoundError, ParseError,
        ValidationError,
    },
};
