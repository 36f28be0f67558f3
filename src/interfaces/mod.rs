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

//! Seams of the engine: the pattern matcher used for validation, and the
//! lookups that describe a number beyond its digits (location, carrier,
//! time zones). [`crate::prefix_mapper`] ships table-backed implementations.

use crate::{metadata::NumberDesc, phonenumber::PhoneNumber};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern defined in the given
    /// NumberDesc.
    fn match_national_number(&self, number: &str, number_desc: &NumberDesc, allow_prefix_match: bool) -> bool;
}

/// Describes where a number is located, e.g. "Mountain View, CA".
pub trait Geocoder {
    /// Returns a description of the number's location in the language of
    /// `locale`. `user_region` is the region of the person the description is
    /// shown to: for a number from another region only the country is named.
    fn describe(&self, number: &PhoneNumber, locale: &str, user_region: Option<&str>) -> Option<String>;
}

/// Which numbers a carrier name is reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierLookupMode {
    /// Any valid number.
    Always,
    /// Mobile, fixed-line-or-mobile and pager numbers only.
    MobileOnly,
    /// Like `MobileOnly`, and only in regions without mobile number
    /// portability, where the original carrier is still meaningful.
    MobileNoPortabilityOnly,
}

/// Names the carrier a number was originally allocated to.
pub trait CarrierLookup {
    fn name_for(&self, number: &PhoneNumber, language: &str, mode: CarrierLookupMode) -> Option<String>;
}

/// Lists the IANA time zones a number may be located in.
pub trait TimeZoneLookup {
    /// Returns the zones in table order, or an empty list when unknown.
    fn zones_for(&self, number: &PhoneNumber) -> Vec<String>;
}
