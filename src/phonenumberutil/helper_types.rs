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

use std::borrow::Cow;

use crate::CountryCodeSource;

/// A number with its international prefix (if any) stripped and the rest
/// normalized, along with how the prefix was written.
#[derive(Debug)]
pub struct PhoneNumberWithCountryCodeSource<'a> {
    pub phone_number: Cow<'a, str>,
    pub country_code_source: CountryCodeSource
}

impl<'a> PhoneNumberWithCountryCodeSource<'a> {
    pub fn new(phone_number: Cow<'a, str>, country_code_source: CountryCodeSource) -> Self {
        Self { phone_number, country_code_source }
    }
}

/// Outcome of looking for a country calling code at the start of a number.
#[derive(Debug)]
pub struct ExtractedCountryCode {
    /// Zero when the number carries no calling code.
    pub country_code: i32,
    /// The digits after the calling code; empty when no code was found.
    pub national_number: String,
    pub country_code_source: CountryCodeSource,
}

impl ExtractedCountryCode {
    pub fn none(country_code_source: CountryCodeSource) -> Self {
        Self { country_code: 0, national_number: String::new(), country_code_source }
    }
}

/// Digits found after an extension label at the end of a number.
#[derive(Debug)]
pub struct StrippedExtension {
    pub digits: String,
    /// `false` for single-character labels, a trailing "#" or auto-dialling
    /// commas, where the digits may as well be the end of the number itself.
    pub explicit: bool,
}
