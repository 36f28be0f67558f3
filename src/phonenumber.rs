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

//! The parsed phone number value.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::phonenumberutil::{errors::ParseError, PHONE_NUMBER_UTIL};

/// Where the country calling code of a parsed number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number started with a plus sign, e.g. "+44 20 7031 3000".
    FromNumberWithPlusSign,
    /// The number started with the international dialling prefix of the
    /// default region, e.g. "011 44 20 7031 3000" parsed for the US.
    FromNumberWithIdd,
    /// The number started with the calling code of the default region without
    /// any prefix, e.g. "44 20 7031 3000" parsed for GB.
    FromNumberWithoutPlusSign,
    /// The calling code was taken from the default region.
    FromDefaultCountry,
    Unspecified,
}

/// An international phone number.
///
/// Values are only produced by parsing or by the example-number lookups of
/// [`PhoneNumberUtil`](crate::PhoneNumberUtil), so every value carries a
/// known calling code and a non-empty national number.
///
/// `Display` writes the E.164 form, and serde uses the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    /// Set when the national significant number starts with zeros, which
    /// `national_number` can't hold (e.g. Italian fixed-line numbers).
    italian_leading_zero: bool,
    number_of_leading_zeros: i32,
    raw_input: Option<String>,
    country_code_source: Option<CountryCodeSource>,
    preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub(crate) fn new(country_code: i32, national_number: u64) -> Self {
        Self {
            country_code,
            national_number,
            extension: None,
            italian_leading_zero: false,
            number_of_leading_zeros: 1,
            raw_input: None,
            country_code_source: None,
            preferred_domestic_carrier_code: None,
        }
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// National significant number without its leading zeros.
    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    /// Count of leading zeros of the national significant number. Only
    /// meaningful when [`Self::italian_leading_zero`] is set.
    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros
    }

    /// The input the number was parsed from, for numbers parsed keeping it.
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source.unwrap_or(CountryCodeSource::Unspecified)
    }

    pub fn preferred_domestic_carrier_code(&self) -> Option<&str> {
        self.preferred_domestic_carrier_code.as_deref()
    }

    pub(crate) fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub(crate) fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub(crate) fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    pub(crate) fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub(crate) fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = italian_leading_zero;
    }

    pub(crate) fn set_number_of_leading_zeros(&mut self, number_of_leading_zeros: i32) {
        self.number_of_leading_zeros = number_of_leading_zeros;
    }

    pub(crate) fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    pub(crate) fn set_country_code_source(&mut self, country_code_source: CountryCodeSource) {
        self.country_code_source = Some(country_code_source);
    }

    pub(crate) fn set_preferred_domestic_carrier_code(&mut self, carrier_code: String) {
        self.preferred_domestic_carrier_code = Some(carrier_code);
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.country_code)?;
        if self.italian_leading_zero {
            for _ in 0..self.number_of_leading_zeros.max(0) {
                f.write_str("0")?;
            }
        }
        write!(f, "{}", self.national_number)
    }
}

impl FromStr for PhoneNumber {
    type Err = ParseError;

    /// Parses a number written with its calling code, such as "+44 20 7031 3000".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PHONE_NUMBER_UTIL.parse(s, None)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PhoneNumberVisitor;

impl<'de> de::Visitor<'de> for PhoneNumberVisitor {
    type Value = PhoneNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a phone number in E.164 format")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PhoneNumberVisitor)
    }
}
