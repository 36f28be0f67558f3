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

use std::collections::HashMap;

use log::trace;

use super::{
    FALLBACK_LANGUAGE, GEOCODING_EN, PrefixMap, PrefixTableError, REGION_NAMES_EN, language_of,
    lookup_digits, table_entries,
};
use crate::{
    interfaces::Geocoder, phonenumber::PhoneNumber,
    phonenumberutil::{PHONE_NUMBER_UTIL, phonenumberutil::PhoneNumberUtil},
};

/// Describes valid numbers by area, or by country when the area is unknown or
/// the number is foreign to the user.
pub struct PrefixGeocoder<'a> {
    util: &'a PhoneNumberUtil,
    /// Area tables per language.
    areas: HashMap<String, PrefixMap>,
    /// Region display names per language, keyed by region code.
    region_names: HashMap<String, HashMap<String, String>>,
}

impl PrefixGeocoder<'static> {
    /// Geocoder over the English tables embedded in the crate.
    pub fn new() -> Result<Self, PrefixTableError> {
        let mut geocoder = Self::with_util(&PHONE_NUMBER_UTIL);
        geocoder.add_language(FALLBACK_LANGUAGE, GEOCODING_EN, REGION_NAMES_EN)?;
        Ok(geocoder)
    }
}

impl<'a> PrefixGeocoder<'a> {
    /// Geocoder without any tables.
    pub fn with_util(util: &'a PhoneNumberUtil) -> Self {
        Self { util, areas: HashMap::new(), region_names: HashMap::new() }
    }

    /// Adds the area table and the region names of a language.
    pub fn add_language(
        &mut self,
        language: &str,
        areas: &str,
        region_names: &str,
    ) -> Result<(), PrefixTableError> {
        let areas = PrefixMap::parse(areas)?;
        let region_names = table_entries(region_names)
            .map(|entry| entry.map(|(_, region, name)| (region.to_ascii_uppercase(), name.to_owned())))
            .collect::<Result<HashMap<_, _>, _>>()?;
        self.areas.insert(language.to_owned(), areas);
        self.region_names.insert(language.to_owned(), region_names);
        Ok(())
    }

    fn region_name(&self, region_code: &str, language: &str) -> Option<String> {
        [language, FALLBACK_LANGUAGE]
            .into_iter()
            .filter_map(|language| self.region_names.get(language))
            .find_map(|names| names.get(region_code))
            .cloned()
    }

    fn area_description(&self, number: &PhoneNumber, language: &str) -> Option<String> {
        let digits = lookup_digits(self.util, number);
        [language, FALLBACK_LANGUAGE]
            .into_iter()
            .filter_map(|language| self.areas.get(language))
            .find_map(|areas| areas.lookup(&digits))
            .map(str::to_owned)
    }
}

impl Geocoder for PrefixGeocoder<'_> {
    fn describe(&self, number: &PhoneNumber, locale: &str, user_region: Option<&str>) -> Option<String> {
        if !self.util.is_valid_number(number) {
            trace!("{number} is not valid, no description");
            return None;
        }
        let language = language_of(locale);
        // Non-geographical entities have no region to name.
        let region_code = self.util.get_region_code_for_number(number)?;

        if user_region.is_some_and(|user_region| !user_region.eq_ignore_ascii_case(region_code)) {
            // For a foreign number the country is enough.
            return self.region_name(region_code, language);
        }
        if !self.util.is_number_geographical(number) {
            return self.region_name(region_code, language);
        }
        self.area_description(number, language)
            .or_else(|| self.region_name(region_code, language))
    }
}
