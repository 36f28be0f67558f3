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

use super::{CARRIER_EN, FALLBACK_LANGUAGE, PrefixMap, PrefixTableError, language_of, lookup_digits};
use crate::{
    PhoneNumberType,
    interfaces::{CarrierLookup, CarrierLookupMode},
    phonenumber::PhoneNumber,
    phonenumberutil::{PHONE_NUMBER_UTIL, phonenumberutil::PhoneNumberUtil},
};

/// Names the carrier a number range was allocated to.
pub struct PrefixCarrierMapper<'a> {
    util: &'a PhoneNumberUtil,
    carriers: HashMap<String, PrefixMap>,
}

impl PrefixCarrierMapper<'static> {
    pub fn new() -> Result<Self, PrefixTableError> {
        let mut mapper = Self::with_util(&PHONE_NUMBER_UTIL);
        mapper.add_language(FALLBACK_LANGUAGE, CARRIER_EN)?;
        Ok(mapper)
    }
}

impl<'a> PrefixCarrierMapper<'a> {
    pub fn with_util(util: &'a PhoneNumberUtil) -> Self {
        Self { util, carriers: HashMap::new() }
    }

    pub fn add_language(&mut self, language: &str, table: &str) -> Result<(), PrefixTableError> {
        self.carriers.insert(language.to_owned(), PrefixMap::parse(table)?);
        Ok(())
    }

    fn is_mobile(number_type: PhoneNumberType) -> bool {
        matches!(
            number_type,
            PhoneNumberType::Mobile | PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Pager
        )
    }

    fn is_reportable(&self, number: &PhoneNumber, mode: CarrierLookupMode) -> bool {
        if !self.util.is_valid_number(number) {
            return false;
        }
        match mode {
            CarrierLookupMode::Always => true,
            CarrierLookupMode::MobileOnly => Self::is_mobile(self.util.get_number_type(number)),
            CarrierLookupMode::MobileNoPortabilityOnly => {
                if !Self::is_mobile(self.util.get_number_type(number)) {
                    return false;
                }
                let region_code = self.util.get_region_code_for_number(number);
                // Once a number can be ported its original carrier says nothing.
                !region_code
                    .and_then(|region_code| self.util.metadata().region(region_code))
                    .is_some_and(|metadata| metadata.mobile_number_portable_region())
            }
        }
    }
}

impl CarrierLookup for PrefixCarrierMapper<'_> {
    fn name_for(&self, number: &PhoneNumber, language: &str, mode: CarrierLookupMode) -> Option<String> {
        if !self.is_reportable(number, mode) {
            trace!("No carrier is reported for {number} in mode {mode:?}");
            return None;
        }
        let digits = lookup_digits(self.util, number);
        [language_of(language), FALLBACK_LANGUAGE]
            .into_iter()
            .filter_map(|language| self.carriers.get(language))
            .find_map(|carriers| carriers.lookup(&digits))
            .map(str::to_owned)
    }
}
