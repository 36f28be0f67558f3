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

use log::trace;

use super::{PrefixMap, PrefixTableError, TIMEZONES, lookup_digits};
use crate::{
    PhoneNumberType,
    interfaces::TimeZoneLookup,
    phonenumber::PhoneNumber,
    phonenumberutil::{PHONE_NUMBER_UTIL, phonenumberutil::PhoneNumberUtil},
};

const ZONE_SEPARATOR: char = '&';

/// Maps numbers to the IANA time zones of their area, or of their whole
/// country when the number has no geographical association.
pub struct PrefixTimeZonesMapper<'a> {
    util: &'a PhoneNumberUtil,
    zones: PrefixMap,
}

impl PrefixTimeZonesMapper<'static> {
    pub fn new() -> Result<Self, PrefixTableError> {
        Self::from_table(&PHONE_NUMBER_UTIL, TIMEZONES)
    }
}

impl<'a> PrefixTimeZonesMapper<'a> {
    pub fn from_table(util: &'a PhoneNumberUtil, table: &str) -> Result<Self, PrefixTableError> {
        Ok(Self { util, zones: PrefixMap::parse(table)? })
    }
}

impl TimeZoneLookup for PrefixTimeZonesMapper<'_> {
    fn zones_for(&self, number: &PhoneNumber) -> Vec<String> {
        let zones = match self.util.get_number_type(number) {
            PhoneNumberType::Unknown => None,
            _ if self.util.is_number_geographical(number) => {
                self.zones.lookup(&lookup_digits(self.util, number))
            }
            _ => u64::try_from(number.country_code())
                .ok()
                .and_then(|country_code| self.zones.get(country_code)),
        };
        let Some(zones) = zones else {
            trace!("No time zone is known for {number}");
            return Vec::new();
        };
        zones.split(ZONE_SEPARATOR).map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixTimeZonesMapper;
    use crate::{PHONE_NUMBER_UTIL, interfaces::TimeZoneLookup};

    fn zones(input: &str) -> Vec<String> {
        let mapper = PrefixTimeZonesMapper::new().unwrap();
        let number = PHONE_NUMBER_UTIL.parse(input, None).unwrap();
        mapper.zones_for(&number)
    }

    #[test]
    fn geographical_numbers_use_their_area() {
        assert_eq!(vec!["America/Los_Angeles"], zones("+1 650 253 0000"));
        assert_eq!(vec!["Europe/London"], zones("+44 20 7031 3000"));
    }

    #[test]
    fn other_numbers_use_the_whole_country() {
        assert_eq!(vec!["Europe/London"], zones("+44 7400 123456"));
        // No entry for the entity.
        assert!(zones("+800 1234 5678").is_empty());
    }

    #[test]
    fn unknown_numbers_have_no_zone() {
        assert!(zones("+44 6123 456789").is_empty());
    }
}
