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

//! Prefix-table backed implementations of the [`crate::interfaces`]
//! lookups. A table is a text file of `prefix|value` lines, where the prefix
//! is the country calling code followed by leading digits of the national
//! significant number. `#` starts a comment line.

mod carrier;
mod geocoder;
mod timezones;

use std::{
    collections::{BTreeMap, BTreeSet},
    num::ParseIntError,
};

use thiserror::Error;

use crate::{phonenumber::PhoneNumber, phonenumberutil::phonenumberutil::PhoneNumberUtil};

pub use carrier::PrefixCarrierMapper;
pub use geocoder::PrefixGeocoder;
pub use timezones::PrefixTimeZonesMapper;

const GEOCODING_EN: &str = include_str!("../../resources/prefixes/geocoding/en.txt");
const REGION_NAMES_EN: &str = include_str!("../../resources/prefixes/geocoding/regions_en.txt");
const CARRIER_EN: &str = include_str!("../../resources/prefixes/carrier/en.txt");
const TIMEZONES: &str = include_str!("../../resources/prefixes/timezones/map_data.txt");

/// Language whose tables are used when the requested one has none.
const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, PartialEq, Error)]
pub enum PrefixTableError {
    #[error("Line {line_num} is not a 'prefix|value' entry")]
    MalformedLine { line_num: usize },

    #[error("Failed to parse prefix '{prefix}' on line {line_num}: {source}")]
    InvalidPrefix {
        line_num: usize,
        prefix: String,
        #[source]
        source: ParseIntError,
    },
}

/// Yields `(line number, key, value)` for every entry of a table.
fn table_entries(text: &str) -> impl Iterator<Item = Result<(usize, &str, &str), PrefixTableError>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_num, line)| match line.split_once('|') {
            Some((key, value)) if !key.is_empty() => Ok((line_num, key, value)),
            _ => Err(PrefixTableError::MalformedLine { line_num }),
        })
}

/// Longest-prefix lookup over phone number digits.
#[derive(Debug, Clone, Default)]
pub struct PrefixMap {
    entries: BTreeMap<u64, String>,
    /// Digit counts of the stored prefixes, used to probe from the longest.
    prefix_lengths: BTreeSet<usize>,
}

impl PrefixMap {
    pub fn parse(text: &str) -> Result<Self, PrefixTableError> {
        let mut map = Self::default();
        for entry in table_entries(text) {
            let (line_num, prefix, value) = entry?;
            let prefix_code = prefix.parse().map_err(|source| PrefixTableError::InvalidPrefix {
                line_num,
                prefix: prefix.to_owned(),
                source,
            })?;
            map.prefix_lengths.insert(prefix.len());
            map.entries.insert(prefix_code, value.to_owned());
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the longest stored prefix of `digits`.
    pub fn lookup(&self, digits: &str) -> Option<&str> {
        self.prefix_lengths
            .iter()
            .rev()
            .filter(|&&length| length <= digits.len())
            .find_map(|&length| {
                let prefix = digits.get(..length)?.parse::<u64>().ok()?;
                self.entries.get(&prefix)
            })
            .map(String::as_str)
    }

    /// Value stored for exactly `prefix`.
    pub fn get(&self, prefix: u64) -> Option<&str> {
        self.entries.get(&prefix).map(String::as_str)
    }
}

/// The digits a number is looked up by: calling code, then the national
/// significant number.
fn lookup_digits(util: &PhoneNumberUtil, number: &PhoneNumber) -> String {
    let mut buf = itoa::Buffer::new();
    let mut digits = buf.format(number.country_code()).to_owned();
    digits.push_str(&util.get_national_significant_number(number));
    digits
}

/// The language part of a locale such as "en-GB" or "pt_BR".
fn language_of(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::{PrefixMap, PrefixTableError};

    #[test]
    fn longest_prefix_wins() {
        let map = PrefixMap::parse("# comment\n\n1|NANPA\n1650|Mountain View, CA\n16502|Downtown\n").unwrap();
        assert_eq!(3, map.len());
        assert_eq!(Some("Downtown"), map.lookup("16502530000"));
        assert_eq!(Some("Mountain View, CA"), map.lookup("16501234567"));
        assert_eq!(Some("NANPA"), map.lookup("12015550123"));
        assert_eq!(None, map.lookup("442070313000"));
        assert_eq!(Some("NANPA"), map.get(1));
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert_eq!(
            Err(PrefixTableError::MalformedLine { line_num: 2 }),
            PrefixMap::parse("1|US\nno separator\n").map(|map| map.len())
        );
        assert!(matches!(
            PrefixMap::parse("1x|US"),
            Err(PrefixTableError::InvalidPrefix { line_num: 1, .. })
        ));
    }

    #[test]
    fn embedded_tables_parse() {
        for table in [super::GEOCODING_EN, super::CARRIER_EN, super::TIMEZONES] {
            assert!(!PrefixMap::parse(table).unwrap().is_empty());
        }
    }
}
