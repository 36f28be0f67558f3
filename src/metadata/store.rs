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

use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;

use super::region_metadata::RegionMetadata;
use crate::{
    i18n,
    phonenumberutil::{
        enums::PhoneNumberType,
        errors::{MetadataError, NotFoundError},
        helper_constants::{METADATA, NANPA_COUNTRY_CODE, REGION_CODE_FOR_NON_GEO_ENTITY},
    },
    proto_gen::phonemetadata::PhoneMetadataCollection,
    regexp_cache::RegexCache,
};

/// Loaded numbering-plan rules of every supported region, indexed for lookup
/// by region code and by country calling code. Immutable once built.
pub struct MetadataStore {
    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<String, RegionMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to
    /// the metadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, RegionMetadata>,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Regions under NANPA
    /// share the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7; the main region of a code comes first. This is
    /// implemented as a vector sorted by calling code.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// The set of regions that share country calling code 1.
    nanpa_regions: HashSet<String>,

    /// Shortest and longest national significant number of each calling
    /// code, across all regions sharing it.
    nsn_length_bounds: HashMap<i32, (i32, i32)>,
}

impl MetadataStore {
    /// Loads the dataset embedded in the crate.
    pub fn load_all() -> Result<Self, MetadataError> {
        Self::from_text(METADATA)
    }

    /// Loads a dataset in the protobuf text format of `PhoneMetadataCollection`.
    pub fn from_text(text: &str) -> Result<Self, MetadataError> {
        let collection = protobuf::text_format::parse_from_str::<PhoneMetadataCollection>(text)?;
        Self::from_collection(&collection)
    }

    pub(crate) fn from_collection(collection: &PhoneMetadataCollection) -> Result<Self, MetadataError> {
        let cache = RegexCache::with_capacity(collection.metadata.len() * 16);
        let mut store = Self {
            region_to_metadata_map: HashMap::with_capacity(collection.metadata.len()),
            country_code_to_non_geographical_metadata_map: HashMap::new(),
            country_calling_code_to_region_code_map: Vec::new(),
            nanpa_regions: HashSet::new(),
            nsn_length_bounds: HashMap::new(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        let mut main_regions = HashSet::new();

        for metadata in &collection.metadata {
            let region = RegionMetadata::compile(metadata, &cache)?;
            let region_code = region.id().to_owned();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }
            let country_calling_code = region.country_code();

            let bounds = lengths_bounds(&region);
            if let Some((min, max)) = bounds {
                store
                    .nsn_length_bounds
                    .entry(country_calling_code)
                    .and_modify(|(known_min, known_max)| {
                        *known_min = (*known_min).min(min);
                        *known_max = (*known_max).max(max);
                    })
                    .or_insert((min, max));
            }

            let is_main = region.main_country_for_code();
            if is_main && !main_regions.insert(country_calling_code) {
                return Err(MetadataError::MultipleMainRegions { country_code: country_calling_code });
            }
            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if is_main {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            if country_calling_code == NANPA_COUNTRY_CODE {
                store.nanpa_regions.insert(region_code.clone());
            }

            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                store
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, region);
            } else {
                store.region_to_metadata_map.insert(region_code, region);
            }
        }

        store.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        store
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);

        trace!(
            "Loaded metadata for {} regions and {} non-geographical entities, {} distinct patterns",
            store.region_to_metadata_map.len(),
            store.country_code_to_non_geographical_metadata_map.len(),
            cache.len()
        );
        Ok(store)
    }

    /// Returns the metadata of a geographical region. Region codes are matched
    /// case-insensitively.
    pub fn by_region(&self, region_code: &str) -> Result<&RegionMetadata, NotFoundError> {
        self.region(region_code)
            .ok_or_else(|| NotFoundError::UnknownRegion(region_code.to_owned()))
    }

    /// Returns the metadata of every region using the calling code, the main
    /// region first. Non-geographical entities are included.
    pub fn by_country_calling_code(&self, country_calling_code: i32) -> Vec<&RegionMetadata> {
        self.region_codes_for_calling_code(country_calling_code)
            .iter()
            .filter_map(|region_code| {
                self.metadata_for_region_or_calling_code(country_calling_code, region_code)
            })
            .collect()
    }

    /// Returns the example number of the given type, `None` when the region has
    /// no example for it.
    pub fn example_number(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> Result<Option<&str>, NotFoundError> {
        let metadata = self.by_region(region_code)?;
        Ok(metadata.number_desc(number_type).example_number())
    }

    pub(crate) fn region(&self, region_code: &str) -> Option<&RegionMetadata> {
        if region_code.bytes().any(|byte| byte.is_ascii_lowercase()) {
            self.region_to_metadata_map.get(&region_code.to_ascii_uppercase())
        } else {
            self.region_to_metadata_map.get(region_code)
        }
    }

    pub(crate) fn non_geographical(&self, country_calling_code: i32) -> Option<&RegionMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    pub(crate) fn metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&RegionMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            self.non_geographical(country_calling_code)
        } else {
            self.region(region_code)
        }
    }

    /// Region codes of the calling code, main region first; empty for unknown
    /// codes.
    pub(crate) fn region_codes_for_calling_code(&self, country_calling_code: i32) -> &[String] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn has_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    pub(crate) fn is_nanpa_region(&self, region_code: &str) -> bool {
        self.nanpa_regions.contains(region_code)
    }

    pub(crate) fn nsn_length_bounds(&self, country_calling_code: i32) -> Option<(i32, i32)> {
        self.nsn_length_bounds.get(&country_calling_code).copied()
    }

    pub(crate) fn region_codes(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    pub(crate) fn non_geographical_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_code_to_non_geographical_metadata_map.keys().copied()
    }

    pub(crate) fn calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }
}

/// Shortest and longest length of the region's numbers. Local-only lengths
/// count toward the shortest one.
fn lengths_bounds(region: &RegionMetadata) -> Option<(i32, i32)> {
    let general = region.general_desc();
    let lengths = general
        .possible_lengths()
        .iter()
        .copied()
        .filter(|length| *length > 0);
    let max = lengths.clone().max()?;
    let min = lengths
        .chain(general.possible_lengths_local_only().iter().copied())
        .min()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use crate::{MetadataError, NotFoundError, PhoneNumberType};

    use super::MetadataStore;

    fn store() -> MetadataStore {
        MetadataStore::load_all().unwrap()
    }

    #[test]
    fn indexes_shared_calling_codes() {
        let store = store();
        let nanpa: Vec<&str> = store
            .by_country_calling_code(1)
            .into_iter()
            .map(|metadata| metadata.id())
            .collect();
        assert_eq!("US", nanpa[0]);
        assert!(nanpa.contains(&"CA"));
        assert!(nanpa.contains(&"BS"));

        let russian_code = store.region_codes_for_calling_code(7);
        assert_eq!(&["RU".to_owned(), "KZ".to_owned()], russian_code);
        assert!(store.region_codes_for_calling_code(999).is_empty());

        assert_eq!("001", store.by_country_calling_code(800)[0].id());
        assert!(store.is_nanpa_region("BS"));
        assert!(!store.is_nanpa_region("GB"));
    }

    #[test]
    fn region_lookup() {
        let store = store();
        assert_eq!(44, store.by_region("GB").unwrap().country_code());
        assert_eq!(44, store.by_region("gb").unwrap().country_code());
        assert_eq!(
            Err(NotFoundError::UnknownRegion("ZZ".to_owned())),
            store.by_region("ZZ").map(|metadata| metadata.id())
        );
        // Non-geographical entities are only reachable by calling code.
        assert!(store.by_region("001").is_err());
    }

    #[test]
    fn example_numbers() {
        let store = store();
        assert_eq!(Ok(Some("1212345678")), store.example_number("GB", PhoneNumberType::FixedLine));
        assert_eq!(Ok(None), store.example_number("GB", PhoneNumberType::VoiceMail));
        assert!(store.example_number("ZZ", PhoneNumberType::FixedLine).is_err());
    }

    #[test]
    fn length_bounds_span_regions_of_a_code() {
        let store = store();
        // GB: local-only numbers can be 4 digits long.
        assert_eq!(Some((4, 10)), store.nsn_length_bounds(44));
        // US, CA and BS together.
        assert_eq!(Some((7, 10)), store.nsn_length_bounds(1));
        assert_eq!(None, store.nsn_length_bounds(999));
    }

    #[test]
    fn rejects_two_main_regions() {
        let text = r#"
            metadata {
              id: "XA"
              country_code: 999
              main_country_for_code: true
              general_desc { national_number_pattern: "\\d{4}" possible_length: 4 }
            }
            metadata {
              id: "XB"
              country_code: 999
              main_country_for_code: true
              general_desc { national_number_pattern: "\\d{4}" possible_length: 4 }
            }
        "#;
        assert!(matches!(
            MetadataStore::from_text(text),
            Err(MetadataError::MultipleMainRegions { country_code: 999 })
        ));
        assert!(matches!(
            MetadataStore::from_text("metadata { id: "),
            Err(MetadataError::TextFormat(_))
        ));
    }
}
