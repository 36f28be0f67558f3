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

use std::collections::HashSet;

use log::{trace, warn};

use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use crate::{
    i18n,
    interfaces::MatcherApi,
    metadata::{MetadataStore, NumberDesc, RegionMetadata},
    phonenumber::PhoneNumber,
    phonenumberutil::{
        enums::{NumberLengthType, PhoneNumberType},
        errors::{MetadataError, NotFoundError, ParseError, ValidationError},
        helper_constants::{GEO_MOBILE_COUNTRIES, PLUS_SIGN, REGION_CODE_FOR_NON_GEO_ENTITY},
        helper_functions::{self, get_supported_types_for_metadata, normalize_helper, test_number_length},
    },
    regex_based_matcher::RegexBasedMatcher,
    string_util::to_ascii_digit,
};

/// Parses, validates and formats phone numbers against a loaded numbering
/// plan. [`PHONE_NUMBER_UTIL`](crate::PHONE_NUMBER_UTIL) is an instance over
/// the embedded dataset.
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(super) reg_exps: PhoneNumberRegExpsAndMappings,

    /// Numbering-plan rules of every supported region.
    pub(super) store: MetadataStore,
}

impl PhoneNumberUtil {
    /// Builds an instance over the dataset embedded in the crate.
    pub fn try_new() -> Result<Self, MetadataError> {
        Ok(Self::from_metadata_store(MetadataStore::load_all()?))
    }

    /// Builds an instance over a dataset in the protobuf text format of
    /// `PhoneMetadataCollection`.
    pub fn from_metadata_text(text: &str) -> Result<Self, MetadataError> {
        Ok(Self::from_metadata_store(MetadataStore::from_text(text)?))
    }

    pub fn from_metadata_store(store: MetadataStore) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            store,
        }
    }

    /// The loaded numbering-plan rules.
    pub fn metadata(&self) -> &MetadataStore {
        &self.store
    }

    /// Region codes of every supported geographical region.
    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.store.region_codes()
    }

    /// Country calling codes of the supported non-geographical entities.
    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.store.non_geographical_calling_codes()
    }

    /// Every supported country calling code, in ascending order.
    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.store.calling_codes()
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(metadata) = self.store.region(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return None;
        };
        Some(get_supported_types_for_metadata(metadata))
    }

    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(metadata) = self.store.non_geographical(country_calling_code) else {
            warn!(
                "Unknown country calling code for a non-geographical entity provided: {}",
                country_calling_code
            );
            return None;
        };
        Some(get_supported_types_for_metadata(metadata))
    }

    /// Returns the region codes that match the specific country calling code,
    /// the main region first. Unknown calling codes give an empty list.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.store
            .region_codes_for_calling_code(country_calling_code)
            .iter()
            .map(String::as_str)
            .collect()
    }

    /// Returns the main region code of the country calling code, "001" for
    /// non-geographical entities. In the case of no region code being found,
    /// the unknown region code "ZZ" is returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.store
            .region_codes_for_calling_code(country_calling_code)
            .first()
            .map(String::as_str)
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Returns the country calling code of a geographical region.
    pub fn get_country_code_for_region(&self, region_code: &str) -> Option<i32> {
        let Some(metadata) = self.store.region(region_code) else {
            warn!("Invalid or missing region code ({}) provided.", region_code);
            return None;
        };
        Some(metadata.country_code())
    }

    /// Returns the national dialling prefix of the region, e.g. "0" for GB.
    /// With `strip_non_digits` the "~" marking a wait for a dial tone is
    /// removed. Regions without a national prefix give `None`.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let Some(metadata) = self.store.region(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return None;
        };
        let prefix = metadata.national_prefix()?;
        if strip_non_digits {
            Some(prefix.replace('~', ""))
        } else {
            Some(prefix.to_owned())
        }
    }

    /// Checks if this is a region under the North American Numbering Plan
    /// Administration (NANPA).
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.store
            .region(region_code)
            .is_some_and(|metadata| self.store.is_nanpa_region(metadata.id()))
    }

    /// Returns the national significant number, leading zeros included.
    pub fn get_national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        Self::national_significant_number(phone_number)
    }

    pub(super) fn national_significant_number(phone_number: &PhoneNumber) -> String {
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());

        // If leading zero(s) have been set, we prefix this now. Note this is not a
        // national prefix. Ensure the number of leading zeros is at least 0 so we
        // don't crash in the case of malicious input.
        let zeros = if phone_number.italian_leading_zero() {
            phone_number.number_of_leading_zeros().max(0) as usize
        } else {
            0
        };
        let mut nsn = String::with_capacity(zeros + national_number.len());
        nsn.extend(std::iter::repeat_n('0', zeros));
        nsn.push_str(national_number);
        nsn
    }

    /// Keeps the decimal digits of `number`, converted to ASCII.
    pub fn normalize_digits_only(&self, number: &str) -> String {
        number.chars().filter_map(to_ascii_digit).collect()
    }

    /// Keeps the characters that matter when dialling: digits, "+", "*" and "#".
    pub fn normalize_diallable_chars_only(&self, number: &str) -> String {
        normalize_helper(&self.reg_exps.diallable_char_mappings, true, number)
    }

    /// Replaces the letters of a vanity number with their keypad digits,
    /// leaving everything else in place.
    pub fn convert_alpha_characters_in_number(&self, number: &str) -> String {
        normalize_helper(&self.reg_exps.alpha_phone_mappings, false, number)
    }

    /// Checks if the number is a valid vanity (alpha) number such as "800
    /// MICROSOFT". A valid vanity number will start with at least 3 digits and
    /// will have three or more alpha characters. This does not do
    /// region-specific checks - to work out if this number is actually valid
    /// for a region, it should be parsed and methods such as is_possible_number
    /// and is_valid_number should be used.
    pub fn is_alpha_number(&self, number: &str) -> bool {
        if !self.is_viable_phone_number(number) {
            // Number is too short, or doesn't match the basic phone number pattern.
            return false;
        }
        let (number, _) = self.maybe_strip_extension(number);
        self.reg_exps.valid_alpha_phone_pattern.is_match(number)
    }

    /// Normalizes a string of characters representing a phone number. This
    /// converts wide-ascii and arabic-indic numerals to European numerals, and
    /// strips punctuation and alpha characters, unless the number has at least
    /// three letters: then the letters are converted to keypad digits.
    pub(super) fn normalize(&self, number: &str) -> String {
        if self.reg_exps.valid_alpha_phone_pattern.is_match(number) {
            let ascii_digits: String = number
                .chars()
                .map(|c| to_ascii_digit(c).unwrap_or(c))
                .collect();
            normalize_helper(&self.reg_exps.alpha_phone_mappings, true, &ascii_digits)
        } else {
            self.normalize_digits_only(number)
        }
    }

    /// Returns the type of the number. Numbers that don't match the patterns
    /// of their region are `Unknown`.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let region_code = self.region_code_for_number(phone_number);
        let Some(metadata) = self
            .store
            .metadata_for_region_or_calling_code(phone_number.country_code(), region_code)
        else {
            return PhoneNumberType::Unknown;
        };
        let national_significant_number = Self::national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
    }

    /// Returns the region the number belongs to. Numbers of non-geographical
    /// entities and numbers with an unknown calling code give `None`.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> Option<&str> {
        let region_code = self.region_code_for_number(phone_number);
        if region_code == REGION_CODE_FOR_NON_GEO_ENTITY
            || region_code == i18n::RegionCode::get_unknown()
        {
            return None;
        }
        Some(region_code)
    }

    /// Region code of the number, "001" for non-geographical entities and "ZZ"
    /// for unknown calling codes.
    pub(super) fn region_code_for_number(&self, phone_number: &PhoneNumber) -> &str {
        let country_calling_code = phone_number.country_code();
        let region_codes = self.store.region_codes_for_calling_code(country_calling_code);
        match region_codes {
            [] => {
                trace!("Missing/invalid country calling code ({})", country_calling_code);
                i18n::RegionCode::get_unknown()
            }
            [region_code] => region_code,
            _ => self.get_region_code_for_number_from_region_list(phone_number, region_codes),
        }
    }

    fn get_region_code_for_number_from_region_list<'b>(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &'b [String],
    ) -> &'b str {
        let national_number = Self::national_significant_number(phone_number);
        let country_calling_code = phone_number.country_code();
        for code in region_codes {
            // Metadata cannot be missing because the region codes come from the
            // country calling code map.
            let Some(metadata) =
                self.store.metadata_for_region_or_calling_code(country_calling_code, code)
            else {
                continue;
            };
            if let Some(leading_digits) = &metadata.leading_digits {
                if leading_digits.is_match(&national_number) {
                    trace!("Number '{national_number}' belongs to {code} by its leading digits");
                    return code;
                }
            } else if self.get_number_type_helper(&national_number, metadata) != PhoneNumberType::Unknown {
                return code;
            }
        }
        // No region claims the number: it is attributed to the main region.
        trace!("No region of code {country_calling_code} matches '{national_number}', using the main one");
        &region_codes[0]
    }

    pub(super) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, metadata.general_desc()) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }

        let is_mobile = self.is_number_matching_desc(national_number, &metadata.mobile);
        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!("Number '{national_number}': fixed-line and mobile patterns equal, \
                    number is fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            } else if is_mobile {
                trace!("Number '{national_number}': Fixed-line and mobile patterns differ, \
                    but number is still fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        if is_mobile {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }

        let remaining_types = [
            (PhoneNumberType::TollFree, &metadata.toll_free),
            (PhoneNumberType::PremiumRate, &metadata.premium_rate),
            (PhoneNumberType::SharedCost, &metadata.shared_cost),
            (PhoneNumberType::VoIP, &metadata.voip),
            (PhoneNumberType::PersonalNumber, &metadata.personal_number),
            (PhoneNumberType::Pager, &metadata.pager),
            (PhoneNumberType::UAN, &metadata.uan),
            (PhoneNumberType::VoiceMail, &metadata.voicemail),
        ];
        for (number_type, desc) in remaining_types {
            if self.is_number_matching_desc(national_number, desc) {
                trace!("Number '{national_number}' is of type {number_type:?}.");
                return number_type;
            }
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    pub(super) fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &NumberDesc,
    ) -> bool {
        // Check if any possible number lengths are present; if so, we use them to
        // avoid checking the validation pattern if they don't match.
        let actual_length = national_number.len() as i32;
        let possible_lengths = number_desc.possible_lengths();
        if !possible_lengths.is_empty() && !possible_lengths.contains(&actual_length) {
            return false;
        }
        helper_functions::is_match(self.matcher_api.as_ref(), national_number, number_desc)
    }

    /// Checks the number against the general pattern and lengths of the region
    /// it belongs to.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.region_code_for_number(phone_number);
        self.is_valid_number_for_region(phone_number, region_code)
    }

    /// Checks the number against the general pattern and lengths of the given
    /// region. Numbers of another calling code are never valid for it.
    pub fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool {
        let country_code = phone_number.country_code();
        let Some(metadata) = self
            .store
            .metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return false;
        };
        if REGION_CODE_FOR_NON_GEO_ENTITY != region_code && country_code != metadata.country_code() {
            // Either the region code was invalid, or the country calling code for this
            // number does not match that of the region code.
            return false;
        }
        let national_significant_number = Self::national_significant_number(phone_number);
        self.is_number_matching_desc(&national_significant_number, metadata.general_desc())
    }

    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number).is_ok()
    }

    pub fn is_possible_number_for_type(
        &self,
        phone_number: &PhoneNumber,
        number_type: PhoneNumberType,
    ) -> bool {
        self.is_possible_number_for_type_with_reason(phone_number, number_type)
            .is_ok()
    }

    /// Checks the length of the number only, no patterns are matched. Local
    /// numbers (dialled without an area code) count as possible.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        self.is_possible_number_for_type_with_reason(phone_number, PhoneNumberType::Unknown)
    }

    pub fn is_possible_number_for_type_with_reason(
        &self,
        phone_number: &PhoneNumber,
        number_type: PhoneNumberType,
    ) -> Result<NumberLengthType, ValidationError> {
        let national_number = Self::national_significant_number(phone_number);
        let country_code = phone_number.country_code();
        // Note: for regions that share a country calling code, like NANPA numbers,
        // we just use the rules from the default region (US in this case) since the
        // region_code_for_number will not work if the number is possible but not
        // valid. There is in fact one country calling code (290) where the possible
        // number pattern differs between various regions (Saint Helena and Tristan
        // da Cuñha), but this is handled by putting all possible lengths for any
        // country with this country calling code in the metadata for the default
        // region in this case.
        if !self.store.has_calling_code(country_code) {
            return Err(ValidationError::InvalidCountryCode);
        }
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(metadata) = self
            .store
            .metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return Err(ValidationError::InvalidCountryCode);
        };
        test_number_length(&national_number, metadata, number_type)
    }

    /// Returns `false` for numbers that can only be dialled from inside their
    /// region, such as some toll free numbers.
    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.region_code_for_number(phone_number);
        let Some(metadata) = self.store.region(region_code) else {
            // Note numbers belonging to non-geographical entities (e.g. +800 numbers)
            // are always internationally diallable, and will be caught here.
            return true;
        };
        let national_significant_number = Self::national_significant_number(phone_number);
        !self.is_number_matching_desc(
            &national_significant_number,
            metadata.no_international_dialling(),
        )
    }

    /// Tests whether a phone number has a geographical association. It checks
    /// if the number is associated with a certain region in the country to which
    /// it belongs. Note that this doesn't verify if the number is actually in
    /// use.
    pub fn is_number_geographical(&self, phone_number: &PhoneNumber) -> bool {
        match self.get_number_type(phone_number) {
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => true,
            PhoneNumberType::Mobile => GEO_MOBILE_COUNTRIES.contains(&phone_number.country_code()),
            _ => false,
        }
    }

    /// Returns a valid fixed-line number of the region.
    pub fn get_example_number(&self, region_code: &str) -> Result<PhoneNumber, NotFoundError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Returns a valid number of the given type for the region. Fixed-line or
    /// mobile examples are fixed-line ones, and unknown gives any valid number.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> Result<PhoneNumber, NotFoundError> {
        let example = self.store.example_number(region_code, number_type).inspect_err(|_| {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
        })?;
        let no_example = || NotFoundError::NoExampleNumber {
            region: region_code.to_owned(),
            number_type,
        };
        let example = match (example, number_type) {
            (Some(example), _) => example,
            // The general description carries no example, any type will do.
            (None, PhoneNumberType::Unknown) => self
                .get_supported_types_for_region(region_code)
                .into_iter()
                .flatten()
                .find_map(|supported| {
                    self.store.example_number(region_code, supported).ok().flatten()
                })
                .ok_or_else(no_example)?,
            (None, _) => return Err(no_example()),
        };
        self.parse(example, Some(region_code)).map_err(|err| {
            warn!("Example number {example} of {region_code} doesn't parse: {err}");
            no_example()
        })
    }

    /// Returns an example number of the non-geographical entity using the
    /// calling code, e.g. +800 1234 5678.
    pub fn get_example_number_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Result<PhoneNumber, NotFoundError> {
        let Some(metadata) = self.store.non_geographical(country_calling_code) else {
            warn!(
                "Invalid or unknown country calling code provided: {}",
                country_calling_code
            );
            return Err(NotFoundError::UnknownCallingCode(country_calling_code));
        };
        let no_example = || NotFoundError::NoExampleNumber {
            region: REGION_CODE_FOR_NON_GEO_ENTITY.to_owned(),
            number_type: PhoneNumberType::Unknown,
        };
        // For geographical entities, fixed-line data is always present. However, for
        // non-geographical entities, this is not the case, so we have to go through
        // different types to find the example number.
        let example = [
            PhoneNumberType::Mobile,
            PhoneNumberType::TollFree,
            PhoneNumberType::SharedCost,
            PhoneNumberType::VoIP,
            PhoneNumberType::VoiceMail,
            PhoneNumberType::UAN,
            PhoneNumberType::PremiumRate,
        ]
        .into_iter()
        .find_map(|number_type| metadata.number_desc(number_type).example_number())
        .ok_or_else(no_example)?;

        let international = format!("{}{}{}", PLUS_SIGN, country_calling_code, example);
        self.parse(&international, None).map_err(|err: ParseError| {
            warn!("Example number {international} doesn't parse: {err}");
            no_example()
        })
    }
}
