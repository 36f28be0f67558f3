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

use std::sync::Arc;

use regex::Regex;

use crate::{
    phonenumberutil::{enums::PhoneNumberType, errors::MetadataError},
    proto_gen::phonemetadata,
    regexp_cache::{Anchoring, InvalidRegexError, RegexCache},
};

/// Description of one class of numbers of a region: the pattern its national
/// significant numbers follow and the lengths they come in.
#[derive(Debug, Clone)]
pub struct NumberDesc {
    /// Anchored to cover the whole number.
    pub(crate) national_number_pattern: Option<Arc<Regex>>,
    /// The same pattern anchored at the start only.
    pub(crate) prefix_pattern: Option<Arc<Regex>>,
    /// Sorted. A single `-1` means the region has no numbers of this class.
    pub(crate) possible_lengths: Vec<i32>,
    pub(crate) possible_lengths_local_only: Vec<i32>,
    pub(crate) example_number: Option<String>,
}

impl NumberDesc {
    /// Description of a number class the region doesn't have.
    pub(crate) fn absent() -> Self {
        Self {
            national_number_pattern: None,
            prefix_pattern: None,
            possible_lengths: vec![-1],
            possible_lengths_local_only: Vec::new(),
            example_number: None,
        }
    }

    pub(crate) fn compile_pattern(
        pattern: &str,
        mut possible_lengths: Vec<i32>,
        cache: &RegexCache,
    ) -> Result<Self, InvalidRegexError> {
        possible_lengths.sort_unstable();
        Ok(Self {
            national_number_pattern: Some(cache.get_anchored(pattern, Anchoring::Full)?),
            prefix_pattern: Some(cache.get_anchored(pattern, Anchoring::Start)?),
            possible_lengths,
            possible_lengths_local_only: Vec::new(),
            example_number: None,
        })
    }

    /// Compiles a description. Lengths left out of a type description are the
    /// ones of the general description.
    fn from_proto(
        desc: Option<&phonemetadata::PhoneNumberDesc>,
        general: Option<&NumberDesc>,
        cache: &RegexCache,
    ) -> Result<Self, InvalidRegexError> {
        let Some(desc) = desc else {
            return Ok(Self::absent());
        };
        let mut possible_lengths = desc.possible_length.clone();
        if possible_lengths.is_empty() {
            if let Some(general) = general {
                possible_lengths = general.possible_lengths.clone();
            }
        }
        let mut compiled = if desc.has_national_number_pattern() {
            Self::compile_pattern(desc.national_number_pattern(), possible_lengths, cache)?
        } else {
            possible_lengths.sort_unstable();
            Self {
                possible_lengths,
                ..Self::absent()
            }
        };
        let mut local_only = desc.possible_length_local_only.clone();
        local_only.sort_unstable();
        compiled.possible_lengths_local_only = local_only;
        compiled.example_number = desc.example_number.clone();
        Ok(compiled)
    }

    pub fn national_number_pattern(&self) -> Option<&Regex> {
        self.national_number_pattern.as_deref()
    }

    pub fn prefix_pattern(&self) -> Option<&Regex> {
        self.prefix_pattern.as_deref()
    }

    pub fn possible_lengths(&self) -> &[i32] {
        &self.possible_lengths
    }

    pub fn possible_lengths_local_only(&self) -> &[i32] {
        &self.possible_lengths_local_only
    }

    pub fn example_number(&self) -> Option<&str> {
        self.example_number.as_deref()
    }

    /// Returns `true` if there is any possible number data set for this
    /// description.
    pub fn has_possible_number_data(&self) -> bool {
        self.possible_lengths.first().is_some_and(|length| *length != -1)
    }

    /// Returns `true` if there is any data set for this description.
    pub fn has_data(&self) -> bool {
        self.example_number.is_some()
            || self.has_possible_number_data()
            || self.national_number_pattern.is_some()
    }
}

/// A rule describing how national significant numbers of a certain shape are
/// grouped.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pub(crate) pattern: Arc<Regex>,
    pub(crate) format: String,
    pub(crate) leading_digits_pattern: Option<Arc<Regex>>,
    /// `$NP` and `$FG` are already expanded.
    pub(crate) national_prefix_formatting_rule: Option<String>,
    pub(crate) national_prefix_optional_when_formatting: bool,
    /// `$NP` and `$FG` are already expanded, `$CC` is left for the carrier.
    pub(crate) domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    fn from_proto(
        format: &phonemetadata::NumberFormat,
        national_prefix: &str,
        cache: &RegexCache,
    ) -> Result<Self, InvalidRegexError> {
        // Only the last leading digits pattern is used, as it is the most
        // detailed.
        let leading_digits_pattern = format
            .leading_digits_pattern
            .last()
            .map(|pattern| cache.get_anchored(pattern, Anchoring::Start))
            .transpose()?;
        let expand = |rule: &str| rule.replace("$NP", national_prefix).replace("$FG", "$1");

        Ok(Self {
            pattern: cache.get_anchored(format.pattern(), Anchoring::Full)?,
            format: format.format().to_owned(),
            leading_digits_pattern,
            national_prefix_formatting_rule: format
                .national_prefix_formatting_rule
                .as_deref()
                .filter(|rule| !rule.is_empty())
                .map(expand),
            national_prefix_optional_when_formatting: format
                .national_prefix_optional_when_formatting(),
            domestic_carrier_code_formatting_rule: format
                .domestic_carrier_code_formatting_rule
                .as_deref()
                .filter(|rule| !rule.is_empty())
                .map(expand),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn leading_digits_pattern(&self) -> Option<&Regex> {
        self.leading_digits_pattern.as_deref()
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    pub fn national_prefix_optional_when_formatting(&self) -> bool {
        self.national_prefix_optional_when_formatting
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> Option<&str> {
        self.domestic_carrier_code_formatting_rule.as_deref()
    }
}

/// Numbering-plan rules of one region, or of one non-geographical entity
/// (region code "001") such as the international toll free service.
#[derive(Debug, Clone)]
pub struct RegionMetadata {
    pub(crate) id: String,
    pub(crate) country_code: i32,

    pub(crate) international_prefix: Option<String>,
    pub(crate) international_prefix_pattern: Option<Arc<Regex>>,
    pub(crate) preferred_international_prefix: Option<String>,
    pub(crate) national_prefix: Option<String>,
    pub(crate) preferred_extn_prefix: Option<String>,
    pub(crate) national_prefix_for_parsing: Option<Arc<Regex>>,
    pub(crate) national_prefix_transform_rule: Option<String>,

    pub(crate) same_mobile_and_fixed_line_pattern: bool,
    pub(crate) main_country_for_code: bool,
    pub(crate) mobile_number_portable_region: bool,
    pub(crate) leading_digits: Option<Arc<Regex>>,

    pub(crate) general_desc: NumberDesc,
    pub(crate) fixed_line: NumberDesc,
    pub(crate) mobile: NumberDesc,
    pub(crate) toll_free: NumberDesc,
    pub(crate) premium_rate: NumberDesc,
    pub(crate) shared_cost: NumberDesc,
    pub(crate) personal_number: NumberDesc,
    pub(crate) voip: NumberDesc,
    pub(crate) pager: NumberDesc,
    pub(crate) uan: NumberDesc,
    pub(crate) voicemail: NumberDesc,
    pub(crate) no_international_dialling: NumberDesc,

    pub(crate) number_formats: Vec<NumberFormat>,
    pub(crate) intl_number_formats: Vec<NumberFormat>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|value| !value.is_empty()).cloned()
}

impl RegionMetadata {
    pub(crate) fn compile(
        metadata: &phonemetadata::PhoneMetadata,
        cache: &RegexCache,
    ) -> Result<Self, MetadataError> {
        let Some(id) = non_empty(&metadata.id) else {
            return Err(MetadataError::MissingField { region: "<unnamed>".to_owned(), field: "id" });
        };
        if !metadata.has_country_code() {
            return Err(MetadataError::MissingField { region: id, field: "country_code" });
        }
        let Some(general) = metadata.general_desc.as_ref() else {
            return Err(MetadataError::MissingField { region: id, field: "general_desc" });
        };
        let invalid = |err| MetadataError::invalid_pattern(&id, err);

        let general_desc = NumberDesc::from_proto(Some(general), None, cache).map_err(invalid)?;
        let desc = |desc: Option<&phonemetadata::PhoneNumberDesc>| {
            NumberDesc::from_proto(desc, Some(&general_desc), cache).map_err(invalid)
        };

        let national_prefix = non_empty(&metadata.national_prefix);
        let international_prefix = non_empty(&metadata.international_prefix);
        let international_prefix_pattern = international_prefix
            .as_deref()
            .map(|prefix| cache.get_anchored(prefix, Anchoring::Start))
            .transpose()
            .map_err(invalid)?;
        let national_prefix_for_parsing = non_empty(&metadata.national_prefix_for_parsing)
            .or_else(|| national_prefix.clone())
            .map(|pattern| cache.get_anchored(&pattern, Anchoring::Start))
            .transpose()
            .map_err(invalid)?;
        let leading_digits = non_empty(&metadata.leading_digits)
            .map(|pattern| cache.get_anchored(&pattern, Anchoring::Start))
            .transpose()
            .map_err(invalid)?;

        let prefix_for_rules = national_prefix.as_deref().unwrap_or("");
        let formats = |formats: &[phonemetadata::NumberFormat]| {
            formats
                .iter()
                .map(|format| NumberFormat::from_proto(format, prefix_for_rules, cache))
                .collect::<Result<Vec<_>, _>>()
                .map_err(invalid)
        };

        Ok(Self {
            country_code: metadata.country_code(),
            international_prefix,
            international_prefix_pattern,
            preferred_international_prefix: non_empty(&metadata.preferred_international_prefix),
            preferred_extn_prefix: non_empty(&metadata.preferred_extn_prefix),
            national_prefix_for_parsing,
            national_prefix_transform_rule: non_empty(&metadata.national_prefix_transform_rule),
            same_mobile_and_fixed_line_pattern: metadata.same_mobile_and_fixed_line_pattern(),
            main_country_for_code: metadata.main_country_for_code(),
            mobile_number_portable_region: metadata.mobile_number_portable_region(),
            leading_digits,
            fixed_line: desc(metadata.fixed_line.as_ref())?,
            mobile: desc(metadata.mobile.as_ref())?,
            toll_free: desc(metadata.toll_free.as_ref())?,
            premium_rate: desc(metadata.premium_rate.as_ref())?,
            shared_cost: desc(metadata.shared_cost.as_ref())?,
            personal_number: desc(metadata.personal_number.as_ref())?,
            voip: desc(metadata.voip.as_ref())?,
            pager: desc(metadata.pager.as_ref())?,
            uan: desc(metadata.uan.as_ref())?,
            voicemail: desc(metadata.voicemail.as_ref())?,
            no_international_dialling: desc(metadata.no_international_dialling.as_ref())?,
            number_formats: formats(&metadata.number_format)?,
            intl_number_formats: formats(&metadata.intl_number_format)?,
            general_desc,
            national_prefix,
            id,
        })
    }

    /// Region code, or "001" for non-geographical entities.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// The international dialling prefix pattern as written in the metadata,
    /// e.g. "00" or "0[0-3]\d".
    pub fn international_prefix(&self) -> Option<&str> {
        self.international_prefix.as_deref()
    }

    pub fn preferred_international_prefix(&self) -> Option<&str> {
        self.preferred_international_prefix.as_deref()
    }

    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    pub fn preferred_extn_prefix(&self) -> Option<&str> {
        self.preferred_extn_prefix.as_deref()
    }

    pub fn national_prefix_transform_rule(&self) -> Option<&str> {
        self.national_prefix_transform_rule.as_deref()
    }

    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn mobile_number_portable_region(&self) -> bool {
        self.mobile_number_portable_region
    }

    pub fn general_desc(&self) -> &NumberDesc {
        &self.general_desc
    }

    pub fn no_international_dialling(&self) -> &NumberDesc {
        &self.no_international_dialling
    }

    /// Returns the description of the given number type. Fixed-line-or-mobile
    /// numbers are described by the fixed-line description, unknown ones by
    /// the general description.
    pub fn number_desc(&self, number_type: PhoneNumberType) -> &NumberDesc {
        match number_type {
            PhoneNumberType::PremiumRate => &self.premium_rate,
            PhoneNumberType::TollFree => &self.toll_free,
            PhoneNumberType::Mobile => &self.mobile,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &self.fixed_line,
            PhoneNumberType::SharedCost => &self.shared_cost,
            PhoneNumberType::VoIP => &self.voip,
            PhoneNumberType::PersonalNumber => &self.personal_number,
            PhoneNumberType::Pager => &self.pager,
            PhoneNumberType::UAN => &self.uan,
            PhoneNumberType::VoiceMail => &self.voicemail,
            PhoneNumberType::Unknown => &self.general_desc,
        }
    }

    pub fn number_formats(&self) -> &[NumberFormat] {
        &self.number_formats
    }

    /// Formats used for the international representation. Falls back to the
    /// national formats when the region has no specific ones.
    pub fn intl_number_formats(&self) -> &[NumberFormat] {
        if self.intl_number_formats.is_empty() {
            &self.number_formats
        } else {
            &self.intl_number_formats
        }
    }
}
