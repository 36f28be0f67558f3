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

use std::collections::{HashMap, HashSet};

use strum::IntoEnumIterator;

use crate::{
    interfaces::MatcherApi,
    metadata::{NumberDesc, RegionMetadata},
    phonenumber::PhoneNumber,
    phonenumberutil::{
        enums::{NumberLengthType, PhoneNumberFormat, PhoneNumberType},
        errors::ValidationError,
        helper_constants::{
            DIGITS, OPTIONAL_EXT_SUFFIX, PLUS_SIGN, POSSIBLE_CHARS_AFTER_EXT_LABEL,
            POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, RFC3966_EXTN_PREFIX, RFC3966_PREFIX,
        },
    },
};

/// A helper function that is used by Format and FormatByPattern.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    let prefix = match number_format {
        PhoneNumberFormat::National => return,
        PhoneNumberFormat::E164 => format!("{}{}", PLUS_SIGN, country_calling_code_str),
        PhoneNumberFormat::International => format!("{}{} ", PLUS_SIGN, country_calling_code_str),
        PhoneNumberFormat::RFC3966 => {
            format!("{}{}{}-", RFC3966_PREFIX, PLUS_SIGN, country_calling_code_str)
        }
    };
    formatted_number.insert_str(0, &prefix);
}

// Returns true when one national number is the suffix of the other or both are
// the same.
pub(super) fn is_national_number_suffix_of_the_other(
    first_number: &PhoneNumber,
    second_number: &PhoneNumber,
) -> bool {
    let mut buf = itoa::Buffer::new();
    let first_number_national_number = buf.format(first_number.national_number());
    let mut buf = itoa::Buffer::new();
    let second_number_national_number = buf.format(second_number.national_number());
    // Note that ends_with returns true if the numbers are equal.
    first_number_national_number.ends_with(second_number_national_number)
        || second_number_national_number.ends_with(first_number_national_number)
}

/// Helper method for constructing regular expressions for parsing. Creates an
/// expression that captures up to max_length digits.
pub(super) fn extn_digits(max_length: u32) -> String {
    format!("([{}]{{1,{}}})", DIGITS, max_length)
}

// Helper initialiser method to create the regular-expression pattern to match
// extensions. Note that:
// - There are currently six capturing groups for the extension itself, the
// first EXPLICIT_EXTN_GROUPS of them after explicit labels. If this changes,
// maybe_strip_extension needs to be updated.
// - The only capturing groups should be around the digits that you want to
// capture as part of the extension, or else parsing will fail!
pub(super) fn create_extn_pattern(for_parsing: bool) -> String {
    // We cap the maximum length of an extension based on the ambiguity of the
    // way the extension is prefixed. As per ITU, the officially allowed
    // length for extensions is actually 40, but we don't support this since we
    // haven't seen real examples and this introduces many false interpretations
    // as the extension labels are not standardized.
    let ext_limit_after_explicit_label = 20;
    let ext_limit_after_likely_label = 15;
    let ext_limit_after_ambiguous_char = 9;
    let ext_limit_when_not_sure = 6;

    // We allow two options for representing any non-ASCII character like ó -
    // the character itself, and one in the unicode decomposed form with the
    // combining acute accent.

    // Here the extension is called out in a more explicit way, i.e mentioning it
    // obvious patterns like "ext.".
    let explicit_ext_labels = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|(?:\u{FF45})?\u{FF58}\u{FF54}(?:\u{FF4E})?|\u{0434}\u{043E}\u{0431}|anexo)";
    // One-character symbols that can be used to indicate an extension, and less
    // commonly used or more ambiguous extension labels.
    let ambiguous_ext_labels = "(?:[x\u{FF58}#\u{FF03}~\u{FF5E}]|int|\u{FF49}\u{FF4E}\u{FF54})";
    // When extension is not separated clearly.
    let ambiguous_separator = "[- ]+";

    let rfc_extn = format!(
        "{}{}",
        RFC3966_EXTN_PREFIX,
        extn_digits(ext_limit_after_explicit_label)
    );
    let explicit_extn = format!(
        "{}{}{}{}{}",
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        explicit_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        extn_digits(ext_limit_after_explicit_label),
        OPTIONAL_EXT_SUFFIX
    );
    let ambiguous_extn = format!(
        "{}{}{}{}{}",
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ambiguous_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );
    let american_style_extn_with_suffix = format!(
        "{}{}#",
        ambiguous_separator,
        extn_digits(ext_limit_when_not_sure)
    );

    // The first regular expression covers RFC 3966 format, where the extension is
    // added using ";ext=". The second more generic where extension is mentioned
    // with explicit labels like "ext:". In both the above cases we allow more
    // numbers in extension than any other extension labels. The third one
    // captures when single character extension labels or less commonly used
    // labels are present. In such cases we capture fewer extension digits in
    // order to reduce the chance of falsely interpreting two numbers beside each
    // other as a number + extension. The fourth one covers the special case of
    // American numbers where the extension is written with a hash at the end,
    // such as "- 503#".
    let extension_pattern = format!(
        "{}|{}|{}|{}",
        rfc_extn, explicit_extn, ambiguous_extn, american_style_extn_with_suffix
    );
    if !for_parsing {
        return extension_pattern;
    }
    // Additional pattern that is supported when parsing extensions, not when
    // matching.

    // ",," is commonly used for auto dialling the extension when connected.
    // Semi-colon works in Iphone and also in Android to pop up a button with
    // the extension number following.
    let auto_dialling_and_ext_labels_found = "(?:,{2}|;)";
    // This is same as POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, but not
    // matching comma as extension label may have it.
    let possible_separators_number_ext_label_no_comma = "[ \u{00A0}\\t]*";

    let auto_dialling_extn = format!(
        "{}{}{}{}{}",
        possible_separators_number_ext_label_no_comma,
        auto_dialling_and_ext_labels_found,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        extn_digits(ext_limit_after_likely_label),
        OPTIONAL_EXT_SUFFIX
    );
    let only_commas_extn = format!(
        "{}(?:,)+{}{}{}",
        possible_separators_number_ext_label_no_comma,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );
    // Here the first pattern is exclusive for extension autodialling formats
    // which are used when dialling and in this case we accept longer
    // extensions. However, the second pattern is more liberal on number of
    // commas that acts as extension labels, so we have strict cap on number of
    // digits in such extensions.
    format!("{}|{}|{}", extension_pattern, auto_dialling_extn, only_commas_extn)
}

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein, and
/// stripping all other characters if remove_non_matches is true.
///
/// Parameters:
/// * `normalization_replacements` - a mapping of characters to what they should be
///   replaced by in the normalized version of the phone number
/// * `remove_non_matches` - indicates whether characters that are not able to be
///   replaced should be stripped from the number. If this is false, they will be
///   left unchanged in the number.
/// * `phone_number` - a string of characters representing a phone number to
///   be normalized.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    remove_non_matches: bool,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char.to_ascii_uppercase()) {
            normalized_number.push(*replacement);
        } else if !remove_non_matches {
            normalized_number.push(phone_char);
        }
        // If neither of the above are true, we remove this character.
    }
    normalized_number
}

/// Returns the types we have metadata for based on the metadata passed in.
pub(super) fn get_supported_types_for_metadata(metadata: &RegionMetadata) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| metadata.number_desc(*number_type).has_data())
        .collect()
}

/// Helper method to check a number against possible lengths for this number
/// type, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &RegionMetadata,
    phone_number_type: PhoneNumberType,
) -> Result<NumberLengthType, ValidationError> {
    let desc_for_type = phone_metadata.number_desc(phone_number_type);
    // Type descriptions inherit the general lengths at load. Where no numbers of
    // the type exist at all, there is one possible length (-1) which is
    // guaranteed not to match the length of any real phone number.
    let mut possible_lengths = desc_for_type.possible_lengths().to_vec();
    let mut local_lengths = desc_for_type.possible_lengths_local_only().to_vec();

    if phone_number_type == PhoneNumberType::FixedLineOrMobile {
        let fixed_line_desc = phone_metadata.number_desc(PhoneNumberType::FixedLine);
        if !fixed_line_desc.has_possible_number_data() {
            // The rare case has been encountered where no fixedLine data is available
            // (true for some non-geographical entities), so we just check mobile.
            return test_number_length(phone_number, phone_metadata, PhoneNumberType::Mobile);
        }
        let mobile_desc = phone_metadata.number_desc(PhoneNumberType::Mobile);
        if mobile_desc.has_possible_number_data() {
            // Merge the mobile data in if there was any.
            possible_lengths.extend_from_slice(mobile_desc.possible_lengths());
            possible_lengths.sort_unstable();
            possible_lengths.dedup();

            local_lengths.extend_from_slice(mobile_desc.possible_lengths_local_only());
            local_lengths.sort_unstable();
            local_lengths.dedup();
        }
    }

    // If the type is not supported at all (indicated by the possible lengths
    // containing -1 at this point) we return invalid length.
    let (Some(&minimum_length), Some(&maximum_length)) = (possible_lengths.first(), possible_lengths.last()) else {
        return Err(ValidationError::InvalidLength);
    };
    if minimum_length == -1 {
        return Err(ValidationError::InvalidLength);
    }

    let actual_length = phone_number.len() as i32;
    // This is safe because there is never an overlap between the possible lengths
    // and the local-only lengths.
    if local_lengths.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    if minimum_length == actual_length {
        Ok(NumberLengthType::IsPossible)
    } else if minimum_length > actual_length {
        Err(ValidationError::TooShort)
    } else if maximum_length < actual_length {
        Err(ValidationError::TooLong)
    } else if possible_lengths[1..].contains(&actual_length) {
        // We skip the first element; we've already checked it.
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    }
}

/// Helper method to check a number against possible lengths for this region,
/// based on the metadata being passed in, and determine whether it matches, or
/// is too short or too long.
pub(super) fn test_number_length_with_unknown_type(
    phone_number: &str,
    phone_metadata: &RegionMetadata,
) -> Result<NumberLengthType, ValidationError> {
    test_number_length(phone_number, phone_metadata, PhoneNumberType::Unknown)
}

/// Returns a new phone number containing only the fields needed to uniquely
/// identify a phone number, rather than any fields that capture the context in
/// which the phone number was created.
/// These fields correspond to those set in `parse()` rather than
/// `parse_and_keep_raw_input()`.
pub(super) fn copy_core_fields_only(from_number: &PhoneNumber) -> PhoneNumber {
    let mut to_number = PhoneNumber::new(from_number.country_code(), from_number.national_number());
    if let Some(extension) = from_number.extension() {
        to_number.set_extension(extension.to_owned());
    }
    if from_number.italian_leading_zero() {
        to_number.set_italian_leading_zero(true);
        // This field is only relevant if there are leading zeros at all.
        to_number.set_number_of_leading_zeros(from_number.number_of_leading_zeros());
    }
    to_number
}

/// Determines whether the given number is a national number match for the given
/// description. Does not check against possible lengths!
pub(super) fn is_match(matcher_api: &dyn MatcherApi, number: &str, number_desc: &NumberDesc) -> bool {
    matcher_api.match_national_number(number, number_desc, false)
}
