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

use log::trace;
use regex::Regex;

use super::{
    helper_constants::{
        EXPLICIT_EXTN_GROUPS, MAX_INPUT_STRING_LENGTH, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        PLUS_SIGN, RFC3966_ISDN_SUBADDRESS, RFC3966_PHONE_CONTEXT, RFC3966_PREFIX,
    },
    helper_functions::{is_match, test_number_length_with_unknown_type},
    helper_types::{ExtractedCountryCode, PhoneNumberWithCountryCodeSource, StrippedExtension},
    phonenumberutil::PhoneNumberUtil,
};
use crate::{
    metadata::RegionMetadata,
    phonenumber::{CountryCodeSource, PhoneNumber},
    phonenumberutil::{
        enums::NumberLengthType,
        errors::{ExtractNumberError, NotANumberError, ParseError, ValidationError},
    },
    regex_util::RegexConsume,
};

/// A national number with its national prefix removed, and the carrier code
/// that was dialled with it.
type StrippedNationalPrefix<'a> = (Cow<'a, str>, Option<&'a str>);

impl PhoneNumberUtil {
    /// Parses a string and returns it as a phone number.
    ///
    /// This method will throw a [`ParseError`] if the number is not considered
    /// to be a possible number. Note that validation of whether the number is
    /// actually a valid number for a particular region is not performed. This
    /// can be done separately with [`PhoneNumberUtil::is_valid_number`].
    ///
    /// `default_region` is the region the number is expected to be from when it
    /// is written in national format. It may be omitted only when the number
    /// starts with a "+" (or is an RFC3966 URI with a global phone context).
    pub fn parse(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false)
    }

    /// Same as [`PhoneNumberUtil::parse`], but also records the raw input, the
    /// way the calling code was written and any dialled carrier code. These
    /// drive [`PhoneNumberUtil::format_in_original_format`].
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true)
    }

    fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<PhoneNumber, ParseError> {
        if number_to_parse.chars().count() > MAX_INPUT_STRING_LENGTH {
            trace!("The string supplied was too long to parse.");
            return Err(ParseError::TooLongNsn);
        }

        let national_number = self.build_national_number_for_parsing(number_to_parse)?;
        if !self.is_viable_phone_number(&national_number) {
            trace!("The string supplied did not seem to be a phone number '{}'.", national_number);
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }

        // Check the region supplied is valid, or that the extracted number starts
        // with some sort of + sign so the number's region can be determined.
        if !self.check_region_for_parsing(&national_number, default_region) {
            trace!("Missing or invalid default country.");
            return Err(ParseError::InvalidCountryCode);
        }

        // Attempt to parse extension first, since it doesn't require region-specific
        // data and we want to have the non-normalised number here.
        let (number_before_extension, extension) = self.maybe_strip_extension(&national_number);
        match extension {
            Some(StrippedExtension { digits, explicit: false }) => {
                // An ambiguous label only makes an extension when what precedes it is
                // a complete number; otherwise the digits belong to the number.
                let split = self.parse_without_extension(
                    number_to_parse,
                    number_before_extension,
                    Some(digits),
                    default_region,
                    keep_raw_input,
                );
                if split.as_ref().is_ok_and(|number| self.is_valid_number(number)) {
                    return split;
                }
                let whole = self.parse_without_extension(
                    number_to_parse,
                    &national_number,
                    None,
                    default_region,
                    keep_raw_input,
                );
                match (split, whole) {
                    (_, Ok(whole)) if self.is_valid_number(&whole) => {
                        trace!("'{national_number}' is read without an extension.");
                        Ok(whole)
                    }
                    (Ok(split), _)
                        if self.is_possible_number_with_reason(&split)
                            == Ok(NumberLengthType::IsPossible) =>
                    {
                        Ok(split)
                    }
                    (_, whole) => whole,
                }
            }
            extension => self.parse_without_extension(
                number_to_parse,
                number_before_extension,
                extension.map(|extension| extension.digits),
                default_region,
                keep_raw_input,
            ),
        }
    }

    /// Parses a number whose extension, if any, has already been split off.
    fn parse_without_extension(
        &self,
        number_to_parse: &str,
        national_number: &str,
        extension: Option<String>,
        default_region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<PhoneNumber, ParseError> {
        let mut phone_number = PhoneNumber::new(0, 0);
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse.to_owned());
        }
        if let Some(extension) = extension {
            phone_number.set_extension(extension);
        }
        self.check_letters(national_number)?;

        let mut region_metadata = default_region.and_then(|region| self.store.region(region));
        let extracted = match self.maybe_extract_country_code(national_number, region_metadata) {
            Ok(extracted) => extracted,
            Err(ParseError::InvalidCountryCode) => {
                let Some(after_plus) = self.reg_exps.plus_chars_pattern.consume_start(national_number)
                else {
                    return Err(ParseError::InvalidCountryCode);
                };
                // Strip the plus-char, and try again.
                let extracted = self.maybe_extract_country_code(after_plus, region_metadata)?;
                if extracted.country_code == 0 {
                    trace!("Could not interpret numbers after plus-sign.");
                    return Err(ParseError::InvalidCountryCode);
                }
                extracted
            }
            Err(err) => return Err(err),
        };
        if keep_raw_input {
            phone_number.set_country_code_source(extracted.country_code_source);
        }

        let mut normalized_national_number = if extracted.country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(extracted.country_code);
            region_metadata = self
                .store
                .metadata_for_region_or_calling_code(extracted.country_code, phone_number_region);
            phone_number.set_country_code(extracted.country_code);
            extracted.national_number
        } else {
            // If no extracted country calling code, use the region supplied instead.
            // The national number is just the normalized version of the number we
            // were given to parse.
            let Some(metadata) = region_metadata else {
                return Err(ParseError::InvalidCountryCode);
            };
            phone_number.set_country_code(metadata.country_code());
            self.normalize(national_number)
        };
        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn);
        }

        if let Some(metadata) = region_metadata {
            if let Some((potential_national_number, carrier_code)) = self
                .maybe_strip_national_prefix_and_carrier_code(&normalized_national_number, metadata)
            {
                // We require that the NSN remaining after stripping the national prefix
                // and carrier code be long enough to be a possible length for the region.
                // Otherwise, we don't do the stripping, since the original number could be
                // a valid short number.
                match test_number_length_with_unknown_type(&potential_national_number, metadata) {
                    Ok(NumberLengthType::IsPossibleLocalOnly)
                    | Err(ValidationError::TooShort | ValidationError::InvalidLength) => {
                        trace!("Keeping the national prefix of '{normalized_national_number}'.");
                    }
                    _ => {
                        if keep_raw_input {
                            if let Some(carrier_code) = carrier_code.filter(|code| !code.is_empty()) {
                                phone_number.set_preferred_domestic_carrier_code(carrier_code.to_owned());
                            }
                        }
                        normalized_national_number = potential_national_number.into_owned();
                    }
                }
            }
        }

        let length_of_national_number = normalized_national_number.len();
        if length_of_national_number < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn);
        }
        if length_of_national_number > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLongNsn);
        }
        if let Some((min_length, max_length)) =
            self.store.nsn_length_bounds(phone_number.country_code())
        {
            let length = length_of_national_number as i32;
            if length < min_length {
                trace!("'{normalized_national_number}' is shorter than any number of its calling code.");
                return Err(ParseError::TooShortNsn);
            }
            if length > max_length {
                trace!("'{normalized_national_number}' is longer than any number of its calling code.");
                return Err(ParseError::TooLongNsn);
            }
        }

        set_italian_leading_zeros_for_phone_number(&normalized_national_number, &mut phone_number);
        let national_number = normalized_national_number
            .parse::<u64>()
            .map_err(NotANumberError::from)?;
        phone_number.set_national_number(national_number);
        Ok(phone_number)
    }

    /// Converts `number_to_parse` to a form that we can parse and returns it if
    /// it is written in RFC3966; otherwise extract a possible number out of it
    /// and return it.
    fn build_national_number_for_parsing(&self, number_to_parse: &str) -> Result<String, ParseError> {
        let mut national_number = if let Some(index_of_phone_context) =
            number_to_parse.find(RFC3966_PHONE_CONTEXT)
        {
            let phone_context = extract_phone_context(number_to_parse, index_of_phone_context);
            if !self.is_phone_context_valid(phone_context) {
                trace!("The phone-context value '{phone_context}' is invalid.");
                return Err(NotANumberError::InvalidPhoneContext.into());
            }

            let mut national_number = String::with_capacity(number_to_parse.len());
            // If the phone context contains a phone number prefix, we need to capture
            // it, whereas domains will be ignored.
            if phone_context.starts_with(PLUS_SIGN) {
                // Additional parameters might follow the phone context. If so, we will
                // remove them here because the parameters after phone context are not
                // important for parsing the phone number.
                national_number.push_str(phone_context);
            }

            // Now append everything between the "tel:" prefix and the phone-context.
            // This should include the national number, an optional extension or
            // isdn-subaddress component. Note we also handle the case when "tel:" is
            // missing, as we have seen in some of the phone number inputs. In that
            // case, we append everything from the beginning.
            let index_of_national_number = number_to_parse
                .find(RFC3966_PREFIX)
                .map(|index| index + RFC3966_PREFIX.len())
                .filter(|&index| index <= index_of_phone_context)
                .unwrap_or(0);
            national_number.push_str(&number_to_parse[index_of_national_number..index_of_phone_context]);
            national_number
        } else {
            self.extract_possible_number(number_to_parse)?.to_owned()
        };

        // Delete the isdn-subaddress and everything after it if it is present. Note
        // extension won't appear at the same time with isdn-subaddress according to
        // paragraph 5.3 of the RFC3966 spec.
        if let Some(index_of_isdn) = national_number.find(RFC3966_ISDN_SUBADDRESS) {
            if index_of_isdn > 0 {
                national_number.truncate(index_of_isdn);
            }
        }
        // If both phone context and isdn-subaddress are absent but other parameters
        // are present, the parameters are left in national_number. This is because
        // we are concerned about deleting content from a potential number string
        // when there is no strong evidence that the number is actually written in
        // RFC3966.
        Ok(national_number)
    }

    fn is_phone_context_valid(&self, phone_context: &str) -> bool {
        if phone_context.is_empty() {
            return false;
        }
        // Does phone-context value match pattern of global-number-digits or
        // domainname.
        self.reg_exps.rfc3966_global_number_digits_pattern.is_match(phone_context)
            || self.reg_exps.rfc3966_domainname_pattern.is_match(phone_context)
    }

    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start a
    /// phone number. Characters that can be used to start a phone number are
    /// defined in the valid_start_char_pattern. If none of these characters are
    /// found in the number passed in, an error is returned. This method also
    /// strips trailing characters that are neither alphanumeric nor "#", and
    /// cuts the number at the start of what looks like a second number.
    pub(super) fn extract_possible_number<'a>(
        &self,
        number: &'a str,
    ) -> Result<&'a str, ExtractNumberError> {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(number) else {
            return Err(ExtractNumberError::NoValidStartCharacter);
        };
        let mut number = &number[start.start()..];

        // Remove trailing non-alpha non-numerical characters.
        if let Some(trailing_chars) = self.reg_exps.unwanted_end_char_pattern.find(number) {
            number = &number[..trailing_chars.start()];
        }
        // Check for extra numbers at the end.
        if let Some(second_number) = self.reg_exps.second_number_start_pattern.find(number) {
            number = &number[..second_number.start()];
        }
        if number.is_empty() {
            return Err(ExtractNumberError::NotANumber);
        }
        Ok(number)
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string begins with at
    /// least 2 digits, ignoring any punctuation commonly found in phone numbers.
    /// This method does not require the number to be normalized in advance -
    /// but does assume that leading non-number symbols have been removed, such as
    /// by the method extract_possible_number.
    pub(super) fn is_viable_phone_number(&self, number: &str) -> bool {
        if number.chars().count() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.is_match(number)
    }

    /// Checks to see that the region code used is valid, or if it is not valid,
    /// that the number to parse starts with a + symbol so that we can attempt to
    /// infer the region from the number.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: Option<&str>) -> bool {
        if default_region.and_then(|region| self.store.region(region)).is_some() {
            return true;
        }
        // If the number is empty, we can't infer the region.
        !number_to_parse.is_empty() && self.reg_exps.plus_chars_pattern.matches_start(number_to_parse)
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns the rest of the number along with the
    /// extension digits converted to ASCII.
    pub(super) fn maybe_strip_extension<'a>(
        &self,
        number: &'a str,
    ) -> (&'a str, Option<StrippedExtension>) {
        let Some(captures) = self.reg_exps.extn_pattern.captures(number) else {
            return (number, None);
        };
        let Some(full_match) = captures.get(0) else {
            return (number, None);
        };
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        let number_before_extension = &number[..full_match.start()];
        if !self.is_viable_phone_number(number_before_extension) {
            return (number, None);
        }
        // We go through the capturing groups until we find one that captured some
        // digits. The ";ext=" and spelled-out labels come first.
        match captures.iter().enumerate().skip(1).find_map(|(group, found)| Some((group, found?))) {
            Some((group, extension)) => (
                number_before_extension,
                Some(StrippedExtension {
                    digits: self.normalize_digits_only(extension.as_str()),
                    explicit: group <= EXPLICIT_EXTN_GROUPS,
                }),
            ),
            None => (number, None),
        }
    }

    /// Three or more letters make a vanity number, whose letters are mapped to
    /// keypad digits. Fewer letters can't be mapped, apart from the "x" used as
    /// a carrier code placeholder.
    fn check_letters(&self, number: &str) -> Result<(), ParseError> {
        let letters = number.chars().filter(char::is_ascii_alphabetic).count();
        if letters >= 3 {
            return Ok(());
        }
        if number
            .chars()
            .any(|c| c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'x'))
        {
            trace!("'{number}' has letters which are not a vanity number.");
            return Err(NotANumberError::UnmappableLetters.into());
        }
        Ok(())
    }

    /// Tries to extract a country calling code from a number. Country calling
    /// codes are extracted in the following ways:
    ///
    /// - by stripping the international dialing prefix of the region the
    ///   person is dialing from, if this is present in the number, and looking
    ///   at the next digits
    /// - by stripping the '+' sign if present and then looking at the next
    ///   digits
    /// - by comparing the start of the number and the country calling code of
    ///   the default region. If the number is not considered possible for the
    ///   numbering plan of the default region initially, but starts with the
    ///   country calling code of this region, validation will be reattempted
    ///   after stripping this country calling code. If this number is considered
    ///   a possible number, then the first digits will be considered the country
    ///   calling code and removed as such.
    ///
    /// A calling code of 0 means none was found, and the number is to be read
    /// in the default region.
    pub(super) fn maybe_extract_country_code(
        &self,
        number: &str,
        default_region_metadata: Option<&RegionMetadata>,
    ) -> Result<ExtractedCountryCode, ParseError> {
        if number.is_empty() {
            return Ok(ExtractedCountryCode::none(CountryCodeSource::FromDefaultCountry));
        }
        // Without a default region the IDD can never match.
        let possible_country_idd_prefix =
            default_region_metadata.and_then(|metadata| metadata.international_prefix_pattern.as_deref());
        let PhoneNumberWithCountryCodeSource {
            phone_number: full_number,
            country_code_source,
        } = self.maybe_strip_international_prefix_and_normalize(number, possible_country_idd_prefix);

        if country_code_source != CountryCodeSource::FromDefaultCountry {
            if full_number.len() <= MIN_LENGTH_FOR_NSN {
                trace!("Phone number had an IDD, but after this was not long enough to be a viable phone number.");
                return Err(ParseError::TooShortAfterIdd);
            }
            let Some((country_code, national_number)) = self.extract_country_code(&full_number) else {
                // If this fails, they must be using a strange country calling code
                // that we don't recognize, or that doesn't exist.
                trace!("Country calling code of '{full_number}' is not recognized.");
                return Err(ParseError::InvalidCountryCode);
            };
            return Ok(ExtractedCountryCode {
                country_code,
                national_number: national_number.to_owned(),
                country_code_source,
            });
        }

        if let Some(metadata) = default_region_metadata {
            // Check to see if the number starts with the country calling code for the
            // default region. If so, we remove the country calling code, and do some
            // checks on the validity of the number before and after.
            let default_country_code = metadata.country_code();
            let mut buf = itoa::Buffer::new();
            let default_country_code_str = buf.format(default_country_code);
            if let Some(potential_national_number) = full_number.strip_prefix(default_country_code_str) {
                let general_desc = metadata.general_desc();
                let potential_national_number = self
                    .maybe_strip_national_prefix_and_carrier_code(potential_national_number, metadata)
                    .map(|(stripped, _)| stripped)
                    .unwrap_or(Cow::Borrowed(potential_national_number));

                // If the number was not valid before but is valid now, or if it was too
                // long before, we consider the number with the country calling code
                // stripped to be a better result and keep that instead.
                let matcher = self.matcher_api.as_ref();
                if (!is_match(matcher, &full_number, general_desc)
                    && is_match(matcher, &potential_national_number, general_desc))
                    || test_number_length_with_unknown_type(&full_number, metadata)
                        == Err(ValidationError::TooLong)
                {
                    trace!("'{full_number}' starts with the calling code of {}.", metadata.id());
                    return Ok(ExtractedCountryCode {
                        country_code: default_country_code,
                        national_number: potential_national_number.into_owned(),
                        country_code_source: CountryCodeSource::FromNumberWithoutPlusSign,
                    });
                }
            }
        }
        // No country calling code present.
        Ok(ExtractedCountryCode::none(country_code_source))
    }

    /// Extracts country calling code from full_number, returns it with the rest
    /// of the number. It assumes that the leading plus sign or IDD has already
    /// been removed.
    fn extract_country_code<'a>(&self, full_number: &'a str) -> Option<(i32, &'a str)> {
        // Country codes do not begin with a '0'.
        if full_number.is_empty() || full_number.starts_with('0') {
            return None;
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let Some(Ok(potential_country_code)) = full_number.get(..length).map(str::parse::<i32>)
            else {
                return None;
            };
            if self.store.has_calling_code(potential_country_code) {
                return Some((potential_country_code, &full_number[length..]));
            }
        }
        None
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number provided, normalizes the resulting number, and indicates if an
    /// international prefix was present.
    pub(super) fn maybe_strip_international_prefix_and_normalize<'a>(
        &self,
        number: &'a str,
        possible_idd_prefix: Option<&Regex>,
    ) -> PhoneNumberWithCountryCodeSource<'a> {
        if number.is_empty() {
            return PhoneNumberWithCountryCodeSource::new(
                Cow::Borrowed(number),
                CountryCodeSource::FromDefaultCountry,
            );
        }
        // Check to see if the number begins with one or more plus signs.
        if let Some(after_plus) = self.reg_exps.plus_chars_pattern.consume_start(number) {
            // Can now normalize the rest of the number since we've consumed the "+"
            // sign at the start.
            return PhoneNumberWithCountryCodeSource::new(
                Cow::Owned(self.normalize(after_plus)),
                CountryCodeSource::FromNumberWithPlusSign,
            );
        }

        // Attempt to parse the first digits as an international prefix.
        let normalized_number = self.normalize(number);
        if let Some(after_idd) = possible_idd_prefix
            .and_then(|idd_pattern| self.parse_prefix_as_idd(idd_pattern, &normalized_number))
        {
            return PhoneNumberWithCountryCodeSource::new(
                Cow::Owned(after_idd.to_owned()),
                CountryCodeSource::FromNumberWithIdd,
            );
        }
        PhoneNumberWithCountryCodeSource::new(
            Cow::Owned(normalized_number),
            CountryCodeSource::FromDefaultCountry,
        )
    }

    /// Strips the IDD from the start of the number if present. Helper function
    /// used by maybe_strip_international_prefix_and_normalize.
    fn parse_prefix_as_idd<'a>(&self, idd_pattern: &Regex, number: &'a str) -> Option<&'a str> {
        let rest = idd_pattern.consume_start(number)?;
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if let Some(captures) = self.reg_exps.capturing_digit_pattern.captures(rest) {
            if self.normalize_digits_only(&captures[1]) == "0" {
                return None;
            }
        }
        Some(rest)
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided. Returns `None` when nothing was stripped; otherwise the rest of
    /// the number and the carrier code, if one was dialled with the prefix.
    pub(super) fn maybe_strip_national_prefix_and_carrier_code<'a>(
        &self,
        number: &'a str,
        metadata: &RegionMetadata,
    ) -> Option<StrippedNationalPrefix<'a>> {
        let possible_national_prefix = metadata.national_prefix_for_parsing.as_deref()?;
        if number.is_empty() {
            return None;
        }
        // Attempt to parse the first digits as a national prefix.
        let prefix_captures = possible_national_prefix.captures_start(number)?;
        let prefix_end = prefix_captures.get(0)?.end();

        let matcher = self.matcher_api.as_ref();
        let general_desc = metadata.general_desc();
        // Check if the original number is viable.
        let is_viable_original_number = is_match(matcher, number, general_desc);
        // A missing last group implies nothing was captured by the capturing groups
        // in possible_national_prefix; therefore, no transformation is necessary,
        // and we just remove the national prefix.
        let num_of_groups = prefix_captures.len() - 1;
        let last_group_captured = prefix_captures.get(num_of_groups).is_some();
        let transform_rule = metadata
            .national_prefix_transform_rule()
            .filter(|rule| !rule.is_empty());

        match transform_rule {
            Some(transform_rule) if last_group_captured => {
                // Check that the resultant number is still viable. If not, return.
                let transformed_number = possible_national_prefix.replace(number, transform_rule);
                if is_viable_original_number && !is_match(matcher, &transformed_number, general_desc) {
                    return None;
                }
                let carrier_code = if num_of_groups > 1 {
                    prefix_captures.get(1).map(|group| group.as_str())
                } else {
                    None
                };
                Some((Cow::Owned(transformed_number.into_owned()), carrier_code))
            }
            _ => {
                let stripped_number = &number[prefix_end..];
                // If the original number was viable, and the resultant number is not,
                // we return.
                if is_viable_original_number && !is_match(matcher, stripped_number, general_desc) {
                    return None;
                }
                let carrier_code = if num_of_groups > 0 && last_group_captured {
                    prefix_captures.get(1).map(|group| group.as_str())
                } else {
                    None
                };
                Some((Cow::Borrowed(stripped_number), carrier_code))
            }
        }
    }
}

fn extract_phone_context(number_to_extract_from: &str, index_of_phone_context: usize) -> &str {
    let phone_context_start = index_of_phone_context + RFC3966_PHONE_CONTEXT.len();
    let phone_context = &number_to_extract_from[phone_context_start..];
    // The phone context ends at the next parameter, if any.
    match phone_context.find(';') {
        Some(phone_context_end) => &phone_context[..phone_context_end],
        None => phone_context,
    }
}

/// A helper function to set the values related to leading zeros in a
/// PhoneNumber.
fn set_italian_leading_zeros_for_phone_number(national_number: &str, phone_number: &mut PhoneNumber) {
    if national_number.len() > 1 && national_number.starts_with('0') {
        phone_number.set_italian_leading_zero(true);
        // Note that if the number is all "0"s, the last "0" is not counted as a
        // leading zero.
        let number_of_leading_zeros = national_number[..national_number.len() - 1]
            .bytes()
            .take_while(|&digit| digit == b'0')
            .count();
        if number_of_leading_zeros != 1 {
            phone_number.set_number_of_leading_zeros(number_of_leading_zeros as i32);
        }
    }
}
