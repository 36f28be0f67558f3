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

use log::{trace, warn};
use regex::NoExpand;

use super::{
    helper_constants::{
        DEFAULT_EXTN_PREFIX, NANPA_COUNTRY_CODE, PLUS_SIGN, REGION_CODE_FOR_NON_GEO_ENTITY,
        REGION_REQUIRING_CARRIER_CODE, REGIONS_DIALLING_MOBILES_INTERNATIONALLY, RFC3966_EXTN_PREFIX,
    },
    helper_functions::{prefix_number_with_country_calling_code, test_number_length_with_unknown_type},
    phonenumberutil::PhoneNumberUtil,
};
use crate::{
    macros::owned_from_cow_or,
    metadata::{NumberFormat, RegionMetadata},
    phonenumber::{CountryCodeSource, PhoneNumber},
    phonenumberutil::{
        enums::{PhoneNumberFormat, PhoneNumberType},
        errors::ValidationError,
    },
    regex_util::RegexConsume,
    string_util::strip_cow_prefix,
};

impl PhoneNumberUtil {
    /// Formats a phone number in the specified format using default rules.
    ///
    /// Note that this does not promise to produce a phone number that the user
    /// can dial from where they are - although we do format in either
    /// 'national' or 'international' format depending on what the client asks
    /// for, we do not currently support a more abbreviated format, such as for
    /// users in the same "area" who could potentially dial the number without
    /// area code. Numbers with a calling code we have no data for are rendered
    /// as the bare national significant number, E164 excepted.
    pub fn format<'b>(
        &self,
        phone_number: &'b PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = Self::national_significant_number(phone_number);

        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 case (even if the country calling code is invalid)
            // since no formatting of the national number needs to be applied.
            // Extensions are not formatted.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Cow::Owned(formatted_number);
        }
        // Note here that all NANPA formatting rules are contained by US, so we use
        // that to format NANPA numbers. The same applies to Russian Fed regions -
        // rules are contained by Russia.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) = self
            .store
            .metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            trace!("No formatting rules for calling code {country_calling_code}");
            return Cow::Owned(formatted_number);
        };

        if let Cow::Owned(formatted) = self.format_nsn(&formatted_number, metadata, number_format) {
            formatted_number = formatted;
        }
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Cow::Owned(formatted_number)
    }

    fn format_nsn<'b>(
        &self,
        phone_number: &'b str,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        self.format_nsn_with_carrier(phone_number, metadata, number_format, "")
    }

    fn format_nsn_with_carrier<'b>(
        &self,
        number: &'b str,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Cow<'b, str> {
        // When the intl_number_formats exists, we use that to format national number
        // for the INTERNATIONAL format instead of using the number_formats.
        let available_formats = if number_format == PhoneNumberFormat::National {
            metadata.number_formats()
        } else {
            metadata.intl_number_formats()
        };
        match Self::choose_formatting_pattern_for_number(available_formats, number) {
            Some(formatting_pattern) => self.format_nsn_using_pattern_with_carrier(
                number,
                formatting_pattern,
                number_format,
                carrier_code,
            ),
            None => Cow::Borrowed(number),
        }
    }

    pub(super) fn choose_formatting_pattern_for_number<'b>(
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Option<&'b NumberFormat> {
        available_formats.iter().find(|format| {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed. It was compiled anchored at the start.
            let leading_digits_match = format
                .leading_digits_pattern()
                .is_none_or(|leading_digits| leading_digits.is_match(national_number));
            leading_digits_match && format.pattern().is_match(national_number)
        })
    }

    // Note that carrier_code is optional - if an empty string, no carrier code
    // replacement will take place.
    fn format_nsn_using_pattern_with_carrier<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Cow<'b, str> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        let carrier_code_formatting_rule = formatting_pattern
            .domestic_carrier_code_formatting_rule()
            .filter(|_| number_format == PhoneNumberFormat::National && !carrier_code.is_empty());

        if let Some(carrier_code_formatting_rule) = carrier_code_formatting_rule {
            // Replace the $CC in the formatting rule with the desired carrier code.
            let carrier_code_formatting_rule = self
                .reg_exps
                .carrier_code_pattern
                .replace(carrier_code_formatting_rule, NoExpand(carrier_code));
            if let Cow::Owned(s) = self
                .reg_exps
                .first_group_capturing_pattern
                .replace(&number_format_rule, carrier_code_formatting_rule.as_ref())
            {
                number_format_rule = Cow::Owned(s);
            }
        } else if let Some(national_prefix_formatting_rule) = formatting_pattern
            .national_prefix_formatting_rule()
            .filter(|_| number_format == PhoneNumberFormat::National)
        {
            // Apply the national_prefix_formatting_rule as the formatting_pattern
            // contains only information on how the national significant number
            // should be formatted at this point.
            if let Cow::Owned(s) = self
                .reg_exps
                .first_group_capturing_pattern
                .replace(&number_format_rule, national_prefix_formatting_rule)
            {
                number_format_rule = Cow::Owned(s);
            }
        }

        let mut formatted_number = formatting_pattern
            .pattern()
            .replace_all(national_number, number_format_rule.as_ref());

        if number_format == PhoneNumberFormat::RFC3966 {
            // First consume any leading punctuation, if any was present.
            if let Some(rest) = self
                .reg_exps
                .separator_pattern
                .consume_start(&formatted_number)
            {
                formatted_number = Cow::Owned(rest.to_owned());
            }
            // Then replace all separators with a "-".
            if let Cow::Owned(s) = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number, "-")
            {
                formatted_number = Cow::Owned(s)
            }
        }
        formatted_number
    }

    /// Simple wrapper of format_nsn_using_pattern_with_carrier for the common
    /// case of no carrier code.
    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        self.format_nsn_using_pattern_with_carrier(
            national_number,
            formatting_pattern,
            number_format,
            "",
        )
    }

    // Returns the formatted extension of a phone number, if the phone number had an
    // extension specified else None.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        let extension = phone_number.extension().filter(|extension| !extension.is_empty())?;
        let prefix = if number_format == PhoneNumberFormat::RFC3966 {
            RFC3966_EXTN_PREFIX
        } else {
            metadata.preferred_extn_prefix().unwrap_or(DEFAULT_EXTN_PREFIX)
        };
        Some(format!("{}{}", prefix, extension))
    }

    /// Formats a phone number in national format for dialing using the carrier
    /// as specified in the `carrier_code`. The `carrier_code` will always be
    /// used regardless of whether the phone number already has a preferred
    /// domestic carrier code stored. If `carrier_code` contains an empty
    /// string, returns the number in national format without any carrier code.
    pub fn format_national_number_with_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> String {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::national_significant_number(phone_number);
        let region_code = self.get_region_code_for_country_code(country_calling_code);

        // Note get_region_code_for_country_code() is used because formatting
        // information for regions which share a country calling code is contained
        // by only one region for performance reasons. For example, for NANPA
        // regions it will be contained in the metadata for US.
        let Some(metadata) = self
            .store
            .metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return national_significant_number;
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                metadata,
                PhoneNumberFormat::National,
                carrier_code,
            ),
            national_significant_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, PhoneNumberFormat::National)
        {
            formatted_number.push_str(&formatted_extension);
        }
        formatted_number
    }

    /// Formats a phone number in national format for dialing using the carrier
    /// as specified in the preferred_domestic_carrier_code field of the
    /// PhoneNumber object passed in. If that is missing, use the
    /// `fallback_carrier_code` passed in instead.
    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> String {
        let carrier_code = phone_number
            .preferred_domestic_carrier_code()
            .filter(|carrier_code| !carrier_code.is_empty())
            .unwrap_or(fallback_carrier_code);
        self.format_national_number_with_carrier_code(phone_number, carrier_code)
    }

    /// Returns a number formatted in such a way that it can be dialed from a
    /// mobile phone in a specific region. If the number cannot be reached from
    /// the region (e.g. some countries block toll-free numbers from being called
    /// outside of the country), `None` is returned.
    pub fn format_number_for_mobile_dialing(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
        with_formatting: bool,
    ) -> Option<String> {
        let country_calling_code = phone_number.country_code();
        if !self.store.has_calling_code(country_calling_code) {
            trace!("Calling code {country_calling_code} can't be dialled");
            return None;
        }

        // Clear the extension, as that part cannot normally be dialed together with
        // the main number.
        let mut number_no_extension = phone_number.clone();
        number_no_extension.clear_extension();
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let number_type = self.get_number_type(&number_no_extension);
        let is_valid_number = self.is_valid_number(&number_no_extension);

        let formatted_number = if region_calling_from.eq_ignore_ascii_case(region_code) {
            let is_fixed_line_or_mobile = matches!(
                number_type,
                PhoneNumberType::FixedLine
                    | PhoneNumberType::Mobile
                    | PhoneNumberType::FixedLineOrMobile
            );
            // Carrier codes may be needed in some countries. We handle this here.
            if region_code == REGION_REQUIRING_CARRIER_CODE && is_fixed_line_or_mobile {
                // Brazilian fixed line and mobile numbers need to be dialed with a
                // carrier code when called within Brazil. Without that, most of the
                // carriers won't connect the call. Because of that, we return None
                // when no carrier code is known.
                number_no_extension
                    .preferred_domestic_carrier_code()
                    .filter(|carrier_code| !carrier_code.is_empty())?;
                Cow::Owned(
                    self.format_national_number_with_preferred_carrier_code(&number_no_extension, ""),
                )
            } else if country_calling_code == NANPA_COUNTRY_CODE {
                // For NANPA countries, we output international format for numbers that
                // can be dialed internationally, since that always works, except for
                // numbers which might potentially be short numbers, which are always
                // dialled in national format.
                let region_metadata = self
                    .store
                    .metadata_for_region_or_calling_code(country_calling_code, region_code)?;
                let national_number = Self::national_significant_number(&number_no_extension);
                if self.can_be_internationally_dialled(&number_no_extension)
                    && test_number_length_with_unknown_type(&national_number, region_metadata)
                        != Err(ValidationError::TooShort)
                {
                    self.format(&number_no_extension, PhoneNumberFormat::International)
                } else {
                    self.format(&number_no_extension, PhoneNumberFormat::National)
                }
            } else if (region_code == REGION_CODE_FOR_NON_GEO_ENTITY
                // MX fixed line and mobile numbers should always be formatted in
                // international format, even when dialed within MX. For national
                // format to work, a carrier code needs to be used, and the correct
                // carrier code depends on if the caller and callee are from the same
                // local area. It is trickier to get that to work correctly than using
                // international format, which is tested to work fine on all carriers.
                // CL fixed line numbers need the national prefix when dialing in the
                // national format, but don't have it when used for display. The
                // reverse is true for mobile numbers. As a result, we output them in
                // the international format to make it work. UZ mobile and fixed-line
                // numbers have to be formatted in international format or prefixed
                // with special codes like 03, 04 (for fixed-line) and 05 (for mobile)
                // for dialling successfully from mobile devices. As we do not have
                // complete information on special codes and to be consistent with
                // formatting across all phone types we return the number in
                // international format here.
                || (REGIONS_DIALLING_MOBILES_INTERNATIONALLY.contains(&region_code)
                    && is_fixed_line_or_mobile))
                && self.can_be_internationally_dialled(&number_no_extension)
            {
                self.format(&number_no_extension, PhoneNumberFormat::International)
            } else {
                self.format(&number_no_extension, PhoneNumberFormat::National)
            }
        } else if is_valid_number && self.can_be_internationally_dialled(&number_no_extension) {
            // We assume that short numbers are not diallable from outside their
            // region, so if a number is not a valid regular length phone number, we
            // treat it as if it cannot be internationally dialled.
            let number_format = if with_formatting {
                PhoneNumberFormat::International
            } else {
                PhoneNumberFormat::E164
            };
            return Some(self.format(&number_no_extension, number_format).into_owned());
        } else {
            Cow::Borrowed("")
        };

        let formatted_number = if with_formatting {
            formatted_number.into_owned()
        } else {
            self.normalize_diallable_chars_only(&formatted_number)
        };
        if formatted_number.is_empty() {
            None
        } else {
            Some(formatted_number)
        }
    }

    /// Formats a phone number for out-of-country dialing purposes.
    ///
    /// Note that in this version, if the number was entered originally using
    /// alpha characters and this version of the number is stored in raw_input,
    /// this representation of the number will be used rather than the digit
    /// representation. Grouping information, as specified by characters such as
    /// "-" and " ", will be retained.
    ///
    /// The region's international dialling prefix is used when it is a single
    /// one, then its preferred prefix. Without either, the number is rendered
    /// in the international format.
    pub fn format_out_of_country_calling_number(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        let Some(metadata_calling_from) = self.store.region(region_calling_from) else {
            warn!(
                "Trying to format number from invalid region {}. International formatting applied.",
                region_calling_from
            );
            return self
                .format(phone_number, PhoneNumberFormat::International)
                .into_owned();
        };
        let country_code = phone_number.country_code();
        let national_significant_number = Self::national_significant_number(phone_number);
        if !self.store.has_calling_code(country_code) {
            return national_significant_number;
        }
        if country_code == NANPA_COUNTRY_CODE {
            if self.store.is_nanpa_region(metadata_calling_from.id()) {
                // For NANPA regions, return the national format for these regions but
                // prefix it with the country calling code.
                let mut buf = itoa::Buffer::new();
                return format!(
                    "{} {}",
                    buf.format(country_code),
                    self.format(phone_number, PhoneNumberFormat::National)
                );
            }
        } else if country_code == metadata_calling_from.country_code() {
            // If neither region is a NANPA region, then we check to see if the
            // country calling code of the number and the country calling code of the
            // region we are calling from are the same. For regions that share a
            // country calling code, the national format is used.
            return self
                .format(phone_number, PhoneNumberFormat::National)
                .into_owned();
        }

        let international_prefix = metadata_calling_from.international_prefix().unwrap_or("");
        // A region with a single international prefix dials with it, otherwise we
        // fall back to its preferred prefix. For regions that have multiple
        // international prefixes and no preferred one, the international format of
        // the number is returned, since we would not know which one to use.
        let international_prefix_for_formatting =
            if self.reg_exps.single_international_prefix.is_match(international_prefix) {
                international_prefix
            } else {
                metadata_calling_from
                    .preferred_international_prefix()
                    .unwrap_or("")
            };

        let region_code = self.get_region_code_for_country_code(country_code);
        // Metadata cannot be missing because the country calling code is valid.
        let Some(metadata_for_region) = self
            .store
            .metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return national_significant_number;
        };
        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn(
                &national_significant_number,
                metadata_for_region,
                PhoneNumberFormat::International
            ),
            national_significant_number
        );
        if let Some(formatted_extension) = Self::get_formatted_extension(
            phone_number,
            metadata_for_region,
            PhoneNumberFormat::International,
        ) {
            formatted_number.push_str(&formatted_extension);
        }
        if international_prefix_for_formatting.is_empty() {
            prefix_number_with_country_calling_code(
                country_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            formatted_number
        } else {
            let mut buf = itoa::Buffer::new();
            format!(
                "{} {} {}",
                international_prefix_for_formatting,
                buf.format(country_code),
                formatted_number
            )
        }
    }

    /// Formats a phone number using the original phone number format that the
    /// number is parsed from. The original format is embedded in the
    /// country_code_source field of the PhoneNumber object passed in. If such
    /// information is missing, the number will be formatted into the NATIONAL
    /// format by default. When we don't have a formatting pattern for the
    /// number, the method returns the raw input when it is available.
    ///
    /// Note this method guarantees no digit will be inserted, removed or
    /// modified as a result of formatting.
    pub fn format_in_original_format<'b>(
        &self,
        phone_number: &'b PhoneNumber,
        region_calling_from: &str,
    ) -> Cow<'b, str> {
        if let Some(raw_input) = phone_number.raw_input() {
            if !self.has_formatting_pattern_for_number(phone_number) {
                // We check if we have the formatting pattern because without that, we
                // might format the number as a group without national prefix.
                return Cow::Borrowed(raw_input);
            }
        }

        let formatted_number = match phone_number.country_code_source() {
            CountryCodeSource::Unspecified => {
                return self.format(phone_number, PhoneNumberFormat::National);
            }
            CountryCodeSource::FromNumberWithPlusSign => {
                self.format(phone_number, PhoneNumberFormat::International)
            }
            CountryCodeSource::FromNumberWithIdd => Cow::Owned(
                self.format_out_of_country_calling_number(phone_number, region_calling_from),
            ),
            CountryCodeSource::FromNumberWithoutPlusSign => {
                let international = self.format(phone_number, PhoneNumberFormat::International);
                match strip_cow_prefix(international, PLUS_SIGN) {
                    Some(without_plus) => without_plus,
                    None => self.format(phone_number, PhoneNumberFormat::International),
                }
            }
            CountryCodeSource::FromDefaultCountry => self.format_as_entered_nationally(phone_number),
        };

        let Some(raw_input) = phone_number.raw_input().filter(|raw| !raw.is_empty()) else {
            return formatted_number;
        };
        // If no digit is inserted/removed/modified as a result of our formatting,
        // we return the formatted phone number; otherwise we return the raw input
        // the user entered.
        if self.normalize_diallable_chars_only(&formatted_number)
            != self.normalize_diallable_chars_only(raw_input)
        {
            Cow::Borrowed(raw_input)
        } else {
            formatted_number
        }
    }

    /// National format of a number read in its default region, with the
    /// national prefix only when the user typed one.
    fn format_as_entered_nationally<'b>(&self, phone_number: &'b PhoneNumber) -> Cow<'b, str> {
        let region_code = self.get_region_code_for_country_code(phone_number.country_code());
        // We strip non-digits from the NDD here, and from the raw input later, so
        // that we can compare them easily.
        let national_prefix = self
            .get_ndd_prefix_for_region(region_code, true)
            .filter(|prefix| !prefix.is_empty());
        let national_format = self.format(phone_number, PhoneNumberFormat::National);
        let Some(national_prefix) = national_prefix else {
            // If the region doesn't have a national prefix at all, we can safely
            // return the national format without worrying about a national prefix
            // being added.
            return national_format;
        };
        // Otherwise, we check if the original number was entered with a national
        // prefix.
        let raw_input = phone_number.raw_input().unwrap_or("");
        if self.raw_input_contains_national_prefix(raw_input, &national_prefix, region_code) {
            // If so, we can safely return the national format.
            return national_format;
        }

        // Metadata cannot be missing here because get_ndd_prefix_for_region()
        // returns None if there is no metadata for the region.
        let Some(metadata) = self.store.region(region_code) else {
            return national_format;
        };
        let national_number = Self::national_significant_number(phone_number);
        let Some(format_rule) =
            Self::choose_formatting_pattern_for_number(metadata.number_formats(), &national_number)
        else {
            // The format rule could still be missing here if the national number was
            // 0 and there was no raw input (this should not be possible for numbers
            // generated by the phonenumber library as they would also not have a
            // country calling code and we would have exited earlier).
            return national_format;
        };
        // When the format we apply to this number doesn't contain national prefix,
        // we can just return the national format.
        let Some(candidate_national_prefix_rule) = format_rule.national_prefix_formatting_rule()
        else {
            return national_format;
        };
        // We assume that the first-group symbol will never be _before_ the national
        // prefix.
        let index_of_first_group = match candidate_national_prefix_rule.find("$1") {
            Some(index) if index > 0 => index,
            _ => return national_format,
        };
        let candidate_national_prefix =
            self.normalize_digits_only(&candidate_national_prefix_rule[..index_of_first_group]);
        if candidate_national_prefix.is_empty() {
            // National prefix not used when formatting this number.
            return national_format;
        }

        // Otherwise, we need to remove the national prefix from our output.
        let mut format_without_national_prefix = format_rule.clone();
        format_without_national_prefix.national_prefix_formatting_rule = None;
        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_using_pattern(
                &national_number,
                &format_without_national_prefix,
                PhoneNumberFormat::National
            ),
            national_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, PhoneNumberFormat::National)
        {
            formatted_number.push_str(&formatted_extension);
        }
        Cow::Owned(formatted_number)
    }

    /// Check if raw_input, which is assumed to be in the national format, has a
    /// national prefix. The national prefix is assumed to be in digits-only
    /// form.
    fn raw_input_contains_national_prefix(
        &self,
        raw_input: &str,
        national_prefix: &str,
        region_code: &str,
    ) -> bool {
        let normalized_national_number = self.normalize_digits_only(raw_input);
        let Some(without_prefix) = normalized_national_number.strip_prefix(national_prefix) else {
            return false;
        };
        // Some Japanese numbers (e.g. 00777123) might be mistaken to contain the
        // national prefix when written without it (e.g. 0777123) if we just do
        // prefix matching. To tackle that, we check the validity of the number if
        // the assumed national prefix is removed (777123 won't be valid in Japan).
        self.parse(without_prefix, Some(region_code))
            .is_ok_and(|number| self.is_valid_number(&number))
    }

    fn has_formatting_pattern_for_number(&self, phone_number: &PhoneNumber) -> bool {
        let country_calling_code = phone_number.country_code();
        let phone_number_region = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) = self
            .store
            .metadata_for_region_or_calling_code(country_calling_code, phone_number_region)
        else {
            return false;
        };
        let national_number = Self::national_significant_number(phone_number);
        Self::choose_formatting_pattern_for_number(metadata.number_formats(), &national_number)
            .is_some()
    }
}
