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

use super::{
    helper_functions::{copy_core_fields_only, is_national_number_suffix_of_the_other},
    phonenumberutil::PhoneNumberUtil,
};
use crate::{
    i18n::RegionCode,
    phonenumber::PhoneNumber,
    phonenumberutil::{enums::MatchType, errors::ParseError},
};

impl PhoneNumberUtil {
    /// Takes two phone numbers and compares them for equality.
    ///
    /// Returns `ExactMatch` if the country calling code, NSN, presence of a
    /// leading zero for Italian numbers and any extension present are the same.
    /// Returns `ShortNsnMatch` if the country calling code is the same and one
    /// NSN could be a shorter version of the other number. This includes the
    /// case where one has an extension specified, and the other does not.
    /// Returns `NoMatch` otherwise. Only the fields set by
    /// [`PhoneNumberUtil::parse`] take part in the comparison.
    pub fn is_number_match(&self, first_number_in: &PhoneNumber, second_number_in: &PhoneNumber) -> MatchType {
        // We only care about the fields that uniquely define a number, so we copy
        // these across explicitly.
        let first_number = copy_core_fields_only(first_number_in);
        let second_number = copy_core_fields_only(second_number_in);

        // Early exit if both had extensions and these are different.
        if let (Some(first_extension), Some(second_extension)) =
            (first_number.extension(), second_number.extension())
        {
            if first_extension != second_extension {
                return MatchType::NoMatch;
            }
        }

        // Parsed numbers always carry a calling code, so NSN_MATCH only comes out
        // of comparing against a string without one.
        if first_number == second_number {
            return MatchType::ExactMatch;
        }
        if first_number.country_code() == second_number.country_code()
            && is_national_number_suffix_of_the_other(&first_number, &second_number)
        {
            // A SHORT_NSN_MATCH occurs if there is a difference because of the
            // presence or absence of an 'Italian leading zero', the presence or
            // absence of an extension, or one NSN being a shorter variant of the
            // other.
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Compares a parsed number with a string. The string is read with its own
    /// calling code when it has one; otherwise it is read in the region of the
    /// first number, and an exact match is downgraded to `NsnMatch`. A string
    /// that can't be parsed either way gives its parse error.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: &str,
    ) -> Result<MatchType, ParseError> {
        match self.parse(second_number, None) {
            Ok(second_number_as_proto) => {
                return Ok(self.is_number_match(first_number, &second_number_as_proto));
            }
            Err(ParseError::InvalidCountryCode) => {
                trace!("'{second_number}' has no calling code, reading it in the region of the first number");
            }
            Err(err) => return Err(err),
        }
        // The second number has no country calling code. EXACT_MATCH is no longer
        // possible. We parse it as if the region was the same as that for the
        // first number, and if EXACT_MATCH is returned, we replace this with
        // NSN_MATCH.
        let first_number_region = self.get_region_code_for_country_code(first_number.country_code());
        if first_number_region == RegionCode::get_unknown() {
            return Err(ParseError::InvalidCountryCode);
        }
        let second_number_with_first_number_region =
            self.parse(second_number, Some(first_number_region))?;
        Ok(
            match self.is_number_match(first_number, &second_number_with_first_number_region) {
                MatchType::ExactMatch => MatchType::NsnMatch,
                match_type => match_type,
            },
        )
    }
}
