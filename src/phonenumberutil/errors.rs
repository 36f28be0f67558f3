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

use std::num::ParseIntError;

use thiserror::Error;

use crate::{
    phonenumberutil::enums::{ParseErrorType, PhoneNumberType},
    regexp_cache::InvalidRegexError,
};

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("Too short Nsn")]
    TooShortNsn,
    #[error("Too long nsn")]
    TooLongNsn,
}

#[derive(Debug, PartialEq, Error)]
pub enum NotANumberError {
    #[error("Number not matched a valid number pattern")]
    NotMatchedValidNumberPattern,
    #[error("Invalid phone context")]
    InvalidPhoneContext,
    #[error("Letters can not be mapped to keypad digits")]
    UnmappableLetters,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
    #[error("{0}")]
    FailedToExtractNumber(#[from] ExtractNumberError),
}

#[derive(Debug, PartialEq, Error)]
pub enum ExtractNumberError {
    #[error("No valid start character found")]
    NoValidStartCharacter,
    #[error("Invalid number")]
    NotANumber,
}

/// Lookup misses. No user input is involved, these point at gaps in the
/// loaded metadata or at unsupported region codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("Unknown region code: {0}")]
    UnknownRegion(String),
    #[error("Unknown country calling code: {0}")]
    UnknownCallingCode(i32),
    #[error("No example number of type {number_type:?} for region {region}")]
    NoExampleNumber {
        region: String,
        number_type: PhoneNumberType,
    },
}

/// Failures while loading a numbering-plan dataset.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Malformed metadata text: {0}")]
    TextFormat(#[from] protobuf::text_format::ParseError),
    #[error("Invalid pattern in metadata for {region}: {source}")]
    InvalidPattern {
        region: String,
        #[source]
        source: InvalidRegexError,
    },
    #[error("Metadata entry {region} misses required field {field}")]
    MissingField {
        region: String,
        field: &'static str,
    },
    #[error("More than one main region for country calling code {country_code}")]
    MultipleMainRegions { country_code: i32 },
}

/// Possible outcomes when testing if a PhoneNumber is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    /// This can also be returned in the case where
    /// IsPossibleNumberForTypeWithReason was called, and there are no numbers of
    /// this type at all for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region,\
    shorter than the longest valid numbers for this region, and does not\
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

impl ParseError {
    /// Kind of the failure, for callers that branch on it.
    pub fn kind(&self) -> ParseErrorType {
        match self {
            ParseError::InvalidCountryCode => ParseErrorType::InvalidCountryCode,
            ParseError::NotANumber(_) => ParseErrorType::NotANumber,
            ParseError::TooShortAfterIdd => ParseErrorType::TooShortAfterIdd,
            ParseError::TooShortNsn => ParseErrorType::TooShortNsn,
            ParseError::TooLongNsn => ParseErrorType::TooLong,
        }
    }
}

impl From<ExtractNumberError> for ParseError {
    fn from(value: ExtractNumberError) -> Self {
        NotANumberError::FailedToExtractNumber(value).into()
    }
}

impl MetadataError {
    pub(crate) fn invalid_pattern(region: &str, source: InvalidRegexError) -> Self {
        MetadataError::InvalidPattern { region: region.to_string(), source }
    }
}
