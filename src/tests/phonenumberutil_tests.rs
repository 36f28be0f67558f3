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

use crate::{
    CountryCodeSource, PHONE_NUMBER_UTIL, PhoneNumber, PhoneNumberUtil,
    enums::{MatchType, NumberLengthType, ParseErrorType, PhoneNumberFormat, PhoneNumberType},
    errors::{NotANumberError, NotFoundError, ParseError, ValidationError},
};

use super::{get_phone_util, region_code::RegionCode};

fn parse(phone_util: &PhoneNumberUtil, number: &str, region: &str) -> PhoneNumber {
    phone_util.parse(number, Some(region)).unwrap()
}

fn parse_kind(phone_util: &PhoneNumberUtil, number: &str, region: Option<&str>) -> ParseErrorType {
    phone_util.parse(number, region).unwrap_err().kind()
}

#[test]
fn parses_international_number_without_region() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+1 650 253 0000", None).unwrap();

    assert_eq!(1, number.country_code());
    assert_eq!(6502530000, number.national_number());
    assert_eq!("6502530000", phone_util.get_national_significant_number(&number));
    assert_eq!(Some(RegionCode::us()), phone_util.get_region_code_for_number(&number));
    assert_eq!("(650) 253-0000", phone_util.format(&number, PhoneNumberFormat::National));
}

#[test]
fn parse_errors_are_classified() {
    let phone_util = get_phone_util();

    assert_eq!(ParseErrorType::NotANumber, parse_kind(&phone_util, "", Some(RegionCode::us())));
    assert_eq!(
        ParseErrorType::NotANumber,
        parse_kind(&phone_util, "This is not a phone number", Some(RegionCode::gb()))
    );
    assert_eq!(
        Err(ParseError::TooShortAfterIdd),
        phone_util.parse("0044", Some(RegionCode::gb()))
    );
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse("123 456 7890", None)
    );
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse("123 456 7890", Some(RegionCode::zz()))
    );
    assert_eq!(Err(ParseError::InvalidCountryCode), phone_util.parse("+999 123456", None));
    assert_eq!(Err(ParseError::TooShortNsn), phone_util.parse("+44 1", None));
    assert_eq!(
        ParseErrorType::TooLong,
        parse_kind(&phone_util, "+44 1234567890123456789", None)
    );
    // Shorter than any number of the calling code.
    assert_eq!(Err(ParseError::TooShortNsn), phone_util.parse("911", Some(RegionCode::us())));
    assert_eq!(Err(ParseError::TooShortNsn), phone_util.parse("+44 207", None));
    // A couple of letters can't be a vanity number.
    assert_eq!(
        ParseErrorType::NotANumber,
        parse_kind(&phone_util, "020 7031 300a", Some(RegionCode::gb()))
    );
}

#[test]
fn too_long_input_is_rejected_before_parsing() {
    let phone_util = get_phone_util();
    let input = "1".repeat(251);
    assert_eq!(Err(ParseError::TooLongNsn), phone_util.parse(&input, Some(RegionCode::us())));
}

#[test]
fn parses_national_numbers() {
    let phone_util = get_phone_util();

    let number = parse(&phone_util, "020 7031 3000", RegionCode::gb());
    assert_eq!(44, number.country_code());
    assert_eq!(2070313000, number.national_number());

    // The calling code of the default region written without a plus.
    let number = parse(&phone_util, "44 20 7031 3000", RegionCode::gb());
    assert_eq!(2070313000, number.national_number());

    // The IDD of the default region.
    let number = parse(&phone_util, "011 44 20 7031 3000", RegionCode::us());
    assert_eq!(44, number.country_code());
    assert_eq!(2070313000, number.national_number());

    // Full-width digits.
    let number = parse(&phone_util, "\u{FF10}\u{FF12}\u{FF10} 7031 3000", RegionCode::gb());
    assert_eq!(2070313000, number.national_number());

    // Region codes are case insensitive.
    let number = parse(&phone_util, "030 123456", "de");
    assert_eq!(49, number.country_code());
    assert_eq!(30123456, number.national_number());
}

#[test]
fn parses_with_national_prefix_transform() {
    let phone_util = get_phone_util();

    // Argentinian mobile numbers dialled nationally with "15" after the area code.
    let number = parse(&phone_util, "011 15 8765 4321", RegionCode::ar());
    assert_eq!(54, number.country_code());
    assert_eq!(91187654321, number.national_number());
    assert_eq!(PhoneNumberType::Mobile, phone_util.get_number_type(&number));

    // Brazilian numbers dialled with a carrier selection code.
    let number = phone_util
        .parse_and_keep_raw_input("0 15 11 96123 4567", Some(RegionCode::br()))
        .unwrap();
    assert_eq!(11961234567, number.national_number());
    assert_eq!(Some("15"), number.preferred_domestic_carrier_code());

    // The carrier code is only recorded with the raw input.
    let number = parse(&phone_util, "0 15 11 96123 4567", RegionCode::br());
    assert_eq!(11961234567, number.national_number());
    assert_eq!(None, number.preferred_domestic_carrier_code());
}

#[test]
fn parses_italian_leading_zero() {
    let phone_util = get_phone_util();
    let number = parse(&phone_util, "02 1234 5678", RegionCode::it());

    assert_eq!(212345678, number.national_number());
    assert!(number.italian_leading_zero());
    assert_eq!("0212345678", phone_util.get_national_significant_number(&number));
    assert_eq!("+390212345678", phone_util.format(&number, PhoneNumberFormat::E164));
    assert_eq!("02 1234 5678", phone_util.format(&number, PhoneNumberFormat::National));
    assert!(phone_util.is_valid_number(&number));
}

#[test]
fn parses_extensions() {
    let phone_util = get_phone_util();

    let number = parse(&phone_util, "+44 20 7031 3000 ext. 1234", RegionCode::us());
    assert_eq!(Some("1234"), number.extension());
    assert_eq!(2070313000, number.national_number());

    let number = phone_util.parse("tel:+1-650-253-0000;ext=123", None).unwrap();
    assert_eq!(Some("123"), number.extension());
    assert_eq!(6502530000, number.national_number());
}

#[test]
fn parses_ambiguous_extension_labels_only_after_a_complete_number() {
    let phone_util = get_phone_util();

    let number = parse(&phone_util, "650-253-0000#", RegionCode::us());
    assert_eq!(6502530000, number.national_number());
    assert_eq!(None, number.extension());

    let number = parse(&phone_util, "020 7031-3000#", RegionCode::gb());
    assert_eq!(44, number.country_code());
    assert_eq!(2070313000, number.national_number());
    assert_eq!(None, number.extension());
    assert!(phone_util.is_valid_number(&number));

    let number = parse(&phone_util, "650 253 0000 - 503#", RegionCode::us());
    assert_eq!(6502530000, number.national_number());
    assert_eq!(Some("503"), number.extension());

    let number = parse(&phone_util, "+44 20 7031 3000 x 77", RegionCode::us());
    assert_eq!(2070313000, number.national_number());
    assert_eq!(Some("77"), number.extension());

    let number = parse(&phone_util, "+1 650 253 0000,,123", RegionCode::us());
    assert_eq!(6502530000, number.national_number());
    assert_eq!(Some("123"), number.extension());
}

#[test]
fn parses_rfc3966_uris() {
    let phone_util = get_phone_util();

    let number = parse(&phone_util, "tel:253-0000;phone-context=+1-650", RegionCode::us());
    assert_eq!(1, number.country_code());
    assert_eq!(6502530000, number.national_number());

    let number = parse(&phone_util, "tel:+1-650-253-0000;isub=12345", RegionCode::gb());
    assert_eq!(6502530000, number.national_number());

    // A domain as phone context is ignored.
    let number = parse(&phone_util, "tel:020-7031-3000;phone-context=example.com", RegionCode::gb());
    assert_eq!(2070313000, number.national_number());

    assert_eq!(
        Err(ParseError::NotANumber(NotANumberError::InvalidPhoneContext)),
        phone_util.parse("tel:253-0000;phone-context=", Some(RegionCode::us()))
    );
}

#[test]
fn parses_vanity_numbers() {
    let phone_util = get_phone_util();
    let number = parse(&phone_util, "1-800-FLOWERS", RegionCode::us());

    assert_eq!(1, number.country_code());
    assert_eq!(8003569377, number.national_number());
    assert_eq!(PhoneNumberType::TollFree, phone_util.get_number_type(&number));
}

#[test]
fn keeps_raw_input_and_source() {
    let phone_util = get_phone_util();
    let cases = [
        ("+44 20 7031 3000", RegionCode::us(), CountryCodeSource::FromNumberWithPlusSign),
        ("011 44 20 7031 3000", RegionCode::us(), CountryCodeSource::FromNumberWithIdd),
        ("44 20 7031 3000", RegionCode::gb(), CountryCodeSource::FromNumberWithoutPlusSign),
        ("020 7031 3000", RegionCode::gb(), CountryCodeSource::FromDefaultCountry),
    ];
    for (input, region, source) in cases {
        let number = phone_util.parse_and_keep_raw_input(input, Some(region)).unwrap();
        assert_eq!(Some(input), number.raw_input());
        assert_eq!(source, number.country_code_source(), "{input}");
    }

    let number = parse(&phone_util, "+44 20 7031 3000", RegionCode::us());
    assert_eq!(None, number.raw_input());
    assert_eq!(CountryCodeSource::Unspecified, number.country_code_source());
}

#[test]
fn non_geographical_numbers() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("+80012345678", None).unwrap();

    assert!(phone_util.is_valid_number(&number));
    assert_eq!(None, phone_util.get_region_code_for_number(&number));
    assert_eq!(PhoneNumberType::TollFree, phone_util.get_number_type(&number));
    assert!(phone_util.can_be_internationally_dialled(&number));
    assert!(!phone_util.is_number_geographical(&number));
    assert_eq!("+800 1234 5678", phone_util.format(&number, PhoneNumberFormat::International));
    assert_eq!("1234 5678", phone_util.format(&number, PhoneNumberFormat::National));
}

#[test]
fn formats_in_all_formats() {
    let phone_util = get_phone_util();

    let us = parse(&phone_util, "+1 650 253 0000", RegionCode::us());
    assert_eq!("+16502530000", phone_util.format(&us, PhoneNumberFormat::E164));
    assert_eq!("+1 650-253-0000", phone_util.format(&us, PhoneNumberFormat::International));
    assert_eq!("(650) 253-0000", phone_util.format(&us, PhoneNumberFormat::National));
    assert_eq!("tel:+1-650-253-0000", phone_util.format(&us, PhoneNumberFormat::RFC3966));

    let gb = parse(&phone_util, "020 7031 3000", RegionCode::gb());
    assert_eq!("+442070313000", phone_util.format(&gb, PhoneNumberFormat::E164));
    assert_eq!("+44 20 7031 3000", phone_util.format(&gb, PhoneNumberFormat::International));
    assert_eq!("020 7031 3000", phone_util.format(&gb, PhoneNumberFormat::National));
    assert_eq!("tel:+44-20-7031-3000", phone_util.format(&gb, PhoneNumberFormat::RFC3966));

    let de = parse(&phone_util, "030 123456", RegionCode::de());
    assert_eq!("030 123456", phone_util.format(&de, PhoneNumberFormat::National));
    assert_eq!("+49 30 123456", phone_util.format(&de, PhoneNumberFormat::International));

    let ru = parse(&phone_util, "+7 912 345 67 89", RegionCode::ru());
    assert_eq!("8 (912) 345-67-89", phone_util.format(&ru, PhoneNumberFormat::National));
    assert_eq!("+7 912 345-67-89", phone_util.format(&ru, PhoneNumberFormat::International));
}

#[test]
fn formats_with_international_patterns() {
    let phone_util = get_phone_util();
    let ar_mobile = parse(&phone_util, "+54 9 11 8765 4321", RegionCode::ar());

    assert_eq!("011 15 8765-4321", phone_util.format(&ar_mobile, PhoneNumberFormat::National));
    assert_eq!(
        "+54 9 11 8765 4321",
        phone_util.format(&ar_mobile, PhoneNumberFormat::International)
    );

    let ar_fixed = parse(&phone_util, "011 8765 4321", RegionCode::ar());
    assert_eq!("011 8765-4321", phone_util.format(&ar_fixed, PhoneNumberFormat::National));
    assert_eq!("+54 11 8765-4321", phone_util.format(&ar_fixed, PhoneNumberFormat::International));
}

#[test]
fn formats_extensions() {
    let phone_util = get_phone_util();

    let gb = parse(&phone_util, "+44 20 7031 3000 ext. 1234", RegionCode::gb());
    assert_eq!("020 7031 3000 x1234", phone_util.format(&gb, PhoneNumberFormat::National));
    assert_eq!("tel:+44-20-7031-3000;ext=1234", phone_util.format(&gb, PhoneNumberFormat::RFC3966));
    assert_eq!("+442070313000", phone_util.format(&gb, PhoneNumberFormat::E164));

    let us = parse(&phone_util, "650 253 0000 ext. 4567", RegionCode::us());
    assert_eq!("(650) 253-0000 ext. 4567", phone_util.format(&us, PhoneNumberFormat::National));
}

#[test]
fn format_is_idempotent() {
    let phone_util = get_phone_util();
    let number = parse(&phone_util, "+44 20 7031 3000", RegionCode::gb());
    for number_format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
        PhoneNumberFormat::RFC3966,
    ] {
        assert_eq!(
            phone_util.format(&number, number_format),
            phone_util.format(&number, number_format)
        );
    }
}

#[test]
fn formats_with_carrier_codes() {
    let phone_util = get_phone_util();
    let number = parse(&phone_util, "+55 11 96123 4567", RegionCode::br());

    assert_eq!("(11) 96123-4567", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "0 15 (11) 96123-4567",
        phone_util.format_national_number_with_carrier_code(&number, "15")
    );
    assert_eq!(
        "(11) 96123-4567",
        phone_util.format_national_number_with_carrier_code(&number, "")
    );
    assert_eq!(
        "0 21 (11) 96123-4567",
        phone_util.format_national_number_with_preferred_carrier_code(&number, "21")
    );

    let with_carrier = phone_util
        .parse_and_keep_raw_input("0 15 11 96123 4567", Some(RegionCode::br()))
        .unwrap();
    assert_eq!(
        "0 15 (11) 96123-4567",
        phone_util.format_national_number_with_preferred_carrier_code(&with_carrier, "21")
    );

    // Carrier codes only apply where the region has a rule for them.
    let gb = parse(&phone_util, "+44 20 7031 3000", RegionCode::gb());
    assert_eq!("020 7031 3000", phone_util.format_national_number_with_carrier_code(&gb, "15"));
}

#[test]
fn formats_out_of_country_calling_numbers() {
    let phone_util = get_phone_util();
    let us = parse(&phone_util, "+1 650 253 0000", RegionCode::us());
    let gb = parse(&phone_util, "+44 20 7031 3000", RegionCode::gb());

    assert_eq!("00 1 650-253-0000", phone_util.format_out_of_country_calling_number(&us, RegionCode::gb()));
    assert_eq!("011 44 20 7031 3000", phone_util.format_out_of_country_calling_number(&gb, RegionCode::us()));
    // NANPA regions dial each other with a leading 1.
    assert_eq!("1 (650) 253-0000", phone_util.format_out_of_country_calling_number(&us, RegionCode::ca()));
    // Within the same calling code the national format is used.
    assert_eq!("020 7031 3000", phone_util.format_out_of_country_calling_number(&gb, RegionCode::gb()));
    // Several IDDs: the preferred one, or the international format without one.
    assert_eq!("0011 44 20 7031 3000", phone_util.format_out_of_country_calling_number(&gb, RegionCode::au()));
    assert_eq!("+44 20 7031 3000", phone_util.format_out_of_country_calling_number(&gb, RegionCode::sg()));
    // Unknown regions get the international format.
    assert_eq!("+44 20 7031 3000", phone_util.format_out_of_country_calling_number(&gb, RegionCode::zz()));

    let with_extension = parse(&phone_util, "+44 20 7031 3000 ext. 1234", RegionCode::gb());
    assert_eq!(
        "011 44 20 7031 3000 x1234",
        phone_util.format_out_of_country_calling_number(&with_extension, RegionCode::us())
    );
}

#[test]
fn formats_between_regions_sharing_a_calling_code() {
    let phone_util = get_phone_util();
    let kz = parse(&phone_util, "+7 7123 456789", RegionCode::kz());

    assert_eq!(Some(RegionCode::kz()), phone_util.get_region_code_for_number(&kz));
    assert_eq!(PhoneNumberType::FixedLine, phone_util.get_number_type(&kz));
    assert_eq!("8 (712) 345-67-89", phone_util.format_out_of_country_calling_number(&kz, RegionCode::ru()));
}

#[test]
fn formats_for_mobile_dialing() {
    let phone_util = get_phone_util();

    let us = parse(&phone_util, "+1 650 253 0000", RegionCode::us());
    assert_eq!(
        Some("+1 650-253-0000".to_owned()),
        phone_util.format_number_for_mobile_dialing(&us, RegionCode::us(), true)
    );
    assert_eq!(
        Some("+16502530000".to_owned()),
        phone_util.format_number_for_mobile_dialing(&us, RegionCode::us(), false)
    );

    let us_toll_free = parse(&phone_util, "800 234 5678", RegionCode::us());
    assert_eq!(
        Some("(800) 234-5678".to_owned()),
        phone_util.format_number_for_mobile_dialing(&us_toll_free, RegionCode::us(), true)
    );
    assert_eq!(
        Some("8002345678".to_owned()),
        phone_util.format_number_for_mobile_dialing(&us_toll_free, RegionCode::us(), false)
    );
    // Toll free numbers can't be dialled from abroad.
    assert_eq!(None, phone_util.format_number_for_mobile_dialing(&us_toll_free, RegionCode::gb(), true));

    let gb = parse(&phone_util, "+44 20 7031 3000 ext. 1234", RegionCode::gb());
    assert_eq!(
        Some("020 7031 3000".to_owned()),
        phone_util.format_number_for_mobile_dialing(&gb, RegionCode::gb(), true)
    );
    assert_eq!(
        Some("+442070313000".to_owned()),
        phone_util.format_number_for_mobile_dialing(&gb, RegionCode::us(), false)
    );
}

#[test]
fn mobile_dialing_in_brazil_needs_a_carrier_code() {
    let phone_util = get_phone_util();

    let without_carrier = parse(&phone_util, "+55 11 96123 4567", RegionCode::br());
    assert_eq!(
        None,
        phone_util.format_number_for_mobile_dialing(&without_carrier, RegionCode::br(), true)
    );
    // From abroad no carrier is needed.
    assert_eq!(
        Some("+55 11 96123-4567".to_owned()),
        phone_util.format_number_for_mobile_dialing(&without_carrier, RegionCode::us(), true)
    );

    let with_carrier = phone_util
        .parse_and_keep_raw_input("0 15 11 96123 4567", Some(RegionCode::br()))
        .unwrap();
    assert_eq!(
        Some("0 15 (11) 96123-4567".to_owned()),
        phone_util.format_number_for_mobile_dialing(&with_carrier, RegionCode::br(), true)
    );
    assert_eq!(
        Some("01511961234567".to_owned()),
        phone_util.format_number_for_mobile_dialing(&with_carrier, RegionCode::br(), false)
    );
}

#[test]
fn formats_in_original_format() {
    let phone_util = get_phone_util();
    let cases = [
        ("+44 20 7031 3000", RegionCode::gb(), "+44 20 7031 3000"),
        ("020 7031 3000", RegionCode::gb(), "020 7031 3000"),
        ("2070313000", RegionCode::gb(), "20 7031 3000"),
        ("44 20 7031 3000", RegionCode::gb(), "44 20 7031 3000"),
        ("011 44 20 7031 3000", RegionCode::us(), "011 44 20 7031 3000"),
        ("6502530000", RegionCode::us(), "(650) 253-0000"),
    ];
    for (input, region, expected) in cases {
        let number = phone_util.parse_and_keep_raw_input(input, Some(region)).unwrap();
        assert_eq!(expected, phone_util.format_in_original_format(&number, region), "{input}");
    }

    // Numbers parsed without the raw input are formatted nationally.
    let number = parse(&phone_util, "+44 20 7031 3000", RegionCode::gb());
    assert_eq!("020 7031 3000", phone_util.format_in_original_format(&number, RegionCode::us()));
}

#[test]
fn classifies_number_types() {
    let phone_util = get_phone_util();
    let cases = [
        ("+44 20 7031 3000", PhoneNumberType::FixedLine),
        ("+44 7400 123456", PhoneNumberType::Mobile),
        ("+44 7640 123456", PhoneNumberType::Pager),
        ("+44 800 123 4567", PhoneNumberType::TollFree),
        ("+44 901 234 5678", PhoneNumberType::PremiumRate),
        ("+44 843 123 4567", PhoneNumberType::SharedCost),
        ("+44 70 1234 5678", PhoneNumberType::PersonalNumber),
        ("+44 56 1234 5678", PhoneNumberType::VoIP),
        ("+44 30 1234 5678", PhoneNumberType::UAN),
        // Same patterns for both types.
        ("+1 650 253 0000", PhoneNumberType::FixedLineOrMobile),
        ("+1 800 234 5678", PhoneNumberType::TollFree),
        ("+1 900 234 5678", PhoneNumberType::PremiumRate),
        ("+1 500 234 5678", PhoneNumberType::PersonalNumber),
        ("+49 151 23456789", PhoneNumberType::Mobile),
        ("+81 50 1234 5678", PhoneNumberType::VoIP),
        ("+971 600 212345", PhoneNumberType::UAN),
        ("+870 773 111 632", PhoneNumberType::Mobile),
        ("+44 6123 456789", PhoneNumberType::Unknown),
    ];
    for (input, expected) in cases {
        let number = phone_util.parse(input, None).unwrap();
        assert_eq!(expected, phone_util.get_number_type(&number), "{input}");
    }
}

#[test]
fn resolves_regions_sharing_a_calling_code() {
    let phone_util = get_phone_util();
    let cases = [
        ("+1 650 253 0000", Some(RegionCode::us())),
        ("+1 242 357 1234", Some(RegionCode::bs())),
        ("+7 912 345 67 89", Some(RegionCode::ru())),
        ("+7 771 000 9998", Some(RegionCode::kz())),
        ("+979 123456789", None),
    ];
    for (input, expected) in cases {
        let number = phone_util.parse(input, None).unwrap();
        assert_eq!(expected, phone_util.get_region_code_for_number(&number), "{input}");
    }

    // Numbers no region claims belong to the main one.
    let number = phone_util.parse("+1 200 123 4567", None).unwrap();
    assert_eq!(Some(RegionCode::us()), phone_util.get_region_code_for_number(&number));
}

#[test]
fn validates_numbers() {
    let phone_util = get_phone_util();

    let gb = parse(&phone_util, "+44 20 7031 3000", RegionCode::gb());
    assert!(phone_util.is_valid_number(&gb));
    assert!(phone_util.is_valid_number_for_region(&gb, RegionCode::gb()));
    assert!(!phone_util.is_valid_number_for_region(&gb, RegionCode::us()));
    assert!(!phone_util.is_valid_number_for_region(&gb, RegionCode::zz()));

    let bs = parse(&phone_util, "+1 242 357 1234", RegionCode::bs());
    assert!(phone_util.is_valid_number_for_region(&bs, RegionCode::bs()));
    assert!(phone_util.is_valid_number_for_region(&bs, RegionCode::us()));

    let invalid = parse(&phone_util, "+44 6123 456789", RegionCode::gb());
    assert!(!phone_util.is_valid_number(&invalid));
    assert!(phone_util.is_possible_number(&invalid));

    // Valid for the region, but of another length than its numbers.
    let short = parse(&phone_util, "+49 30 12", RegionCode::de());
    assert!(!phone_util.is_valid_number(&short));
}

#[test]
fn checks_possible_lengths() {
    let phone_util = get_phone_util();

    let us = parse(&phone_util, "+1 650 253 0000", RegionCode::us());
    assert_eq!(Ok(NumberLengthType::IsPossible), phone_util.is_possible_number_with_reason(&us));

    let local = parse(&phone_util, "+1 253 0000", RegionCode::us());
    assert_eq!(
        Ok(NumberLengthType::IsPossibleLocalOnly),
        phone_util.is_possible_number_with_reason(&local)
    );
    assert!(phone_util.is_possible_number(&local));

    let eight_digits = parse(&phone_util, "+1 2530 0000", RegionCode::us());
    assert_eq!(
        Err(ValidationError::TooShort),
        phone_util.is_possible_number_with_reason(&eight_digits)
    );

    // AU numbers have 6, 9 or 10 digits, or 8 when dialled locally.
    let au_seven_digits = parse(&phone_util, "+61 2 123 456", RegionCode::au());
    assert_eq!(
        Err(ValidationError::InvalidLength),
        phone_util.is_possible_number_with_reason(&au_seven_digits)
    );

    let gb_fixed = parse(&phone_util, "+44 1234 56789", RegionCode::gb());
    assert!(phone_util.is_possible_number_for_type(&gb_fixed, PhoneNumberType::FixedLine));
    assert_eq!(
        Err(ValidationError::TooShort),
        phone_util.is_possible_number_for_type_with_reason(&gb_fixed, PhoneNumberType::Mobile)
    );

    let au_toll_free = parse(&phone_util, "+61 1800 123456", RegionCode::au());
    assert_eq!(
        Err(ValidationError::TooLong),
        phone_util.is_possible_number_for_type_with_reason(&au_toll_free, PhoneNumberType::Mobile)
    );
}

#[test]
fn example_numbers_are_valid_and_possible() {
    let phone_util = get_phone_util();
    let regions = phone_util.get_supported_regions().map(str::to_owned).collect::<Vec<_>>();
    for region in &regions {
        let types = phone_util.get_supported_types_for_region(region).unwrap();
        assert!(types.contains(&PhoneNumberType::FixedLine), "{region}");
        for number_type in types {
            let number = phone_util.get_example_number_for_type(region, number_type).unwrap();
            assert!(phone_util.is_valid_number(&number), "{region} {number_type:?}");
            assert!(phone_util.is_valid_number_for_region(&number, region), "{region} {number_type:?}");
            assert!(phone_util.is_possible_number(&number), "{region} {number_type:?}");

            let actual_type = phone_util.get_number_type(&number);
            let same_type = actual_type == number_type
                || (actual_type == PhoneNumberType::FixedLineOrMobile
                    && matches!(number_type, PhoneNumberType::FixedLine | PhoneNumberType::Mobile));
            assert!(same_type, "{region} {number_type:?} came out as {actual_type:?}");
        }
    }

    for calling_code in phone_util.get_supported_global_network_calling_codes() {
        let number = phone_util.get_example_number_for_non_geo_entity(calling_code).unwrap();
        assert_eq!(calling_code, number.country_code());
        assert!(phone_util.is_valid_number(&number), "{calling_code}");
    }
}

#[test]
fn example_number_lookups() {
    let phone_util = get_phone_util();

    let number = phone_util.get_example_number(RegionCode::gb()).unwrap();
    assert_eq!(44, number.country_code());
    assert_eq!(1212345678, number.national_number());

    let number = phone_util
        .get_example_number_for_type(RegionCode::de(), PhoneNumberType::Mobile)
        .unwrap();
    assert_eq!(15123456789, number.national_number());

    // The general description has no example, any type does.
    let number = phone_util
        .get_example_number_for_type(RegionCode::us(), PhoneNumberType::Unknown)
        .unwrap();
    assert!(phone_util.is_valid_number(&number));

    assert_eq!(
        Err(NotFoundError::UnknownRegion(RegionCode::zz().to_owned())),
        phone_util.get_example_number_for_type(RegionCode::zz(), PhoneNumberType::FixedLine)
    );
    assert!(matches!(
        phone_util.get_example_number_for_type(RegionCode::sg(), PhoneNumberType::Pager),
        Err(NotFoundError::NoExampleNumber { number_type: PhoneNumberType::Pager, .. })
    ));

    let number = phone_util.get_example_number_for_non_geo_entity(800).unwrap();
    assert_eq!(12345678, number.national_number());
    assert_eq!(
        Err(NotFoundError::UnknownCallingCode(999)),
        phone_util.get_example_number_for_non_geo_entity(999)
    );
}

#[test]
fn supported_regions_and_calling_codes() {
    let phone_util = get_phone_util();

    let regions = phone_util.get_supported_regions().collect::<HashSet<_>>();
    assert!(regions.contains(RegionCode::gb()));
    assert!(regions.contains(RegionCode::kz()));
    assert!(!regions.contains(RegionCode::un001()));

    let non_geo = phone_util.get_supported_global_network_calling_codes().collect::<HashSet<_>>();
    assert_eq!(HashSet::from([800, 808, 870, 979]), non_geo);
    for calling_code in non_geo {
        assert_eq!(RegionCode::un001(), phone_util.get_region_code_for_country_code(calling_code));
    }

    let calling_codes = phone_util.get_supported_calling_codes().collect::<HashSet<_>>();
    assert!(calling_codes.contains(&1));
    assert!(calling_codes.contains(&800));
    assert!(!calling_codes.contains(&999));

    let nanpa = phone_util.get_region_codes_for_country_calling_code(1);
    assert_eq!(3, nanpa.len());
    assert_eq!(RegionCode::us(), nanpa[0]);
    assert!(phone_util.get_region_codes_for_country_calling_code(999).is_empty());

    assert_eq!(RegionCode::ru(), phone_util.get_region_code_for_country_code(7));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(999));
    assert_eq!(Some(44), phone_util.get_country_code_for_region(RegionCode::gb()));
    assert_eq!(None, phone_util.get_country_code_for_region(RegionCode::zz()));
    assert_eq!(None, phone_util.get_country_code_for_region(RegionCode::un001()));
}

#[test]
fn supported_types() {
    let phone_util = get_phone_util();

    let gb = phone_util.get_supported_types_for_region(RegionCode::gb()).unwrap();
    assert!(gb.contains(&PhoneNumberType::Pager));
    assert!(!gb.contains(&PhoneNumberType::VoiceMail));
    assert!(!gb.contains(&PhoneNumberType::FixedLineOrMobile));
    assert!(!gb.contains(&PhoneNumberType::Unknown));
    assert_eq!(None, phone_util.get_supported_types_for_region(RegionCode::zz()));

    assert_eq!(
        Some(HashSet::from([PhoneNumberType::TollFree])),
        phone_util.get_supported_types_for_non_geo_entity(800)
    );
    assert_eq!(None, phone_util.get_supported_types_for_non_geo_entity(44));
}

#[test]
fn region_properties() {
    let phone_util = get_phone_util();

    assert!(phone_util.is_nanpa_country(RegionCode::bs()));
    assert!(phone_util.is_nanpa_country(RegionCode::us()));
    assert!(!phone_util.is_nanpa_country(RegionCode::gb()));
    assert!(!phone_util.is_nanpa_country(RegionCode::zz()));

    assert_eq!(Some("0".to_owned()), phone_util.get_ndd_prefix_for_region(RegionCode::gb(), false));
    assert_eq!(Some("8".to_owned()), phone_util.get_ndd_prefix_for_region(RegionCode::ru(), true));
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::it(), false));
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::zz(), false));
}

#[test]
fn international_dialling_and_geography() {
    let phone_util = get_phone_util();

    let us_toll_free = parse(&phone_util, "+1 800 234 5678", RegionCode::us());
    assert!(!phone_util.can_be_internationally_dialled(&us_toll_free));
    let us = parse(&phone_util, "+1 650 253 0000", RegionCode::us());
    assert!(phone_util.can_be_internationally_dialled(&us));

    assert!(phone_util.is_number_geographical(&us));
    let gb_mobile = parse(&phone_util, "+44 7400 123456", RegionCode::gb());
    assert!(!phone_util.is_number_geographical(&gb_mobile));
    // Mobile numbers are tied to an area in a few countries.
    let br_mobile = parse(&phone_util, "+55 11 96123 4567", RegionCode::br());
    assert!(phone_util.is_number_geographical(&br_mobile));
}

#[test]
fn normalizes_strings() {
    let phone_util = get_phone_util();

    assert_eq!("03456234", phone_util.normalize_digits_only("034-56&+a#234"));
    assert_eq!("123", phone_util.normalize_digits_only("\u{FF11}\u{FF12}\u{FF13}"));
    assert_eq!("03*456+234", phone_util.normalize_diallable_chars_only("03*4-56&+a234"));
    assert_eq!("1800-222-333", phone_util.convert_alpha_characters_in_number("1800-ABC-DEF"));

    assert!(phone_util.is_alpha_number("1800 six-flags"));
    assert!(phone_util.is_alpha_number("1800 six-flags ext. 1234"));
    assert!(!phone_util.is_alpha_number("1800 123-1234"));
}

#[test]
fn matches_numbers() {
    let phone_util = get_phone_util();
    let nz = parse(&phone_util, "+64 3 331 6005", RegionCode::nz());

    assert_eq!(MatchType::ExactMatch, phone_util.is_number_match(&nz, &nz.clone()));
    let same = parse(&phone_util, "03 331 6005", RegionCode::nz());
    assert_eq!(MatchType::ExactMatch, phone_util.is_number_match(&nz, &same));

    let with_extension = parse(&phone_util, "+64 3 331 6005 ext. 1234", RegionCode::nz());
    assert_eq!(MatchType::ShortNsnMatch, phone_util.is_number_match(&nz, &with_extension));
    let other_extension = parse(&phone_util, "+64 3 331 6005 ext. 4567", RegionCode::nz());
    assert_eq!(MatchType::NoMatch, phone_util.is_number_match(&with_extension, &other_extension));

    let other_country = parse(&phone_util, "+1 331 6005", RegionCode::us());
    assert_eq!(MatchType::NoMatch, phone_util.is_number_match(&nz, &other_country));
    // Two parsed numbers never give NsnMatch: the same digits under another
    // calling code are a different number.
    let same_digits_in_au = parse(&phone_util, "+61 3 331 6005", RegionCode::au());
    assert_eq!(MatchType::NoMatch, phone_util.is_number_match(&nz, &same_digits_in_au));

    // Raw input and the calling code source don't take part.
    let with_raw_input = phone_util
        .parse_and_keep_raw_input("+64 3 331 6005", Some(RegionCode::nz()))
        .unwrap();
    assert_eq!(MatchType::ExactMatch, phone_util.is_number_match(&nz, &with_raw_input));
}

#[test]
fn matches_numbers_against_strings() {
    let phone_util = get_phone_util();
    let nz = parse(&phone_util, "+64 3 331 6005", RegionCode::nz());

    assert_eq!(Ok(MatchType::ExactMatch), phone_util.is_number_match_with_one_string(&nz, "+64 3 331 6005"));
    // Read in the region of the first number, so no exact match is possible.
    assert_eq!(Ok(MatchType::NsnMatch), phone_util.is_number_match_with_one_string(&nz, "03 331 6005"));
    assert_eq!(
        Ok(MatchType::ShortNsnMatch),
        phone_util.is_number_match_with_one_string(&nz, "+64 3 331 6005 ext. 1234")
    );
    assert_eq!(
        Ok(MatchType::NoMatch),
        phone_util.is_number_match_with_one_string(&nz, "+44 20 7031 3000")
    );
    assert_eq!(
        ParseErrorType::NotANumber,
        phone_util.is_number_match_with_one_string(&nz, "not a number").unwrap_err().kind()
    );
}

#[test]
fn phone_numbers_serialize_as_e164() {
    let number = PHONE_NUMBER_UTIL.parse("+44 20 7031 3000", None).unwrap();
    assert_eq!("+442070313000", number.to_string());

    let json = serde_json::to_string(&number).unwrap();
    assert_eq!("\"+442070313000\"", json);
    let deserialized: PhoneNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(number, deserialized);

    assert!(serde_json::from_str::<PhoneNumber>("\"not a number\"").is_err());
    assert_eq!(Ok(number), "+44 20 7031 3000".parse::<PhoneNumber>());
}

#[test]
fn all_zero_numbers_format_from_their_digits() {
    let phone_util = get_phone_util();

    let number = phone_util.parse_and_keep_raw_input("+800-0000-0000", None).unwrap();
    assert_eq!(0, number.national_number());
    assert_eq!("00000000", phone_util.get_national_significant_number(&number));
    assert_eq!("+80000000000", phone_util.format(&number, PhoneNumberFormat::E164));
    assert_eq!("+800 0000 0000", phone_util.format(&number, PhoneNumberFormat::International));
    assert_eq!("0000 0000", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!("tel:+800-0000-0000", phone_util.format(&number, PhoneNumberFormat::RFC3966));
    assert_eq!("+80000000000", number.to_string());
}

#[test]
fn shared_instance_is_usable_across_threads() {
    let inputs = ["+1 650 253 0000", "+44 20 7031 3000", "+49 30 123456", "+800 1234 5678"];
    std::thread::scope(|scope| {
        let handles = inputs
            .iter()
            .map(|input| {
                scope.spawn(move || {
                    let number = PHONE_NUMBER_UTIL.parse(input, None).unwrap();
                    PHONE_NUMBER_UTIL.format(&number, PhoneNumberFormat::E164).into_owned()
                })
            })
            .collect::<Vec<_>>();
        let formatted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            vec!["+16502530000", "+442070313000", "+4930123456", "+80012345678"],
            formatted
        );
    });
}

#[test]
fn loads_alternative_datasets() {
    let text = r#"
        metadata {
          id: "GB"
          country_code: 44
          international_prefix: "00"
          national_prefix: "0"
          general_desc { national_number_pattern: "\\d{10}" possible_length: 10 }
          fixed_line { national_number_pattern: "\\d{10}" possible_length: 10 example_number: "2012345678" }
        }
    "#;
    let phone_util = PhoneNumberUtil::from_metadata_text(text).unwrap();
    assert_eq!(vec![RegionCode::gb()], phone_util.get_supported_regions().collect::<Vec<_>>());

    let number = phone_util.parse("020 1234 5678", Some(RegionCode::gb())).unwrap();
    assert_eq!(2012345678, number.national_number());
    assert!(phone_util.is_valid_number(&number));
    // No formats: the digits are kept as they are.
    assert_eq!("2012345678", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(Err(ParseError::InvalidCountryCode), phone_util.parse("+1 650 253 0000", None));

    assert!(PhoneNumberUtil::from_metadata_text("metadata {").is_err());
}
