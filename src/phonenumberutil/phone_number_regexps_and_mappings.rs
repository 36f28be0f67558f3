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

use std::collections::HashMap;

use regex::Regex;

use crate::phonenumberutil::{
    helper_constants::{
        DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS, PLUS_SIGN, RFC3966_VISUAL_SEPARATOR,
        SECOND_NUMBER_START, STAR_SIGN, VALID_ALPHA, VALID_ALPHA_INCL_UPPERCASE, VALID_PUNCTUATION,
    },
    helper_functions::create_extn_pattern,
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// A map that contains characters that are essential when dialling. That means
    /// any of the characters in this map must not be removed from a number when
    /// dialing, otherwise the call will not reach the intended destination.
    pub diallable_char_mappings: HashMap<char, char>,
    /// These mappings map a character (key) to a specific digit that should
    /// replace it for normalization purposes.
    pub alpha_mappings: HashMap<char, char>,
    /// For performance reasons, store a map of combining alpha_mappings with ASCII
    /// digits.
    pub alpha_phone_mappings: HashMap<char, char>,

    /// Separate map of all symbols that we wish to retain when formatting alpha
    /// numbers. This includes digits, ascii letters and number grouping symbols
    /// such as "-" and " ".
    pub all_plus_number_grouping_symbols: HashMap<char, char>,

    /// Pattern that makes it easy to distinguish whether a region has a single
    /// international dialing prefix or not. If a region has a single international
    /// prefix (e.g. 011 in USA), it will be represented as a string that contains
    /// a sequence of ASCII digits, and possibly a tilde, which signals waiting for
    /// the tone. If there are multiple available international prefixes in a
    /// region, they will be represented as a regex string that always contains one
    /// or more characters that are not ASCII digits or a tilde.
    pub single_international_prefix: Regex,

    pub capturing_digit_pattern: Regex,

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This consists
    /// of digits and the plus symbol. This does not contain alpha characters,
    /// although they may be used later in the number. It also does not include
    /// other punctuation, as this will be stripped later during parsing and is of
    /// no information value when parsing a number.
    pub valid_start_char_pattern: Regex,

    /// Marker that might indicate a second number, see `SECOND_NUMBER_START`.
    pub second_number_start_pattern: Regex,

    /// Regular expression of trailing characters that we want to remove. We remove
    /// all characters that are not alpha or numerical characters. The hash
    /// character is retained here, as it may signify the previous block was an
    /// extension.
    pub unwanted_end_char_pattern: Regex,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// Regexp of all known extension prefixes used by different regions followed
    /// by 1 or more valid digits, for use when parsing. Runs case-insensitively
    /// and is anchored at the end of the number.
    pub extn_pattern: Regex,

    /// Regular expression of viable phone numbers. This is location independent.
    /// Checks we have at least three leading digits, and only valid punctuation,
    /// alpha characters and digits in the phone number. The symbol 'x' is allowed
    /// here as valid punctuation since it is often used as a placeholder for
    /// carrier codes, for example in Brazilian phone numbers. We also allow
    /// multiple plus-signs at the start. An extension may follow.
    ///
    /// Corresponds to the following:
    /// `[digits]{minLengthNsn}|
    /// plus_sign*(([punctuation]|[star])*[digits]){3,}
    /// ([punctuation]|[star]|[digits]|[alpha])*`
    ///
    /// The first alternative allows short numbers (two digits long) to be parsed
    /// if they are entered as "15" etc, but only if there is no punctuation in
    /// them.
    pub valid_phone_number_pattern: Regex,

    /// We use this pattern to check if the phone number has at least three letters
    /// in it - if so, then we treat it as a number where some phone-number digits
    /// are represented by letters.
    pub valid_alpha_phone_pattern: Regex,

    /// The first_group_capturing_pattern was originally set to $1 but there
    /// are some countries for which the first group is not used in the
    /// national pattern (e.g. Argentina) so the $1 group does not match
    /// correctly. Therefore, we use \d, so that the first group actually
    /// used in the pattern will be matched.
    pub first_group_capturing_pattern: Regex,

    pub carrier_code_pattern: Regex,

    pub plus_chars_pattern: Regex,

    /// Regular expression of valid global-number-digits for the phone-context
    /// parameter, following the syntax defined in RFC3966.
    pub rfc3966_global_number_digits_pattern: Regex,

    /// Regular expression of valid domainname for the phone-context parameter,
    /// following the syntax defined in RFC3966.
    pub rfc3966_domainname_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        // Simple ASCII digits map used to populate ALPHA_PHONE_MAPPINGS and
        // ALL_PLUS_NUMBER_GROUPING_SYMBOLS.
        let ascii_digit_mappings: HashMap<char, char> = ('0'..='9').map(|d| (d, d)).collect();

        // Keypad letters, uppercase only. Lookups uppercase the character first.
        self.alpha_mappings = [
            ("ABC", '2'), ("DEF", '3'), ("GHI", '4'), ("JKL", '5'),
            ("MNO", '6'), ("PQRS", '7'), ("TUV", '8'), ("WXYZ", '9'),
        ]
        .into_iter()
        .flat_map(|(letters, digit)| letters.chars().map(move |letter| (letter, digit)))
        .collect();

        let mut combined_map = HashMap::with_capacity(40);
        combined_map.extend(self.alpha_mappings.iter());
        combined_map.extend(ascii_digit_mappings.iter());
        self.alpha_phone_mappings = combined_map;

        let mut diallable_char_map = HashMap::new();
        diallable_char_map.extend(ascii_digit_mappings.iter());
        diallable_char_map.insert('+', '+');
        diallable_char_map.insert('*', '*');
        diallable_char_map.insert('#', '#');
        self.diallable_char_mappings = diallable_char_map;

        let mut all_plus_number_groupings = HashMap::new();
        // insert (lower letter -> upper letter) and (upper letter -> upper letter) mappings.
        for c in self.alpha_mappings.keys() {
            all_plus_number_groupings.insert(c.to_ascii_lowercase(), *c);
            all_plus_number_groupings.insert(*c, *c);
        }
        all_plus_number_groupings.extend(ascii_digit_mappings.iter());
        // insert grouping symbols.
        for dash in ['-', '\u{FF0D}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}'] {
            all_plus_number_groupings.insert(dash, '-');
        }
        all_plus_number_groupings.insert('/', '/');
        all_plus_number_groupings.insert('\u{FF0F}', '/');
        all_plus_number_groupings.insert(' ', ' ');
        all_plus_number_groupings.insert('\u{3000}', ' ');
        all_plus_number_groupings.insert('\u{2060}', ' ');
        all_plus_number_groupings.insert('.', '.');
        all_plus_number_groupings.insert('\u{FF0E}', '.');
        self.all_plus_number_grouping_symbols = all_plus_number_groupings;
    }

    pub fn new() -> Self {
        // it'll be initialized only once, so we can use slow format!
        let alphanum = format!("{}{}", VALID_ALPHA_INCL_UPPERCASE, DIGITS);
        let extn_patterns_for_parsing = create_extn_pattern(true);
        let valid_phone_number = format!(
            // the 2-digits alternative goes last so the full number is tried first
            "[{}]*(?:[{}{}]*{}){{3,}}[{}{}{}{}]*|{}{{{}}}",
            PLUS_CHARS,
            VALID_PUNCTUATION, STAR_SIGN, DIGITS,
            VALID_PUNCTUATION, STAR_SIGN, DIGITS, VALID_ALPHA,
            DIGITS, MIN_LENGTH_FOR_NSN,
        );

        let rfc3966_phone_digit = format!("(?:{}|{})", DIGITS, RFC3966_VISUAL_SEPARATOR);
        let rfc3966_domainlabel = format!("[{}]+(?:-*[{}])*", alphanum, alphanum);
        let rfc3966_toplabel = format!("[{}]+(?:-*[{}])*", VALID_ALPHA_INCL_UPPERCASE, alphanum);

        let mut instance = Self {
            diallable_char_mappings: Default::default(),
            alpha_mappings: Default::default(),
            alpha_phone_mappings: Default::default(),
            all_plus_number_grouping_symbols: Default::default(),
            single_international_prefix: Regex::new("^[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?$").unwrap(),
            capturing_digit_pattern: Regex::new(&format!("({})", DIGITS)).unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS)).unwrap(),
            second_number_start_pattern: Regex::new(SECOND_NUMBER_START).unwrap(),
            unwanted_end_char_pattern: Regex::new("[^\\p{N}\\p{L}#]+$").unwrap(),
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", &extn_patterns_for_parsing)).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!("(?i)^(?:{})(?:{})?$",
                &valid_phone_number,
                &extn_patterns_for_parsing
            )).unwrap(),
            valid_alpha_phone_pattern: Regex::new("(?:.*?[A-Za-z]){3}.*").unwrap(),
            first_group_capturing_pattern: Regex::new("(\\$\\d)").unwrap(),
            carrier_code_pattern: Regex::new("\\$CC").unwrap(),
            plus_chars_pattern: Regex::new(&format!("[{}]+", PLUS_CHARS)).unwrap(),
            rfc3966_global_number_digits_pattern: Regex::new(
                &format!("^\\{}{}*{}{}*$", PLUS_SIGN, &rfc3966_phone_digit, DIGITS, rfc3966_phone_digit)
            ).unwrap(),
            rfc3966_domainname_pattern: Regex::new(
                &format!("^(?:{}\\.)*{}\\.?$", rfc3966_domainlabel, rfc3966_toplabel)
            ).unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}
