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

use crate::{interfaces, metadata::NumberDesc};

/// Matches national numbers against the patterns compiled into the metadata
/// when it was loaded.
pub struct RegexBasedMatcher;

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self, number: &str,
        number_desc: &NumberDesc,
        allow_prefix_match: bool
    ) -> bool {
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        let Some(national_number_pattern) = number_desc.national_number_pattern() else {
            trace!("No national number pattern to match '{number}' against");
            return false;
        };
        if allow_prefix_match {
            number_desc.prefix_pattern().is_some_and(|regex| regex.is_match(number))
        } else {
            national_number_pattern.is_match(number)
        }
    }
}
