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

use regex::{Captures, Match, Regex};

/// Start-anchored matching over patterns that were compiled without an
/// anchor. Matching is leftmost-first, so a match found at position zero is
/// the one the pattern prefers there.
pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;

    /// Returns the rest of `s` after the match at its start.
    fn consume_start<'a>(&self, s: &'a str) -> Option<&'a str> {
        self.find_start(s).map(|found| &s[found.end()..])
    }
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 {
            return None
        }

        Some(captures)
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}
