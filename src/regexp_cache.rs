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

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] pub regex::Error);

/// How a metadata pattern is anchored when it gets compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// The pattern has to cover the whole input.
    Full,
    /// The pattern has to match at the start of the input.
    Start,
}

/// Interner of compiled patterns.
///
/// Metadata repeats a lot of patterns (`\d{8}`, the same IDD for every NANPA
/// region and so on), so every pattern is compiled once and shared through an
/// `Arc`.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                Regex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    /// Compiles `pattern` wrapped in anchors. The wrapping group is not
    /// capturing, so `$1`-style group references keep their meaning.
    pub fn get_anchored(&self, pattern: &str, anchoring: Anchoring) -> Result<Arc<Regex>, InvalidRegexError> {
        let anchored = match anchoring {
            Anchoring::Full => format!("^(?:{})$", pattern),
            Anchoring::Start => format!("^(?:{})", pattern),
        };
        self.get_regex(&anchored)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
