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

pub(crate) mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
mod helper_types;
mod parsing;
mod formatting;
mod comparisons;

use std::sync::LazyLock;

use log::error;

use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Instance over the dataset embedded in the crate, loaded on first use.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    match PhoneNumberUtil::try_new() {
        Ok(util) => util,
        Err(err) => {
            error!("Embedded numbering-plan dataset failed to load: {err}");
            panic!("embedded numbering-plan dataset is invalid: {err}")
        }
    }
});
