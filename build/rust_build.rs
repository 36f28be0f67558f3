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

//! Generates the metadata schema bindings and checks the embedded prefix
//! tables, so a malformed table fails the build instead of the first lookup.

use std::{collections::BTreeMap, fs::File, io::{BufRead, BufReader}, num::ParseIntError};

use thiserror::Error;

const PREFIX_TABLES: [&str; 3] = [
    "resources/prefixes/geocoding/en.txt",
    "resources/prefixes/carrier/en.txt",
    "resources/prefixes/timezones/map_data.txt",
];

const REGION_NAME_TABLES: [&str; 1] = ["resources/prefixes/geocoding/regions_en.txt"];

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Failed to parse prefix '{prefix}': {source}")]
    PrefixParseError {
        prefix: String,
        #[source]
        source: ParseIntError,
    },

    #[error("'{region}' is not a region code")]
    InvalidRegionCode { region: String },

    #[error("Table {path} is empty")]
    EmptyTable { path: String },
}

/// Reads a `key|value` table into a fresh map, skipping blank lines and `#`
/// comments.
fn parse_table<K: Ord>(
    path: &str,
    parse_key: impl Fn(&str) -> Result<K, BuildError>,
) -> Result<BTreeMap<K, String>, BuildError> {
    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;
    let mut entries = BTreeMap::new();

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }
        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, desc)) = line.split_once('|') {
            if key.is_empty() {
                continue;
            }
            entries.insert(parse_key(key)?, desc.to_string());
        }
    }

    if entries.is_empty() {
        return Err(BuildError::EmptyTable { path: path.to_string() });
    }
    Ok(entries)
}

fn parse_prefix(prefix: &str) -> Result<u64, BuildError> {
    prefix.parse().map_err(|e| BuildError::PrefixParseError {
        prefix: prefix.to_string(),
        source: e,
    })
}

fn parse_region_code(region: &str) -> Result<String, BuildError> {
    if region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(region.to_string())
    } else {
        Err(BuildError::InvalidRegionCode { region: region.to_string() })
    }
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=resources");

    for path in PREFIX_TABLES {
        parse_table(path, parse_prefix)?;
    }
    for path in REGION_NAME_TABLES {
        parse_table(path, parse_region_code)?;
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input("resources/phonemetadata.proto")
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
