// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Benchmark input files: whitespace-separated integer lists.
//!
//! Format: integers separated by any whitespace, `#` starts a comment
//! that runs to the end of the line. Values must fit a signed 32-bit
//! integer; anything else is rejected with the offending file and line.

use std::fs;
use std::path::Path;

use crate::error::{ReedError, ReedResult};
use crate::store::Key;

/// Load all keys from an integer list file.
///
/// ## Input
/// - `path`: File of whitespace-separated integers with `#` comments
///
/// ## Output
/// - `Ok(Vec<Key>)`: Keys in file order (duplicates preserved; the tree
///   ignores them on insert)
/// - `Err(ReedError::IoError)`: File unreadable
/// - `Err(ReedError::InvalidInput)`: Token not an integer or outside the
///   signed 32-bit range
///
/// ## Example
/// ```rust
/// use std::io::Write;
///
/// let mut file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(file, "1 2 3   # a comment").unwrap();
/// writeln!(file, "# full-line comment").unwrap();
/// writeln!(file, "-4\t5").unwrap();
///
/// let keys = reedset::dataset::load_keys(file.path()).unwrap();
/// assert_eq!(keys, vec![1, 2, 3, -4, 5]);
/// ```
pub fn load_keys<P: AsRef<Path>>(path: P) -> ReedResult<Vec<Key>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ReedError::IoError {
        operation: format!("read '{}'", path.display()),
        reason: e.to_string(),
    })?;

    let mut keys = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        let data = match line.find('#') {
            Some(at) => &line[..at],
            None => line,
        };
        for token in data.split_whitespace() {
            let key: Key = token.parse().map_err(|_| ReedError::InvalidInput {
                file: path.display().to_string(),
                line: line_index + 1,
                reason: format!(
                    "value '{}' is not an integer in signed 32-bit range",
                    token
                ),
            })?;
            keys.push(key);
        }
    }
    Ok(keys)
}
