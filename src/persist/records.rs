// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line-oriented record files.
//!
//! Every record is written as one complete, newline-terminated line and
//! appended, so an interrupted run leaves at most one damaged line at the
//! end. A final line without its newline counts as damaged even when it
//! parses. Loading stops at the first damaged line and reports the last key
//! read before it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::error::PersistError;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> PersistError + '_ {
    move |source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn append_line(path: &Path, line: &str) -> Result<(), PersistError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error(path))?;
    writeln!(file, "{}", line).map_err(io_error(path))
}

/// Contents of `path`, `None` if it does not exist.
fn read_existing(path: &Path) -> Result<Option<String>, PersistError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no saved records");
            Ok(None)
        }
        Err(err) => Err(io_error(path)(err)),
    }
}

/// Non-blank lines with their 1-based numbers. `None` marks a line cut off
/// before its newline.
fn record_lines(contents: &str) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
    contents
        .split_inclusive('\n')
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(index, raw)| (index + 1, raw.strip_suffix('\n')))
}

/// Append `{"key": value}` as one JSON line.
pub fn append_dictionary<V: Serialize + ?Sized>(path: &Path, key: u64, value: &V) -> Result<(), PersistError> {
    let mut entry = BTreeMap::new();
    entry.insert(key.to_string(), value);
    let line = serde_json::to_string(&entry)?;
    append_line(path, &line)
}

/// Read every JSON line of `path` into one map. A missing file is empty.
pub fn load_dictionary<V: DeserializeOwned>(path: &Path) -> Result<BTreeMap<u64, V>, PersistError> {
    let mut dictionary = BTreeMap::new();
    let Some(contents) = read_existing(path)? else {
        return Ok(dictionary);
    };

    let mut last_good: Option<String> = None;
    for (number, line) in record_lines(&contents) {
        let corrupt = |last_good: &Option<String>| PersistError::Corrupt {
            path: path.to_path_buf(),
            line: number,
            last_good: last_good.clone(),
        };

        let line = line.ok_or_else(|| corrupt(&last_good))?;
        let entries: BTreeMap<String, V> =
            serde_json::from_str(line).map_err(|_| corrupt(&last_good))?;
        for (key, value) in entries {
            let n = key.parse::<u64>().map_err(|_| corrupt(&last_good))?;
            dictionary.insert(n, value);
            last_good = Some(key);
        }
    }
    Ok(dictionary)
}

/// Append `n, entropy` as one text line.
pub fn append_list(path: &Path, n: u64, entropy: f64) -> Result<(), PersistError> {
    append_line(path, &format!("{}, {}", n, entropy))
}

/// Read every `n, entropy` line of `path`. A missing file is empty.
pub fn load_list(path: &Path) -> Result<Vec<(u64, f64)>, PersistError> {
    let mut records = Vec::new();
    let Some(contents) = read_existing(path)? else {
        return Ok(records);
    };

    for (number, line) in record_lines(&contents) {
        let parsed = line.and_then(|line| line.split_once(',')).and_then(|(n, entropy)| {
            Some((n.trim().parse::<u64>().ok()?, entropy.trim().parse::<f64>().ok()?))
        });
        match parsed {
            Some(record) => records.push(record),
            None => {
                return Err(PersistError::Corrupt {
                    path: path.to_path_buf(),
                    line: number,
                    last_good: records.last().map(|(n, _)| n.to_string()),
                })
            }
        }
    }
    Ok(records)
}
