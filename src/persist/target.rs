// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Where a new record file goes when the name is already taken.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::PersistError;

/// On-disk record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// One JSON object `{"n": value}` per line, `.json`.
    #[default]
    Dictionary,
    /// One `n, entropy` pair per line, `.txt`.
    List,
}

impl RecordFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RecordFormat::Dictionary => "json",
            RecordFormat::List => "txt",
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Dictionary => write!(f, "dictionary"),
            RecordFormat::List => write!(f, "list"),
        }
    }
}

/// What to do when the record file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing file.
    Overwrite,
    /// Use the first free `<stem>-<k>` name.
    #[default]
    Rename,
    /// Fail with [`PersistError::Aborted`].
    Abort,
}

/// Outcome of [`resolve_save_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    /// Nothing exists at this path.
    Fresh(PathBuf),
    /// An existing file here is to be replaced.
    Overwrite(PathBuf),
}

impl SaveTarget {
    pub fn path(&self) -> &Path {
        match self {
            SaveTarget::Fresh(path) | SaveTarget::Overwrite(path) => path,
        }
    }
}

/// `<stem>.<ext>` for `format`.
pub fn file_name(stem: &str, format: RecordFormat) -> String {
    format!("{}.{}", stem, format.extension())
}

/// Decide where to save `<stem>` in `dir`.
///
/// `exists` is the only filesystem access, so the decision can be tested
/// without touching the disk.
pub fn resolve_save_path<F>(
    dir: &Path,
    stem: &str,
    format: RecordFormat,
    policy: ConflictPolicy,
    exists: F,
) -> Result<SaveTarget, PersistError>
where
    F: Fn(&Path) -> bool,
{
    let path = dir.join(file_name(stem, format));
    if !exists(&path) {
        return Ok(SaveTarget::Fresh(path));
    }
    match policy {
        ConflictPolicy::Overwrite => Ok(SaveTarget::Overwrite(path)),
        ConflictPolicy::Abort => Err(PersistError::Aborted { path }),
        ConflictPolicy::Rename => {
            let mut k = 1u64;
            loop {
                let candidate = dir.join(file_name(&format!("{}-{}", stem, k), format));
                if !exists(&candidate) {
                    return Ok(SaveTarget::Fresh(candidate));
                }
                k += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn taken(names: &[&str]) -> impl Fn(&Path) -> bool {
        let set: HashSet<PathBuf> = names.iter().map(|name| Path::new("data").join(name)).collect();
        move |path: &Path| set.contains(path)
    }

    #[test]
    fn test_free_name_is_fresh() {
        let target = resolve_save_path(
            Path::new("data"),
            "perfection_entropies",
            RecordFormat::Dictionary,
            ConflictPolicy::Abort,
            taken(&[]),
        )
        .unwrap();
        assert_eq!(target, SaveTarget::Fresh(PathBuf::from("data/perfection_entropies.json")));
    }

    #[test]
    fn test_rename_skips_taken_names() {
        let target = resolve_save_path(
            Path::new("data"),
            "entropies",
            RecordFormat::List,
            ConflictPolicy::Rename,
            taken(&["entropies.txt", "entropies-1.txt"]),
        )
        .unwrap();
        assert_eq!(target.path(), Path::new("data/entropies-2.txt"));
    }

    #[test]
    fn test_other_format_does_not_conflict() {
        let target = resolve_save_path(
            Path::new("data"),
            "entropies",
            RecordFormat::Dictionary,
            ConflictPolicy::Abort,
            taken(&["entropies.txt"]),
        )
        .unwrap();
        assert_eq!(target.path(), Path::new("data/entropies.json"));
    }

    #[test]
    fn test_overwrite_and_abort() {
        let exists = taken(&["entropies.json"]);
        let target = resolve_save_path(
            Path::new("data"),
            "entropies",
            RecordFormat::Dictionary,
            ConflictPolicy::Overwrite,
            &exists,
        )
        .unwrap();
        assert_eq!(target, SaveTarget::Overwrite(PathBuf::from("data/entropies.json")));

        let err = resolve_save_path(
            Path::new("data"),
            "entropies",
            RecordFormat::Dictionary,
            ConflictPolicy::Abort,
            &exists,
        )
        .unwrap_err();
        assert!(matches!(err, PersistError::Aborted { .. }));
    }
}
