// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Saved perfection entropies.
//!
//! An [`EntropyStore`] is one append-only record file in one of two
//! layouts:
//!
//! - [`RecordFormat::Dictionary`]: `{"n": [{"entropy": …, "partition": […]}, …]}`
//!   per line, every computed `n` present even when it has no perfection
//! - [`RecordFormat::List`]: `n, entropy` per perfection
//!
//! Choosing a file name when one already exists is a pure decision made by
//! [`resolve_save_path`]; the store only carries it out.

pub mod records;
pub mod target;

pub use records::{append_dictionary, append_list, load_dictionary, load_list};
pub use target::{file_name, resolve_save_path, ConflictPolicy, RecordFormat, SaveTarget};

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::entropy::EntropyRecord;
use crate::error::PersistError;

/// One record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyStore {
    path: PathBuf,
    format: RecordFormat,
}

impl EntropyStore {
    /// Open `<dir>/<stem>.<ext>` as is, appending to any existing records.
    pub fn open(dir: &Path, stem: &str, format: RecordFormat) -> Self {
        Self {
            path: dir.join(file_name(stem, format)),
            format,
        }
    }

    /// Start a new record file, resolving a name clash with `policy`.
    pub fn prepare(
        dir: &Path,
        stem: &str,
        format: RecordFormat,
        policy: ConflictPolicy,
    ) -> Result<Self, PersistError> {
        fs::create_dir_all(dir).map_err(|source| PersistError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let target = resolve_save_path(dir, stem, format, policy, Path::exists)?;
        if let SaveTarget::Overwrite(path) = &target {
            fs::remove_file(path).map_err(|source| PersistError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "replacing record file");
        }
        Ok(Self {
            path: target.path().to_path_buf(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Append the records computed for `n`.
    pub fn append(&self, n: u64, records: &[EntropyRecord]) -> Result<(), PersistError> {
        match self.format {
            RecordFormat::Dictionary => append_dictionary(&self.path, n, records),
            RecordFormat::List => records
                .iter()
                .try_for_each(|record| append_list(&self.path, n, record.entropy)),
        }
    }

    /// All records of a dictionary file, keyed by `n`.
    pub fn load_dictionary(&self) -> Result<BTreeMap<u64, Vec<EntropyRecord>>, PersistError> {
        load_dictionary(&self.path)
    }

    /// All `(n, entropy)` pairs, in file order.
    pub fn load_list(&self) -> Result<Vec<(u64, f64)>, PersistError> {
        match self.format {
            RecordFormat::List => load_list(&self.path),
            RecordFormat::Dictionary => Ok(self
                .load_dictionary()?
                .into_iter()
                .flat_map(|(n, records)| records.into_iter().map(move |r| (n, r.entropy)))
                .collect()),
        }
    }

    /// Every `n` already present.
    pub fn keys(&self) -> Result<BTreeSet<u64>, PersistError> {
        Ok(match self.format {
            RecordFormat::Dictionary => self.load_dictionary()?.into_keys().collect(),
            RecordFormat::List => self.load_list()?.into_iter().map(|(n, _)| n).collect(),
        })
    }
}
