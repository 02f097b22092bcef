// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Precomputed integer sequences that never change during a search:
//! - Primitive pseudoperfect numbers (bounds the subset enumerator)
//! - Pseudoperfect numbers
//! - Practical numbers and two primitive practical variants
//!
//! Each table is read from the data directory on first use and cached for
//! the lifetime of the [`SequenceTables`] value. A provider is normally
//! created once at startup and shared between search contexts behind an
//! `Arc`.

pub mod constants;
pub mod sequence;

pub use constants::{MAX_MULTIPLY_PERFECT, MAX_PRIMITIVE, MAX_PSEUDO, MULTIPLY_PERFECTS, PERFECTS};
pub use sequence::{parse_sequence, Sequence};

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{info, warn};

use crate::error::LookupError;

/// Lazily loaded lookup tables.
///
/// Loading is idempotent: the first query for a sequence reads its file,
/// later queries reuse the cached values until [`SequenceTables::clear`].
#[derive(Debug)]
pub struct SequenceTables {
    data_dir: PathBuf,
    tables: [OnceCell<Vec<u64>>; Sequence::COUNT],
}

impl SequenceTables {
    /// Create a provider reading from `data_dir`. Nothing is read yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tables: Default::default(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `sequence`.
    pub fn path_of(&self, sequence: Sequence) -> PathBuf {
        self.data_dir.join(sequence.file_name())
    }

    /// Whether `sequence` has been loaded.
    pub fn is_loaded(&self, sequence: Sequence) -> bool {
        self.tables[sequence as usize].get().is_some()
    }

    /// The cached table for `sequence`, loading it on first use.
    pub fn table(&self, sequence: Sequence) -> Result<&[u64], LookupError> {
        self.tables[sequence as usize]
            .get_or_try_init(|| self.load(sequence))
            .map(Vec::as_slice)
    }

    /// Load every sequence.
    pub fn load_all(&self) -> Result<(), LookupError> {
        for sequence in Sequence::iter() {
            self.table(sequence)?;
        }
        Ok(())
    }

    /// Drop every cached table. The next query reloads from disk.
    pub fn clear(&mut self) {
        for cell in self.tables.iter_mut() {
            cell.take();
        }
    }

    /// Largest value of `sequence`.
    pub fn max(&self, sequence: Sequence) -> Result<u64, LookupError> {
        let table = self.table(sequence)?;
        // parse_sequence guarantees a non-empty table
        Ok(table[table.len() - 1])
    }

    /// Membership of `n` in `sequence`.
    ///
    /// The table's last value is an inclusive bound: beyond it the answer is
    /// unknown and [`LookupError::RangeExceeded`] is returned instead of `false`.
    pub fn contains(&self, sequence: Sequence, n: u64) -> Result<bool, LookupError> {
        let table = self.table(sequence)?;
        let max = table[table.len() - 1];
        if n > max {
            return Err(LookupError::RangeExceeded { sequence, n, max });
        }
        Ok(table.binary_search(&n).is_ok())
    }

    pub fn is_primitive(&self, n: u64) -> Result<bool, LookupError> {
        self.contains(Sequence::PrimitivePseudoperfect, n)
    }

    pub fn is_pseudoperfect(&self, n: u64) -> Result<bool, LookupError> {
        self.contains(Sequence::Pseudoperfect, n)
    }

    pub fn is_practical(&self, n: u64) -> Result<bool, LookupError> {
        self.contains(Sequence::Practical, n)
    }

    pub fn is_primitive_practical(&self, n: u64) -> Result<bool, LookupError> {
        self.contains(Sequence::PrimitivePractical, n)
    }

    pub fn is_primitive_practical_x(&self, n: u64) -> Result<bool, LookupError> {
        self.contains(Sequence::PrimitivePracticalX, n)
    }

    fn load(&self, sequence: Sequence) -> Result<Vec<u64>, LookupError> {
        let path = self.path_of(sequence);
        let contents = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LookupError::MissingTable {
                    sequence,
                    path: path.clone(),
                }
            } else {
                LookupError::Io {
                    sequence,
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let values = parse_sequence(sequence, &contents)?;
        let max = values[values.len() - 1];
        info!(
            sequence = %sequence,
            path = %path.display(),
            count = values.len(),
            max,
            "loaded lookup table"
        );

        if let Some(documented) = sequence.documented_max() {
            if documented != max {
                warn!(
                    sequence = %sequence,
                    documented,
                    max,
                    "lookup table maximum differs from the published value"
                );
            }
        }

        Ok(values)
    }
}

/// Whether `n` is in [`PERFECTS`].
pub fn is_known_perfect(n: u64) -> bool {
    PERFECTS.binary_search(&n).is_ok()
}

/// Membership in [`MULTIPLY_PERFECTS`], `None` above its range.
pub fn is_known_multiply_perfect(n: u64) -> Option<bool> {
    if n > MAX_MULTIPLY_PERFECT {
        None
    } else {
        Some(MULTIPLY_PERFECTS.binary_search(&n).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tables_with(sequence: Sequence, contents: &str) -> (TempDir, SequenceTables) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(sequence.file_name()), contents).unwrap();
        let tables = SequenceTables::new(dir.path());
        (dir, tables)
    }

    #[test]
    fn test_lazy_load() {
        let (_dir, tables) = tables_with(Sequence::PrimitivePseudoperfect, "6, 20, 28, 88");
        assert!(!tables.is_loaded(Sequence::PrimitivePseudoperfect));
        assert!(tables.is_primitive(20).unwrap());
        assert!(tables.is_loaded(Sequence::PrimitivePseudoperfect));
        assert!(!tables.is_loaded(Sequence::Pseudoperfect));
    }

    #[test]
    fn test_cached_after_first_load() {
        let (dir, tables) = tables_with(Sequence::Pseudoperfect, "6, 12, 18");
        assert!(tables.is_pseudoperfect(12).unwrap());

        // Removing the file does not affect the cached table.
        fs::remove_file(dir.path().join(Sequence::Pseudoperfect.file_name())).unwrap();
        assert!(tables.is_pseudoperfect(18).unwrap());
    }

    #[test]
    fn test_clear_reloads() {
        let (dir, mut tables) = tables_with(Sequence::Pseudoperfect, "6, 12, 18");
        assert!(tables.is_pseudoperfect(20).is_err());

        fs::write(dir.path().join(Sequence::Pseudoperfect.file_name()), "6, 12, 18, 20").unwrap();
        // Still the cached table
        assert!(tables.is_pseudoperfect(20).is_err());
        tables.clear();
        assert!(tables.is_pseudoperfect(20).unwrap());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let (_dir, tables) = tables_with(Sequence::PrimitivePseudoperfect, "6, 20, 28, 88");
        assert!(tables.is_primitive(88).unwrap());
        assert!(!tables.is_primitive(87).unwrap());
        match tables.is_primitive(89) {
            Err(LookupError::RangeExceeded { n, max, .. }) => {
                assert_eq!(n, 89);
                assert_eq!(max, 88);
            }
            other => panic!("expected RangeExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_table_is_error() {
        let dir = TempDir::new().unwrap();
        let tables = SequenceTables::new(dir.path());
        assert!(matches!(
            tables.is_practical(6),
            Err(LookupError::MissingTable {
                sequence: Sequence::Practical,
                ..
            })
        ));
        assert!(!tables.is_loaded(Sequence::Practical));
    }

    #[test]
    fn test_load_all_requires_every_file() {
        let (_dir, tables) = tables_with(Sequence::Practical, "1, 2, 4, 6");
        assert!(tables.load_all().is_err());
    }

    #[test]
    fn test_known_perfect() {
        assert!(is_known_perfect(6));
        assert!(is_known_perfect(8_128));
        assert!(!is_known_perfect(12));
        assert_eq!(is_known_multiply_perfect(120), Some(true));
        assert_eq!(is_known_multiply_perfect(121), Some(false));
        assert_eq!(is_known_multiply_perfect(u64::MAX), None);
    }
}
