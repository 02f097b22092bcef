// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The five precomputed integer sequences and their on-disk format.
//!
//! Each sequence is a single line of comma-space separated integers:
//!
//! ```text
//! 6, 20, 28, 88, 104, 272, ...
//! ```

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use super::constants::{MAX_PRIMITIVE, MAX_PSEUDO};
use crate::error::LookupError;

/// A precomputed sequence backed by a file in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Sequence {
    #[strum(serialize = "primitive pseudoperfect")]
    PrimitivePseudoperfect,
    #[strum(serialize = "pseudoperfect")]
    Pseudoperfect,
    #[strum(serialize = "practical")]
    Practical,
    #[strum(serialize = "primitive practical")]
    PrimitivePractical,
    #[strum(serialize = "primitive practical (x)")]
    PrimitivePracticalX,
}

impl Sequence {
    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Sequence::PrimitivePseudoperfect => "primitive_pseudoperfect_list.txt",
            Sequence::Pseudoperfect => "pseudoperfect_list.txt",
            Sequence::Practical => "practical_list.txt",
            Sequence::PrimitivePractical => "primitive_practical_list.txt",
            Sequence::PrimitivePracticalX => "primitive_practical_x_list.txt",
        }
    }

    /// Published maximum of the table, where one is documented.
    pub fn documented_max(self) -> Option<u64> {
        match self {
            Sequence::PrimitivePseudoperfect => Some(MAX_PRIMITIVE),
            Sequence::Pseudoperfect => Some(MAX_PSEUDO),
            _ => None,
        }
    }
}

/// Parse the contents of a sequence file.
///
/// The result is non-empty and strictly ascending.
pub fn parse_sequence(sequence: Sequence, contents: &str) -> Result<Vec<u64>, LookupError> {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Err(LookupError::InvalidTable {
            sequence,
            reason: "table is empty".to_string(),
        });
    }

    let values = trimmed
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<u64>().map_err(|_| LookupError::InvalidTable {
                sequence,
                reason: format!("unparsable value {:?}", token),
            })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    if let Some(pos) = values.windows(2).position(|w| w[0] >= w[1]) {
        return Err(LookupError::InvalidTable {
            sequence,
            reason: format!(
                "values not ascending at position {} ({} then {})",
                pos,
                values[pos],
                values[pos + 1]
            ),
        });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_parse_sequence() {
        let values = parse_sequence(Sequence::Pseudoperfect, "6, 12, 18, 20\n").unwrap();
        assert_eq!(values, vec![6, 12, 18, 20]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_sequence(Sequence::Pseudoperfect, "6, 12, x").unwrap_err();
        assert!(matches!(err, LookupError::InvalidTable { .. }));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_sequence(Sequence::Practical, "  \n").is_err());
    }

    #[test]
    fn test_parse_rejects_unsorted() {
        let err = parse_sequence(Sequence::Practical, "1, 2, 6, 4").unwrap_err();
        assert!(err.to_string().contains("not ascending"));
    }

    #[test]
    fn test_file_names_distinct() {
        let names: std::collections::HashSet<_> =
            Sequence::iter().map(Sequence::file_name).collect();
        assert_eq!(names.len(), Sequence::COUNT);
    }
}
