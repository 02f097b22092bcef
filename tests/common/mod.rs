// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use pseudoperfect_entropy::{SearchContext, Sequence, SequenceTables};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Primitive pseudoperfect numbers up to 1000.
pub const PRIMITIVE_PSEUDOPERFECTS: &str =
    "6, 20, 28, 88, 104, 272, 304, 350, 368, 464, 490, 496, 550, 572, 650, 748, 770, 910, 945";

/// Pseudoperfect numbers up to 200.
pub const PSEUDOPERFECTS: &str = "6, 12, 18, 20, 24, 28, 30, 36, 40, 42, 48, 54, 56, 60, 66, 72, \
    78, 80, 84, 88, 90, 96, 100, 102, 104, 108, 112, 114, 120, 126, 132, 138, 140, 144, 150, 156, \
    160, 162, 168, 174, 176, 180, 186, 192, 196, 198, 200";

/// Practical numbers up to 200.
pub const PRACTICALS: &str = "1, 2, 4, 6, 8, 12, 16, 18, 20, 24, 28, 30, 32, 36, 40, 42, 48, 54, \
    56, 60, 64, 66, 72, 78, 80, 84, 88, 90, 96, 100, 104, 108, 112, 120, 126, 128, 132, 140, 144, \
    150, 156, 160, 162, 168, 176, 180, 192, 196, 198, 200";

/// A data directory holding small lookup tables.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write(Sequence::PrimitivePseudoperfect, PRIMITIVE_PSEUDOPERFECTS);
        fixture.write(Sequence::Pseudoperfect, PSEUDOPERFECTS);
        fixture.write(Sequence::Practical, PRACTICALS);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, sequence: Sequence, contents: &str) {
        fs::write(self.path().join(sequence.file_name()), contents).unwrap();
    }

    pub fn memo(&self) -> Arc<SequenceTables> {
        Arc::new(SequenceTables::new(self.path()))
    }

    pub fn context(&self) -> SearchContext {
        SearchContext::new(self.path())
    }
}
