// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the finder
//! and the entropy entry points.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum Counters {
    /// Divisor subsets whose sum was tested.
    CandidatesExamined,
    /// Subsets accepted as perfections.
    PerfectionsFound,
    /// Queries answered by the full divisor set of a perfect number.
    PerfectShortcuts,
    /// Deficient numbers rejected without enumeration.
    DeficientShortcuts,
    /// Searches cut short by the `stop` limit.
    EarlyStops,
    /// Primitive lookups beyond the table, answered with the default bound.
    RangeExceeded,
    /// Inputs rejected before searching.
    RejectedInputs,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Increment the specified counter by `amount`.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::PerfectionsFound);
        stats.add(Counters::CandidatesExamined, 10);
        assert_eq!(stats.get(Counters::PerfectionsFound), 1);
        assert_eq!(stats.get(Counters::CandidatesExamined), 10);
        assert_eq!(stats.get(Counters::EarlyStops), 0);

        stats.reset();
        assert_eq!(stats, Statistics::new());
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::EarlyStops);
        let shown = stats.to_string();
        assert!(shown.starts_with("candidates_examined=0"));
        assert!(shown.contains("early_stops=1"));
    }
}
