// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Perfection search engine.
//!
//! The engine tests divisor subsets of `n`, produced by
//! [`SubsetEnumerator`], and keeps those summing to `n`. It works in two
//! modes:
//!
//! 1. **optimise**: stop as soon as `stop` perfections have been found
//! 2. **exhaustive**: examine every candidate
//!
//! The search is a lazy iterator: the early stop is just the consumer
//! ceasing to pull, no cancellation is involved.
//!
//! # Example
//!
//! ```
//! use pseudoperfect_entropy::engine::{PerfectionSearch, SearchOptions};
//!
//! let divisors = [1, 2, 3, 4, 6];
//! let found = PerfectionSearch::new(12, &divisors, 3).run(&SearchOptions::default());
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].parts(), &[2, 4, 6]);
//! assert_eq!(found[1].parts(), &[1, 2, 3, 6]);
//! ```

pub mod subsets;

pub use subsets::{minimum_subset_size, SubsetEnumerator};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of perfections kept in optimise mode.
pub const DEFAULT_STOP: usize = 5;

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Stop after `stop` perfections.
    pub optimise: bool,
    /// Perfection limit used when `optimise` is set.
    pub stop: usize,
    /// Raise the minimum subset size for primitive pseudoperfect numbers.
    pub floor: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            optimise: true,
            stop: DEFAULT_STOP,
            floor: true,
        }
    }
}

impl SearchOptions {
    /// Exhaustive search with the primitive floor enabled.
    pub fn exhaustive() -> Self {
        Self {
            optimise: false,
            ..Self::default()
        }
    }
}

/// A set of proper divisors of `n` summing to `n`, in divisor order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition(Vec<u64>);

impl Partition {
    pub fn new(parts: Vec<u64>) -> Self {
        Partition(parts)
    }

    pub fn parts(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> u128 {
        crate::numbers::divisor_sum(&self.0)
    }

    pub fn into_parts(self) -> Vec<u64> {
        self.0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, ")")
    }
}

/// Lazy search for the perfections of one number.
///
/// Iterating yields matching partitions in discovery order.
#[derive(Debug, Clone)]
pub struct PerfectionSearch<'a> {
    target: u128,
    subsets: SubsetEnumerator<'a>,
    /// Statistics: number of candidate subsets tested.
    examined: u64,
    /// Statistics: number of perfections produced.
    found: u64,
}

impl<'a> PerfectionSearch<'a> {
    /// Search `divisors` (the proper divisors of `target`) for subsets of at
    /// least `min_size` parts.
    pub fn new(target: u64, divisors: &'a [u64], min_size: usize) -> Self {
        Self {
            target: u128::from(target),
            subsets: SubsetEnumerator::new(divisors, min_size),
            examined: 0,
            found: 0,
        }
    }

    /// Collect perfections according to `options`.
    ///
    /// `options.floor` is not consulted here; it only affects the
    /// `min_size` the search was built with.
    pub fn run(&mut self, options: &SearchOptions) -> Vec<Partition> {
        if options.optimise {
            self.by_ref().take(options.stop).collect()
        } else {
            self.by_ref().collect()
        }
    }

    /// Whether candidates remain untested.
    pub fn is_exhausted(&self) -> bool {
        self.subsets.clone().next_indices().is_none()
    }

    /// Get statistics about the search.
    ///
    /// Returns (examined, found): candidate subsets tested and perfections
    /// produced so far.
    pub fn statistics(&self) -> (u64, u64) {
        (self.examined, self.found)
    }
}

impl Iterator for PerfectionSearch<'_> {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let divisors = self.subsets.divisors();
        while let Some(indices) = self.subsets.next_indices() {
            self.examined += 1;
            let sum: u128 = indices.iter().map(|&i| u128::from(divisors[i])).sum();
            if sum == self.target {
                self.found += 1;
                return Some(Partition(indices.iter().map(|&i| divisors[i]).collect()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIVISORS_24: [u64; 7] = [1, 2, 3, 4, 6, 8, 12];
    const DIVISORS_60: [u64; 11] = [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30];

    #[test]
    fn test_optimise_stops_early() {
        let mut search = PerfectionSearch::new(60, &DIVISORS_60, 3);
        let found = search.run(&SearchOptions::default());
        assert_eq!(found.len(), 5);
        assert_eq!(found[0].parts(), &[10, 20, 30]);
        assert_eq!(found[1].parts(), &[3, 12, 15, 30]);
        assert!(!search.is_exhausted());
        assert_eq!(search.statistics().1, 5);
    }

    #[test]
    fn test_exhaustive() {
        let mut search = PerfectionSearch::new(60, &DIVISORS_60, 3);
        let found = search.run(&SearchOptions::exhaustive());
        assert_eq!(found.len(), 34);
        assert!(search.is_exhausted());
        assert!(found.iter().all(|p| p.sum() == 60));
    }

    #[test]
    fn test_optimise_is_prefix_of_exhaustive() {
        let quick = PerfectionSearch::new(24, &DIVISORS_24, 3).run(&SearchOptions {
            stop: 3,
            ..SearchOptions::default()
        });
        let all = PerfectionSearch::new(24, &DIVISORS_24, 3).run(&SearchOptions::exhaustive());
        assert_eq!(quick.len(), 3);
        assert_eq!(&all[..3], &quick[..]);
    }

    #[test]
    fn test_no_match() {
        // 70 is weird: abundant but not pseudoperfect
        let divisors = [1, 2, 5, 7, 10, 14, 35];
        let mut search = PerfectionSearch::new(70, &divisors, 3);
        assert!(search.run(&SearchOptions::exhaustive()).is_empty());
        // C(7,3) + C(7,4) + C(7,5) + C(7,6)
        assert_eq!(search.statistics(), (35 + 35 + 21 + 7, 0));
    }

    #[test]
    fn test_partition_display() {
        assert_eq!(Partition::new(vec![1, 2, 3]).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_options_serde_defaults() {
        let options: SearchOptions = serde_json::from_str(r#"{"optimise": false}"#).unwrap();
        assert_eq!(options, SearchOptions::exhaustive());
    }
}
