// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Perfections of pseudoperfect numbers and the entropy of their partitions.
//!
//! A positive integer is *pseudoperfect* when it is the sum of some of its
//! proper divisors; each such divisor subset is a *perfection*. Reading the
//! parts of a perfection of `n` as the distribution `dᵢ / n`, this crate
//! computes its Shannon, Tsallis and Rényi entropies.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Data that never changes during a search:
//! - Lookup tables of primitive pseudoperfect, pseudoperfect and practical
//!   numbers, loaded lazily from the data directory ([`memo`])
//! - The perfect and multiply-perfect number tables
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Per-context state:
//! - Search statistics ([`state`])
//!
//! # Search Algorithm
//!
//! For each `n` the [`SearchContext`] proceeds as follows:
//!
//! 1. **Shortcuts**: perfect numbers return their full divisor set, deficient
//!    numbers return nothing
//! 2. **Bound**: primitive pseudoperfect numbers have no small perfection,
//!    so their minimum subset size is raised to `⌊ln n⌋`
//! 3. **Enumeration**: divisor subsets are tried by increasing size, and
//!    those summing to `n` are kept, stopping early in optimise mode
//!
//! Entropies of the perfections found can be appended to a record file
//! ([`persist`]) and reloaded later.

pub mod config;
pub mod context;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod memo;
pub mod numbers;
pub mod persist;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use context::{Classification, Membership, SearchContext};
pub use engine::{Partition, PerfectionSearch, SearchOptions};
pub use entropy::{EntropyRecord, Precision, PreciseEntropy, PreciseRecord};
pub use error::{Error, Result};
pub use memo::{Sequence, SequenceTables};
pub use numbers::{Factorizer, Subject, TrialDivision};
pub use persist::{ConflictPolicy, EntropyStore, RecordFormat};
