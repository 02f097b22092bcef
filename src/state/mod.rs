// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: per-context mutable state.
//!
//! Search statistics accumulated by a [`SearchContext`](crate::context::SearchContext).

pub mod statistics;

pub use statistics::{Counters, Statistics};
