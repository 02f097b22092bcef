// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Entropy of additive partitions.
//!
//! A partition of `n` into parts `d₁ + … + dₖ = n` is read as the
//! probability distribution `pᵢ = dᵢ / n`. This module provides:
//!
//! - [`shannon`]: fast `f64` Shannon entropy in bits
//! - [`shannon_precise`]: rounded decimal or exact closed form
//! - [`tsallis`] and [`renyi`]: one-parameter generalizations
//! - [`multiplicity_entropy`]: entropy of prime exponents
//!
//! The records produced by a
//! [`SearchContext`](crate::context::SearchContext) pair each value with
//! its partition.

pub mod generalized;
pub mod precise;
pub mod shannon;

pub use generalized::{renyi, tsallis, DEFAULT_ALPHA, DEFAULT_Q};
pub use precise::{
    shannon_closed_form, shannon_decimal, shannon_precise, ClosedForm, DecimalValue, Precision,
    PreciseEntropy,
};
pub use shannon::{multiplicity_entropy, shannon};

use serde::{Deserialize, Serialize};

use crate::engine::Partition;

/// Entropy of one perfection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyRecord {
    pub entropy: f64,
    pub partition: Partition,
}

impl EntropyRecord {
    pub fn new(entropy: f64, partition: Partition) -> Self {
        Self { entropy, partition }
    }
}

/// Precise entropy of one perfection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreciseRecord {
    pub entropy: PreciseEntropy,
    pub partition: Partition,
}
