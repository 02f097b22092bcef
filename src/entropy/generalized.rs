// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tsallis and Rényi entropies.
//!
//! Both are one-parameter families containing Shannon entropy as the limit
//! of the order parameter going to 1:
//!
//!   S_q = (1 - Σᵢ pᵢ^q) / (q - 1)          (Tsallis, nats at q = 1)
//!   H_α = log₂(Σᵢ pᵢ^α) / (1 - α)          (Rényi, bits at α = 1)
//!
//! With q = 2 the Tsallis entropy is the "logical entropy" 1 - Σ pᵢ².

use super::shannon::shannon;

/// Default Tsallis order.
pub const DEFAULT_Q: f64 = 2.0;

/// Default Rényi order, the collision entropy.
pub const DEFAULT_ALPHA: f64 = 2.0;

/// Orders closer than this to 1 use the Shannon limit.
const UNIT_ORDER_TOLERANCE: f64 = 1e-12;

fn probabilities(total: u64, parts: &[u64]) -> impl Iterator<Item = f64> + '_ {
    let total = total as f64;
    parts
        .iter()
        .filter(|&&part| part > 0)
        .map(move |&part| part as f64 / total)
}

/// Tsallis entropy of order `q`.
pub fn tsallis(total: u64, parts: &[u64], q: f64) -> f64 {
    if (q - 1.0).abs() < UNIT_ORDER_TOLERANCE {
        return shannon(total, parts) * std::f64::consts::LN_2;
    }
    let power_sum: f64 = probabilities(total, parts).map(|p| p.powf(q)).sum();
    (1.0 - power_sum) / (q - 1.0)
}

/// Rényi entropy of order `alpha`, in bits.
pub fn renyi(total: u64, parts: &[u64], alpha: f64) -> f64 {
    if (alpha - 1.0).abs() < UNIT_ORDER_TOLERANCE {
        return shannon(total, parts);
    }
    let power_sum: f64 = probabilities(total, parts).map(|p| p.powf(alpha)).sum();
    power_sum.log2() / (1.0 - alpha)
}
