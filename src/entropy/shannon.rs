// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shannon entropy over additive partitions.
//!
//! H = -Σᵢ pᵢ log₂(pᵢ)
//!
//! where pᵢ = partᵢ / total.

/// Shannon entropy (bits) of `parts` normalized by `total`.
///
/// Zero parts contribute nothing (the `p log p → 0` limit).
pub fn shannon(total: u64, parts: &[u64]) -> f64 {
    let total = total as f64;
    let mut entropy = 0.0;
    for &part in parts {
        if part > 0 {
            let p = part as f64 / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Entropy of the prime exponent multiplicities of an integer.
///
/// `exponents` are the exponents of the distinct prime factors; their sum
/// is the total. A prime power (one exponent) or `1` (none) has entropy 0.
pub fn multiplicity_entropy(exponents: &[u32]) -> f64 {
    if exponents.len() < 2 {
        return 0.0;
    }
    let total: u64 = exponents.iter().map(|&e| u64::from(e)).sum();
    let parts: Vec<u64> = exponents.iter().map(|&e| u64::from(e)).collect();
    shannon(total, &parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_two_parts() {
        assert_eq!(shannon(2, &[1, 1]), 1.0);
    }

    #[test]
    fn test_perfect_six() {
        // 2/3 + log2(3)/2
        let expected = 2.0 / 3.0 + 0.5 * 3.0_f64.log2();
        assert_relative_eq!(shannon(6, &[1, 2, 3]), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_single_part_is_zero() {
        assert_eq!(shannon(7, &[7]), 0.0);
    }

    #[test]
    fn test_zero_parts_ignored() {
        assert_eq!(shannon(2, &[1, 0, 1]), 1.0);
    }

    #[test]
    fn test_multiplicity_prime_power() {
        assert_eq!(multiplicity_entropy(&[5]), 0.0);
        assert_eq!(multiplicity_entropy(&[1]), 0.0);
        assert_eq!(multiplicity_entropy(&[]), 0.0);
    }

    #[test]
    fn test_multiplicity_square_free() {
        // 30 = 2·3·5
        assert_relative_eq!(multiplicity_entropy(&[1, 1, 1]), 3.0_f64.log2(), epsilon = 1e-12);
        // 12 = 2²·3
        let expected = -(2.0 / 3.0 * (2.0_f64 / 3.0).log2() + 1.0 / 3.0 * (1.0_f64 / 3.0).log2());
        assert_relative_eq!(multiplicity_entropy(&[2, 1]), expected, epsilon = 1e-12);
    }
}
