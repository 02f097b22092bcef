// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer factorization capability.
//!
//! The search only needs three things from number theory: the ordered
//! proper divisors of `n`, the exponents of its prime factorization, and a
//! perfect-number predicate. They sit behind the [`Factorizer`] trait so a
//! faster factorization backend can be plugged into a
//! [`SearchContext`](crate::context::SearchContext).

pub mod subject;

pub use subject::Subject;

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::memo;

/// Source of divisor and factorization data.
pub trait Factorizer: Debug + Send + Sync {
    /// Prime factorization of `n` as `prime -> exponent`. Empty for `n = 1`.
    fn factorize(&self, n: u64) -> BTreeMap<u64, u32>;

    /// Ascending divisors of `n` strictly smaller than `n`.
    fn proper_divisors(&self, n: u64) -> Vec<u64> {
        let mut divisors = vec![1u64];
        for (&prime, &exponent) in &self.factorize(n) {
            let existing = divisors.len();
            let mut power = 1u64;
            for _ in 0..exponent {
                power *= prime;
                for i in 0..existing {
                    divisors.push(divisors[i] * power);
                }
            }
        }
        divisors.sort_unstable();
        divisors.pop(); // n itself
        divisors
    }

    /// Whether `n` equals the sum of its proper divisors.
    fn is_perfect(&self, n: u64) -> bool {
        n > 0 && divisor_sum(&self.proper_divisors(n)) == u128::from(n)
    }
}

/// Sum of a divisor list, wide enough for any `u64` input.
pub fn divisor_sum(divisors: &[u64]) -> u128 {
    divisors.iter().map(|&d| u128::from(d)).sum()
}

/// Trial division factorizer.
///
/// Fast enough for the table ranges this crate works with. Numbers with
/// two large prime factors near `2^32` take a few seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl Factorizer for TrialDivision {
    fn factorize(&self, n: u64) -> BTreeMap<u64, u32> {
        let mut factors = BTreeMap::new();
        let mut m = n;
        if m < 2 {
            return factors;
        }

        let mut push = |m: &mut u64, p: u64| {
            let mut exponent = 0;
            while *m % p == 0 {
                *m /= p;
                exponent += 1;
            }
            if exponent > 0 {
                factors.insert(p, exponent);
            }
        };

        push(&mut m, 2);
        push(&mut m, 3);
        // 6k ± 1 wheel
        let mut p = 5u64;
        while u128::from(p) * u128::from(p) <= u128::from(m) {
            push(&mut m, p);
            push(&mut m, p + 2);
            p += 6;
        }
        if m > 1 {
            factors.insert(m, 1);
        }
        factors
    }

    fn is_perfect(&self, n: u64) -> bool {
        memo::is_known_perfect(n)
    }
}
