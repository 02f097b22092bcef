// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Divisor subset enumeration.
//!
//! Candidates are the combinations of the proper divisors of `n`, produced
//! lazily in order of non-decreasing size and, within a size, in
//! lexicographic index order. The full divisor set is never produced: it can
//! only sum to `n` when `n` is perfect, which the finder handles separately.
//!
//! # Pruning
//!
//! Subsets with fewer than three parts never matter: a single proper divisor
//! is smaller than `n`, and two divisors `a < b ≤ n/2` sum to less than `n`.
//! For a primitive pseudoperfect `n` the bound is raised to `⌊ln n⌋`.

/// Smallest subset size worth enumerating for `n`.
///
/// `primitive` is only consulted when `floor` is set.
pub fn minimum_subset_size(n: u64, floor: bool, primitive: bool) -> usize {
    const BASE: usize = 3;
    if floor && primitive {
        ((n as f64).ln().floor() as usize).max(BASE)
    } else {
        BASE
    }
}

/// Lazy combinations of a divisor sequence, sizes `min_size .. divisors.len()`.
///
/// The iterator is finite and cannot be restarted.
#[derive(Debug, Clone)]
pub struct SubsetEnumerator<'a> {
    divisors: &'a [u64],
    /// Current subset size.
    size: usize,
    /// Indices into `divisors` of the current combination.
    indices: Vec<usize>,
    /// Whether `indices` has been produced for the current size yet.
    started: bool,
    exhausted: bool,
}

impl<'a> SubsetEnumerator<'a> {
    pub fn new(divisors: &'a [u64], min_size: usize) -> Self {
        Self {
            divisors,
            size: min_size,
            indices: Vec::with_capacity(divisors.len()),
            started: false,
            exhausted: min_size >= divisors.len(),
        }
    }

    /// Exclusive upper bound on subset size.
    pub fn max_size(&self) -> usize {
        self.divisors.len()
    }

    pub fn divisors(&self) -> &'a [u64] {
        self.divisors
    }

    /// Advance to the next combination, returning its indices.
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            self.indices.clear();
            self.indices.extend(0..self.size);
            return Some(self.indices.as_slice());
        }

        let len = self.divisors.len();
        let k = self.size;
        // Rightmost index that has not reached its final position.
        match (0..k).rev().find(|&i| self.indices[i] != i + len - k) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                Some(self.indices.as_slice())
            }
            None => {
                self.size += 1;
                if self.size >= len {
                    self.exhausted = true;
                    return None;
                }
                self.started = false;
                self.next_indices()
            }
        }
    }
}

impl Iterator for SubsetEnumerator<'_> {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let divisors = self.divisors;
        self.next_indices()
            .map(|indices| indices.iter().map(|&i| divisors[i]).collect())
    }
}
