// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO tables and per-context state.
//!
//! The SearchContext combines:
//! - Tier 1 (MEMO): the lazily loaded [`SequenceTables`], shared via `Arc`
//! - Tier 2 (DYNAMIC): search [`Statistics`], owned by the context
//!
//! plus the [`Factorizer`] used to obtain divisors. Several contexts can
//! work from the same tables, each with its own statistics.
//!
//! # Example
//!
//! ```ignore
//! let memo = Arc::new(SequenceTables::new("data"));
//! let mut ctx = SearchContext::with_memo(Arc::clone(&memo));
//! for record in ctx.perfection_entropy(20u64, &SearchOptions::default())? {
//!     println!("{:.4} {}", record.entropy, record.partition);
//! }
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::engine::{subsets, Partition, PerfectionSearch, SearchOptions};
use crate::entropy::{self, EntropyRecord, Precision, PreciseRecord};
use crate::error::{InputError, LookupError};
use crate::memo::{self, Sequence, SequenceTables};
use crate::numbers::{divisor_sum, Factorizer, Subject, TrialDivision};
use crate::state::{Counters, Statistics};

/// Search context: shared tables, a factorizer and owned statistics.
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable lookup tables (Tier 1)
    pub memo: Arc<SequenceTables>,
    /// Divisor source
    factorizer: Box<dyn Factorizer>,
    /// Counters accumulated over every query (Tier 2)
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context with its own tables read from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_memo(Arc::new(SequenceTables::new(data_dir)))
    }

    /// Create a context sharing existing tables.
    pub fn with_memo(memo: Arc<SequenceTables>) -> Self {
        Self::with_factorizer(memo, Box::new(TrialDivision))
    }

    /// Create a context with a custom factorization backend.
    pub fn with_factorizer(memo: Arc<SequenceTables>, factorizer: Box<dyn Factorizer>) -> Self {
        Self {
            memo,
            factorizer,
            statistics: Statistics::new(),
        }
    }

    pub fn factorizer(&self) -> &dyn Factorizer {
        self.factorizer.as_ref()
    }

    /// Smallest subset size worth enumerating for `n`.
    ///
    /// Consults the primitive pseudoperfect table only when `floor` is set.
    /// Beyond the table the default bound is used and the fallback counted.
    pub fn minimum_subset_size(&mut self, n: u64, floor: bool) -> Result<usize, LookupError> {
        if !floor {
            return Ok(subsets::minimum_subset_size(n, false, false));
        }
        let primitive = match self.memo.is_primitive(n) {
            Ok(primitive) => primitive,
            Err(LookupError::RangeExceeded { sequence, max, .. }) => {
                warn!(n, %sequence, max, "primitive status unknown, using default subset bound");
                self.statistics.increment_counter(Counters::RangeExceeded);
                false
            }
            Err(err) => return Err(err),
        };
        Ok(subsets::minimum_subset_size(n, floor, primitive))
    }

    /// Find the perfections of `n`.
    ///
    /// A perfect number yields its full proper divisor set, a deficient one
    /// yields nothing. Otherwise divisor subsets are enumerated.
    pub fn find(&mut self, n: u64, options: &SearchOptions) -> Result<Vec<Partition>, LookupError> {
        if n < 2 {
            return Ok(Vec::new());
        }
        let divisors = self.factorizer.proper_divisors(n);

        match divisor_sum(&divisors).cmp(&u128::from(n)) {
            Ordering::Equal => {
                self.statistics.increment_counter(Counters::PerfectShortcuts);
                debug!(n, "perfect number");
                return Ok(vec![Partition::new(divisors)]);
            }
            Ordering::Less => {
                self.statistics.increment_counter(Counters::DeficientShortcuts);
                debug!(n, "deficient number");
                return Ok(Vec::new());
            }
            Ordering::Greater => {}
        }

        let min_size = self.minimum_subset_size(n, options.floor)?;
        let mut search = PerfectionSearch::new(n, &divisors, min_size);
        let found = search.run(options);

        let (examined, matched) = search.statistics();
        self.statistics.add(Counters::CandidatesExamined, examined);
        self.statistics.add(Counters::PerfectionsFound, matched);
        if options.optimise && found.len() == options.stop && !search.is_exhausted() {
            self.statistics.increment_counter(Counters::EarlyStops);
        }
        debug!(
            n,
            divisors = divisors.len(),
            min_size,
            examined,
            found = found.len(),
            "perfection search"
        );
        Ok(found)
    }

    /// Shannon entropy of each perfection of `n`.
    ///
    /// Invalid inputs are logged and produce an empty result. Any float is
    /// invalid, as are zero, negative values and numbers beyond `u64`.
    pub fn perfection_entropy<T>(
        &mut self,
        n: T,
        options: &SearchOptions,
    ) -> Result<Vec<EntropyRecord>, LookupError>
    where
        T: TryInto<Subject, Error = InputError>,
    {
        self.records(n, options, |n, parts| entropy::shannon(n, parts))
    }

    /// Tsallis entropy of order `q` of each perfection of `n`.
    pub fn tsallis_perfection_entropy<T>(
        &mut self,
        n: T,
        q: f64,
        options: &SearchOptions,
    ) -> Result<Vec<EntropyRecord>, LookupError>
    where
        T: TryInto<Subject, Error = InputError>,
    {
        self.records(n, options, |n, parts| entropy::tsallis(n, parts, q))
    }

    /// Rényi entropy of order `alpha`, in bits, of each perfection of `n`.
    pub fn renyi_perfection_entropy<T>(
        &mut self,
        n: T,
        alpha: f64,
        options: &SearchOptions,
    ) -> Result<Vec<EntropyRecord>, LookupError>
    where
        T: TryInto<Subject, Error = InputError>,
    {
        self.records(n, options, |n, parts| entropy::renyi(n, parts, alpha))
    }

    /// Shannon entropy of each perfection of `n` at the given precision.
    pub fn precise_perfection_entropy<T>(
        &mut self,
        n: T,
        precision: Precision,
        options: &SearchOptions,
    ) -> Result<Vec<PreciseRecord>, LookupError>
    where
        T: TryInto<Subject, Error = InputError>,
    {
        let Some((n, partitions)) = self.validated_find(n, options)? else {
            return Ok(Vec::new());
        };
        Ok(partitions
            .into_iter()
            .map(|partition| PreciseRecord {
                entropy: entropy::shannon_precise(n, partition.parts(), precision),
                partition,
            })
            .collect())
    }

    /// Entropy of the prime exponents of `n`.
    pub fn multiplicity_entropy(&self, n: u64) -> f64 {
        let exponents: Vec<u32> = self.factorizer.factorize(n).into_values().collect();
        entropy::multiplicity_entropy(&exponents)
    }

    /// Report the number classes `n` belongs to.
    pub fn classify(&self, n: u64) -> Result<Classification, LookupError> {
        let multiply_perfect = match memo::is_known_multiply_perfect(n) {
            Some(known) => known,
            None => {
                let sigma = divisor_sum(&self.factorizer.proper_divisors(n)) + u128::from(n);
                sigma % u128::from(n) == 0
            }
        };
        Ok(Classification {
            n,
            perfect: self.factorizer.is_perfect(n),
            multiply_perfect,
            primitive_pseudoperfect: self.membership(Sequence::PrimitivePseudoperfect, n)?,
            pseudoperfect: self.membership(Sequence::Pseudoperfect, n)?,
            practical: self.membership(Sequence::Practical, n)?,
        })
    }

    fn membership(&self, sequence: Sequence, n: u64) -> Result<Membership, LookupError> {
        match self.memo.contains(sequence, n) {
            Ok(true) => Ok(Membership::Member),
            Ok(false) => Ok(Membership::NotMember),
            Err(LookupError::RangeExceeded { max, .. }) => Ok(Membership::OutOfRange { max }),
            Err(err) => Err(err),
        }
    }

    fn records<T, F>(
        &mut self,
        n: T,
        options: &SearchOptions,
        measure: F,
    ) -> Result<Vec<EntropyRecord>, LookupError>
    where
        T: TryInto<Subject, Error = InputError>,
        F: Fn(u64, &[u64]) -> f64,
    {
        let Some((n, partitions)) = self.validated_find(n, options)? else {
            return Ok(Vec::new());
        };
        Ok(partitions
            .into_iter()
            .map(|partition| EntropyRecord::new(measure(n, partition.parts()), partition))
            .collect())
    }

    fn validated_find<T>(
        &mut self,
        n: T,
        options: &SearchOptions,
    ) -> Result<Option<(u64, Vec<Partition>)>, LookupError>
    where
        T: TryInto<Subject, Error = InputError>,
    {
        let n = match n.try_into() {
            Ok(subject) => subject.get(),
            Err(err) => {
                warn!(%err, "rejected input");
                self.statistics.increment_counter(Counters::RejectedInputs);
                return Ok(None);
            }
        };
        Ok(Some((n, self.find(n, options)?)))
    }
}

/// Membership of `n` in a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    Member,
    NotMember,
    /// `n` exceeds the table's last value.
    OutOfRange { max: u64 },
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Membership::Member => write!(f, "yes"),
            Membership::NotMember => write!(f, "no"),
            Membership::OutOfRange { max } => write!(f, "unknown (table ends at {})", max),
        }
    }
}

/// Number classes of one integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub n: u64,
    pub perfect: bool,
    pub multiply_perfect: bool,
    pub primitive_pseudoperfect: Membership,
    pub pseudoperfect: Membership,
    pub practical: Membership,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.n)?;
        writeln!(f, "  perfect:                 {}", yes_no(self.perfect))?;
        writeln!(f, "  multiply perfect:        {}", yes_no(self.multiply_perfect))?;
        writeln!(f, "  primitive pseudoperfect: {}", self.primitive_pseudoperfect)?;
        writeln!(f, "  pseudoperfect:           {}", self.pseudoperfect)?;
        write!(f, "  practical:               {}", self.practical)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
