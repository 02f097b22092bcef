// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arbitrary-precision Shannon entropy.
//!
//! Two renderings of H = Σᵢ (dᵢ/n) log₂(n/dᵢ) are provided:
//!
//! - a decimal value rounded to a requested number of places, computed with
//!   big-integer fixed-point arithmetic;
//! - an exact closed form `r + Σₒ cₒ·log₂(o)` with rational `r`, `cₒ` and odd
//!   `o > 1`.
//!
//! The closed form is canonical: each ratio `n/dᵢ` is split into `2^k · o`,
//! powers of two become rationals, and equal odd arguments are merged.

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Extra binary digits carried beyond the requested precision.
const GUARD_BITS: u64 = 64;

/// Default number of decimal places.
pub const DEFAULT_DIGITS: u32 = 6;

/// Requested precision of [`shannon_precise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Precision {
    /// Round to this many decimal places.
    Digits(u32),
    /// Closed-form expression, written `inf`.
    Exact,
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Digits(DEFAULT_DIGITS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid precision {0:?}: expected a number of decimal places or \"inf\"")]
pub struct PrecisionParseError(String);

impl FromStr for Precision {
    type Err = PrecisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("exact") {
            return Ok(Precision::Exact);
        }
        s.parse::<u32>()
            .map(Precision::Digits)
            .map_err(|_| PrecisionParseError(s.to_string()))
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Digits(digits) => write!(f, "{}", digits),
            Precision::Exact => write!(f, "inf"),
        }
    }
}

impl TryFrom<String> for Precision {
    type Error = PrecisionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Precision> for String {
    fn from(precision: Precision) -> String {
        precision.to_string()
    }
}

/// Fixed-point decimal: `mantissa / 10^scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalValue {
    mantissa: BigInt,
    scale: u32,
}

impl DecimalValue {
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa.is_negative() {
            write!(f, "-")?;
        }
        let digits = self.mantissa.magnitude().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{}", digits);
        }
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}.{}", whole, fraction)
    }
}

/// Exact entropy `rational + Σ coefficient·log₂(odd)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedForm {
    rational: BigRational,
    logs: BTreeMap<u64, BigRational>,
}

impl ClosedForm {
    fn zero() -> Self {
        Self {
            rational: BigRational::zero(),
            logs: BTreeMap::new(),
        }
    }

    /// The rational part.
    pub fn rational(&self) -> &BigRational {
        &self.rational
    }

    /// Coefficients of `log₂(o)` keyed by odd `o > 1`.
    pub fn logs(&self) -> &BTreeMap<u64, BigRational> {
        &self.logs
    }

    fn add_rational(&mut self, value: BigRational) {
        self.rational = &self.rational + value;
    }

    fn add_log(&mut self, odd: u64, coefficient: BigRational) {
        if odd > 1 {
            let entry = self.logs.entry(odd).or_insert_with(BigRational::zero);
            *entry = &*entry + coefficient;
        }
    }

    /// Add `coefficient · log₂(numerator / denominator)`.
    fn add_log_ratio(&mut self, coefficient: &BigRational, numerator: u64, denominator: u64) {
        let (num_twos, num_odd) = split_twos(numerator);
        let (den_twos, den_odd) = split_twos(denominator);
        let twos = i64::from(num_twos) - i64::from(den_twos);
        self.add_rational(coefficient * BigRational::from_integer(BigInt::from(twos)));
        self.add_log(num_odd, coefficient.clone());
        self.add_log(den_odd, -coefficient.clone());
    }

    fn normalize(mut self) -> Self {
        self.logs.retain(|_, coefficient| !coefficient.is_zero());
        self
    }

    /// Floating-point evaluation.
    pub fn to_f64(&self) -> f64 {
        let mut value = ratio_to_f64(&self.rational);
        for (&odd, coefficient) in &self.logs {
            value += ratio_to_f64(coefficient) * (odd as f64).log2();
        }
        value
    }
}

impl fmt::Display for ClosedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::with_capacity(self.logs.len() + 1);
        if !self.rational.is_zero() || self.logs.is_empty() {
            terms.push(self.rational.to_string());
        }
        for (odd, coefficient) in &self.logs {
            let term = if coefficient.is_one() {
                format!("log2({})", odd)
            } else if (-coefficient).is_one() {
                format!("-log2({})", odd)
            } else {
                format!("{}*log2({})", coefficient, odd)
            };
            terms.push(term);
        }

        for (i, term) in terms.iter().enumerate() {
            match (i, term.strip_prefix('-')) {
                (0, _) => write!(f, "{}", term)?,
                (_, Some(rest)) => write!(f, " - {}", rest)?,
                (_, None) => write!(f, " + {}", term)?,
            }
        }
        Ok(())
    }
}

/// Result of [`shannon_precise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreciseEntropy {
    Decimal(DecimalValue),
    ClosedForm(ClosedForm),
}

impl PreciseEntropy {
    pub fn to_f64(&self) -> f64 {
        match self {
            PreciseEntropy::Decimal(value) => value.to_f64(),
            PreciseEntropy::ClosedForm(form) => form.to_f64(),
        }
    }
}

impl fmt::Display for PreciseEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreciseEntropy::Decimal(value) => fmt::Display::fmt(value, f),
            PreciseEntropy::ClosedForm(form) => fmt::Display::fmt(form, f),
        }
    }
}

impl Serialize for PreciseEntropy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shannon entropy of `parts` over `total` at the requested precision.
pub fn shannon_precise(total: u64, parts: &[u64], precision: Precision) -> PreciseEntropy {
    match precision {
        Precision::Digits(digits) => PreciseEntropy::Decimal(shannon_decimal(total, parts, digits)),
        Precision::Exact => PreciseEntropy::ClosedForm(shannon_closed_form(total, parts)),
    }
}

/// Shannon entropy rounded half away from zero to `digits` decimal places.
pub fn shannon_decimal(total: u64, parts: &[u64], digits: u32) -> DecimalValue {
    if total == 0 {
        return DecimalValue::new(BigInt::zero(), digits);
    }

    // ceil(digits · log2(10)) fractional bits, plus guard bits
    let frac_bits = (u64::from(digits) * 3322 + 999) / 1000 + GUARD_BITS;
    let big_total = BigUint::from(total);

    // Σ dᵢ · log2(n/dᵢ), scaled by 2^frac_bits
    let mut weighted = BigInt::zero();
    for &part in parts.iter().filter(|&&part| part > 0) {
        let big_part = BigUint::from(part);
        let log = if total >= part {
            BigInt::from(log2_ratio(&big_total, &big_part, frac_bits))
        } else {
            -BigInt::from(log2_ratio(&big_part, &big_total, frac_bits))
        };
        weighted += log * BigInt::from(part);
    }
    let scaled = weighted / BigInt::from(total);

    let magnitude = scaled.magnitude() * BigUint::from(10u32).pow(digits);
    let half = BigUint::one() << (frac_bits - 1);
    let rounded = (magnitude + half) >> frac_bits;
    let sign = if scaled.is_negative() { Sign::Minus } else { Sign::Plus };
    DecimalValue::new(BigInt::from_biguint(sign, rounded), digits)
}

/// Shannon entropy as an exact closed-form expression.
pub fn shannon_closed_form(total: u64, parts: &[u64]) -> ClosedForm {
    let mut form = ClosedForm::zero();
    if total == 0 {
        return form;
    }
    for &part in parts.iter().filter(|&&part| part > 0) {
        let coefficient = BigRational::new(BigInt::from(part), BigInt::from(total));
        let g = gcd(total, part);
        form.add_log_ratio(&coefficient, total / g, part / g);
    }
    form.normalize()
}

/// `log2(num / den)` for `num ≥ den > 0`, as a fixed-point value with
/// `frac_bits` fractional bits (truncated).
///
/// Integer part from bit lengths, fraction by repeated squaring of the
/// mantissa in `[1, 2)`.
fn log2_ratio(num: &BigUint, den: &BigUint, frac_bits: u64) -> BigUint {
    let mut k = num.bits() - den.bits();
    if num < &(den << k) {
        k -= 1;
    }

    let work = frac_bits + GUARD_BITS;
    let two = BigUint::one() << (work + 1);
    let mut y = (num << work) / (den << k);
    let mut result = BigUint::from(k) << frac_bits;
    for i in 1..=frac_bits {
        y = (&y * &y) >> work;
        if y >= two {
            y >>= 1u32;
            result |= BigUint::one() << (frac_bits - i);
        }
    }
    result
}

fn split_twos(n: u64) -> (u32, u64) {
    let twos = n.trailing_zeros();
    (twos, n >> twos)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn ratio_to_f64(value: &BigRational) -> f64 {
    match (value.numer().to_f64(), value.denom().to_f64()) {
        (Some(numer), Some(denom)) => numer / denom,
        _ => f64::NAN,
    }
}
