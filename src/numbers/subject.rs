// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated input number.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// A positive integer no larger than `u64::MAX`.
///
/// Every entry point that accepts user-provided numbers goes through one of
/// the `TryFrom` conversions below, so invalid values are rejected before
/// any search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subject(u64);

impl Subject {
    pub fn new(n: u64) -> Result<Self, InputError> {
        if n == 0 {
            Err(InputError::NotPositive(n.to_string()))
        } else {
            Ok(Subject(n))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Subject> for u64 {
    fn from(subject: Subject) -> u64 {
        subject.0
    }
}

impl TryFrom<u64> for Subject {
    type Error = InputError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Subject::new(n)
    }
}

impl TryFrom<u128> for Subject {
    type Error = InputError;

    fn try_from(n: u128) -> Result<Self, Self::Error> {
        let value = u64::try_from(n).map_err(|_| InputError::OutOfRange {
            value: n.to_string(),
        })?;
        Subject::new(value)
    }
}

impl TryFrom<i128> for Subject {
    type Error = InputError;

    fn try_from(n: i128) -> Result<Self, Self::Error> {
        if n < 1 {
            return Err(InputError::NotPositive(n.to_string()));
        }
        Subject::try_from(n as u128)
    }
}

impl TryFrom<i64> for Subject {
    type Error = InputError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Subject::try_from(i128::from(n))
    }
}

impl TryFrom<i32> for Subject {
    type Error = InputError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Subject::try_from(i128::from(n))
    }
}

/// Floats are never subjects, even when integral.
impl TryFrom<f64> for Subject {
    type Error = InputError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Err(InputError::NotAnInteger(x.to_string()))
    }
}

impl TryFrom<&str> for Subject {
    type Error = InputError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Subject {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('+').unwrap_or(s);
        if let Ok(n) = digits.parse::<u64>() {
            return Subject::new(n);
        }
        if let Some(magnitude) = s.strip_prefix('-') {
            if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
                return Err(InputError::NotPositive(s.to_string()));
            }
        }
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::OutOfRange {
                value: s.to_string(),
            });
        }
        Err(InputError::NotAnInteger(s.to_string()))
    }
}
