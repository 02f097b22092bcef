// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time number tables.
//!
//! These are small enough to live in the binary, unlike the sequence tables
//! which are loaded from the data directory.

/// Largest value of the primitive pseudoperfect table as published.
pub const MAX_PRIMITIVE: u64 = 358_671;

/// Largest value of the pseudoperfect table as published.
pub const MAX_PSEUDO: u64 = 40_656;

/// Every perfect number representable in `u64`.
///
/// All of them are even (Euclid–Euler), and no odd perfect number exists
/// below 10^1500, so membership in this table decides perfection for the
/// whole `u64` range.
pub const PERFECTS: [u64; 8] = [
    6,
    28,
    496,
    8_128,
    33_550_336,
    8_589_869_056,
    137_438_691_328,
    2_305_843_008_139_952_128,
];

/// Multiply-perfect numbers: `n` divides the sum of all its divisors.
pub const MULTIPLY_PERFECTS: [u64; 27] = [
    1,
    6,
    28,
    120,
    496,
    672,
    8_128,
    30_240,
    32_760,
    523_776,
    2_178_540,
    23_569_920,
    33_550_336,
    45_532_800,
    142_990_848,
    459_818_240,
    1_379_454_720,
    1_476_304_896,
    8_589_869_056,
    14_182_439_040,
    31_998_395_520,
    43_861_478_400,
    51_001_180_160,
    66_433_720_320,
    137_438_691_328,
    153_003_540_480,
    403_031_236_608,
];

/// Largest multiply-perfect number in [`MULTIPLY_PERFECTS`].
pub const MAX_MULTIPLY_PERFECT: u64 = MULTIPLY_PERFECTS[MULTIPLY_PERFECTS.len() - 1];
