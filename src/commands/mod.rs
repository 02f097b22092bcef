// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

pub mod classify;
pub mod entropy;
pub mod scan;
