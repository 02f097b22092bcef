// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::Result;
use pseudoperfect_entropy::{Config, SearchContext, Subject};

pub fn run(config: &Config, n: Subject) -> Result<()> {
    let ctx = SearchContext::new(config.data_dir.clone());
    println!("{}", ctx.classify(n.get())?);
    Ok(())
}
