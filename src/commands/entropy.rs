// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::Result;
use pseudoperfect_entropy::{Config, EntropyRecord, Precision, SearchContext, Subject};
use tracing::debug;

pub fn run(config: &Config, n: &str) -> Result<()> {
    let mut ctx = SearchContext::new(config.data_dir.clone());
    let records = ctx.perfection_entropy(n, &config.search)?;
    print_records(n, &records);
    debug!(statistics = %ctx.statistics, "entropy");
    Ok(())
}

pub fn tsallis(config: &Config, n: &str, q: f64) -> Result<()> {
    let mut ctx = SearchContext::new(config.data_dir.clone());
    let records = ctx.tsallis_perfection_entropy(n, q, &config.search)?;
    print_records(n, &records);
    debug!(statistics = %ctx.statistics, q, "tsallis");
    Ok(())
}

pub fn renyi(config: &Config, n: &str, alpha: f64) -> Result<()> {
    let mut ctx = SearchContext::new(config.data_dir.clone());
    let records = ctx.renyi_perfection_entropy(n, alpha, &config.search)?;
    print_records(n, &records);
    debug!(statistics = %ctx.statistics, alpha, "renyi");
    Ok(())
}

pub fn precise(config: &Config, n: &str, precision: Precision) -> Result<()> {
    let mut ctx = SearchContext::new(config.data_dir.clone());
    let records = ctx.precise_perfection_entropy(n, precision, &config.search)?;
    if records.is_empty() {
        println!("{}: no perfections", n);
    }
    for record in &records {
        println!("{}  {}", record.entropy, record.partition);
    }
    debug!(statistics = %ctx.statistics, %precision, "precise");
    Ok(())
}

pub fn multiplicity(config: &Config, n: Subject) -> Result<()> {
    let ctx = SearchContext::new(config.data_dir.clone());
    println!("{}", ctx.multiplicity_entropy(n.get()));
    Ok(())
}

fn print_records(n: &str, records: &[EntropyRecord]) {
    if records.is_empty() {
        println!("{}: no perfections", n);
    }
    for record in records {
        println!("{:<20}  {}", record.entropy, record.partition);
    }
}
