// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{bail, Result};
use pseudoperfect_entropy::{Config, EntropyStore, RecordFormat, SearchContext};
use tracing::info;

pub fn run(config: &Config, from: u64, to: u64, append: bool) -> Result<()> {
    if from > to {
        bail!("empty range: {} > {}", from, to);
    }

    let store = if append {
        EntropyStore::open(&config.output_dir, &config.store.stem, config.store.format)
    } else {
        EntropyStore::prepare(
            &config.output_dir,
            &config.store.stem,
            config.store.format,
            config.store.on_conflict,
        )?
    };
    let done = store.keys()?;

    let mut ctx = SearchContext::new(config.data_dir.clone());
    let mut written = 0u64;
    for n in (from..=to).filter(|n| !done.contains(n)) {
        let records = ctx.perfection_entropy(n, &config.search)?;
        store.append(n, &records)?;
        written += 1;
    }

    info!(
        path = %store.path().display(),
        written,
        skipped = done.range(from..=to).count(),
        statistics = %ctx.statistics,
        "scan complete"
    );
    Ok(())
}

pub fn load(config: &Config) -> Result<()> {
    let store = EntropyStore::open(&config.output_dir, &config.store.stem, config.store.format);
    match store.format() {
        RecordFormat::Dictionary => {
            for (n, records) in store.load_dictionary()? {
                if records.is_empty() {
                    println!("{}: no perfections", n);
                }
                for record in records {
                    println!("{}: {}  {}", n, record.entropy, record.partition);
                }
            }
        }
        RecordFormat::List => {
            for (n, entropy) in store.load_list()? {
                println!("{}, {}", n, entropy);
            }
        }
    }
    Ok(())
}
