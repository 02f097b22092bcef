// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::Parser;
use pseudoperfect_entropy::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands, StoreArgs};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Entropy { n } => commands::entropy::run(&config, &n),
        Commands::Precise { n, precision } => {
            let precision = precision.unwrap_or(config.entropy.precision);
            commands::entropy::precise(&config, &n, precision)
        }
        Commands::Tsallis { n, q } => {
            let q = q.unwrap_or(config.entropy.tsallis_q);
            commands::entropy::tsallis(&config, &n, q)
        }
        Commands::Renyi { n, alpha } => {
            let alpha = alpha.unwrap_or(config.entropy.renyi_alpha);
            commands::entropy::renyi(&config, &n, alpha)
        }
        Commands::Multiplicity { n } => commands::entropy::multiplicity(&config, n),
        Commands::Classify { n } => commands::classify::run(&config, n),
        Commands::Scan {
            from,
            to,
            append,
            store,
            on_conflict,
        } => {
            apply_store_args(&mut config, store);
            if let Some(policy) = on_conflict {
                config.store.on_conflict = policy;
            }
            commands::scan::run(&config, from.get(), to.get(), append)
        }
        Commands::Load { store } => {
            apply_store_args(&mut config, store);
            commands::scan::load(&config)
        }
    }
}

/// Config file (or defaults) with global command line overrides applied.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }
    if cli.exhaustive {
        config.search.optimise = false;
    }
    if let Some(stop) = cli.stop {
        config.search.stop = stop;
    }
    if cli.no_floor {
        config.search.floor = false;
    }
    Ok(config)
}

fn apply_store_args(config: &mut Config, store: StoreArgs) {
    if let Some(format) = store.format {
        config.store.format = format;
    }
    if let Some(stem) = store.stem {
        config.store.stem = stem;
    }
}

/// `RUST_LOG` directives when present and valid, otherwise `info`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
