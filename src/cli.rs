// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, Subcommand};
use pseudoperfect_entropy::{ConflictPolicy, Precision, RecordFormat, Subject};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "perfections")]
#[command(author, version, about = "Perfections of pseudoperfect numbers and their entropy")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the lookup tables
    #[arg(long, global = true, env = "PSEUDOPERFECT_DATA")]
    pub data_dir: Option<PathBuf>,

    /// Directory receiving record files
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Examine every candidate subset instead of stopping early
    #[arg(long, global = true)]
    pub exhaustive: bool,

    /// Number of perfections kept when stopping early
    #[arg(long, global = true)]
    pub stop: Option<usize>,

    /// Do not raise the subset bound for primitive pseudoperfect numbers
    #[arg(long, global = true)]
    pub no_floor: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Shannon entropy of each perfection of N
    Entropy {
        /// The number to analyze
        n: String,
    },

    /// Shannon entropy to a given number of decimal places, or exactly
    Precise {
        /// The number to analyze
        n: String,

        /// Decimal places, or "inf" for the closed form
        #[arg(long, short)]
        precision: Option<Precision>,
    },

    /// Tsallis entropy of each perfection of N
    Tsallis {
        /// The number to analyze
        n: String,

        /// Entropic index
        #[arg(long, short)]
        q: Option<f64>,
    },

    /// Rényi entropy, in bits, of each perfection of N
    Renyi {
        /// The number to analyze
        n: String,

        /// Order of the entropy
        #[arg(long, short)]
        alpha: Option<f64>,
    },

    /// Entropy of the prime exponents of N
    Multiplicity {
        n: Subject,
    },

    /// Show which number classes N belongs to
    Classify {
        n: Subject,
    },

    /// Compute entropies for a range and append them to a record file
    Scan {
        /// First number of the range
        #[arg(long)]
        from: Subject,

        /// Last number of the range (inclusive)
        #[arg(long)]
        to: Subject,

        /// Continue an existing record file, skipping numbers already in it
        #[arg(long)]
        append: bool,

        #[command(flatten)]
        store: StoreArgs,

        /// What to do when the record file exists
        #[arg(long, value_enum)]
        on_conflict: Option<ConflictPolicy>,
    },

    /// Print a saved record file
    Load {
        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(clap::Args)]
pub struct StoreArgs {
    /// Record file layout
    #[arg(long, value_enum)]
    pub format: Option<RecordFormat>,

    /// Record file name without extension
    #[arg(long)]
    pub stem: Option<String>,
}
