//! CLI for the fhash digest tool.

mod hash;

use anyhow::Result;
use clap::Parser;
use fhash_core::config;
use fhash_core::digest::HashAlgo;
use std::path::PathBuf;

use hash::run_hash;

/// Top-level CLI. One operation, so plain flags rather than subcommands.
#[derive(Debug, Parser)]
#[command(name = "fhash")]
#[command(about = "fhash: compute a file digest (md5 or sha256)", long_about = None)]
pub struct Cli {
    /// Path to the file to hash.
    #[arg(long)]
    pub file: PathBuf,

    /// Digest algorithm (md5 or sha256); overrides the config default.
    #[arg(long)]
    pub algo: Option<HashAlgo>,

    /// Path to the JSON config file providing the default algorithm.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load(&cli.config);
        tracing::debug!("loaded config: {:?}", cfg);

        let algo = config::resolve_algo(cli.algo, &cfg);
        run_hash(&cli.file, algo)
    }
}
