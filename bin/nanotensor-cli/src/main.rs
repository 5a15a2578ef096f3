// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nanotensor
//!
//! Command-line driver for the nanotensor kernels.
//!
//! ## Usage
//! ```bash
//! # Attention + quantization walkthrough on seeded random inputs
//! nanotensor demo --seq-len 128 --embed-dim 64 --seed 42
//!
//! # Only the attention pass
//! nanotensor attention --seq-len 256
//!
//! # Quantization report for the query tensor
//! nanotensor quantize --embed-dim 128
//!
//! # Print the effective configuration
//! nanotensor --config demo.toml config
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};

use crate::config::{DemoConfig, WorkloadArgs};

#[derive(Parser)]
#[command(
    name = "nanotensor",
    about = "From-scratch attention and int8 quantization kernels",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run attention on seeded Q, K, V, then quantize Q and report compression.
    Demo {
        #[command(flatten)]
        workload: WorkloadArgs,
    },

    /// Run scaled dot-product attention and print output statistics.
    Attention {
        #[command(flatten)]
        workload: WorkloadArgs,
    },

    /// Quantize the query tensor to int8 and report size and round-trip error.
    Quantize {
        #[command(flatten)]
        workload: WorkloadArgs,
    },

    /// Print the effective configuration as TOML.
    Config {
        #[command(flatten)]
        workload: WorkloadArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let base = match &cli.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };

    match cli.command {
        Commands::Demo { workload } => commands::demo::execute(&resolve(base, &workload)?),
        Commands::Attention { workload } => {
            commands::attention::execute(&resolve(base, &workload)?)
        }
        Commands::Quantize { workload } => {
            commands::quantize::execute(&resolve(base, &workload)?)
        }
        Commands::Config { workload } => {
            print!("{}", resolve(base, &workload)?.to_toml()?);
            Ok(())
        }
    }
}

fn resolve(base: DemoConfig, workload: &WorkloadArgs) -> anyhow::Result<DemoConfig> {
    let config = base.with_overrides(workload);
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
