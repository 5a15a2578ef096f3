// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Demo configuration loaded from TOML files or the command line.
//!
//! # TOML Format
//! ```toml
//! seq_len = 128
//! embed_dim = 64
//! seed = 42
//! low = -1.0
//! high = 1.0
//! ```

use std::path::Path;

use anyhow::{bail, Context};

/// Workload parameters for the demonstration driver.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of tokens (rows of Q, K and V).
    pub seq_len: usize,
    /// Embedding width (columns of Q, K and V).
    pub embed_dim: usize,
    /// Seed for the input generator; the same seed reproduces the same run.
    pub seed: u64,
    /// Inclusive lower bound of the uniform input range.
    pub low: f32,
    /// Exclusive upper bound of the uniform input range.
    pub high: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seq_len: 128,
            embed_dim: 64,
            seed: 42,
            low: -1.0,
            high: 1.0,
        }
    }
}

/// Command-line overrides shared by every subcommand.
#[derive(Debug, Default, clap::Args)]
pub struct WorkloadArgs {
    /// Sequence length (tokens).
    #[arg(short = 's', long)]
    pub seq_len: Option<usize>,

    /// Embedding dimension.
    #[arg(short = 'd', long)]
    pub embed_dim: Option<usize>,

    /// Random seed for Q, K, V.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Parses configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("TOML parse error")
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("TOML serialise error")
    }

    /// Returns a copy with every override that was given on the command line applied.
    pub fn with_overrides(mut self, args: &WorkloadArgs) -> Self {
        if let Some(seq_len) = args.seq_len {
            self.seq_len = seq_len;
        }
        if let Some(embed_dim) = args.embed_dim {
            self.embed_dim = embed_dim;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        self
    }

    /// Rejects workloads the kernels cannot run.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.seq_len == 0 || self.embed_dim == 0 {
            bail!(
                "seq_len and embed_dim must be >= 1 (got {} x {})",
                self.seq_len,
                self.embed_dim
            );
        }
        if !(self.high - self.low).is_finite() || self.low >= self.high {
            bail!(
                "input range must be finite with low < high and a finite width (got [{}, {}))",
                self.low,
                self.high
            );
        }
        Ok(())
    }
}
