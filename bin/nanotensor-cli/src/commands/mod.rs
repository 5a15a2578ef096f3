// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod attention;
pub mod demo;
pub mod quantize;

use nanotensor::{Shape, Tensor};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Seeded query, key and value tensors, all `[seq_len, embed_dim]`.
pub struct Workload {
    pub q: Tensor,
    pub k: Tensor,
    pub v: Tensor,
}

impl Workload {
    /// Draws Q, K and V from a uniform distribution over `[low, high)`.
    ///
    /// Values are drawn interleaved per flat index (Q, K, V, Q, K, V, ...), so
    /// a given seed and shape always yield the same three tensors.
    pub fn seeded(config: &DemoConfig) -> anyhow::Result<Self> {
        let shape = Shape::matrix(config.seq_len, config.embed_dim);
        let mut q = Tensor::zeros(shape.clone())?;
        let mut k = Tensor::zeros(shape.clone())?;
        let mut v = Tensor::zeros(shape)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let dist = Uniform::new(config.low, config.high);
        for i in 0..q.size() {
            q[i] = dist.sample(&mut rng);
            k[i] = dist.sample(&mut rng);
            v[i] = dist.sample(&mut rng);
        }

        tracing::info!(
            seed = config.seed,
            shape = %q.shape(),
            "seeded Q, K, V in [{}, {})",
            config.low,
            config.high
        );
        Ok(Self { q, k, v })
    }
}

pub(crate) fn print_banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║ {title:^52} ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

pub(crate) fn print_tensor_stats(name: &str, tensor: &Tensor) {
    println!(
        "  {:<8} {} shape {:<12} memory {:>8.2} KB",
        name,
        tensor.dtype(),
        tensor.shape().to_string(),
        kib(tensor.size_bytes()),
    );
}

pub(crate) fn kib(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> DemoConfig {
        DemoConfig {
            seq_len: 4,
            embed_dim: 3,
            seed,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_workload_is_reproducible() {
        let a = Workload::seeded(&small_config(42)).unwrap();
        let b = Workload::seeded(&small_config(42)).unwrap();
        assert_eq!(a.q, b.q);
        assert_eq!(a.k, b.k);
        assert_eq!(a.v, b.v);

        let c = Workload::seeded(&small_config(43)).unwrap();
        assert_ne!(a.q, c.q);
    }

    #[test]
    fn test_workload_respects_range_and_shape() {
        let config = small_config(1);
        let w = Workload::seeded(&config).unwrap();
        for t in [&w.q, &w.k, &w.v] {
            assert_eq!(t.shape(), &Shape::matrix(4, 3));
            assert!(t.data().iter().all(|&x| (config.low..config.high).contains(&x)));
        }
    }

    #[test]
    fn test_workload_accepts_widest_valid_range() {
        let config = DemoConfig {
            low: -1.5e38,
            high: 1.5e38,
            ..small_config(5)
        };
        config.validate().unwrap();
        let w = Workload::seeded(&config).unwrap();
        assert!(w.q.data().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_kib() {
        assert_eq!(kib(2048), 2.0);
    }
}
