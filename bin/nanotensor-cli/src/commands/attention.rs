// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nanotensor attention` command: one scaled dot-product attention pass.

use std::time::Instant;

use anyhow::Context;
use nanotensor::{scaled_dot_product_attention, Tensor};

use super::{print_banner, print_tensor_stats, Workload};
use crate::config::DemoConfig;

pub fn execute(config: &DemoConfig) -> anyhow::Result<()> {
    print_banner("nanotensor · Attention");
    let workload = Workload::seeded(config)?;
    let output = run(&workload)?;

    let (mean, min, max) = summarize(&output);
    println!("  Mean {mean:>10.6}   Min {min:>10.6}   Max {max:>10.6}");
    Ok(())
}

/// Runs attention on the workload, prints timing and shapes, and returns the output.
pub(crate) fn run(workload: &Workload) -> anyhow::Result<Tensor> {
    let (seq, dim) = workload
        .q
        .shape()
        .as_matrix()
        .context("workload tensors must be 2-D")?;
    println!("  Sequence length: {seq} | Embedding dim: {dim}");
    println!();

    let mut output = Tensor::zeros(workload.q.shape().clone())?;

    let start = Instant::now();
    scaled_dot_product_attention(
        &workload.q.view(),
        &workload.k.view(),
        &workload.v.view(),
        &mut output,
    )
    .context("attention failed")?;
    let elapsed = start.elapsed();

    tracing::info!(?elapsed, "attention complete");
    println!(
        "  [CPU] Scaled dot-product attention: {:.3} ms",
        elapsed.as_secs_f64() * 1e3,
    );
    print_tensor_stats("Output", &output);
    Ok(output)
}

/// Returns `(mean, min, max)` over every element.
pub(crate) fn summarize(tensor: &Tensor) -> (f32, f32, f32) {
    let data = tensor.data();
    let sum: f64 = data.iter().map(|&x| f64::from(x)).sum();
    let mean = (sum / data.len().max(1) as f64) as f32;
    let min = data.iter().copied().fold(f32::INFINITY, f32::min);
    let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    (mean, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanotensor::Shape;

    #[test]
    fn test_run_produces_matching_shape() {
        let config = DemoConfig {
            seq_len: 5,
            embed_dim: 4,
            ..DemoConfig::default()
        };
        let workload = Workload::seeded(&config).unwrap();
        let out = run(&workload).unwrap();
        assert_eq!(out.shape(), &Shape::matrix(5, 4));

        // Outputs are convex combinations of values drawn from [-1, 1).
        let (_, min, max) = summarize(&out);
        assert!(min >= -1.0 - 1e-5 && max <= 1.0 + 1e-5);
    }

    #[test]
    fn test_summarize() {
        let t = Tensor::from_f32(Shape::vector(4), &[1.0, -2.0, 3.0, 2.0]).unwrap();
        assert_eq!(summarize(&t), (1.0, -2.0, 3.0));
    }
}
