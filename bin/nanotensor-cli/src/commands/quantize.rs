// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nanotensor quantize` command: FP32 → INT8 compression report.
//!
//! Quantizes the seeded query tensor, prints original and quantized sizes
//! with the compression ratio, and checks the round-trip error against the
//! half-step bound.

use nanotensor::{dequantize, quantize_symmetric, QuantizedTensor, Tensor};

use super::{kib, print_banner, Workload};
use crate::config::DemoConfig;

pub fn execute(config: &DemoConfig) -> anyhow::Result<()> {
    print_banner("nanotensor · Quantization");
    let workload = Workload::seeded(config)?;
    let quantized = report(&workload.q);

    let max_err = max_round_trip_error(&workload.q, &quantized);
    let bound = quantized.scale() / 2.0;
    println!(
        "  Max round-trip error: {max_err:.6} (half-step bound {bound:.6})",
    );
    if max_err > bound * (1.0 + 1e-4) {
        tracing::warn!(max_err, bound, "round-trip error exceeds half a quantization step");
    }
    Ok(())
}

/// Quantizes `tensor`, prints the size comparison, and returns the encoding.
pub(crate) fn report(tensor: &Tensor) -> QuantizedTensor {
    println!("  [OPTIMIZATION] Quantizing tensor (FP32 -> INT8)...");
    let quantized = quantize_symmetric(&tensor.view());
    tracing::info!(scale = quantized.scale(), "quantized {}", tensor.shape());

    println!("  Original size:     {:>10.2} KB", kib(tensor.size_bytes()));
    println!(
        "  Quantized size:    {:>10.2} KB ({})",
        kib(quantized.size_bytes()),
        quantized.dtype()
    );
    println!("  Compression ratio: {:>10.2}x", quantized.compression_ratio());
    println!("  Scale:             {:>10.6}", quantized.scale());
    quantized
}

/// Largest absolute difference between `original` and its dequantized form.
pub(crate) fn max_round_trip_error(original: &Tensor, quantized: &QuantizedTensor) -> f32 {
    let restored = dequantize(quantized);
    original
        .data()
        .iter()
        .zip(restored.data())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_error_within_half_step() {
        let config = DemoConfig {
            seq_len: 8,
            embed_dim: 8,
            ..DemoConfig::default()
        };
        let workload = Workload::seeded(&config).unwrap();
        let quantized = report(&workload.q);

        let err = max_round_trip_error(&workload.q, &quantized);
        assert!(err <= quantized.scale() * (0.5 + 1e-4));
        assert!(quantized.compression_ratio() > 3.0);
    }
}
