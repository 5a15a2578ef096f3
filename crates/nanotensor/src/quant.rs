// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Symmetric per-tensor int8 quantization.
//!
//! - Scale: `scale = max(|x|) / 127`, or `1 / 127` for an all-zero tensor.
//! - Quantize: `q = round(clamp(x / scale, -127, 127))`.
//! - Dequantize: `x ≈ q * scale`.
//!
//! The representable range is `[-127, 127]`, symmetric around zero; `-128`
//! is never produced.
//!
//! The scale is kept between `f32::MIN_POSITIVE` and the largest value whose
//! `127` multiple is finite, so both `1 / scale` and every dequantized value
//! stay finite. Non-finite inputs do not contribute to `max(|x|)`: infinities
//! saturate to `±127` and NaN encodes as `0`.

use crate::{DType, Shape, Tensor, TensorView};

/// Largest quantized magnitude.
pub const I8_MAX: f32 = 127.0;

/// Magnitude substituted for `max(|x|)` when the input is all zeros, so the
/// scale stays strictly positive.
const ZERO_INPUT_MAX_ABS: f32 = 1.0;

/// A lossy int8 encoding of a [`Tensor`] with one shared scale.
///
/// Built only by [`quantize_symmetric`] and never modified afterwards.
/// It holds its own copy of the shape and no reference to the source.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct QuantizedTensor {
    data: Vec<i8>,
    scale: f32,
    shape: Shape,
}

impl QuantizedTensor {
    /// Returns the quantized values in row-major order.
    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// Returns the scale factor; always `> 0`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the shape of the source tensor.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the storage type of the quantized values.
    pub fn dtype(&self) -> DType {
        DType::I8
    }

    /// Returns the number of quantized elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the encoded footprint in bytes: one byte per element plus the
    /// `f32` scale.
    pub fn size_bytes(&self) -> usize {
        self.size() * self.dtype().size_bytes() + DType::F32.size_bytes()
    }

    /// Ratio of the equivalent `f32` footprint to [`size_bytes`](Self::size_bytes).
    pub fn compression_ratio(&self) -> f64 {
        self.shape.size_bytes(DType::F32) as f64 / self.size_bytes() as f64
    }
}

/// Quantizes `input` to int8 with a single symmetric scale.
///
/// Never fails: an all-zero input uses a fallback magnitude of `1.0`, which
/// gives `scale = 1 / 127` and quantizes every element to `0`. Every finite
/// element round-trips within `scale / 2`.
///
/// # Examples
/// ```
/// use nanotensor::{quantize_symmetric, Shape, Tensor};
/// let t = Tensor::from_f32(Shape::vector(3), &[-2.0, 0.5, 1.0]).unwrap();
/// let q = quantize_symmetric(&t.view());
/// assert_eq!(q.data(), &[-127, 32, 64]);
/// ```
pub fn quantize_symmetric(input: &TensorView<'_>) -> QuantizedTensor {
    let max_abs = input
        .data()
        .iter()
        .filter(|x| x.is_finite())
        .fold(0.0f32, |m, &x| m.max(x.abs()));

    let scale = symmetric_scale(max_abs);
    let inv_scale = 1.0 / scale;
    tracing::trace!(max_abs, scale, elements = input.size(), "quantizing tensor");

    let data = input
        .data()
        .iter()
        .map(|&x| (x * inv_scale).clamp(-I8_MAX, I8_MAX).round() as i8)
        .collect();

    QuantizedTensor {
        data,
        scale,
        shape: input.shape().clone(),
    }
}

/// Maps `max(|x|)` to a strictly positive scale with a finite inverse.
fn symmetric_scale(max_abs: f32) -> f32 {
    let max_abs = if max_abs == 0.0 {
        ZERO_INPUT_MAX_ABS
    } else {
        max_abs
    };
    // Subnormal magnitudes would give a zero scale or an infinite inverse.
    let scale = (max_abs / I8_MAX).max(f32::MIN_POSITIVE);
    if (scale * I8_MAX).is_finite() {
        scale
    } else {
        // One ulp down brings `127 * scale` back under `f32::MAX`.
        f32::from_bits(scale.to_bits() - 1)
    }
}

/// Reconstructs an `f32` tensor from `input`: every element is `q * scale`.
pub fn dequantize(input: &QuantizedTensor) -> Tensor {
    let data = input
        .data
        .iter()
        .map(|&q| f32::from(q) * input.scale)
        .collect();
    Tensor::from_parts(input.shape.clone(), data)
}
