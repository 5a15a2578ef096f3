// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Flat-buffer entry points for host bindings.
//!
//! Foreign runtimes hand over plain `f32` arrays plus dimensions and expect
//! a plain array back. These functions do the copy in, run the kernel, and
//! copy out, so a binding layer never has to touch [`Tensor`] directly.

use crate::{scaled_dot_product_attention, Shape, Tensor, TensorError};

/// Runs single-head attention on row-major `[seq_len, embed_dim]` buffers and
/// returns the `[seq_len, embed_dim]` output as a new buffer.
///
/// # Errors
/// Returns [`TensorError::InvalidShape`] if either dimension is zero and
/// [`TensorError::BufferSizeMismatch`] if any input slice does not hold
/// exactly `seq_len * embed_dim` values.
///
/// # Examples
/// ```
/// let eye = [1.0f32, 0.0, 0.0, 1.0];
/// let out = nanotensor::flat::run_attention(2, 2, &eye, &eye, &eye).unwrap();
/// assert_eq!(out.len(), 4);
/// ```
pub fn run_attention(
    seq_len: usize,
    embed_dim: usize,
    q: &[f32],
    k: &[f32],
    v: &[f32],
) -> Result<Vec<f32>, TensorError> {
    let shape = Shape::matrix(seq_len, embed_dim);
    let q = Tensor::from_f32(shape.clone(), q)?;
    let k = Tensor::from_f32(shape.clone(), k)?;
    let v = Tensor::from_f32(shape.clone(), v)?;
    let mut output = Tensor::zeros(shape)?;

    scaled_dot_product_attention(&q.view(), &k.view(), &v.view(), &mut output)?;

    Ok(output.into_vec())
}
