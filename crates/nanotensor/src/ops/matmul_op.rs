// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication operation.

use crate::{Shape, Tensor, TensorError, TensorView};

/// Performs matrix multiplication: `output = lhs @ rhs`.
///
/// Both inputs must be 2-D tensors with compatible inner dimensions:
/// `lhs` is `[M, K]`, `rhs` is `[K, N]`, and `output` must be `[M, N]`.
/// Every element of `output` is overwritten.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if either operand is not rank 2,
/// if the inner dimensions differ, or if `output` is not `[M, N]`.
pub fn matmul(
    lhs: &TensorView<'_>,
    rhs: &TensorView<'_>,
    output: &mut Tensor,
) -> Result<(), TensorError> {
    let Some((m, k, n)) = lhs.shape().matmul_dims(rhs.shape()) else {
        return Err(TensorError::ShapeMismatch {
            op: "matmul",
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    };

    let expected_shape = Shape::matrix(m, n);
    if output.shape() != &expected_shape {
        return Err(TensorError::ShapeMismatch {
            op: "matmul (output)",
            lhs: expected_shape,
            rhs: output.shape().clone(),
        });
    }

    matmul_f32(lhs.data(), rhs.data(), output.data_mut(), m, k, n);

    Ok(())
}

/// Portable f32 matrix multiplication.
///
/// Uses the ijk loop order with a single scalar accumulator per output
/// element, summed in strictly increasing `p`. Results are reproducible
/// bit-for-bit across runs and platforms.
fn matmul_f32(a: &[f32], b: &[f32], c: &mut [f32], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        let c_row = &mut c[i * n..(i + 1) * n];
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (p, &a_ip) in a_row.iter().enumerate() {
                acc += a_ip * b[p * n + j];
            }
            *c_ij = acc;
        }
    }
}
