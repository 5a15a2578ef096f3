// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Softmax activation operation.

use crate::{Tensor, TensorError};

/// Computes softmax in place along the last dimension:
/// `x[i] = exp(x[i] - max) / sum(exp(x - max))`.
///
/// Each row is processed independently in three passes: find the row
/// maximum, replace every entry with `exp(entry - max)` while accumulating
/// the sum, then divide every entry by that sum. Subtracting the maximum
/// keeps the exponentials in `(0, 1]`, so large logits cannot overflow.
///
/// # Errors
/// Returns [`TensorError::InvalidShape`] if the tensor is empty (its buffer
/// was moved out).
pub fn softmax(x: &mut Tensor) -> Result<(), TensorError> {
    let cols = match x.shape().cols() {
        Some(cols) if !x.is_empty() => cols,
        _ => {
            return Err(TensorError::InvalidShape {
                dims: x.shape().dims().to_vec(),
            })
        }
    };

    for row in x.data_mut().chunks_exact_mut(cols) {
        softmax_row(row);
    }

    Ok(())
}

/// Stable softmax over a single non-empty row.
#[inline]
fn softmax_row(row: &mut [f32]) {
    let max_val = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let mut sum = 0.0f32;
    for v in row.iter_mut() {
        let e = (*v - max_val).exp();
        *v = e;
        sum += e;
    }

    for v in row.iter_mut() {
        *v /= sum;
    }
}
