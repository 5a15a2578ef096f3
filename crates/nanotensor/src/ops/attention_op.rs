// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Single-head scaled dot-product attention.

use crate::{matmul, softmax, Shape, Tensor, TensorError, TensorView};

/// Computes `output = softmax(q @ kᵀ / sqrt(dim)) @ v`.
///
/// `q`, `k`, `v` and `output` must all be `[seq, dim]`: a single head with
/// no batch axis. Scores are taken directly from rows of `k`, since the dot
/// product of query row `i` with key row `j` is entry `(i, j)` of `q @ kᵀ`;
/// `k` is never transposed in memory.
///
/// A fresh `[seq, seq]` scratch tensor holds the scores on every call.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if any operand is not rank 2 or
/// the four shapes disagree. Nothing is written to `output` in that case.
pub fn scaled_dot_product_attention(
    q: &TensorView<'_>,
    k: &TensorView<'_>,
    v: &TensorView<'_>,
    output: &mut Tensor,
) -> Result<(), TensorError> {
    q.shape().validate()?;
    let (seq, dim) = q.shape().as_matrix().ok_or_else(|| TensorError::ShapeMismatch {
        op: "attention (expected [seq, dim])",
        lhs: q.shape().clone(),
        rhs: k.shape().clone(),
    })?;

    for (op, other) in [
        ("attention (q vs k)", k.shape()),
        ("attention (q vs v)", v.shape()),
        ("attention (q vs output)", output.shape()),
    ] {
        if other != q.shape() {
            return Err(TensorError::ShapeMismatch {
                op,
                lhs: q.shape().clone(),
                rhs: other.clone(),
            });
        }
    }

    let mut scores = Tensor::zeros(Shape::matrix(seq, seq))?;
    tracing::trace!(seq, dim, "attention scratch allocated");

    let scale = 1.0 / (dim as f32).sqrt();
    for i in 0..seq {
        let q_row = q.row(i);
        for j in 0..seq {
            *scores.at_mut(i, j) = dot(q_row, k.row(j)) * scale;
        }
    }

    softmax(&mut scores)?;
    matmul(&scores.view(), v, output)
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    let mut acc = 0.0f32;
    for (&x, &y) in a.iter().zip(b) {
        acc += x * y;
    }
    acc
}
