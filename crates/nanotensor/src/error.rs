// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor construction and kernels.

use crate::Shape;

/// Errors that can occur when building tensors or running kernels.
///
/// Every kernel validates its operands before touching the output, so an
/// `Err` always leaves the caller's tensors unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    /// Operand shapes are not conformant for the requested operation.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A shape was empty or contained a zero-sized dimension.
    #[error("invalid shape {dims:?}: dimensions must be non-empty and >= 1")]
    InvalidShape { dims: Vec<usize> },

    /// A flat buffer's length does not match the element count of its shape.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
