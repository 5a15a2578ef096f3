// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use std::fmt;

use crate::TensorError;

/// Describes the dimensionality of a [`crate::Tensor`].
///
/// A `Shape` on its own is just a list of dimensions; [`Shape::validate`]
/// is what [`crate::Tensor`] construction uses to reject empty shapes and
/// zero-sized dimensions. No tensor is ever built with the empty shape
/// (`Shape::default()`); it only appears on tensors whose buffer has been
/// moved out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    ///
    /// The empty shape holds no elements.
    pub fn num_elements(&self) -> usize {
        if self.dims.is_empty() {
            0
        } else {
            self.dims.iter().product()
        }
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the last dimension, which every kernel treats as the column axis.
    pub fn cols(&self) -> Option<usize> {
        self.dims.last().copied()
    }

    /// Returns `true` for the empty shape of a moved-out tensor.
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Computes the memory footprint in bytes for a given [`crate::DType`].
    pub fn size_bytes(&self, dtype: super::DType) -> usize {
        self.num_elements() * dtype.size_bytes()
    }

    /// Checks that the shape is non-empty and that every dimension is at least 1.
    ///
    /// # Errors
    /// Returns [`TensorError::InvalidShape`] otherwise.
    pub fn validate(&self) -> Result<(), TensorError> {
        if self.dims.is_empty() || self.dims.contains(&0) {
            return Err(TensorError::InvalidShape {
                dims: self.dims.clone(),
            });
        }
        Ok(())
    }

    /// Returns `(rows, cols)` if this is a rank-2 shape.
    pub fn as_matrix(&self) -> Option<(usize, usize)> {
        match *self.dims.as_slice() {
            [rows, cols] => Some((rows, cols)),
            _ => None,
        }
    }

    /// Returns `(M, K, N)` when `self` is `[M, K]` and `other` is `[K, N]`.
    ///
    /// Only rank-2 operands qualify; there is no batching or broadcasting.
    pub fn matmul_dims(&self, other: &Shape) -> Option<(usize, usize, usize)> {
        match (self.as_matrix(), other.as_matrix()) {
            (Some((m, k)), Some((k_rhs, n))) if k == k_rhs => Some((m, k, n)),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}
