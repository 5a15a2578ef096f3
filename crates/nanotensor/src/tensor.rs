// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type and view abstractions.

use std::ops::{Index, IndexMut};

use crate::{DType, Shape, TensorError};

/// An owned, contiguous `f32` tensor.
///
/// `Tensor` is the only buffer owner in the engine. Its buffer is allocated
/// and zero-filled at construction and never resized afterwards, so
/// `size() == shape().num_elements()` holds for the whole lifetime.
///
/// # Ownership
/// `Tensor` deliberately does not implement `Clone`: a buffer has exactly one
/// owner and is released exactly once when that owner is dropped. Ownership
/// moves with ordinary Rust moves, or with [`Tensor::take`] when the source
/// binding has to stay usable, in which case it is left empty.
///
/// # Memory Layout
/// Data is stored in row-major (C) order. The last dimension is the column
/// axis for [`at`](Tensor::at) and for every row-wise kernel.
#[derive(Debug, Default, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f32>,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Errors
    /// Returns [`TensorError::InvalidShape`] if `shape` is empty or has a
    /// zero-sized dimension.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::{Tensor, Shape};
    /// let t = Tensor::zeros(Shape::matrix(2, 3)).unwrap();
    /// assert_eq!(t.size(), 6);
    /// assert_eq!(t.size_bytes(), 24); // 2 * 3 * 4 bytes
    /// ```
    pub fn zeros(shape: Shape) -> Result<Self, TensorError> {
        shape.validate()?;
        let size = shape.num_elements();
        Ok(Self {
            shape,
            data: vec![0.0; size],
        })
    }

    /// Creates a tensor from a slice of `f32` values in row-major order.
    ///
    /// # Errors
    /// Returns [`TensorError::InvalidShape`] for an invalid shape and
    /// [`TensorError::BufferSizeMismatch`] if `values.len()` differs from the
    /// shape's element count.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::{Tensor, Shape};
    /// let t = Tensor::from_f32(Shape::vector(3), &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(t.data(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_f32(shape: Shape, values: &[f32]) -> Result<Self, TensorError> {
        let mut tensor = Self::zeros(shape)?;
        if values.len() != tensor.size() {
            return Err(TensorError::BufferSizeMismatch {
                expected: tensor.size(),
                actual: values.len(),
            });
        }
        tensor.data.copy_from_slice(values);
        Ok(tensor)
    }

    /// Assembles a tensor from a shape that is already known to be valid
    /// and a buffer of matching length.
    pub(crate) fn from_parts(shape: Shape, data: Vec<f32>) -> Self {
        debug_assert_eq!(shape.num_elements(), data.len());
        Self { shape, data }
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type. Always [`DType::F32`].
    pub fn dtype(&self) -> DType {
        DType::F32
    }

    /// Returns the number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the memory footprint of the buffer in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size() * self.dtype().size_bytes()
    }

    /// Returns `true` if this tensor's buffer has been moved out.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the flat buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the flat buffer for writing.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns an immutable view over this tensor's data.
    pub fn view(&self) -> TensorView<'_> {
        TensorView {
            shape: &self.shape,
            data: &self.data,
        }
    }

    /// Returns the element at row `r`, column `c`, where the column count is
    /// the last dimension.
    ///
    /// Higher-rank tensors are addressed by the same flattening rule, not by
    /// true multi-dimensional indexing.
    ///
    /// # Panics
    /// Panics if `r * cols + c` is outside the buffer.
    pub fn at(&self, r: usize, c: usize) -> f32 {
        self.data[self.offset(r, c)]
    }

    /// Mutable counterpart of [`at`](Tensor::at).
    ///
    /// # Panics
    /// Panics if `r * cols + c` is outside the buffer.
    pub fn at_mut(&mut self, r: usize, c: usize) -> &mut f32 {
        let offset = self.offset(r, c);
        &mut self.data[offset]
    }

    /// Fills the tensor with a constant value.
    pub fn fill(&mut self, value: f32) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Moves the buffer and shape out, leaving `self` empty.
    ///
    /// The emptied tensor has size 0 and an empty shape; dropping it is a
    /// no-op. Taking from an already empty tensor returns another empty one.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::{Tensor, Shape};
    /// let mut a = Tensor::zeros(Shape::matrix(2, 2)).unwrap();
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.size(), 4);
    /// ```
    pub fn take(&mut self) -> Tensor {
        std::mem::take(self)
    }

    /// Consumes the tensor and returns its flat buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    fn offset(&self, r: usize, c: usize) -> usize {
        let cols = self.shape.cols().unwrap_or(0);
        r * cols + c
    }
}

impl Index<usize> for Tensor {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Tensor {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.data[idx]
    }
}

/// A borrowed, read-only view over a [`Tensor`]'s data.
///
/// Views are zero-copy and tied to the lifetime of the source tensor,
/// enforced by the borrow checker.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a> {
    shape: &'a Shape,
    data: &'a [f32],
}

impl<'a> TensorView<'a> {
    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    /// Returns the number of viewed elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the flat buffer.
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// Returns row `r` along the last dimension.
    ///
    /// # Panics
    /// Panics if the row lies outside the buffer.
    pub fn row(&self, r: usize) -> &'a [f32] {
        let cols = self.shape.cols().unwrap_or(0);
        &self.data[r * cols..(r + 1) * cols]
    }
}

impl<'a> From<&'a Tensor> for TensorView<'a> {
    fn from(tensor: &'a Tensor) -> Self {
        tensor.view()
    }
}
