// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nanotensor
//!
//! A minimal inference engine over dense `f32` buffers.
//!
//! This crate provides:
//! - [`Tensor`]: an owned, move-only, row-major `f32` buffer with its [`Shape`].
//! - [`TensorView`]: a borrowed read-only view used as kernel input.
//! - Kernels: [`matmul`], in-place row-wise [`softmax`], and single-head
//!   [`scaled_dot_product_attention`].
//! - [`quantize_symmetric`] / [`dequantize`]: per-tensor int8 quantization
//!   into a [`QuantizedTensor`].
//! - [`flat`]: shape-plus-flat-buffer entry points for host bindings.
//!
//! # Design Goals
//! - Single ownership: tensors are never cloned or shared; buffers are
//!   released exactly once.
//! - Shapes are validated at every call boundary and reported as
//!   [`TensorError`] instead of out-of-bounds access.
//! - Deterministic, single-threaded kernels with a fixed summation order.
//!
//! # Example
//! ```
//! use nanotensor::{scaled_dot_product_attention, Shape, Tensor};
//!
//! let shape = Shape::matrix(2, 2);
//! let q = Tensor::from_f32(shape.clone(), &[1.0, 0.0, 0.0, 1.0]).unwrap();
//! let mut out = Tensor::zeros(shape).unwrap();
//! scaled_dot_product_attention(&q.view(), &q.view(), &q.view(), &mut out).unwrap();
//! assert!(out.data()[0] > out.data()[1]);
//! ```

mod dtype;
mod error;
pub mod flat;
mod ops;
mod quant;
mod shape;
mod tensor;

pub use dtype::DType;
pub use error::TensorError;
pub use ops::{matmul, scaled_dot_product_attention, softmax};
pub use quant::{dequantize, quantize_symmetric, QuantizedTensor, I8_MAX};
pub use shape::Shape;
pub use tensor::{Tensor, TensorView};
