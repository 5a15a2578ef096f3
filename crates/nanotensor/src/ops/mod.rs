// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor arithmetic operations.
//!
//! Each operation validates operand shapes up front and then writes into a
//! caller-provided tensor (or transforms one in place). Only attention
//! allocates, and only its own `[seq, seq]` score buffer.

mod attention_op;
mod matmul_op;
mod softmax_op;

pub use attention_op::scaled_dot_product_attention;
pub use matmul_op::matmul;
pub use softmax_op::softmax;
