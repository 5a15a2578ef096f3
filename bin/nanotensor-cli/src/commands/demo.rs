// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nanotensor demo` command: the full walkthrough.
//!
//! Seeds a single-head self-attention layer, runs attention, then quantizes
//! the query tensor and reports the compression achieved.

use super::{attention, print_banner, print_tensor_stats, quantize, Workload};
use crate::config::DemoConfig;

pub fn execute(config: &DemoConfig) -> anyhow::Result<()> {
    print_banner("nanotensor · From-Scratch Inference Engine");

    let workload = Workload::seeded(config)?;
    println!("  Inputs (seed {}):", config.seed);
    print_tensor_stats("Q", &workload.q);
    print_tensor_stats("K", &workload.k);
    print_tensor_stats("V", &workload.v);
    println!();

    // ── Attention ──────────────────────────────────────────────
    attention::run(&workload)?;
    println!();

    // ── Quantization ───────────────────────────────────────────
    quantize::report(&workload.q);
    println!();

    println!("  [SYSTEM] nanotensor core modules online.");
    Ok(())
}
