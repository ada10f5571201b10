// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![cfg(feature = "gpu_support")]

use tsentropy::estimators::approaches::template::matching::count_matches_brute_force;
use tsentropy::estimators::approaches::template::template_gpu::{
    GPU_MIN_TEMPLATES, gpu_count_matches,
};
use tsentropy::estimators::utils::statistics::standard_deviation;

use crate::test_helpers::generate_gaussian_series;

#[test]
fn gpu_declines_short_series() {
    let series = generate_gaussian_series(100, 0.0, 1.0, 1);
    assert!(gpu_count_matches(&series, 2, 0.2).is_none());
}

#[test]
#[ignore] // requires a GPU adapter
fn gpu_counts_close_to_cpu() {
    let series = generate_gaussian_series(GPU_MIN_TEMPLATES + 500, 0.0, 1.0, 2);
    let tol = 0.2 * standard_deviation(&series);
    let cpu = count_matches_brute_force(&series, 2, tol);
    let Some(gpu) = gpu_count_matches(&series, 2, tol) else {
        eprintln!("no GPU adapter, skipping");
        return;
    };
    // single precision may flip pairs that sit on the tolerance boundary
    let slack = |a: u64, b: u64| a.abs_diff(b) as f64 <= 1e-3 * a.max(1) as f64;
    assert!(slack(cpu.cm, gpu.cm), "cm {} vs {}", cpu.cm, gpu.cm);
    assert!(slack(cpu.cm1, gpu.cm1), "cm1 {} vs {}", cpu.cm1, gpu.cm1);
}
