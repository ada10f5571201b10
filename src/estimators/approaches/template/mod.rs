// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Template-matching estimators (Sample Entropy and its multiscale extension)
// together with the pair-counting backends they share.

pub mod matching;
pub mod multiscale;
pub mod sample_entropy;
#[cfg(feature = "gpu_support")]
pub mod template_gpu;
pub mod template_tree;

pub use multiscale::{MultiscaleEntropy, MultiscaleParams};
pub use sample_entropy::{MatchBackend, SampleEntropy, SampleEntropyOutcome, SampleEntropyParams};
