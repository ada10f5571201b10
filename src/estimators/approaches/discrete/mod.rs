// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: symbolization, empirical distributions and the
// histogram-based entropies built on them.

pub mod binary;
pub mod discrete_utils;
pub mod shannon;
pub mod symbolize;

pub use binary::{BinaryEntropy, BinaryWeighting};
pub use shannon::ShannonEntropy;
