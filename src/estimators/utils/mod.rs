// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Series transforms shared by the estimators: summary statistics,
// coarse-graining for multiscale analysis and binary derivatives.

pub mod binary_derivative;
pub mod coarse_grain;
pub mod statistics;
