// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discretization of real values into integer symbols.
//!
//! A [`Symbolizer`] is a total, deterministic map from a value (`f64` unless
//! stated otherwise) to an `i64` symbol. The discrete
//! estimators only ever count symbols, so swapping the symbolizer changes the
//! binning without touching the counting code.
//!
//! Conversions saturate at the `i64` bounds and map `NaN` to `0`, following the
//! semantics of Rust's float-to-int `as` casts.

/// Total, deterministic discretization of a value of type `T`.
pub trait Symbolizer<T = f64> {
    fn symbol(&self, value: T) -> i64;
}

/// Fixed-point binning: `floor(value * scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPrecision {
    pub scale: f64,
}

impl FixedPrecision {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Symbolizer for FixedPrecision {
    fn symbol(&self, value: f64) -> i64 {
        (value * self.scale).floor() as i64
    }
}

/// Default binning for real-valued series: buckets of width 0.01, `floor(value * 100)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hundredths;

impl Symbolizer for Hundredths {
    fn symbol(&self, value: f64) -> i64 {
        FixedPrecision::new(100.0).symbol(value)
    }
}

/// Identity symbols for data that is already discrete, such as the bits and
/// binary derivatives of BiEntropy. Fractional parts of `f64` input are
/// truncated toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSymbol;

impl Symbolizer for RawSymbol {
    fn symbol(&self, value: f64) -> i64 {
        value as i64
    }
}

impl Symbolizer<u8> for RawSymbol {
    fn symbol(&self, value: u8) -> i64 {
        i64::from(value)
    }
}

impl<T, F: Fn(T) -> i64> Symbolizer<T> for F {
    fn symbol(&self, value: T) -> i64 {
        self(value)
    }
}
