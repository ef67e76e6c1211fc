//! # Safety Calculators
//!
//! The calculation + explanation engine: pure functions mapping physical
//! measurements to a value and an ordered derivation breakdown, governed by
//! the piecewise threshold rules of EN 14960-1:2019.
//!
//! ## Modules
//!
//! - [`anchor`] - Ground anchorage counts from wind-load surface areas
//! - [`slide`] - Runout lengths, containing wall heights, compliance checks
//! - [`user_capacity`] - Maximum simultaneous users per height band
//!
//! Each calculator is independent: it reads the constants table, applies
//! its formula, and returns a [`crate::models::CalculatorResponse`]. No
//! calculator consumes another's output.

pub mod anchor;
pub mod slide;
pub mod user_capacity;

pub use slide::PlatformBand;
