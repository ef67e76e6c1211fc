//! # Safety Validators
//!
//! Threshold and consistency checks that produce pass/fail outcomes
//! rather than derivation breakdowns.
//!
//! ## Modules
//!
//! - [`material`] - Rope, fabric, thread and netting threshold predicates
//! - [`play_area`] - Geometric consistency between unit and play area

pub mod material;
pub mod play_area;

pub use play_area::PlayAreaValidation;
