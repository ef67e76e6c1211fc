//! # en14960_core - Inflatable Play Equipment Safety Engine
//!
//! `en14960_core` encodes the numeric safety-compliance formulas of
//! BS EN 14960:2019, the standard for inflatable play equipment: anchor
//! sizing, slide runout and containing-wall sizing, user capacity by height
//! band, material validation, and play area validation. Every calculator
//! returns its value together with a human-readable derivation trail for
//! display to an inspector or manufacturer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take measurements and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Always Answer**: Out-of-range input degrades to a defined sentinel
//!   result with an explanatory breakdown, never an error
//! - **Traceable**: Breakdown steps and constants cite the standard
//!
//! ## Quick Start
//!
//! ```rust
//! // 5m × 4m × 3m bouncy castle
//! let anchors = en14960_core::calculate_anchors(5.0, 4.0, 3.0);
//! assert_eq!(anchors.display_value(), "8");
//!
//! for step in &anchors.breakdown {
//!     println!("{}: {}", step.label, step.text);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - Anchor, slide and user capacity calculators
//! - [`validators`] - Material thresholds and play area geometry
//! - [`constants`] - The EN 14960 standard values, verbatim
//! - [`models`] - The common response shape (value + breakdown)
//! - [`api`] - Tagged JSON request dispatch
//! - [`errors`] - Structured error types for the request boundary

pub mod api;
pub mod calculators;
pub mod constants;
pub mod errors;
pub mod models;
pub mod validators;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use models::{BreakdownItem, CalculatorResponse, ResponseValue, UserCapacity};
pub use validators::PlayAreaValidation;

use constants::{HeightBand, MaterialStandards, Standards};

/// Calculate required ground anchorage points for a unit of the given
/// dimensions in meters. See [`calculators::anchor::calculate`].
pub fn calculate_anchors(length: f64, width: f64, height: f64) -> CalculatorResponse {
    calculators::anchor::calculate(length, width, height)
}

/// Calculate the required slide runout length in meters.
/// See [`calculators::slide::required_runout`].
pub fn calculate_slide_runout(platform_height: f64, has_stop_wall: bool) -> CalculatorResponse {
    calculators::slide::required_runout(platform_height, has_stop_wall)
}

/// Calculate the required containing wall height in meters.
/// `has_permanent_roof` may be unknown (`None`).
/// See [`calculators::slide::wall_height_requirements`].
pub fn calculate_wall_height(
    platform_height: f64,
    user_height: f64,
    has_permanent_roof: Option<bool>,
) -> CalculatorResponse {
    calculators::slide::wall_height_requirements(platform_height, user_height, has_permanent_roof)
}

/// Calculate maximum simultaneous users per height band.
/// See [`calculators::user_capacity::calculate`].
pub fn calculate_user_capacity(
    length: Option<f64>,
    width: Option<f64>,
    max_user_height: Option<f64>,
    negative_adjustment_area: f64,
) -> CalculatorResponse {
    calculators::user_capacity::calculate(length, width, max_user_height, negative_adjustment_area)
}

/// Whether a rope diameter in millimeters sits within the safe range.
/// See [`validators::material::valid_rope_diameter`].
pub fn valid_rope_diameter(diameter_mm: Option<f64>) -> bool {
    validators::material::valid_rope_diameter(diameter_mm)
}

/// Validate play area geometry against the unit dimensions.
/// See [`validators::play_area::validate`].
pub fn validate_play_area(
    unit_length: Option<f64>,
    unit_width: Option<f64>,
    play_area_length: Option<f64>,
    play_area_width: Option<f64>,
    negative_adjustment_area: Option<f64>,
) -> PlayAreaValidation {
    validators::play_area::validate(
        unit_length,
        unit_width,
        play_area_length,
        play_area_width,
        negative_adjustment_area,
    )
}

/// The user height bands defined by EN 14960:2019.
pub fn height_categories() -> &'static [HeightBand] {
    &constants::HEIGHT_BANDS
}

/// The material requirements defined by EN 14960:2019.
pub fn material_standards() -> &'static MaterialStandards {
    &constants::standards().material
}

/// The complete standards table.
pub fn standards() -> &'static Standards {
    constants::standards()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_matches_modules() {
        assert_eq!(
            calculate_anchors(5.0, 4.0, 3.0),
            calculators::anchor::calculate(5.0, 4.0, 3.0)
        );
        assert_eq!(
            calculate_slide_runout(2.0, true),
            calculators::slide::required_runout(2.0, true)
        );
        assert!(valid_rope_diameter(Some(25.0)));
    }

    #[test]
    fn test_standard_accessors() {
        assert_eq!(height_categories().len(), 4);
        assert_eq!(height_categories()[0].label, "1.0m (Young children)");
        assert_eq!(material_standards().thread.min_tensile_strength_n, 88.0);
        assert_eq!(standards().reinspection_interval_days, 365);
    }
}
