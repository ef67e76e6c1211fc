//! # Play Area Validator
//!
//! Geometric consistency checks between a unit's overall dimensions, its
//! declared play area, and obstruction deductions. Every violated rule is
//! reported, not just the first, and the resolved measurements are
//! returned even on failure so a report can show what was checked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of a play area validation. `errors` is empty iff `valid`;
/// `measurements` holds every resolved field (including the computed
/// `total_play_area`), or is empty when inputs were missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayAreaValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub measurements: BTreeMap<String, f64>,
}

/// Validate play area geometry.
///
/// All five measurements are required; if any is absent the validation
/// fails immediately with a single generic error and no partial coercion.
/// Otherwise every failing check accumulates:
///
/// - play area length must not exceed unit length (equality allowed)
/// - play area width must not exceed unit width (equality allowed)
/// - total play area must be strictly greater than the adjustment area
///
/// The adjustment is compared as given: a negative value enlarges the
/// allowed area. That deliberately differs from the user capacity
/// calculator, which takes the magnitude (independent contracts).
pub fn validate(
    unit_length: Option<f64>,
    unit_width: Option<f64>,
    play_area_length: Option<f64>,
    play_area_width: Option<f64>,
    negative_adjustment_area: Option<f64>,
) -> PlayAreaValidation {
    let all = [
        unit_length,
        unit_width,
        play_area_length,
        play_area_width,
        negative_adjustment_area,
    ];
    if all.iter().any(Option::is_none) {
        return PlayAreaValidation {
            valid: false,
            errors: vec!["All measurements must be provided".to_string()],
            measurements: BTreeMap::new(),
        };
    }

    let [unit_length, unit_width, play_area_length, play_area_width, negative_adjustment_area] =
        all.map(|value| value.unwrap_or_default());

    let mut errors = Vec::new();

    if play_area_length > unit_length {
        errors.push(format!(
            "Play area length ({}) must be less than or equal to unit length ({})",
            play_area_length, unit_length
        ));
    }

    if play_area_width > unit_width {
        errors.push(format!(
            "Play area width ({}) must be less than or equal to unit width ({})",
            play_area_width, unit_width
        ));
    }

    let total_play_area = play_area_length * play_area_width;

    if total_play_area <= negative_adjustment_area {
        errors.push(format!(
            "Total play area ({}) must be greater than negative adjustment area ({})",
            total_play_area, negative_adjustment_area
        ));
    }

    let measurements = BTreeMap::from([
        ("unit_length".to_string(), unit_length),
        ("unit_width".to_string(), unit_width),
        ("play_area_length".to_string(), play_area_length),
        ("play_area_width".to_string(), play_area_width),
        ("total_play_area".to_string(), total_play_area),
        ("negative_adjustment_area".to_string(), negative_adjustment_area),
    ]);

    PlayAreaValidation {
        valid: errors.is_empty(),
        errors,
        measurements,
    }
}
