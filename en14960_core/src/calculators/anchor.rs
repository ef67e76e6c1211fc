//! # Anchor Calculator
//!
//! Required ground anchorage per EN 14960-1:2019 Annex A.
//!
//! Wind force on each exposed surface is `0.5 × Cw × ρ × V² × A`, with the
//! aerodynamic terms pre-calculated to the area coefficient 114. Dividing by
//! the 1600 N holding force of a single anchor and applying the 1.5 safety
//! factor gives the anchors required per surface; front/back and left/right
//! pairs double the count, and the standard's floor of six anchorage points
//! always applies.
//!
//! ## Example
//!
//! ```rust
//! use en14960_core::calculators::anchor;
//!
//! let result = anchor::calculate(5.0, 4.0, 3.0);
//! assert_eq!(result.display_value(), "8");
//! ```

use crate::constants;
use crate::models::{round_dp, BreakdownItem, CalculatorResponse, ResponseValue};

/// Anchors required to restrain one exposed surface of the given area (m²).
///
/// Non-positive areas need no restraint and return 0; the protective
/// minimum is applied by [`calculate`], not here.
pub fn required_anchors(area_m2: f64) -> u32 {
    if area_m2 <= 0.0 {
        return 0;
    }

    let anchor = constants::ANCHOR;
    ((area_m2 * anchor.area_coefficient * anchor.safety_factor) / anchor.base_divisor).ceil() as u32
}

/// Calculate total required anchorage points for a unit of the given
/// dimensions (meters), with the full derivation breakdown.
///
/// Non-positive dimensions are not rejected: the affected surface term
/// contributes zero anchors and the six-anchor minimum governs the result.
pub fn calculate(length: f64, width: f64, height: f64) -> CalculatorResponse {
    let anchor = constants::ANCHOR;

    // Exposed surface areas, one decimal place
    let front_area = round_dp(width * height, 1);
    let sides_area = round_dp(length * height, 1);

    let required_front = required_anchors(front_area);
    let required_sides = required_anchors(sides_area);

    // One count per opposing pair of surfaces
    let calculated_total = (required_front + required_sides) * 2;
    let total_required = calculated_total.max(anchor.minimum_anchors);

    let formula_front = format!(
        "({} × {} × {}) ÷ {} = {}",
        front_area, anchor.area_coefficient, anchor.safety_factor, anchor.base_divisor, required_front
    );
    let formula_sides = format!(
        "({} × {} × {}) ÷ {} = {}",
        sides_area, anchor.area_coefficient, anchor.safety_factor, anchor.base_divisor, required_sides
    );

    let mut breakdown = vec![
        BreakdownItem::new(
            "Front/back area",
            format!("{}m (W) × {}m (H) = {}m²", width, height, front_area),
        ),
        BreakdownItem::new(
            "Sides area",
            format!("{}m (L) × {}m (H) = {}m²", length, height, sides_area),
        ),
        BreakdownItem::new("Front & back anchor counts", formula_front),
        BreakdownItem::new("Left & right anchor counts", formula_sides),
        BreakdownItem::new(
            "Required anchors",
            format!("({} + {}) × 2 = {}", required_front, required_sides, calculated_total),
        ),
    ];

    if calculated_total < anchor.minimum_anchors {
        breakdown.push(BreakdownItem::new(
            "EN 14960 minimum",
            format!(
                "Minimum {} anchors required, using {}",
                anchor.minimum_anchors, anchor.minimum_anchors
            ),
        ));
    }

    CalculatorResponse::new(ResponseValue::Count(total_required), "", breakdown)
}

/// The anchor count formula as display text.
pub fn formula_text() -> String {
    let anchor = constants::ANCHOR;
    format!(
        "((Area × {} × {}) ÷ {})",
        anchor.area_coefficient, anchor.safety_factor, anchor.base_divisor
    )
}

/// One-sentence description for report headers.
pub fn calculation_description() -> &'static str {
    "Anchors must be calculated based on the play area to ensure adequate ground restraint for wind loads."
}
