//! # Slide Calculator
//!
//! Runout and containment sizing for inflatable slides per
//! EN 14960-1:2019 Sections 4.2.9 and 4.2.11.
//!
//! ## Containment Bands
//!
//! Containment requirements depend on the platform height band. Bands are
//! half-open `[lo, hi)` except the final closed band:
//!
//! | Platform height | Requirement                                    |
//! |-----------------|------------------------------------------------|
//! | under 0.6 m     | No containing walls required                   |
//! | 0.6 - 3.0 m     | Walls at least the maximum user height         |
//! | 3.0 - 6.0 m     | Walls 1.25× user height OR a permanent roof    |
//! | 6.0 - 8.0 m     | Walls 1.25× user height AND a permanent roof   |
//! | over 8.0 m      | Exceeds safe limits                            |
//!
//! One classifier ([`PlatformBand`]) drives the required value, the
//! breakdown text, and the compliance predicate so the three cannot drift.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::{format_metres, round_dp, BreakdownItem, CalculatorResponse, ResponseValue};

// ============================================================================
// Platform Height Bands
// ============================================================================

/// Containment band for a platform height per EN 14960-1:2019 4.2.9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformBand {
    /// Under 0.6 m: no containing walls required
    NoWallsRequired,
    /// 0.6 m to 3.0 m: walls at least the maximum user height
    BasicWalls,
    /// 3.0 m to 6.0 m: walls 1.25× user height, or a permanent roof instead
    EnhancedWalls,
    /// 6.0 m to 8.0 m: walls 1.25× user height and a permanent roof
    EnhancedWallsWithRoof,
    /// Over 8.0 m: beyond the safe height limit
    ExceedsSafeLimit,
}

impl PlatformBand {
    /// Classify a non-negative platform height into its containment band.
    pub fn classify(platform_height: f64) -> Self {
        let thresholds = constants::SLIDE_HEIGHT_THRESHOLDS;
        if platform_height < thresholds.no_walls_required {
            PlatformBand::NoWallsRequired
        } else if platform_height < thresholds.basic_walls {
            PlatformBand::BasicWalls
        } else if platform_height < thresholds.enhanced_walls {
            PlatformBand::EnhancedWalls
        } else if platform_height <= thresholds.max_safe_height {
            PlatformBand::EnhancedWallsWithRoof
        } else {
            PlatformBand::ExceedsSafeLimit
        }
    }

    /// Required containing wall height for this band, in meters.
    ///
    /// For the enhanced bands this is always the multiplied value, even
    /// when a permanent roof satisfies the requirement instead; only the
    /// breakdown commentary reflects the roof.
    pub fn required_wall_height(&self, user_height: f64) -> f64 {
        let multiplier = constants::WALL_HEIGHT.enhanced_height_multiplier;
        match self {
            PlatformBand::NoWallsRequired | PlatformBand::ExceedsSafeLimit => 0.0,
            PlatformBand::BasicWalls => user_height,
            PlatformBand::EnhancedWalls | PlatformBand::EnhancedWallsWithRoof => {
                round_dp(user_height * multiplier, 2)
            }
        }
    }

    /// Display text for the band's height range.
    pub fn range_text(&self) -> &'static str {
        match self {
            PlatformBand::NoWallsRequired => "Under 0.6m",
            PlatformBand::BasicWalls => "0.6m - 3.0m",
            PlatformBand::EnhancedWalls => "3.0m - 6.0m",
            PlatformBand::EnhancedWallsWithRoof => "Over 6.0m",
            PlatformBand::ExceedsSafeLimit => "Exceeds safe limits",
        }
    }
}

// ============================================================================
// Runout
// ============================================================================

/// Required runout length in meters, without breakdown.
///
/// Half the platform height, floored at the 0.3 m absolute minimum, plus
/// 0.5 m when a stop-wall is fitted at the runout's end. Non-positive
/// platform heights yield 0.
pub fn runout_value(platform_height: f64, has_stop_wall: bool) -> f64 {
    if platform_height <= 0.0 {
        return 0.0;
    }

    let runout = constants::RUNOUT;
    let calculated = platform_height * runout.platform_height_ratio;
    let base = calculated.max(runout.minimum_runout_m);

    if has_stop_wall {
        base + runout.stop_wall_addition
    } else {
        base
    }
}

/// Required runout length with the full derivation breakdown.
pub fn required_runout(platform_height: f64, has_stop_wall: bool) -> CalculatorResponse {
    if platform_height <= 0.0 {
        return CalculatorResponse::new(ResponseValue::Number(0.0), "m", vec![]);
    }

    let runout = constants::RUNOUT;
    let calculated = platform_height * runout.platform_height_ratio;
    let base = runout_value(platform_height, false);
    let final_runout = runout_value(platform_height, has_stop_wall);

    let mut breakdown = vec![
        BreakdownItem::new(
            "50% calculation",
            format!(
                "{}m × {} = {}m",
                format_metres(platform_height),
                runout.platform_height_ratio,
                format_metres(calculated)
            ),
        ),
        BreakdownItem::new(
            "Minimum requirement",
            format!(
                "{}m ({}mm)",
                runout.minimum_runout_m,
                (runout.minimum_runout_m * 1000.0) as i64
            ),
        ),
        BreakdownItem::new(
            "Base runout",
            format!(
                "Maximum of {}m and {}m = {}m",
                format_metres(calculated),
                runout.minimum_runout_m,
                format_metres(base)
            ),
        ),
    ];

    if has_stop_wall {
        breakdown.push(BreakdownItem::new(
            "Stop-wall addition",
            format!(
                "{}m + {}m = {}m",
                format_metres(base),
                runout.stop_wall_addition,
                format_metres(final_runout)
            ),
        ));
    }

    CalculatorResponse::new(ResponseValue::Number(final_runout), "m", breakdown)
}

/// Whether an actual runout length satisfies the requirement for the
/// given platform.
pub fn meets_runout_requirements(
    runout_length: f64,
    platform_height: f64,
    has_stop_wall: bool,
) -> bool {
    runout_length >= runout_value(platform_height, has_stop_wall)
}

/// The runout formula as display text, e.g. "50% of platform height,
/// minimum 300mm".
pub fn runout_formula_text() -> String {
    let runout = constants::RUNOUT;
    format!(
        "{}% of platform height, minimum {}mm",
        (runout.platform_height_ratio * 100.0) as i64,
        (runout.minimum_runout_m * 1000.0) as i64
    )
}

// ============================================================================
// Containing Walls
// ============================================================================

/// Required containing wall height with the full derivation breakdown.
///
/// `has_permanent_roof` is tri-state: `Some(true)` and `Some(false)` add a
/// roof-status line to the breakdown where the band makes the roof
/// relevant; `None` (unknown) omits it. Non-positive platform or user
/// heights short-circuit to a zero value with an empty breakdown.
pub fn wall_height_requirements(
    platform_height: f64,
    user_height: f64,
    has_permanent_roof: Option<bool>,
) -> CalculatorResponse {
    if platform_height <= 0.0 || user_height <= 0.0 {
        return CalculatorResponse::new(ResponseValue::Number(0.0), "m", vec![]);
    }

    let band = PlatformBand::classify(platform_height);
    let required_height = band.required_wall_height(user_height);
    let breakdown = wall_height_breakdown(band, user_height, has_permanent_roof);

    CalculatorResponse::new(ResponseValue::Number(required_height), "m", breakdown)
}

fn wall_height_breakdown(
    band: PlatformBand,
    user_height: f64,
    has_permanent_roof: Option<bool>,
) -> Vec<BreakdownItem> {
    let multiplier = constants::WALL_HEIGHT.enhanced_height_multiplier;
    let required = band.required_wall_height(user_height);

    match band {
        PlatformBand::NoWallsRequired => vec![
            BreakdownItem::new("Height range", band.range_text()),
            BreakdownItem::new("Requirement", "No containing walls required"),
        ],
        PlatformBand::BasicWalls => vec![
            BreakdownItem::new("Height range", band.range_text()),
            BreakdownItem::new(
                "Calculation",
                format!("{}m (user height)", format_metres(user_height)),
            ),
        ],
        PlatformBand::EnhancedWalls => {
            if has_permanent_roof == Some(true) {
                // Roof substitutes for the heightened walls in this band
                vec![
                    BreakdownItem::new("Height range", band.range_text()),
                    BreakdownItem::new(
                        "Wall requirement",
                        format!(
                            "{}m ({}× user height) - skipped due to permanent roof",
                            required, multiplier
                        ),
                    ),
                    BreakdownItem::new(
                        "Alternative requirement",
                        "Permanent roof (can replace heightened walls)",
                    ),
                    BreakdownItem::new("Permanent roof", "Fitted ✓"),
                ]
            } else {
                let mut breakdown = vec![
                    BreakdownItem::new("Height range", band.range_text()),
                    BreakdownItem::new(
                        "Calculation",
                        format!(
                            "{}m × {} = {}m",
                            format_metres(user_height),
                            multiplier,
                            required
                        ),
                    ),
                    BreakdownItem::new(
                        "Alternative requirement",
                        "Permanent roof (can replace heightened walls)",
                    ),
                ];
                if has_permanent_roof == Some(false) {
                    breakdown.push(BreakdownItem::new("Permanent roof", "Not fitted ✗"));
                }
                breakdown
            }
        }
        PlatformBand::EnhancedWallsWithRoof => {
            let mut breakdown = vec![
                BreakdownItem::new("Height range", band.range_text()),
                BreakdownItem::new(
                    "Calculation",
                    format!(
                        "{}m × {} = {}m",
                        format_metres(user_height),
                        multiplier,
                        required
                    ),
                ),
                BreakdownItem::new("Additional requirement", "Permanent roof required"),
            ];
            match has_permanent_roof {
                Some(true) => {
                    breakdown.push(BreakdownItem::new("Permanent roof", "Required and fitted ✓"))
                }
                Some(false) => breakdown.push(BreakdownItem::new(
                    "Permanent roof",
                    "Required but not fitted ✗",
                )),
                None => {}
            }
            breakdown
        }
        PlatformBand::ExceedsSafeLimit => vec![BreakdownItem::new(
            "Status",
            "Platform height exceeds safe limits",
        )],
    }
}

/// Whether the fitted containment satisfies the band requirements.
///
/// Replicates the band logic as a boolean: no walls needed under 0.6 m,
/// walls matching user height to 3.0 m, 1.25× walls or a roof to 6.0 m,
/// both to 8.0 m, and always false beyond the safe height limit.
pub fn meets_height_requirements(
    platform_height: f64,
    user_height: f64,
    containing_wall_height: f64,
    has_permanent_roof: bool,
) -> bool {
    if platform_height < 0.0 {
        return false;
    }

    let multiplier = constants::WALL_HEIGHT.enhanced_height_multiplier;
    match PlatformBand::classify(platform_height) {
        PlatformBand::NoWallsRequired => true,
        PlatformBand::BasicWalls => containing_wall_height >= user_height,
        PlatformBand::EnhancedWalls => {
            has_permanent_roof || containing_wall_height >= user_height * multiplier
        }
        PlatformBand::EnhancedWallsWithRoof => {
            has_permanent_roof && containing_wall_height >= user_height * multiplier
        }
        PlatformBand::ExceedsSafeLimit => false,
    }
}

/// Whether a permanent roof is mandatory (not merely an alternative) for
/// the given platform height: true strictly above 6.0 m.
pub fn requires_permanent_roof(platform_height: f64) -> bool {
    platform_height > constants::SLIDE_HEIGHT_THRESHOLDS.enhanced_walls
}

/// The containing wall rule as display text.
pub fn wall_height_requirement_text() -> String {
    format!(
        "Containing walls required {} times user height",
        constants::WALL_HEIGHT.enhanced_height_multiplier
    )
}

// ============================================================================
// Static Reference Tables
// ============================================================================

/// Containing wall requirements by platform height band, as report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainingWallRequirements {
    pub under_600mm: &'static str,
    pub between_600_3000mm: &'static str,
    pub between_3000_6000mm: &'static str,
    pub over_6000mm: &'static str,
}

/// Runout requirements as report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunoutRequirements {
    pub minimum_length: &'static str,
    pub absolute_minimum: &'static str,
    pub maximum_inclination: &'static str,
    pub stop_wall_addition: &'static str,
    pub wall_height_requirement: &'static str,
}

/// Additional slide safety factors as report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSafetyFactors {
    pub first_metre_gradient: &'static str,
    pub surface_requirements: &'static str,
    pub edge_protection: &'static str,
}

/// Comprehensive slide safety requirements for report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSafetyRequirements {
    pub containing_wall_heights: ContainingWallRequirements,
    pub runout_requirements: RunoutRequirements,
    pub safety_factors: SlideSafetyFactors,
}

/// The full slide requirement reference table from EN 14960:2019.
pub fn safety_requirements() -> SlideSafetyRequirements {
    SlideSafetyRequirements {
        containing_wall_heights: ContainingWallRequirements {
            under_600mm: "No containing walls required",
            between_600_3000mm: "Containing walls required of user height",
            between_3000_6000mm: "Containing walls required 1.25 times user height",
            over_6000mm: "Both containing walls AND permanent roof required",
        },
        runout_requirements: RunoutRequirements {
            minimum_length: "50% of highest platform height",
            absolute_minimum: "300mm in any case",
            maximum_inclination: "Not more than 10°",
            stop_wall_addition: "If fitted, adds 50cm to required run-out length",
            wall_height_requirement: "50% of user height on run-out sides",
        },
        safety_factors: SlideSafetyFactors {
            first_metre_gradient: "Special requirements for first metre of slope",
            surface_requirements: "Non-slip surface material required",
            edge_protection: "Rounded edges and smooth transitions",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------
    // Runout
    // ------------------------------------------------------------------

    #[test]
    fn test_runout_half_platform_height() {
        assert_eq!(runout_value(2.0, false), 1.0);
    }

    #[test]
    fn test_runout_minimum_clamp() {
        assert_eq!(runout_value(0.5, false), 0.3);
        assert_eq!(runout_value(0.1, false), 0.3);
    }

    #[test]
    fn test_runout_stop_wall_addition() {
        assert_eq!(runout_value(2.0, true), 1.5);
        assert_eq!(runout_value(0.5, true), 0.8);
    }

    #[test]
    fn test_runout_non_positive_height() {
        assert_eq!(runout_value(0.0, false), 0.0);
        assert_eq!(runout_value(-1.0, true), 0.0);
    }

    #[test]
    fn test_required_runout_breakdown() {
        let result = required_runout(2.0, false);
        assert_eq!(result.value, ResponseValue::Number(1.0));
        assert_eq!(result.value_suffix, "m");
        assert_eq!(
            result.breakdown,
            vec![
                BreakdownItem::new("50% calculation", "2m × 0.5 = 1m"),
                BreakdownItem::new("Minimum requirement", "0.3m (300mm)"),
                BreakdownItem::new("Base runout", "Maximum of 1m and 0.3m = 1m"),
            ]
        );
    }

    #[test]
    fn test_required_runout_shows_minimum_winning() {
        let result = required_runout(0.5, false);
        assert_eq!(result.value, ResponseValue::Number(0.3));
        assert_eq!(result.breakdown[0].text, "0.5m × 0.5 = 0.25m");
        assert_eq!(result.breakdown[2].text, "Maximum of 0.25m and 0.3m = 0.3m");
    }

    #[test]
    fn test_required_runout_stop_wall_step() {
        let result = required_runout(2.0, true);
        assert_eq!(result.value, ResponseValue::Number(1.5));
        let last = result.breakdown.last().unwrap();
        assert_eq!(last.label, "Stop-wall addition");
        assert_eq!(last.text, "1m + 0.5m = 1.5m");
    }

    #[test]
    fn test_required_runout_short_circuit() {
        let result = required_runout(-2.0, true);
        assert_eq!(result.value, ResponseValue::Number(0.0));
        assert_eq!(result.value_suffix, "m");
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_meets_runout_requirements() {
        assert!(meets_runout_requirements(1.0, 2.0, false));
        assert!(!meets_runout_requirements(0.9, 2.0, false));
        assert!(!meets_runout_requirements(1.0, 2.0, true));
        assert!(meets_runout_requirements(1.5, 2.0, true));
    }

    #[test]
    fn test_runout_formula_text() {
        assert_eq!(runout_formula_text(), "50% of platform height, minimum 300mm");
    }

    // ------------------------------------------------------------------
    // Band classification
    // ------------------------------------------------------------------

    #[test]
    fn test_band_boundaries_half_open() {
        assert_eq!(PlatformBand::classify(0.0), PlatformBand::NoWallsRequired);
        assert_eq!(PlatformBand::classify(0.59), PlatformBand::NoWallsRequired);
        assert_eq!(PlatformBand::classify(0.6), PlatformBand::BasicWalls);
        assert_eq!(PlatformBand::classify(2.99), PlatformBand::BasicWalls);
        assert_eq!(PlatformBand::classify(3.0), PlatformBand::EnhancedWalls);
        assert_eq!(PlatformBand::classify(6.0), PlatformBand::EnhancedWallsWithRoof);
        assert_eq!(PlatformBand::classify(8.0), PlatformBand::EnhancedWallsWithRoof);
        assert_eq!(PlatformBand::classify(8.01), PlatformBand::ExceedsSafeLimit);
    }

    // ------------------------------------------------------------------
    // Wall heights
    // ------------------------------------------------------------------

    #[test]
    fn test_wall_height_basic_band() {
        let result = wall_height_requirements(2.0, 1.5, None);
        assert_eq!(result.value, ResponseValue::Number(1.5));
        assert_eq!(
            result.breakdown,
            vec![
                BreakdownItem::new("Height range", "0.6m - 3.0m"),
                BreakdownItem::new("Calculation", "1.5m (user height)"),
            ]
        );
    }

    #[test]
    fn test_wall_height_no_walls_band() {
        let result = wall_height_requirements(0.5, 1.5, None);
        assert_eq!(result.value, ResponseValue::Number(0.0));
        assert_eq!(result.breakdown[0].text, "Under 0.6m");
        assert_eq!(result.breakdown[1].text, "No containing walls required");
    }

    #[test]
    fn test_wall_height_enhanced_band_no_roof_flag() {
        let result = wall_height_requirements(4.0, 2.0, None);
        assert_eq!(result.value, ResponseValue::Number(2.5));
        assert_eq!(
            result.breakdown,
            vec![
                BreakdownItem::new("Height range", "3.0m - 6.0m"),
                BreakdownItem::new("Calculation", "2m × 1.25 = 2.5m"),
                BreakdownItem::new(
                    "Alternative requirement",
                    "Permanent roof (can replace heightened walls)"
                ),
            ]
        );
    }

    #[test]
    fn test_wall_height_enhanced_band_roof_fitted() {
        let result = wall_height_requirements(4.0, 2.0, Some(true));
        // Value stays the formula result; only the commentary changes
        assert_eq!(result.value, ResponseValue::Number(2.5));
        assert_eq!(
            result.breakdown[1].text,
            "2.5m (1.25× user height) - skipped due to permanent roof"
        );
        assert_eq!(result.breakdown[3], BreakdownItem::new("Permanent roof", "Fitted ✓"));
    }

    #[test]
    fn test_wall_height_enhanced_band_roof_absent() {
        let result = wall_height_requirements(4.0, 2.0, Some(false));
        assert_eq!(result.value, ResponseValue::Number(2.5));
        assert_eq!(
            result.breakdown.last().unwrap(),
            &BreakdownItem::new("Permanent roof", "Not fitted ✗")
        );
    }

    #[test]
    fn test_wall_height_top_band() {
        let result = wall_height_requirements(7.0, 2.0, Some(true));
        assert_eq!(result.value, ResponseValue::Number(2.5));
        assert_eq!(result.breakdown[0].text, "Over 6.0m");
        assert_eq!(result.breakdown[2].text, "Permanent roof required");
        assert_eq!(result.breakdown[3].text, "Required and fitted ✓");

        let missing = wall_height_requirements(7.0, 2.0, Some(false));
        assert_eq!(missing.breakdown[3].text, "Required but not fitted ✗");

        let unknown = wall_height_requirements(7.0, 2.0, None);
        assert_eq!(unknown.breakdown.len(), 3);
    }

    #[test]
    fn test_wall_height_exceeds_safe_limit() {
        let result = wall_height_requirements(9.0, 2.0, None);
        assert_eq!(result.value, ResponseValue::Number(0.0));
        assert_eq!(
            result.breakdown,
            vec![BreakdownItem::new("Status", "Platform height exceeds safe limits")]
        );
    }

    #[test]
    fn test_wall_height_short_circuit() {
        let zero_platform = wall_height_requirements(0.0, 1.5, None);
        assert_eq!(zero_platform.value, ResponseValue::Number(0.0));
        assert!(zero_platform.breakdown.is_empty());

        let zero_user = wall_height_requirements(2.0, 0.0, None);
        assert!(zero_user.breakdown.is_empty());
    }

    // ------------------------------------------------------------------
    // Compliance predicates
    // ------------------------------------------------------------------

    #[test]
    fn test_meets_height_requirements_per_band() {
        // No walls needed under 0.6m
        assert!(meets_height_requirements(0.5, 1.5, 0.0, false));
        // Basic band: wall must match user height
        assert!(meets_height_requirements(2.0, 1.5, 1.5, false));
        assert!(!meets_height_requirements(2.0, 1.5, 1.4, false));
        // Enhanced band: roof substitutes for 1.25x walls
        assert!(meets_height_requirements(4.0, 2.0, 0.0, true));
        assert!(meets_height_requirements(4.0, 2.0, 2.5, false));
        assert!(!meets_height_requirements(4.0, 2.0, 2.4, false));
        // Top band: both required
        assert!(meets_height_requirements(7.0, 2.0, 2.5, true));
        assert!(!meets_height_requirements(7.0, 2.0, 2.5, false));
        assert!(!meets_height_requirements(7.0, 2.0, 2.4, true));
        // Beyond safe limits
        assert!(!meets_height_requirements(9.0, 2.0, 10.0, true));
        assert!(!meets_height_requirements(-1.0, 2.0, 10.0, true));
    }

    #[test]
    fn test_requires_permanent_roof_boundary() {
        assert!(!requires_permanent_roof(6.0));
        assert!(requires_permanent_roof(6.01));
        assert!(requires_permanent_roof(9.0));
        assert!(!requires_permanent_roof(0.0));
    }

    #[test]
    fn test_reference_texts() {
        assert_eq!(
            wall_height_requirement_text(),
            "Containing walls required 1.25 times user height"
        );
        let reqs = safety_requirements();
        assert_eq!(reqs.containing_wall_heights.between_3000_6000mm, wall_height_requirement_text());
        assert_eq!(reqs.runout_requirements.absolute_minimum, "300mm in any case");
    }

    proptest! {
        #[test]
        fn prop_roof_requirement_matches_threshold(h in -1.0f64..12.0) {
            prop_assert_eq!(requires_permanent_roof(h), h > 6.0);
        }

        #[test]
        fn prop_wall_value_independent_of_roof_flag(
            platform in 3.0f64..5.999,
            user in 0.1f64..2.5,
        ) {
            let with_roof = wall_height_requirements(platform, user, Some(true));
            let without = wall_height_requirements(platform, user, Some(false));
            prop_assert_eq!(with_roof.value, without.value);
        }

        #[test]
        fn prop_runout_floor(h in 0.001f64..8.0) {
            prop_assert!(runout_value(h, false) >= 0.3);
        }
    }
}
