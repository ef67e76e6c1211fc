//! # User Capacity Calculator
//!
//! Maximum simultaneous users per height band from the usable play area,
//! per EN 14960-1:2019 Section 4.3. The standard names the factors to
//! consider (user height, playing area, activity type) without a formula;
//! the per-band area divisors in [`crate::constants::HEIGHT_BANDS`] are
//! established industry practice.
//!
//! ## Example
//!
//! ```rust
//! use en14960_core::calculators::user_capacity;
//!
//! let result = user_capacity::calculate(Some(10.0), Some(10.0), None, 0.0);
//! let capacity = result.value.as_capacity().unwrap();
//! assert_eq!(capacity.users_1000mm, 100);
//! assert_eq!(capacity.users_1800mm, 50);
//! ```

use crate::constants;
use crate::models::{
    format_number, round_dp, BreakdownItem, CalculatorResponse, ResponseValue, UserCapacity,
};

/// Calculate user capacity per height band.
///
/// `negative_adjustment_area` is the obstruction area to subtract; its sign
/// is ignored (the caller's negative value is treated as a magnitude).
/// Bands above `max_user_height` (when given, in meters) are reported as
/// not allowed. Absent dimensions yield the all-zero sentinel with an
/// "Invalid dimensions" breakdown entry.
pub fn calculate(
    length: Option<f64>,
    width: Option<f64>,
    max_user_height: Option<f64>,
    negative_adjustment_area: f64,
) -> CalculatorResponse {
    let (Some(length), Some(width)) = (length, width) else {
        return invalid_dimensions_result();
    };

    let total_area = round_dp(length * width, 2);
    let adjustment = negative_adjustment_area.abs();
    let usable_area = round_dp((total_area - adjustment).max(0.0), 2);

    let mut breakdown = area_breakdown(length, width, total_area, adjustment, usable_area);
    let capacities = band_capacities(usable_area, max_user_height, &mut breakdown);

    CalculatorResponse::new(ResponseValue::Capacity(capacities), "", breakdown)
}

fn area_breakdown(
    length: f64,
    width: f64,
    total_area: f64,
    adjustment: f64,
    usable_area: f64,
) -> Vec<BreakdownItem> {
    let mut breakdown = vec![BreakdownItem::new(
        "Total area",
        format!(
            "{}m × {}m = {}m²",
            format_number(length),
            format_number(width),
            format_number(total_area)
        ),
    )];

    if adjustment > 0.0 {
        breakdown.push(BreakdownItem::new(
            "Obstacles/adjustments",
            format!("- {}m²", format_number(adjustment)),
        ));
    }

    breakdown.push(BreakdownItem::new(
        "Usable area",
        format!("{}m²", format_number(usable_area)),
    ));
    breakdown.push(BreakdownItem::new("Capacity calculations", "Based on usable area"));

    breakdown
}

fn band_capacities(
    usable_area: f64,
    max_user_height: Option<f64>,
    breakdown: &mut Vec<BreakdownItem>,
) -> UserCapacity {
    let mut capacities = UserCapacity::default();

    for band in &constants::HEIGHT_BANDS {
        let label = format!("{}m users", format_number(band.height_m()));
        let allowed = max_user_height.map_or(true, |limit| band.height_m() <= limit);

        if allowed {
            let capacity = (usable_area / band.area_divisor).floor() as u32;
            capacities.set_band(band.height_mm, capacity);
            let noun = if capacity == 1 { "user" } else { "users" };
            breakdown.push(BreakdownItem::new(
                label,
                format!(
                    "{} ÷ {} = {} {}",
                    format_number(usable_area),
                    format_number(band.area_divisor),
                    capacity,
                    noun
                ),
            ));
        } else {
            capacities.set_band(band.height_mm, 0);
            breakdown.push(BreakdownItem::new(label, "Not allowed (exceeds height limit)"));
        }
    }

    capacities
}

fn invalid_dimensions_result() -> CalculatorResponse {
    CalculatorResponse::new(
        ResponseValue::Capacity(UserCapacity::default()),
        "",
        vec![BreakdownItem::new("Invalid dimensions", "")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_per_band() {
        let result = calculate(Some(10.0), Some(10.0), None, 0.0);
        let capacity = result.value.as_capacity().unwrap();
        assert_eq!(
            *capacity,
            UserCapacity {
                users_1000mm: 100,
                users_1200mm: 75, // 100 / 1.33 = 75.18
                users_1500mm: 60, // 100 / 1.66 = 60.24
                users_1800mm: 50,
            }
        );
    }

    #[test]
    fn test_breakdown_wording() {
        let result = calculate(Some(10.0), Some(10.0), None, 0.0);
        assert_eq!(result.breakdown[0].text, "10m × 10m = 100m²");
        assert_eq!(result.breakdown[1], BreakdownItem::new("Usable area", "100m²"));
        assert_eq!(
            result.breakdown[2],
            BreakdownItem::new("Capacity calculations", "Based on usable area")
        );
        assert_eq!(result.breakdown[3], BreakdownItem::new("1m users", "100 ÷ 1 = 100 users"));
        assert_eq!(result.breakdown[4].label, "1.2m users");
        assert_eq!(result.breakdown[4].text, "100 ÷ 1.3 = 75 users");
    }

    #[test]
    fn test_max_user_height_excludes_bands() {
        let result = calculate(Some(10.0), Some(10.0), Some(1.2), 0.0);
        let capacity = result.value.as_capacity().unwrap();
        assert_eq!(capacity.users_1000mm, 100);
        assert_eq!(capacity.users_1200mm, 75);
        assert_eq!(capacity.users_1500mm, 0);
        assert_eq!(capacity.users_1800mm, 0);

        let excluded: Vec<&BreakdownItem> = result
            .breakdown
            .iter()
            .filter(|item| item.text == "Not allowed (exceeds height limit)")
            .collect();
        assert_eq!(excluded.len(), 2);
        assert_eq!(excluded[0].label, "1.5m users");
        assert_eq!(excluded[1].label, "1.8m users");
    }

    #[test]
    fn test_adjustment_subtracted() {
        let result = calculate(Some(10.0), Some(10.0), None, 20.0);
        let capacity = result.value.as_capacity().unwrap();
        assert_eq!(capacity.users_1000mm, 80);
        assert_eq!(
            result.breakdown[1],
            BreakdownItem::new("Obstacles/adjustments", "- 20m²")
        );
        assert_eq!(result.breakdown[2].text, "80m²");
    }

    #[test]
    fn test_adjustment_sign_ignored() {
        let positive = calculate(Some(10.0), Some(10.0), None, 20.0);
        let negative = calculate(Some(10.0), Some(10.0), None, -20.0);
        assert_eq!(positive, negative);
    }

    #[test]
    fn test_adjustment_exceeding_area_clamps_to_zero() {
        let result = calculate(Some(5.0), Some(5.0), None, 30.0);
        let capacity = result.value.as_capacity().unwrap();
        assert_eq!(*capacity, UserCapacity::default());
        assert_eq!(result.breakdown[2], BreakdownItem::new("Usable area", "0m²"));
    }

    #[test]
    fn test_singular_user_wording() {
        // 1.5m × 1m = 1.5m²; 1.5 / 1.0 = 1 user
        let result = calculate(Some(1.5), Some(1.0), Some(1.0), 0.0);
        assert_eq!(result.breakdown[3].text, "1.5 ÷ 1 = 1 user");
    }

    #[test]
    fn test_missing_dimension_sentinel() {
        for result in [
            calculate(None, Some(10.0), None, 0.0),
            calculate(Some(10.0), None, None, 0.0),
        ] {
            assert_eq!(result.value.as_capacity(), Some(&UserCapacity::default()));
            assert_eq!(result.breakdown, vec![BreakdownItem::new("Invalid dimensions", "")]);
        }
    }
}
