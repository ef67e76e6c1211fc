//! # Calculator Response Types
//!
//! The common output shape every calculator returns: a value, a display
//! suffix, and an ordered breakdown of derivation steps. The breakdown is
//! built in full before the response is constructed and is never mutated
//! afterwards; rendering it in order reproduces the derivation exactly.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "value": 8,
//!   "value_suffix": "",
//!   "breakdown": [
//!     { "label": "Front/back area", "text": "4m (W) × 3m (H) = 12m²" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One derivation step: a short label and the explanation text shown next
/// to it on an inspection report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub text: String,
}

impl BreakdownItem {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        BreakdownItem {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Simultaneous user capacity per height band.
///
/// Keys match the band heights in [`crate::constants::HEIGHT_BANDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserCapacity {
    pub users_1000mm: u32,
    pub users_1200mm: u32,
    pub users_1500mm: u32,
    pub users_1800mm: u32,
}

impl UserCapacity {
    /// Set the capacity for a band identified by its height in millimeters.
    /// Heights outside the standard bands are ignored.
    pub fn set_band(&mut self, height_mm: u32, capacity: u32) {
        match height_mm {
            1000 => self.users_1000mm = capacity,
            1200 => self.users_1200mm = capacity,
            1500 => self.users_1500mm = capacity,
            1800 => self.users_1800mm = capacity,
            _ => {}
        }
    }

    /// Capacity for a band identified by its height in millimeters.
    pub fn band(&self, height_mm: u32) -> Option<u32> {
        match height_mm {
            1000 => Some(self.users_1000mm),
            1200 => Some(self.users_1200mm),
            1500 => Some(self.users_1500mm),
            1800 => Some(self.users_1800mm),
            _ => None,
        }
    }
}

/// The value carried by a [`CalculatorResponse`]: a count, a measurement,
/// or the per-band capacity map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Integer result (anchor counts)
    Count(u32),
    /// Dimensioned or dimensionless numeric result
    Number(f64),
    /// User capacity per height band
    Capacity(UserCapacity),
}

impl ResponseValue {
    /// Numeric value, when this is a count or a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ResponseValue::Count(n) => Some(f64::from(*n)),
            ResponseValue::Number(x) => Some(*x),
            ResponseValue::Capacity(_) => None,
        }
    }

    /// Capacity map, when this is a capacity result.
    pub fn as_capacity(&self) -> Option<&UserCapacity> {
        match self {
            ResponseValue::Capacity(c) => Some(c),
            _ => None,
        }
    }
}

/// Output of every calculator: the result value, a unit suffix for display
/// ("m", or empty when dimensionless), and the ordered derivation trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    pub value: ResponseValue,
    pub value_suffix: String,
    pub breakdown: Vec<BreakdownItem>,
}

impl CalculatorResponse {
    pub fn new(
        value: ResponseValue,
        value_suffix: impl Into<String>,
        breakdown: Vec<BreakdownItem>,
    ) -> Self {
        CalculatorResponse {
            value,
            value_suffix: value_suffix.into(),
            breakdown,
        }
    }

    /// Display form of the value with its suffix, e.g. "1.5m".
    pub fn display_value(&self) -> String {
        match &self.value {
            ResponseValue::Count(n) => format!("{}{}", n, self.value_suffix),
            ResponseValue::Number(x) => format!("{}{}", x, self.value_suffix),
            ResponseValue::Capacity(c) => format!(
                "{}/{}/{}/{} users",
                c.users_1000mm, c.users_1200mm, c.users_1500mm, c.users_1800mm
            ),
        }
    }
}

// ============================================================================
// Number Formatting
// ============================================================================

/// Round to `dp` decimal places.
pub(crate) fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}

/// Fixed one-decimal display with a trailing `.0` stripped, the convention
/// used in capacity breakdown text: `10` not `10.0`, `10.5` unchanged.
pub(crate) fn format_number(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => formatted,
    }
}

/// Display a measurement rounded to two decimal places, trimming trailing
/// zeros (`2` not `2.00`, `0.25` unchanged). Used for slide heights in text.
pub(crate) fn format_metres(value: f64) -> String {
    round_dp(value, 2).to_string()
}
