//! # Typed Request Boundary
//!
//! A JSON-first dispatch surface for consumers that drive the calculators
//! with serialized requests (front ends, report services, LLM tools).
//! Every operation takes a tagged [`Request`] and returns an
//! [`Evaluation`]; [`evaluate_json`] wraps the pair for callers working in
//! raw JSON.
//!
//! ## JSON Example
//!
//! ```json
//! { "operation": "anchors", "length": 5.0, "width": 4.0, "height": 3.0 }
//! ```
//!
//! ```rust
//! use en14960_core::api::{evaluate, Request};
//!
//! let outcome = evaluate(&Request::Anchors { length: 5.0, width: 4.0, height: 3.0 });
//! let json = serde_json::to_string(&outcome).unwrap();
//! assert!(json.contains("\"value\":8"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::{anchor, slide, user_capacity};
use crate::errors::{CalcError, CalcResult};
use crate::models::CalculatorResponse;
use crate::validators::{material, play_area, PlayAreaValidation};

/// A calculation or validation request, tagged by operation name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    /// Required ground anchorage points
    Anchors { length: f64, width: f64, height: f64 },
    /// Required slide runout length. An absent platform height behaves
    /// like zero (no runout required).
    SlideRunout {
        #[serde(default)]
        platform_height: Option<f64>,
        #[serde(default)]
        has_stop_wall: bool,
    },
    /// Required containing wall height
    WallHeight {
        platform_height: f64,
        user_height: f64,
        #[serde(default)]
        has_permanent_roof: Option<bool>,
    },
    /// Maximum simultaneous users per height band
    UserCapacity {
        length: Option<f64>,
        width: Option<f64>,
        #[serde(default)]
        max_user_height: Option<f64>,
        #[serde(default)]
        negative_adjustment_area: f64,
    },
    /// Rope diameter threshold check
    RopeDiameter { diameter_mm: Option<f64> },
    /// Play area geometric validation
    PlayArea {
        unit_length: Option<f64>,
        unit_width: Option<f64>,
        play_area_length: Option<f64>,
        play_area_width: Option<f64>,
        negative_adjustment_area: Option<f64>,
    },
}

/// Outcome of a [`Request`]: a calculator response, a plain compliance
/// check, or a structured validation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    Response(CalculatorResponse),
    Check(bool),
    Validation(PlayAreaValidation),
}

/// Dispatch a request to its calculator or validator. Never fails: every
/// operation resolves malformed measurements to its defined sentinel.
pub fn evaluate(request: &Request) -> Evaluation {
    match *request {
        Request::Anchors { length, width, height } => {
            Evaluation::Response(anchor::calculate(length, width, height))
        }
        Request::SlideRunout { platform_height, has_stop_wall } => Evaluation::Response(
            slide::required_runout(platform_height.unwrap_or(0.0), has_stop_wall),
        ),
        Request::WallHeight { platform_height, user_height, has_permanent_roof } => {
            Evaluation::Response(slide::wall_height_requirements(
                platform_height,
                user_height,
                has_permanent_roof,
            ))
        }
        Request::UserCapacity { length, width, max_user_height, negative_adjustment_area } => {
            Evaluation::Response(user_capacity::calculate(
                length,
                width,
                max_user_height,
                negative_adjustment_area,
            ))
        }
        Request::RopeDiameter { diameter_mm } => {
            Evaluation::Check(material::valid_rope_diameter(diameter_mm))
        }
        Request::PlayArea {
            unit_length,
            unit_width,
            play_area_length,
            play_area_width,
            negative_adjustment_area,
        } => Evaluation::Validation(play_area::validate(
            unit_length,
            unit_width,
            play_area_length,
            play_area_width,
            negative_adjustment_area,
        )),
    }
}

/// Evaluate a JSON-encoded request and return the pretty-printed JSON
/// outcome. The only failure mode is a request that cannot be parsed.
pub fn evaluate_json(request_json: &str) -> CalcResult<String> {
    let request: Request = serde_json::from_str(request_json)
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    let outcome = evaluate(&request);
    serde_json::to_string_pretty(&outcome).map_err(|e| CalcError::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseValue;

    #[test]
    fn test_dispatch_anchors() {
        let outcome = evaluate(&Request::Anchors { length: 5.0, width: 4.0, height: 3.0 });
        match outcome {
            Evaluation::Response(response) => assert_eq!(response.value, ResponseValue::Count(8)),
            other => panic!("expected calculator response, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_rope_check() {
        assert_eq!(
            evaluate(&Request::RopeDiameter { diameter_mm: Some(20.0) }),
            Evaluation::Check(true)
        );
        assert_eq!(
            evaluate(&Request::RopeDiameter { diameter_mm: None }),
            Evaluation::Check(false)
        );
    }

    #[test]
    fn test_request_json_round_trip() {
        let request = Request::WallHeight {
            platform_height: 4.0,
            user_height: 2.0,
            has_permanent_roof: Some(true),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"operation\":\"wall_height\""));
        let roundtrip: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(request, roundtrip);
    }

    #[test]
    fn test_evaluate_json() {
        let json = r#"{"operation":"slide_runout","platform_height":2.0,"has_stop_wall":true}"#;
        let outcome = evaluate_json(json).unwrap();
        assert!(outcome.contains("\"value\": 1.5"));
        assert!(outcome.contains("Stop-wall addition"));
    }

    #[test]
    fn test_evaluate_json_defaults_optional_fields() {
        let json = r#"{"operation":"slide_runout","platform_height":2.0}"#;
        let outcome = evaluate_json(json).unwrap();
        assert!(outcome.contains("\"value\": 1.0"));
    }

    #[test]
    fn test_runout_absent_platform_height() {
        let outcome = evaluate_json(r#"{"operation":"slide_runout"}"#).unwrap();
        assert!(outcome.contains("\"value\": 0.0"));
    }

    #[test]
    fn test_evaluate_json_parse_error() {
        let error = evaluate_json("{not json").unwrap_err();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let error = evaluate_json(r#"{"operation":"teleport","distance":3.0}"#).unwrap_err();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
