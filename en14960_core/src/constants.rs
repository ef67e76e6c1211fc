//! # EN 14960 Standard Values
//!
//! Numeric thresholds and coefficients from BS EN 14960-1:2019, the safety
//! standard for inflatable play equipment. These values encode the cited
//! standard verbatim and must not be tuned.
//!
//! ## Value Summary
//!
//! | Group        | Values                                          |
//! |--------------|-------------------------------------------------|
//! | Anchors      | coeff 114, 1600 N per anchor, SF 1.5, min 6     |
//! | Slide bands  | 0.6 m / 3.0 m / 6.0 m / 8.0 m platform heights  |
//! | Runout       | 50% of platform height, min 0.3 m, +0.5 m wall  |
//! | Wall height  | 1.25× user height for enhanced walls            |
//! | Capacity     | 1.0 / 1.33 / 1.66 / 2.0 m² per user by band     |
//! | Materials    | rope 18-45 mm, fabric 1850/350 N, thread 88 N   |
//!
//! ## Reference
//!
//! BS EN 14960-1:2019, Sections 4.2, 4.3 and Annex A

use once_cell::sync::Lazy;
use serde::Serialize;

// ============================================================================
// EN 14960 Code Section References
// ============================================================================

/// EN 14960 section references for calculation and validation steps.
///
/// These constants provide traceable citations to BS EN 14960-1:2019 for
/// inspection reports.
pub mod en_ref {
    /// Anchorage calculation formula (Annex A)
    pub const ANCHOR_FORMULA: &str = "EN 14960-1:2019 Annex A";
    /// Minimum six anchorage points
    pub const ANCHOR_MINIMUM: &str = "EN 14960-1:2019 4.2.15";
    /// Containment wall requirements
    pub const CONTAINMENT: &str = "EN 14960-1:2019 4.2.9";
    /// Slide runout requirements
    pub const RUNOUT: &str = "EN 14960-1:2019 4.2.11";
    /// Number of users
    pub const USER_CAPACITY: &str = "EN 14960-1:2019 4.3";
    /// Material requirements
    pub const MATERIALS: &str = "EN 14960-1:2019 4.1";
}

// ============================================================================
// Anchorage
// ============================================================================

/// Anchor sizing constants per EN 14960-1:2019 Annex A.
///
/// Wind force on an exposed surface is `0.5 × Cw × ρ × V² × A` with
/// Cw = 1.5, ρ = 1.24 kg/m³ and V = 11.1 m/s, pre-calculated here as
/// `area_coefficient ≈ 114`. Each anchorage point must withstand 1600 N.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorConstants {
    /// Pre-calculated wind force coefficient (0.5 × 1.5 × 1.24 × 11.1²)
    pub area_coefficient: f64,
    /// Holding force per anchor in Newtons
    pub base_divisor: f64,
    /// Safety factor multiplier
    pub safety_factor: f64,
    /// Minimum required anchorage points
    pub minimum_anchors: u32,
}

pub const ANCHOR: AnchorConstants = AnchorConstants {
    area_coefficient: 114.0,
    base_divisor: 1600.0,
    safety_factor: 1.5,
    minimum_anchors: 6,
};

// ============================================================================
// Slides
// ============================================================================

/// Platform height thresholds governing slide containment, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideHeightThresholds {
    /// Below this height no containing walls are required
    pub no_walls_required: f64,
    /// Up to this height walls must match user height
    pub basic_walls: f64,
    /// Up to this height walls must be 1.25× user height or a roof fitted
    pub enhanced_walls: f64,
    /// Maximum recommended platform height
    pub max_safe_height: f64,
}

pub const SLIDE_HEIGHT_THRESHOLDS: SlideHeightThresholds = SlideHeightThresholds {
    no_walls_required: 0.6,
    basic_walls: 3.0,
    enhanced_walls: 6.0,
    max_safe_height: 8.0,
};

/// Runout sizing constants per EN 14960-1:2019 4.2.11.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunoutConstants {
    /// Required runout as a fraction of platform height
    pub platform_height_ratio: f64,
    /// Absolute minimum runout length in meters (300 mm)
    pub minimum_runout_m: f64,
    /// Additional length required when a stop-wall is fitted, in meters
    pub stop_wall_addition: f64,
}

pub const RUNOUT: RunoutConstants = RunoutConstants {
    platform_height_ratio: 0.5,
    minimum_runout_m: 0.3,
    stop_wall_addition: 0.5,
};

/// Containing wall height constants per EN 14960-1:2019 4.2.9.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallHeightConstants {
    /// Multiplier applied to user height for enhanced walls
    pub enhanced_height_multiplier: f64,
}

pub const WALL_HEIGHT: WallHeightConstants = WallHeightConstants {
    enhanced_height_multiplier: 1.25,
};

// ============================================================================
// User Height Bands
// ============================================================================

/// A user height band with its capacity divisor and grounding test weight.
///
/// EN 14960 does not prescribe an exact capacity formula, only the factors
/// to consider (user height, playing area, activity type); the area divisors
/// here are established industry practice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeightBand {
    /// Maximum user height for this band, in millimeters
    pub height_mm: u32,
    /// Display label, e.g. "1.0m (Young children)"
    pub label: &'static str,
    /// Usable play area per user, in m²
    pub area_divisor: f64,
    /// Grounding test weight for this band, in kg
    pub grounding_test_weight_kg: u32,
}

impl HeightBand {
    /// Maximum user height for this band, in meters
    pub fn height_m(&self) -> f64 {
        f64::from(self.height_mm) / 1000.0
    }
}

/// All user height bands in ascending height order.
pub const HEIGHT_BANDS: [HeightBand; 4] = [
    HeightBand {
        height_mm: 1000,
        label: "1.0m (Young children)",
        area_divisor: 1.0,
        grounding_test_weight_kg: 25,
    },
    HeightBand {
        height_mm: 1200,
        label: "1.2m (Children)",
        area_divisor: 1.33,
        grounding_test_weight_kg: 35,
    },
    HeightBand {
        height_mm: 1500,
        label: "1.5m (Adolescents)",
        area_divisor: 1.66,
        grounding_test_weight_kg: 65,
    },
    HeightBand {
        height_mm: 1800,
        label: "1.8m (Adults)",
        area_divisor: 2.0,
        grounding_test_weight_kg: 85,
    },
];

/// Interval between periodic inspections, in days.
pub const REINSPECTION_INTERVAL_DAYS: u32 = 365;

// ============================================================================
// Materials
// ============================================================================

/// Fabric requirements per EN 14960:2019 and EN 71-3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FabricStandards {
    /// Minimum tensile strength in Newtons
    pub min_tensile_strength_n: f64,
    /// Minimum tear strength in Newtons
    pub min_tear_strength_n: f64,
    /// Fire retardancy standard
    pub fire_standard: &'static str,
}

/// Sewing thread requirements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThreadStandards {
    /// Minimum tensile strength in Newtons
    pub min_tensile_strength_n: f64,
}

/// Rope requirements. The diameter range prevents finger entrapment while
/// keeping adequate grip and strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RopeStandards {
    /// Minimum diameter in millimeters
    pub min_diameter_mm: f64,
    /// Maximum diameter in millimeters
    pub max_diameter_mm: f64,
    /// Maximum permitted swing, as a percentage
    pub max_swing_percentage: f64,
}

/// Netting mesh size limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NettingStandards {
    /// Maximum mesh size for vertical netting above 1 m, in millimeters
    pub max_vertical_mesh_mm: f64,
    /// Maximum mesh size for roof netting, in millimeters
    pub max_roof_mesh_mm: f64,
}

/// Material safety standards grouped by component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialStandards {
    pub fabric: FabricStandards,
    pub thread: ThreadStandards,
    pub rope: RopeStandards,
    pub netting: NettingStandards,
}

pub const MATERIAL: MaterialStandards = MaterialStandards {
    fabric: FabricStandards {
        min_tensile_strength_n: 1850.0,
        min_tear_strength_n: 350.0,
        fire_standard: "EN 71-3",
    },
    thread: ThreadStandards {
        min_tensile_strength_n: 88.0,
    },
    rope: RopeStandards {
        min_diameter_mm: 18.0,
        max_diameter_mm: 45.0,
        max_swing_percentage: 20.0,
    },
    netting: NettingStandards {
        max_vertical_mesh_mm: 30.0,
        max_roof_mesh_mm: 8.0,
    },
};

// ============================================================================
// Composed Snapshot
// ============================================================================

/// Immutable snapshot of every standard value, for serialization to
/// consumers that render the configuration surface (reports, UIs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standards {
    pub anchor: AnchorConstants,
    pub slide_height_thresholds: SlideHeightThresholds,
    pub runout: RunoutConstants,
    pub wall_height: WallHeightConstants,
    pub height_bands: [HeightBand; 4],
    pub material: MaterialStandards,
    pub reinspection_interval_days: u32,
}

static STANDARDS: Lazy<Standards> = Lazy::new(|| Standards {
    anchor: ANCHOR,
    slide_height_thresholds: SLIDE_HEIGHT_THRESHOLDS,
    runout: RUNOUT,
    wall_height: WALL_HEIGHT,
    height_bands: HEIGHT_BANDS,
    material: MATERIAL,
    reinspection_interval_days: REINSPECTION_INTERVAL_DAYS,
});

/// Process-wide standards table, initialized once before first use.
pub fn standards() -> &'static Standards {
    &STANDARDS
}
