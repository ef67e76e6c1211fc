//! # Material Validator
//!
//! Threshold checks for ropes, fabric, thread and netting per
//! EN 14960:2019 and EN 71-3. Pure predicates with no breakdown; an absent
//! measurement never passes.

use crate::constants;

/// Rope diameter must sit in the 18-45 mm window: thick enough for grip
/// and strength, narrow enough to prevent finger entrapment.
pub fn valid_rope_diameter(diameter_mm: Option<f64>) -> bool {
    let rope = constants::MATERIAL.rope;
    match diameter_mm {
        Some(d) => d >= rope.min_diameter_mm && d <= rope.max_diameter_mm,
        None => false,
    }
}

/// Fabric tensile strength must be at least 1850 N.
pub fn valid_fabric_tensile_strength(strength_n: Option<f64>) -> bool {
    matches!(strength_n, Some(n) if n >= constants::MATERIAL.fabric.min_tensile_strength_n)
}

/// Fabric tear strength must be at least 350 N.
pub fn valid_fabric_tear_strength(strength_n: Option<f64>) -> bool {
    matches!(strength_n, Some(n) if n >= constants::MATERIAL.fabric.min_tear_strength_n)
}

/// Sewing thread tensile strength must be at least 88 N.
pub fn valid_thread_tensile_strength(strength_n: Option<f64>) -> bool {
    matches!(strength_n, Some(n) if n >= constants::MATERIAL.thread.min_tensile_strength_n)
}

/// Netting mesh must not exceed 8 mm on roofs, 30 mm on vertical netting.
pub fn valid_netting_mesh(mesh_mm: Option<f64>, is_roof: bool) -> bool {
    let netting = constants::MATERIAL.netting;
    let max_mesh = if is_roof {
        netting.max_roof_mesh_mm
    } else {
        netting.max_vertical_mesh_mm
    };
    matches!(mesh_mm, Some(mm) if mm <= max_mesh)
}

/// The fabric tensile requirement as a formatted sentence.
pub fn fabric_tensile_requirement() -> String {
    format!(
        "{} Newtons minimum",
        constants::MATERIAL.fabric.min_tensile_strength_n
    )
}

/// The fabric tear requirement as a formatted sentence.
pub fn fabric_tear_requirement() -> String {
    format!(
        "{} Newtons minimum",
        constants::MATERIAL.fabric.min_tear_strength_n
    )
}
