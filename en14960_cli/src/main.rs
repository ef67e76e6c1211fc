//! # EN 14960 Inspection CLI
//!
//! Terminal front end for the safety calculation engine. Prompts for the
//! unit's measurements, runs every calculator, and prints an inspection
//! report with each derivation breakdown, followed by the JSON form of
//! each result for machine consumers.

use std::io::{self, BufRead, Write};

use en14960_core::constants::en_ref;
use en14960_core::models::CalculatorResponse;
use en14960_core::{calculators::slide, validators::material};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Yes/no prompt; empty input means unknown.
fn prompt_bool(prompt: &str) -> Option<bool> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn print_response(title: &str, response: &CalculatorResponse) {
    println!("───────────────────────────────────────");
    println!("  {}: {}", title, response.display_value());
    for step in &response.breakdown {
        println!("    {:<28} {}", step.label, step.text);
    }
    println!();
}

fn main() {
    println!("EN 14960 Inspection Calculator");
    println!("==============================");
    println!();
    println!("{}", en14960_core::calculators::anchor::calculation_description());
    println!();

    let length = prompt_f64("Unit length (m) [5.0]: ", 5.0);
    let width = prompt_f64("Unit width (m) [4.0]: ", 4.0);
    let height = prompt_f64("Unit height (m) [3.0]: ", 3.0);
    let platform_height = prompt_f64("Slide platform height (m) [2.0]: ", 2.0);
    let user_height = prompt_f64("Maximum user height (m) [1.5]: ", 1.5);
    let has_stop_wall = prompt_bool("Stop-wall fitted? (y/n) [n]: ").unwrap_or(false);
    let has_permanent_roof = prompt_bool("Permanent roof fitted? (y/n, blank if unknown): ");
    let play_area_length = prompt_f64("Play area length (m) [4.0]: ", 4.0);
    let play_area_width = prompt_f64("Play area width (m) [3.0]: ", 3.0);
    let adjustment = prompt_f64("Obstruction area to deduct (m²) [0.0]: ", 0.0);

    println!();
    println!("═══════════════════════════════════════");
    println!("  EN 14960 INSPECTION REPORT");
    println!("═══════════════════════════════════════");
    println!();

    let anchors = en14960_core::calculate_anchors(length, width, height);
    let runout = en14960_core::calculate_slide_runout(platform_height, has_stop_wall);
    let walls = en14960_core::calculate_wall_height(platform_height, user_height, has_permanent_roof);
    let capacity = en14960_core::calculate_user_capacity(
        Some(play_area_length),
        Some(play_area_width),
        Some(user_height),
        adjustment,
    );

    print_response("Required anchors", &anchors);
    print_response("Required runout", &runout);
    print_response("Required wall height", &walls);
    print_response("User capacity", &capacity);

    if slide::requires_permanent_roof(platform_height) {
        let fitted = has_permanent_roof == Some(true);
        println!(
            "  Permanent roof mandatory above 6.0m: {}",
            if fitted { "[OK] fitted" } else { "[FAIL] not fitted" }
        );
        println!();
    }

    let play_area = en14960_core::validate_play_area(
        Some(length),
        Some(width),
        Some(play_area_length),
        Some(play_area_width),
        Some(adjustment),
    );
    println!("───────────────────────────────────────");
    println!(
        "  Play area: {}",
        if play_area.valid { "[OK] valid" } else { "[FAIL] invalid" }
    );
    for error in &play_area.errors {
        println!("    - {}", error);
    }
    println!();

    println!("  Runout rule ({}): {}", en_ref::RUNOUT, slide::runout_formula_text());
    println!("  Walls rule ({}): {}", en_ref::CONTAINMENT, slide::wall_height_requirement_text());
    println!("  Fabric tensile ({}): {}", en_ref::MATERIALS, material::fabric_tensile_requirement());
    println!("  Fabric tear ({}): {}", en_ref::MATERIALS, material::fabric_tear_requirement());
    println!();

    println!("═══════════════════════════════════════");
    println!("JSON Output (for LLM/API use):");
    for response in [&anchors, &runout, &walls, &capacity] {
        if let Ok(json) = serde_json::to_string_pretty(response) {
            println!("{}", json);
        }
    }
    if let Ok(json) = serde_json::to_string_pretty(&play_area) {
        println!("{}", json);
    }
}
