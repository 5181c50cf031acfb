//! # Gusset CLI Application
//!
//! Terminal front end for the steel connection capacity engine.
//! Prompts for connection parameters, runs the engine, and prints a text
//! report plus a JSON dump of the result for LLM/API consumers.

use std::io::{self, BufRead, Write};

use conn_core::materials::{BoltDiameter, BoltGrade, Electrode, SteelGrade};
use conn_core::{
    evaluate_bolted_connection, evaluate_welded_connection, BoltedInput, BoltedResult, CalcError,
    WeldType, WeldedInput, WeldedResult,
};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn main() {
    println!("Gusset CLI - Steel Connection Calculator");
    println!("========================================");
    println!();
    println!("Connection types: [1] Bolted  [2] Welded");

    let choice = prompt_line("Select connection type [1]: ").unwrap_or_default();

    println!();
    if choice == "2" {
        run_welded();
    } else {
        run_bolted();
    }
}

fn run_bolted() {
    let steel_grade = prompt_steel_grade();
    let plate_thickness_mm = prompt_f64("Plate thickness (mm) [12.0]: ", 12.0);
    let plate_width_mm = prompt_f64("Plate width (mm) [200.0]: ", 200.0);
    let bolt_diameter = BoltDiameter::from_mm(prompt_f64("Bolt diameter (mm) [20]: ", 20.0))
        .unwrap_or(BoltDiameter::M20);
    let bolt_grade = prompt_line("Bolt grade (A325/A490) [A325]: ")
        .and_then(|s| BoltGrade::from_str_flexible(&s).ok())
        .unwrap_or(BoltGrade::A325);
    let bolt_count = prompt_u32("Number of bolts [4]: ", 4);
    let edge_distance_mm = prompt_f64("Edge distance (mm) [40.0]: ", 40.0);
    let bolt_spacing_mm = prompt_f64("Bolt spacing (mm) [80.0]: ", 80.0);
    let tension_kn = prompt_f64("Tension load (kN) [100.0]: ", 100.0);
    let shear_kn = prompt_f64("Shear load (kN) [50.0]: ", 50.0);

    let input = BoltedInput {
        label: "CLI-Bolted".to_string(),
        steel_grade,
        plate_thickness_mm,
        plate_width_mm,
        bolt_diameter,
        bolt_grade,
        bolt_count,
        edge_distance_mm,
        bolt_spacing_mm,
        tension_kn,
        shear_kn,
    };

    match evaluate_bolted_connection(&input) {
        Ok(result) => print_bolted_report(&input, &result),
        Err(e) => print_error(&e),
    }
}

fn run_welded() {
    let steel_grade = prompt_steel_grade();
    let weld_type = match prompt_line("Weld type: [1] Fillet  [2] Complete penetration [1]: ")
        .as_deref()
    {
        Some("2") => WeldType::CompletePenetration,
        _ => WeldType::Fillet,
    };
    let electrode = prompt_line("Electrode (E70XX/E80XX) [E70XX]: ")
        .and_then(|s| Electrode::from_str_flexible(&s).ok())
        .unwrap_or(Electrode::E70XX);
    let weld_size_mm = prompt_f64("Weld size (mm) [6.0]: ", 6.0);
    let weld_length_mm = prompt_f64("Weld length (mm) [200.0]: ", 200.0);
    let plate_thickness_mm = prompt_f64("Plate thickness (mm) [12.0]: ", 12.0);
    let load_angle_deg = prompt_f64("Load angle (degrees, 0-90) [0.0]: ", 0.0);
    let force_kn = prompt_f64("Applied force (kN) [100.0]: ", 100.0);
    let moment_knm = prompt_f64("Applied moment (kN·m) [0.0]: ", 0.0);

    let input = WeldedInput {
        label: "CLI-Welded".to_string(),
        steel_grade,
        weld_type,
        electrode,
        weld_size_mm,
        weld_length_mm,
        plate_thickness_mm,
        load_angle_deg,
        force_kn,
        moment_knm,
    };

    match evaluate_welded_connection(&input) {
        Ok(result) => print_welded_report(&input, &result),
        Err(e) => print_error(&e),
    }
}

fn prompt_steel_grade() -> SteelGrade {
    prompt_line("Steel grade (A36 / A572 Gr50 / A992) [A36]: ")
        .and_then(|s| SteelGrade::from_str_flexible(&s).ok())
        .unwrap_or(SteelGrade::A36)
}

fn print_bolted_report(input: &BoltedInput, result: &BoltedResult) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  BOLTED CONNECTION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Plate:    {} x {:.0} x {:.0} mm", input.steel_grade, input.plate_thickness_mm, input.plate_width_mm);
    println!("  Bolts:    {} x {} {}", input.bolt_count, input.bolt_diameter, input.bolt_grade);
    println!("  Loads:    Pt = {:.1} kN, Pv = {:.1} kN", input.tension_kn, input.shear_kn);
    println!();
    println!("Bolt Capacities:");
    println!("  Tension per bolt:  {:.1} kN", result.bolt_tension_capacity_kn);
    println!("  Shear per bolt:    {:.1} kN", result.bolt_shear_capacity_kn);
    println!("  Group tension:     {:.1} kN", result.group_tension_capacity_kn);
    println!("  Group shear:       {:.1} kN", result.group_shear_capacity_kn);
    println!();
    println!("Plate Capacities:");
    println!("  Net area:          {:.0} mm²", result.net_area_mm2);
    println!("  Tension:           {:.1} kN", result.plate_tension_capacity_kn);
    println!("  Shear:             {:.1} kN", result.plate_shear_capacity_kn);
    println!();
    println!("Design Checks:");
    println!(
        "  Tension:  {:.2} ({:.1}/{:.1} kN) {}",
        result.tension_check.ratio,
        input.tension_kn,
        result.governing_tension_capacity_kn,
        status_icon(result.tension_check.passes)
    );
    println!(
        "  Shear:    {:.2} ({:.1}/{:.1} kN) {}",
        result.shear_check.ratio,
        input.shear_kn,
        result.governing_shear_capacity_kn,
        status_icon(result.shear_check.passes)
    );
    println!(
        "  Combined: {:.2} {}",
        result.combined_check.ratio,
        status_icon(result.combined_check.passes)
    );
    print_verdict(result.passes(), result.governing_condition());
    print_json(result);
}

fn print_welded_report(input: &WeldedInput, result: &WeldedResult) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  WELDED CONNECTION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Weld:     {} x {:.0} mm ({})", result.weld_type, input.weld_length_mm, input.electrode);
    println!("  Base:     {} plate, {:.0} mm", input.steel_grade, input.plate_thickness_mm);
    println!("  Loads:    P = {:.1} kN @ {:.0}°, M = {:.2} kN·m", input.force_kn, input.load_angle_deg, input.moment_knm);
    println!();
    println!("Weld Properties:");
    if let Some(throat) = result.throat_thickness_mm {
        println!("  Throat thickness:  {:.2} mm", throat);
    }
    println!("  Effective area:    {:.0} mm²", result.effective_area_mm2);
    println!("  Nominal strength:  {:.0} MPa", result.nominal_strength_mpa);
    println!();
    println!("Capacities:");
    println!("  Base capacity:     {:.1} kN", result.base_capacity_kn);
    println!("  Adjusted capacity: {:.1} kN (angle factor {:.3})", result.adjusted_capacity_kn, result.angle_factor);
    if result.moment_stress_mpa > 0.0 {
        println!("  Section modulus:   {:.0} mm³", result.section_modulus_mm3);
        println!("  Moment stress:     {:.1} MPa", result.moment_stress_mpa);
    }
    println!();
    println!("Design Checks:");
    println!(
        "  Force:    {:.2} ({:.1}/{:.1} kN) {}",
        result.force_check.ratio,
        input.force_kn,
        result.adjusted_capacity_kn,
        status_icon(result.force_check.passes)
    );
    println!(
        "  Moment:   {:.2} {}",
        result.moment_check.ratio,
        status_icon(result.moment_check.passes)
    );
    println!(
        "  Combined: {:.2} {}",
        result.combined_check.ratio,
        status_icon(result.combined_check.passes)
    );
    print_verdict(result.passes(), result.governing_condition());
    print_json(result);
}

fn print_verdict(passes: bool, governing: &str) {
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} (governs: {})",
        if passes { "PASS" } else { "FAIL" },
        governing
    );
    println!("═══════════════════════════════════════");
}

fn print_json<T: serde::Serialize>(result: &T) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
