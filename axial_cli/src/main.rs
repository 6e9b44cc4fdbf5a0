//! # Axial CLI Application
//!
//! Terminal shell around `axial_core`. Replays the fixed illustrative
//! scenario through the batch evaluator, with the safety factor and K
//! factor optionally overridden from stdin, and prints a results table
//! plus the JSON payload.
//!
//! All domain logic lives in `axial_core`; this binary only formats.

use std::io::{self, BufRead, Write};

use axial_core::calculations::evaluate_batch;
use axial_core::materials::{MaterialRegistry, DEFAULT_K_FACTOR, DEFAULT_SAFETY_FACTOR};
use axial_core::scenario;
use axial_core::ColumnOutcome;

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

fn main() {
    println!("Axial CLI - Column Capacity Calculator");
    println!("======================================");
    println!();

    let safety_factor = prompt_f64(
        &format!("Safety factor [{:.1}]: ", DEFAULT_SAFETY_FACTOR),
        DEFAULT_SAFETY_FACTOR,
    );
    let k_factor = prompt_f64(
        &format!("Effective length factor K [{:.1}]: ", DEFAULT_K_FACTOR),
        DEFAULT_K_FACTOR,
    );

    let registry = MaterialRegistry::builtin();
    let columns = scenario::demo_columns();

    println!();
    println!("Evaluating {} demo columns...", columns.len());
    println!();

    let (outcomes, summary) = evaluate_batch(&columns, registry, safety_factor, k_factor);

    println!("═══════════════════════════════════════════════════════════════════");
    println!(
        "  {:<6} {:>12} {:>12} {:>9} {:>12}  VERDICT",
        "ID", "APPLIED kN", "ADMISS. kN", "LAMBDA", "MARGIN kN"
    );
    println!("═══════════════════════════════════════════════════════════════════");

    for outcome in &outcomes {
        match outcome {
            ColumnOutcome::Evaluated(r) => {
                println!(
                    "  {:<6} {:>12.3} {:>12.3} {:>9.3} {:>12.3}  {} (governs: {})",
                    r.id,
                    r.applied_load_kn,
                    r.final_admissible_kn,
                    r.slenderness_ratio,
                    r.margin_kn,
                    r.verdict,
                    r.governing_mode,
                );
            }
            ColumnOutcome::Error(e) => {
                println!("  {:<6} {}", e.id, e.error);
            }
        }
    }

    println!("═══════════════════════════════════════════════════════════════════");
    println!(
        "  TOTALS: overload {:.3} kN, spare capacity {:.3} kN",
        summary.total_overload_kn, summary.total_spare_kn
    );
    println!("═══════════════════════════════════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&outcomes) {
        println!("{}", json);
    }
    if let Ok(json) = serde_json::to_string_pretty(&summary) {
        println!("{}", json);
    }
}
