//! Estimate Farm Emissions
//!
//! Reads one activity draft (optionally carrying a field profile) from a
//! JSON file, validates it, runs the assessment, and prints the result as
//! pretty JSON. A second argument swaps in a custom factor dataset.
//!
//! Run with: cargo run --bin estimate_farm -- activity.json [factors.json]

use anyhow::{Context, Result};
use emission_estimator::{ActivityDraft, EmissionEstimator, EmissionFactorTable, FieldProfile};
use serde::Deserialize;

/// One submission: the activity draft plus an optional field profile.
#[derive(Debug, Deserialize)]
struct AssessmentDraft {
    #[serde(flatten)]
    activity: ActivityDraft,
    #[serde(default)]
    field: Option<FieldProfile>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: estimate_farm <activity.json> [factors.json]");
        std::process::exit(1);
    }

    let factors = match args.get(1) {
        Some(path) => EmissionFactorTable::load(path)?,
        None => EmissionFactorTable::cameroon_default(),
    };
    let estimator = EmissionEstimator::new(factors)?;

    let content = std::fs::read_to_string(&args[0])
        .with_context(|| format!("Failed to read activity file: {}", &args[0]))?;
    let draft: AssessmentDraft = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse activity JSON: {}", &args[0]))?;

    let input = draft.activity.validate()?;
    println!("=== Farm activity ===");
    println!("  Season: {}", input.season.display_text());
    println!("  Fertilizer: {} kg {}", input.fertilizer_kg, input.fertilizer_kind.display_text());
    println!("  Livestock: {} head", input.total_livestock());
    println!("  Fuel: {} L {}", input.fuel_litres, input.fuel_kind.display_text());
    if let Some(profile) = &draft.field {
        println!("  Field: {} ha, {}", profile.area_ha, profile.practice.display_text());
    }
    println!();

    let assessment = estimator.assess(&input, draft.field.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&assessment)?);

    Ok(())
}
