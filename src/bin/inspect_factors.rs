//! Inspect Factor Dataset
//!
//! Dumps every factor, multiplier, rule, and reference table in the
//! embedded Cameroon default dataset.
//!
//! Run with: cargo run --bin inspect_factors

use emission_estimator::{
    CarbonIntensity, ClimateZone, CropClass, EmissionFactorTable, FarmingPractice, FertilizerKind,
    FuelKind, Season, Species,
};

fn main() {
    let table = EmissionFactorTable::cameroon_default();

    println!("\n=== EMISSION FACTOR DATASET: {} ===\n", table.version);

    println!("Fertilizer (kg CO2e per kg of product):");
    for kind in FertilizerKind::all() {
        if let Ok(factor) = table.fertilizer_factor(*kind) {
            println!(
                "  {:<14} {:>8.2}   {}",
                kind.display_text(),
                factor,
                kind.description()
            );
        }
    }

    println!("\nLivestock (kg CO2e per head per year):");
    println!("  {:<14} {:>10} {:>10}", "", "enteric", "manure");
    for species in Species::all() {
        if let Ok(factor) = table.livestock_factor(*species) {
            println!(
                "  {:<14} {:>10.2} {:>10.2}",
                species.display_text(),
                factor.enteric_kg_co2e,
                factor.manure_kg_co2e
            );
        }
    }

    println!("\nFuel (kg CO2e per litre):");
    for kind in FuelKind::all() {
        if let Ok(factor) = table.fuel_factor(*kind) {
            println!("  {:<14} {:>8.2}", kind.display_text(), factor);
        }
    }

    println!("\nSeason multipliers:");
    for season in Season::all() {
        if let Ok(multiplier) = table.season_multiplier(*season) {
            println!("  {:<14} {:>8.2}", season.display_text(), multiplier);
        }
    }

    println!("\nAdvisory rules (in evaluation order, strict >):");
    for (index, rule) in table.rules.iter().enumerate() {
        println!(
            "  {}. {:?} > {:.0} kg CO2e -> {}",
            index + 1,
            rule.subject,
            rule.threshold_kg_co2e,
            rule.tag.display_text()
        );
    }

    println!("\n=== SOIL CARBON REFERENCE TABLES ===\n");

    println!("Practice factors (on the baseline SOC change):");
    for practice in FarmingPractice::all() {
        println!(
            "  {:<14} {:>6.2}   {}",
            practice.display_text(),
            practice.soc_factor(),
            practice.description()
        );
    }

    println!("\nCrop-class factors:");
    for crop in CropClass::all() {
        println!(
            "  {:<14} {:>6.2}   {}",
            crop.display_text(),
            crop.soc_factor(),
            crop.description()
        );
    }

    println!("\nClimate-zone factors:");
    for zone in ClimateZone::all() {
        println!("  {:<16} {:>6.2}", zone.display_name(), zone.soc_factor());
    }

    println!("\nIntensity classes (net kg CO2e per hectare):");
    for class in CarbonIntensity::all() {
        println!(
            "  {:<10} reduction potential {:>2}%   {}",
            class.display_text(),
            class.reduction_potential_pct(),
            class.description()
        );
    }
    println!();
}
