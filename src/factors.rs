//! Versioned emission-factor datasets.
//!
//! A dataset is an explicit value handed to the estimator, never a global:
//! per-category factor maps, seasonal multipliers, and the ordered advisory
//! rules travel together under one version string.
//! [`EmissionFactorTable::cameroon_default`] embeds IPCC Tier 1 factors
//! adapted for Cameroon smallholdings; [`EmissionFactorTable::load`] reads
//! the same shape from JSON so a dataset can be swapped without a rebuild.

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::activity::{FertilizerKind, FuelKind, Season, Species};
use crate::error::ConfigurationError;
use crate::recommend::{ThresholdRule, DEFAULT_RULES};

/// Version string of the embedded default dataset.
pub const DEFAULT_VERSION: &str = "cm-ipcc-2024.1";

// ============================================================================
// DEFAULT FACTOR ROWS
// ============================================================================

/// Fertilizer factors, kg CO2e per kg of product as applied.
///
/// Direct N2O from the applied nitrogen (EF1, GWP100 298) at typical N
/// contents: 20% for synthetic blends, 46% for urea (plus its hydrolysis
/// CO2), 1.5% for organic amendments.
static DEFAULT_FERTILIZER: &[(FertilizerKind, f64)] = &[
    (FertilizerKind::SyntheticN, 0.94),
    (FertilizerKind::Urea, 2.89),
    (FertilizerKind::Organic, 0.05),
];

/// Livestock factors, kg CO2e per head per year (CH4 at GWP100 25).
static DEFAULT_LIVESTOCK: &[(Species, LivestockFactor)] = &[
    (
        Species::Cattle,
        LivestockFactor {
            enteric_kg_co2e: 1325.0,
            manure_kg_co2e: 25.0,
        },
    ),
    (
        Species::Goats,
        LivestockFactor {
            enteric_kg_co2e: 125.0,
            manure_kg_co2e: 4.25,
        },
    ),
    (
        Species::Sheep,
        LivestockFactor {
            enteric_kg_co2e: 200.0,
            manure_kg_co2e: 7.0,
        },
    ),
    (
        Species::Pigs,
        LivestockFactor {
            enteric_kg_co2e: 37.5,
            manure_kg_co2e: 75.0,
        },
    ),
    (
        Species::Poultry,
        LivestockFactor {
            enteric_kg_co2e: 0.0,
            manure_kg_co2e: 9.75,
        },
    ),
    (
        Species::Rabbits,
        LivestockFactor {
            enteric_kg_co2e: 0.0,
            manure_kg_co2e: 2.5,
        },
    ),
];

/// Fuel combustion factors, kg CO2e per litre.
static DEFAULT_FUEL: &[(FuelKind, f64)] = &[
    (FuelKind::Diesel, 2.68),
    (FuelKind::Petrol, 2.31),
];

/// Seasonal multipliers on the grand total. Rainy-season soils turn over
/// nitrogen faster, so the wet months carry a surcharge.
static DEFAULT_SEASONS: &[(Season, f64)] = &[(Season::Rainy, 1.15), (Season::Dry, 1.0)];

// ============================================================================
// FACTOR TABLE
// ============================================================================

/// Per-head emission factors for one livestock species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LivestockFactor {
    /// Enteric fermentation, kg CO2e per head per year.
    pub enteric_kg_co2e: f64,
    /// Manure management, kg CO2e per head per year.
    pub manure_kg_co2e: f64,
}

impl LivestockFactor {
    /// Combined per-head factor.
    pub fn total(&self) -> f64 {
        self.enteric_kg_co2e + self.manure_kg_co2e
    }
}

/// One versioned factor dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactorTable {
    /// Dataset identifier, stamped on every report it produces.
    pub version: String,
    /// kg CO2e per kg of product, by fertilizer kind.
    pub fertilizer: FxHashMap<FertilizerKind, f64>,
    /// Per-head factors by species.
    pub livestock: FxHashMap<Species, LivestockFactor>,
    /// kg CO2e per litre, by fuel kind.
    pub fuel: FxHashMap<FuelKind, f64>,
    /// Multiplier applied to the grand total, by season.
    pub season_multipliers: FxHashMap<Season, f64>,
    /// Advisory rules, evaluated in order. Defaults to [`DEFAULT_RULES`].
    #[serde(default = "default_rules")]
    pub rules: Vec<ThresholdRule>,
}

fn default_rules() -> Vec<ThresholdRule> {
    DEFAULT_RULES.to_vec()
}

impl EmissionFactorTable {
    /// The embedded Cameroon default dataset.
    pub fn cameroon_default() -> EmissionFactorTable {
        EmissionFactorTable {
            version: DEFAULT_VERSION.to_string(),
            fertilizer: DEFAULT_FERTILIZER.iter().copied().collect(),
            livestock: DEFAULT_LIVESTOCK.iter().copied().collect(),
            fuel: DEFAULT_FUEL.iter().copied().collect(),
            season_multipliers: DEFAULT_SEASONS.iter().copied().collect(),
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    /// Load a dataset from a JSON file and verify its values.
    pub fn load(path: &str) -> Result<EmissionFactorTable> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read factor dataset: {path}"))?;
        let table: EmissionFactorTable = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse factor dataset JSON: {path}"))?;
        table
            .verify()
            .with_context(|| format!("Invalid factor dataset: {path}"))?;
        Ok(table)
    }

    /// Value-level sanity checks. Structural completeness is not required
    /// here; a missing entry only matters once an input uses it, and then
    /// surfaces as a [`ConfigurationError`].
    pub fn verify(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            bail!("factor dataset has an empty version");
        }
        for (kind, factor) in &self.fertilizer {
            if !factor.is_finite() || *factor < 0.0 {
                bail!(
                    "fertilizer factor for {} must be non-negative, got {factor}",
                    kind.display_text()
                );
            }
        }
        for (species, factor) in &self.livestock {
            for (label, value) in [
                ("enteric", factor.enteric_kg_co2e),
                ("manure", factor.manure_kg_co2e),
            ] {
                if !value.is_finite() || value < 0.0 {
                    bail!(
                        "{label} factor for {} must be non-negative, got {value}",
                        species.display_text()
                    );
                }
            }
        }
        for (kind, factor) in &self.fuel {
            if !factor.is_finite() || *factor < 0.0 {
                bail!(
                    "fuel factor for {} must be non-negative, got {factor}",
                    kind.display_text()
                );
            }
        }
        for (season, multiplier) in &self.season_multipliers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                bail!(
                    "season multiplier for {} must be positive, got {multiplier}",
                    season.display_text()
                );
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Lookups. `FertilizerKind::None` / `FuelKind::None` never reach these;
    // the source calculations short-circuit them to zero.
    // ------------------------------------------------------------------------

    pub fn fertilizer_factor(&self, kind: FertilizerKind) -> Result<f64, ConfigurationError> {
        self.fertilizer.get(&kind).copied().ok_or_else(|| {
            ConfigurationError::MissingFertilizerFactor {
                kind,
                version: self.version.clone(),
            }
        })
    }

    pub fn livestock_factor(&self, species: Species) -> Result<LivestockFactor, ConfigurationError> {
        self.livestock.get(&species).copied().ok_or_else(|| {
            ConfigurationError::MissingLivestockFactor {
                species,
                version: self.version.clone(),
            }
        })
    }

    pub fn fuel_factor(&self, kind: FuelKind) -> Result<f64, ConfigurationError> {
        self.fuel.get(&kind).copied().ok_or_else(|| {
            ConfigurationError::MissingFuelFactor {
                kind,
                version: self.version.clone(),
            }
        })
    }

    pub fn season_multiplier(&self, season: Season) -> Result<f64, ConfigurationError> {
        self.season_multipliers.get(&season).copied().ok_or_else(|| {
            ConfigurationError::MissingSeasonMultiplier {
                season,
                version: self.version.clone(),
            }
        })
    }
}
