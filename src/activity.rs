//! Farm activity data: loose drafts in, validated inputs out.
//!
//! [`ActivityDraft`] is the serde-facing shape with string labels and signed
//! counts, matching the JSON a survey form produces. [`ActivityDraft::validate`]
//! is the sanctioned path to an [`ActivityInput`]: every input that reaches
//! the calculation stage is already well-typed, with quantities checked
//! non-negative and labels resolved to closed enums.
//!
//! Seasonal split follows the Cameroon calendar: rainy season March through
//! October, dry season November through February.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============================================================================
// CATEGORY ENUMS
// ============================================================================

/// Fertilizer classes with distinct emission pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerKind {
    /// Synthetic nitrogen blends (NPK, ammonium nitrate).
    SyntheticN,
    /// Urea, tracked separately for its hydrolysis CO2.
    Urea,
    /// Organic amendments (manure, compost).
    Organic,
    /// No fertilizer applied.
    None,
}

impl FertilizerKind {
    /// Parse a survey label. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Option<FertilizerKind> {
        match label.trim().to_lowercase().as_str() {
            "synthetic_n" | "synthetic-n" | "synthetic" => Some(FertilizerKind::SyntheticN),
            "urea" => Some(FertilizerKind::Urea),
            "organic" => Some(FertilizerKind::Organic),
            "none" => Some(FertilizerKind::None),
            _ => None,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            FertilizerKind::SyntheticN => "Synthetic N",
            FertilizerKind::Urea => "Urea",
            FertilizerKind::Organic => "Organic",
            FertilizerKind::None => "None",
        }
    }

    /// Longer form-facing label.
    pub fn description(&self) -> &'static str {
        match self {
            FertilizerKind::SyntheticN => "Synthetic nitrogen (NPK, ammonium nitrate)",
            FertilizerKind::Urea => "Urea (46% N)",
            FertilizerKind::Organic => "Organic (manure, compost)",
            FertilizerKind::None => "No fertilizer",
        }
    }

    /// All kinds in declaration order.
    pub fn all() -> &'static [FertilizerKind] {
        &[
            FertilizerKind::SyntheticN,
            FertilizerKind::Urea,
            FertilizerKind::Organic,
            FertilizerKind::None,
        ]
    }
}

/// Fuel burned in farm machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelKind {
    Diesel,
    Petrol,
    /// No mechanized fuel use.
    None,
}

impl FuelKind {
    /// Parse a survey label. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Option<FuelKind> {
        match label.trim().to_lowercase().as_str() {
            "diesel" => Some(FuelKind::Diesel),
            "petrol" | "gasoline" => Some(FuelKind::Petrol),
            "none" => Some(FuelKind::None),
            _ => None,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            FuelKind::Diesel => "Diesel",
            FuelKind::Petrol => "Petrol",
            FuelKind::None => "None",
        }
    }

    /// All kinds in declaration order.
    pub fn all() -> &'static [FuelKind] {
        &[FuelKind::Diesel, FuelKind::Petrol, FuelKind::None]
    }
}

/// Season of the activity period, which scales the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Rainy,
    Dry,
}

impl Season {
    /// Parse a survey label. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Option<Season> {
        match label.trim().to_lowercase().as_str() {
            "rainy" | "wet" => Some(Season::Rainy),
            "dry" => Some(Season::Dry),
            _ => None,
        }
    }

    /// Season for a calendar month (1-12) under the Cameroon pattern:
    /// March through October rainy, November through February dry.
    pub fn from_month(month: u32) -> Option<Season> {
        match month {
            3..=10 => Some(Season::Rainy),
            1 | 2 | 11 | 12 => Some(Season::Dry),
            _ => None,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Season::Rainy => "Rainy",
            Season::Dry => "Dry",
        }
    }

    /// Both seasons in declaration order.
    pub fn all() -> &'static [Season] {
        &[Season::Rainy, Season::Dry]
    }
}

/// Livestock species tracked by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Cattle,
    Goats,
    Sheep,
    Pigs,
    Poultry,
    Rabbits,
}

impl Species {
    /// Parse a survey label. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Option<Species> {
        match label.trim().to_lowercase().as_str() {
            "cattle" => Some(Species::Cattle),
            "goats" | "goat" => Some(Species::Goats),
            "sheep" => Some(Species::Sheep),
            "pigs" | "pig" => Some(Species::Pigs),
            "poultry" | "chickens" => Some(Species::Poultry),
            "rabbits" | "rabbit" => Some(Species::Rabbits),
            _ => None,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Species::Cattle => "Cattle",
            Species::Goats => "Goats",
            Species::Sheep => "Sheep",
            Species::Pigs => "Pigs",
            Species::Poultry => "Poultry",
            Species::Rabbits => "Rabbits",
        }
    }

    /// All species in survey order. Livestock breakdowns report in this
    /// order so output is deterministic.
    pub fn all() -> &'static [Species] {
        &[
            Species::Cattle,
            Species::Goats,
            Species::Sheep,
            Species::Pigs,
            Species::Poultry,
            Species::Rabbits,
        ]
    }
}

// ============================================================================
// DRAFT AND VALIDATED INPUT
// ============================================================================

fn default_kind_label() -> String {
    "none".to_string()
}

/// Unvalidated activity payload as it arrives from a survey form or file.
///
/// Labels are free strings and counts are signed so that bad data fails
/// with a domain error in [`ActivityDraft::validate`] instead of a serde
/// error at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDraft {
    #[serde(default = "default_kind_label")]
    pub fertilizer_kind: String,
    /// Fertilizer applied over the activity period, kg.
    #[serde(default)]
    pub fertilizer_kg: f64,
    /// Headcount per species label.
    #[serde(default)]
    pub livestock: FxHashMap<String, i64>,
    #[serde(default = "default_kind_label")]
    pub fuel_kind: String,
    /// Fuel burned over the activity period, litres.
    #[serde(default)]
    pub fuel_litres: f64,
    pub season: String,
}

impl ActivityDraft {
    /// Resolve labels and check quantities, producing a typed input.
    ///
    /// Fails on the first problem found; no partial input is ever returned.
    pub fn validate(&self) -> Result<ActivityInput, ValidationError> {
        let fertilizer_kind = FertilizerKind::from_label(&self.fertilizer_kind)
            .ok_or_else(|| ValidationError::UnknownFertilizer(self.fertilizer_kind.clone()))?;
        let fuel_kind = FuelKind::from_label(&self.fuel_kind)
            .ok_or_else(|| ValidationError::UnknownFuel(self.fuel_kind.clone()))?;
        let season = Season::from_label(&self.season)
            .ok_or_else(|| ValidationError::UnknownSeason(self.season.clone()))?;

        check_quantity("fertilizer_kg", self.fertilizer_kg)?;
        check_quantity("fuel_litres", self.fuel_litres)?;

        let mut livestock: FxHashMap<Species, u32> = FxHashMap::default();
        for (label, &raw) in &self.livestock {
            let species = Species::from_label(label)
                .ok_or_else(|| ValidationError::UnknownSpecies(label.clone()))?;
            if raw < 0 {
                return Err(ValidationError::NegativeCount {
                    species,
                    count: raw,
                });
            }
            let heads = u32::try_from(raw).map_err(|_| ValidationError::CountTooLarge {
                species,
                count: raw,
            })?;
            // Aliased labels ("Goat", "goats") accumulate into one species.
            let slot = livestock.entry(species).or_insert(0);
            *slot = slot
                .checked_add(heads)
                .ok_or(ValidationError::CountTooLarge {
                    species,
                    count: raw,
                })?;
        }

        Ok(ActivityInput {
            fertilizer_kind,
            fertilizer_kg: self.fertilizer_kg,
            livestock,
            fuel_kind,
            fuel_litres: self.fuel_litres,
            season,
        })
    }
}

/// Validated activity data: closed enums, non-negative quantities.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityInput {
    pub fertilizer_kind: FertilizerKind,
    pub fertilizer_kg: f64,
    pub livestock: FxHashMap<Species, u32>,
    pub fuel_kind: FuelKind,
    pub fuel_litres: f64,
    pub season: Season,
}

impl ActivityInput {
    /// Re-check the float quantities. The estimator runs this before any
    /// arithmetic so a hand-built input cannot smuggle in a negative mass.
    pub fn check_quantities(&self) -> Result<(), ValidationError> {
        check_quantity("fertilizer_kg", self.fertilizer_kg)?;
        check_quantity("fuel_litres", self.fuel_litres)
    }

    /// Total headcount across all species.
    pub fn total_livestock(&self) -> u64 {
        self.livestock.values().map(|&heads| u64::from(heads)).sum()
    }
}

fn check_quantity(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteQuantity { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeQuantity { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(fertilizer: &str, fuel: &str, season: &str) -> ActivityDraft {
        ActivityDraft {
            fertilizer_kind: fertilizer.to_string(),
            fertilizer_kg: 0.0,
            livestock: FxHashMap::default(),
            fuel_kind: fuel.to_string(),
            fuel_litres: 0.0,
            season: season.to_string(),
        }
    }

    #[test]
    fn test_fertilizer_labels_parse_with_aliases() {
        assert_eq!(
            FertilizerKind::from_label("synthetic_n"),
            Some(FertilizerKind::SyntheticN)
        );
        assert_eq!(
            FertilizerKind::from_label("Synthetic-N"),
            Some(FertilizerKind::SyntheticN)
        );
        assert_eq!(
            FertilizerKind::from_label("  UREA  "),
            Some(FertilizerKind::Urea)
        );
        assert_eq!(FertilizerKind::from_label("npk pellets"), None);
    }

    #[test]
    fn test_unknown_labels_are_rejected_with_the_offending_text() {
        let err = draft("biochar", "diesel", "dry").validate().unwrap_err();
        assert_eq!(err, ValidationError::UnknownFertilizer("biochar".to_string()));

        let err = draft("urea", "kerosene", "dry").validate().unwrap_err();
        assert_eq!(err, ValidationError::UnknownFuel("kerosene".to_string()));

        let err = draft("urea", "diesel", "harmattan").validate().unwrap_err();
        assert_eq!(err, ValidationError::UnknownSeason("harmattan".to_string()));
    }

    #[test]
    fn test_negative_quantities_are_rejected_but_zero_passes() {
        let mut d = draft("urea", "diesel", "dry");
        d.fertilizer_kg = -1.0;
        assert_eq!(
            d.validate().unwrap_err(),
            ValidationError::NegativeQuantity {
                field: "fertilizer_kg",
                value: -1.0
            }
        );

        let mut d = draft("urea", "diesel", "dry");
        d.fuel_litres = -0.5;
        assert_eq!(
            d.validate().unwrap_err(),
            ValidationError::NegativeQuantity {
                field: "fuel_litres",
                value: -0.5
            }
        );

        let d = draft("urea", "diesel", "dry");
        assert!(d.validate().is_ok(), "all-zero quantities must validate");
    }

    #[test]
    fn test_non_finite_quantities_are_rejected() {
        let mut d = draft("urea", "diesel", "dry");
        d.fuel_litres = f64::NAN;
        assert!(matches!(
            d.validate().unwrap_err(),
            ValidationError::NonFiniteQuantity {
                field: "fuel_litres",
                ..
            }
        ));
    }

    #[test]
    fn test_livestock_counts_negative_and_oversized() {
        let mut d = draft("none", "none", "rainy");
        d.livestock.insert("cattle".to_string(), -2);
        assert_eq!(
            d.validate().unwrap_err(),
            ValidationError::NegativeCount {
                species: Species::Cattle,
                count: -2
            }
        );

        let mut d = draft("none", "none", "rainy");
        d.livestock.insert("goats".to_string(), i64::from(u32::MAX) + 1);
        assert!(matches!(
            d.validate().unwrap_err(),
            ValidationError::CountTooLarge {
                species: Species::Goats,
                ..
            }
        ));

        let mut d = draft("none", "none", "rainy");
        d.livestock.insert("zebu".to_string(), 4);
        assert_eq!(
            d.validate().unwrap_err(),
            ValidationError::UnknownSpecies("zebu".to_string())
        );
    }

    #[test]
    fn test_aliased_species_labels_accumulate() {
        let mut d = draft("none", "none", "dry");
        d.livestock.insert("goat".to_string(), 3);
        d.livestock.insert("goats".to_string(), 2);
        let input = d.validate().unwrap();
        assert_eq!(input.livestock.get(&Species::Goats), Some(&5));
        assert_eq!(input.total_livestock(), 5);
    }

    #[test]
    fn test_season_from_month_follows_cameroon_calendar() {
        assert_eq!(Season::from_month(3), Some(Season::Rainy));
        assert_eq!(Season::from_month(10), Some(Season::Rainy));
        assert_eq!(Season::from_month(2), Some(Season::Dry));
        assert_eq!(Season::from_month(11), Some(Season::Dry));
        assert_eq!(Season::from_month(0), None);
        assert_eq!(Season::from_month(13), None);
    }

    #[test]
    fn test_draft_parses_survey_json_with_defaults() {
        let json = r#"{
            "livestock": {"cattle": 2, "poultry": 40},
            "season": "rainy"
        }"#;
        let d: ActivityDraft = serde_json::from_str(json).unwrap();
        let input = d.validate().unwrap();

        assert_eq!(input.fertilizer_kind, FertilizerKind::None);
        assert_eq!(input.fuel_kind, FuelKind::None);
        assert_eq!(input.season, Season::Rainy);
        assert_eq!(input.livestock.get(&Species::Cattle), Some(&2));
        assert_eq!(input.total_livestock(), 42);
    }

    #[test]
    fn test_enum_serde_labels_are_snake_case() {
        let label = serde_json::to_string(&FertilizerKind::SyntheticN).unwrap();
        assert_eq!(label, "\"synthetic_n\"");
        let back: FertilizerKind = serde_json::from_str(&label).unwrap();
        assert_eq!(back, FertilizerKind::SyntheticN);
    }
}
