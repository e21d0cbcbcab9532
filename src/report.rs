//! Report types: the per-activity emission report and the extended farm
//! assessment built on top of it.
//!
//! Reports are plain serializable values. Every figure is kg CO2e over the
//! activity period unless a field says otherwise.

use serde::{Deserialize, Serialize};

use crate::activity::Season;
use crate::climate::ClimateZone;
use crate::recommend::RecommendationTag;
use crate::sources::SpeciesContribution;

// ============================================================================
// EMISSION REPORT
// ============================================================================

/// One farm's emission estimate for an activity period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionReport {
    /// Version of the factor dataset that produced this report.
    pub dataset_version: String,
    pub season: Season,
    /// Fertilizer subtotal, kg CO2e.
    pub fertilizer_kg_co2e: f64,
    /// Livestock subtotal (enteric plus manure), kg CO2e.
    pub livestock_kg_co2e: f64,
    /// Fuel subtotal, kg CO2e.
    pub fuel_kg_co2e: f64,
    /// Grand total: the sum of the three subtotals.
    pub total_kg_co2e: f64,
    /// Seasonal multiplier that was applied to the grand total.
    pub season_multiplier: f64,
    /// Grand total after the seasonal multiplier.
    pub adjusted_kg_co2e: f64,
    /// Per-species livestock shares, in survey order.
    pub livestock_breakdown: Vec<SpeciesContribution>,
    /// Advisory tags in rule order, deduplicated.
    pub recommendations: Vec<RecommendationTag>,
}

// ============================================================================
// CARBON INTENSITY
// ============================================================================

/// Intensity class of net emissions per hectare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbonIntensity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl CarbonIntensity {
    /// Classify net emissions per hectare, kg CO2e/ha.
    pub fn classify(kg_co2e_per_ha: f64) -> CarbonIntensity {
        if kg_co2e_per_ha < 1000.0 {
            CarbonIntensity::Low
        } else if kg_co2e_per_ha < 2000.0 {
            CarbonIntensity::Medium
        } else if kg_co2e_per_ha < 4000.0 {
            CarbonIntensity::High
        } else {
            CarbonIntensity::VeryHigh
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            CarbonIntensity::Low => "Low",
            CarbonIntensity::Medium => "Medium",
            CarbonIntensity::High => "High",
            CarbonIntensity::VeryHigh => "Very High",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CarbonIntensity::Low => "Below typical smallholding intensity for the region",
            CarbonIntensity::Medium => "Around typical smallholding intensity",
            CarbonIntensity::High => "Above typical intensity; targeted cuts pay off",
            CarbonIntensity::VeryHigh => "Far above typical intensity; major cuts available",
        }
    }

    /// Indicative emissions-reduction potential for this class, percent.
    pub fn reduction_potential_pct(&self) -> u8 {
        match self {
            CarbonIntensity::Low => 5,
            CarbonIntensity::Medium => 15,
            CarbonIntensity::High => 25,
            CarbonIntensity::VeryHigh => 35,
        }
    }

    /// All classes in ascending order.
    pub fn all() -> &'static [CarbonIntensity] {
        &[
            CarbonIntensity::Low,
            CarbonIntensity::Medium,
            CarbonIntensity::High,
            CarbonIntensity::VeryHigh,
        ]
    }
}

// ============================================================================
// FARM ASSESSMENT
// ============================================================================

/// Soil-carbon outcome attached to an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilCarbonDetail {
    pub climate_zone: ClimateZone,
    /// Water limitation applied to the stock change, [0, 1].
    pub moisture_factor: f64,
    /// Stock change, kg CO2e per year. Negative = sequestration.
    pub soc_change_kg_co2e: f64,
    /// N2O from mineralization of lost carbon, kg CO2e per year.
    pub mineralization_n2o_kg_co2e: f64,
}

/// Net emissions per hectare with its intensity class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntensityDetail {
    pub kg_co2e_per_ha: f64,
    pub class: CarbonIntensity,
    /// Indicative reduction potential for the class, percent.
    pub reduction_potential_pct: u8,
}

/// Extended assessment: the core report plus site-aware refinements.
///
/// Without a field profile the soil-carbon and intensity sections are absent
/// and `net_kg_co2e` equals the report's adjusted total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmAssessment {
    pub report: EmissionReport,
    pub soil_carbon: Option<SoilCarbonDetail>,
    /// Adjusted total plus mineralization N2O plus the SOC change.
    pub net_kg_co2e: f64,
    pub intensity: Option<IntensityDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_boundaries() {
        assert_eq!(CarbonIntensity::classify(999.9), CarbonIntensity::Low);
        assert_eq!(CarbonIntensity::classify(1000.0), CarbonIntensity::Medium);
        assert_eq!(CarbonIntensity::classify(1999.9), CarbonIntensity::Medium);
        assert_eq!(CarbonIntensity::classify(2000.0), CarbonIntensity::High);
        assert_eq!(CarbonIntensity::classify(4000.0), CarbonIntensity::VeryHigh);
        assert_eq!(CarbonIntensity::classify(0.0), CarbonIntensity::Low);
    }

    #[test]
    fn test_reduction_potential_rises_with_intensity() {
        let potentials: Vec<u8> = CarbonIntensity::all()
            .iter()
            .map(|class| class.reduction_potential_pct())
            .collect();
        assert_eq!(potentials, vec![5, 15, 25, 35]);
    }

    #[test]
    fn test_every_class_has_text() {
        for class in CarbonIntensity::all() {
            assert!(!class.display_text().is_empty());
            assert!(!class.description().is_empty());
        }
    }
}
