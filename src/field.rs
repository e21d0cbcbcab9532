//! Field profile: cultivated area, management practice, cropping mix, and
//! optional site readings used by the extended assessment.
//!
//! Practice and crop factors scale the baseline soil-carbon stock change;
//! values follow IPCC 2019 Refinement Tier 1 defaults with Sub-Saharan
//! adjustments.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============================================================================
// MANAGEMENT PRACTICE
// ============================================================================

/// Dominant management practice on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmingPractice {
    Conventional,
    Organic,
    Permaculture,
    Agroforestry,
    Mixed,
    Conservation,
}

impl FarmingPractice {
    /// Multiplier on the baseline soil-carbon stock change.
    pub fn soc_factor(&self) -> f64 {
        match self {
            FarmingPractice::Conventional => 1.0,
            FarmingPractice::Organic => 0.8,
            FarmingPractice::Permaculture => 0.5,
            FarmingPractice::Agroforestry => 0.4,
            FarmingPractice::Mixed => 0.9,
            FarmingPractice::Conservation => 0.7,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            FarmingPractice::Conventional => "Conventional",
            FarmingPractice::Organic => "Organic",
            FarmingPractice::Permaculture => "Permaculture",
            FarmingPractice::Agroforestry => "Agroforestry",
            FarmingPractice::Mixed => "Mixed",
            FarmingPractice::Conservation => "Conservation",
        }
    }

    /// Longer form-facing label.
    pub fn description(&self) -> &'static str {
        match self {
            FarmingPractice::Conventional => "Traditional farming",
            FarmingPractice::Organic => "Natural farming without synthetic inputs",
            FarmingPractice::Permaculture => "Permaculture design",
            FarmingPractice::Agroforestry => "Tree and crop farming",
            FarmingPractice::Mixed => "Mixed crop / livestock",
            FarmingPractice::Conservation => "Soil-saving farming",
        }
    }

    /// All practices in declaration order.
    pub fn all() -> &'static [FarmingPractice] {
        &[
            FarmingPractice::Conventional,
            FarmingPractice::Organic,
            FarmingPractice::Permaculture,
            FarmingPractice::Agroforestry,
            FarmingPractice::Mixed,
            FarmingPractice::Conservation,
        ]
    }
}

// ============================================================================
// CROP CLASSES
// ============================================================================

/// Crop classes grown on the field. The soil-carbon crop factor is the
/// unweighted mean over the listed classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropClass {
    Cereals,
    Legumes,
    Tubers,
    RootCrops,
    Vegetables,
    Fruits,
    CashCrops,
    Pasture,
}

impl CropClass {
    /// Multiplier on the baseline soil-carbon stock change.
    pub fn soc_factor(&self) -> f64 {
        match self {
            CropClass::Cereals => 1.0,
            CropClass::Legumes => 0.85,
            CropClass::Tubers => 1.1,
            CropClass::RootCrops => 1.05,
            CropClass::Vegetables => 1.15,
            CropClass::Fruits => 0.7,
            CropClass::CashCrops => 0.9,
            CropClass::Pasture => 0.6,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            CropClass::Cereals => "Cereals",
            CropClass::Legumes => "Legumes",
            CropClass::Tubers => "Tubers",
            CropClass::RootCrops => "Root crops",
            CropClass::Vegetables => "Vegetables",
            CropClass::Fruits => "Fruits",
            CropClass::CashCrops => "Cash crops",
            CropClass::Pasture => "Pasture",
        }
    }

    /// Longer form-facing label.
    pub fn description(&self) -> &'static str {
        match self {
            CropClass::Cereals => "Cereals (maize, rice, sorghum, millet)",
            CropClass::Legumes => "Legumes (beans, cowpeas, groundnuts)",
            CropClass::Tubers => "Tubers (yam, sweet potato)",
            CropClass::RootCrops => "Root crops (cassava, plantain)",
            CropClass::Vegetables => "Vegetables (tomatoes, onions, peppers)",
            CropClass::Fruits => "Fruits (citrus, avocado, mango)",
            CropClass::CashCrops => "Cash crops (cocoa, coffee, cotton, oil palm)",
            CropClass::Pasture => "Pasture and fodder",
        }
    }

    /// All crop classes in declaration order.
    pub fn all() -> &'static [CropClass] {
        &[
            CropClass::Cereals,
            CropClass::Legumes,
            CropClass::Tubers,
            CropClass::RootCrops,
            CropClass::Vegetables,
            CropClass::Fruits,
            CropClass::CashCrops,
            CropClass::Pasture,
        ]
    }
}

/// Mean crop factor over the listed classes. An empty list is neutral (1.0).
/// Duplicate entries weigh their class accordingly.
pub fn crop_weighted_soc_factor(crops: &[CropClass]) -> f64 {
    if crops.is_empty() {
        return 1.0;
    }
    let sum: f64 = crops.iter().map(|crop| crop.soc_factor()).sum();
    sum / crops.len() as f64
}

// ============================================================================
// SITE AND PROFILE
// ============================================================================

/// Optional site readings. Any missing reading falls back to a regional
/// default during climate classification.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConditions {
    /// Mean annual temperature, degrees C.
    #[serde(default)]
    pub mean_temp_c: Option<f64>,
    /// Annual precipitation, mm.
    #[serde(default)]
    pub annual_precip_mm: Option<f64>,
    /// Volumetric water content at 0-7 cm and 7-28 cm depth, fractions.
    #[serde(default)]
    pub topsoil_moisture: Option<[f64; 2]>,
}

/// One field as surveyed: how big it is, how it is run, what grows on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldProfile {
    /// Cultivated area in hectares.
    pub area_ha: f64,
    pub practice: FarmingPractice,
    #[serde(default)]
    pub crops: Vec<CropClass>,
    #[serde(default)]
    pub site: SiteConditions,
}

impl FieldProfile {
    /// Range-check the numeric fields before the assessment uses them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.area_ha.is_finite() || self.area_ha <= 0.0 {
            return Err(ValidationError::InvalidArea(self.area_ha));
        }
        if let Some(temp) = self.site.mean_temp_c {
            if !temp.is_finite() {
                return Err(ValidationError::NonFiniteQuantity {
                    field: "mean_temp_c",
                    value: temp,
                });
            }
        }
        if let Some(precip) = self.site.annual_precip_mm {
            if !precip.is_finite() {
                return Err(ValidationError::NonFiniteQuantity {
                    field: "annual_precip_mm",
                    value: precip,
                });
            }
            if precip < 0.0 {
                return Err(ValidationError::NegativeQuantity {
                    field: "annual_precip_mm",
                    value: precip,
                });
            }
        }
        if let Some(layers) = self.site.topsoil_moisture {
            for fraction in layers {
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                    return Err(ValidationError::InvalidMoisture(fraction));
                }
            }
        }
        Ok(())
    }
}
