//! Climate zone classification for the soil-carbon adjustment.
//!
//! Six coarse zones from mean annual temperature and precipitation, in the
//! style of the IPCC climate regions. Sites with missing readings fall back
//! to highland-Cameroon defaults (15 C; 1000 mm when warm, 500 mm when cold).

use serde::{Deserialize, Serialize};

use crate::field::SiteConditions;

/// Optimum volumetric soil moisture for carbon turnover.
const MOISTURE_OPTIMUM: f64 = 0.30;

/// Width of the quadratic fall-off around the optimum.
const MOISTURE_WIDTH: f64 = 0.25;

// ============================================================================
// CLIMATE ZONE
// ============================================================================

/// Coarse climate zone of the field site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    TropicalMoist,
    TropicalDry,
    TemperateMoist,
    TemperateDry,
    ColdMoist,
    ColdDry,
}

impl ClimateZone {
    /// Classify from mean annual temperature (C) and precipitation (mm).
    ///
    /// Warm zones start strictly above 18 C, temperate covers 10 to 18 C
    /// inclusive, everything colder is cold. The moist cutoff is strict
    /// and zone-specific: 1500 mm tropical, 1000 mm temperate, 600 mm cold.
    pub fn classify(mean_temp_c: f64, annual_precip_mm: f64) -> ClimateZone {
        if mean_temp_c > 18.0 {
            if annual_precip_mm > 1500.0 {
                ClimateZone::TropicalMoist
            } else {
                ClimateZone::TropicalDry
            }
        } else if mean_temp_c >= 10.0 {
            if annual_precip_mm > 1000.0 {
                ClimateZone::TemperateMoist
            } else {
                ClimateZone::TemperateDry
            }
        } else if annual_precip_mm > 600.0 {
            ClimateZone::ColdMoist
        } else {
            ClimateZone::ColdDry
        }
    }

    /// Classify a surveyed site, applying the regional defaults for any
    /// missing reading.
    pub fn from_site(site: &SiteConditions) -> ClimateZone {
        let temp = site.mean_temp_c.unwrap_or(15.0);
        let precip = site
            .annual_precip_mm
            .unwrap_or(if temp > 10.0 { 1000.0 } else { 500.0 });
        ClimateZone::classify(temp, precip)
    }

    /// Multiplier on the baseline soil-carbon stock change.
    pub fn soc_factor(&self) -> f64 {
        match self {
            ClimateZone::TropicalMoist => 0.9,
            ClimateZone::TropicalDry => 1.1,
            ClimateZone::TemperateMoist => 1.0,
            ClimateZone::TemperateDry => 1.2,
            ClimateZone::ColdMoist => 1.1,
            ClimateZone::ColdDry => 1.3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateZone::TropicalMoist => "Tropical Moist",
            ClimateZone::TropicalDry => "Tropical Dry",
            ClimateZone::TemperateMoist => "Temperate Moist",
            ClimateZone::TemperateDry => "Temperate Dry",
            ClimateZone::ColdMoist => "Cold Moist",
            ClimateZone::ColdDry => "Cold Dry",
        }
    }

    /// All zones in declaration order.
    pub fn all() -> &'static [ClimateZone] {
        &[
            ClimateZone::TropicalMoist,
            ClimateZone::TropicalDry,
            ClimateZone::TemperateMoist,
            ClimateZone::TemperateDry,
            ClimateZone::ColdMoist,
            ClimateZone::ColdDry,
        ]
    }
}

// ============================================================================
// SOIL MOISTURE
// ============================================================================

/// Water limitation on soil-carbon turnover from two topsoil readings
/// (volumetric fractions at 0-7 cm and 7-28 cm).
///
/// Quadratic fall-off around the 0.30 optimum, clamped to [0, 1]. Sites
/// without readings skip this factor entirely (treated as 1.0 upstream).
pub fn soil_moisture_factor(layers: [f64; 2]) -> f64 {
    let mean = (layers[0] + layers[1]) / 2.0;
    let deviation = (mean - MOISTURE_OPTIMUM) / MOISTURE_WIDTH;
    (1.0 - deviation * deviation).clamp(0.0, 1.0)
}
