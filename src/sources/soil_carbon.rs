//! Soil organic carbon stock change.
//!
//! Simplified IPCC stock-difference logic: a baseline annual change rate
//! scaled by practice, cropping mix, climate zone, and a soil-moisture
//! factor. Negative results are sequestration. A net loss of carbon
//! additionally mineralizes nitrogen, emitting N2O.

use serde::Serialize;

use crate::climate::ClimateZone;
use crate::field::{crop_weighted_soc_factor, FieldProfile};

/// Baseline SOC stock change, tonnes C per hectare per year. Negative:
/// managed smallholdings in the region tend to rebuild carbon.
const BASELINE_SOC_T_C_PER_HA: f64 = -0.5;

/// Share of lost carbon whose companion nitrogen mineralizes to N2O-N.
const MINERALIZATION_N_FRACTION: f64 = 0.01;

/// Mass conversion, N2O-N to N2O.
const N_TO_N2O: f64 = 44.0 / 28.0;

/// GWP100 of N2O.
const N2O_GWP: f64 = 298.0;

/// Mass conversion, C to CO2.
const C_TO_CO2: f64 = 44.0 / 12.0;

/// SOC outcome for a whole field, kg CO2e per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilCarbonResult {
    /// Stock change as CO2e. Negative = sequestration.
    pub soc_change_kg_co2e: f64,
    /// N2O from mineralization of lost soil carbon. Zero unless the stock
    /// change is a net loss.
    pub mineralization_n2o_kg_co2e: f64,
}

/// Annual SOC stock change for a field.
///
/// `moisture_factor` is the water limitation from
/// [`crate::climate::soil_moisture_factor`], or 1.0 when the site has no
/// readings.
pub fn soil_carbon_change(
    field: &FieldProfile,
    zone: ClimateZone,
    moisture_factor: f64,
) -> SoilCarbonResult {
    let change_t_c_per_ha = BASELINE_SOC_T_C_PER_HA
        * field.practice.soc_factor()
        * crop_weighted_soc_factor(&field.crops)
        * zone.soc_factor()
        * moisture_factor;
    let change_t_c = change_t_c_per_ha * field.area_ha;
    let soc_change_kg_co2e = change_t_c * C_TO_CO2 * 1000.0;

    // 1% of a net carbon loss mineralizes to N2O-N; sequestration emits none.
    let mineralization_n2o_kg_co2e = if change_t_c > 0.0 {
        change_t_c * MINERALIZATION_N_FRACTION * N_TO_N2O * N2O_GWP * 1000.0
    } else {
        0.0
    };

    SoilCarbonResult {
        soc_change_kg_co2e,
        mineralization_n2o_kg_co2e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{CropClass, FarmingPractice, SiteConditions};
    use approx::assert_relative_eq;

    fn field(area_ha: f64, practice: FarmingPractice, crops: Vec<CropClass>) -> FieldProfile {
        FieldProfile {
            area_ha,
            practice,
            crops,
            site: SiteConditions::default(),
        }
    }

    #[test]
    fn test_conventional_cereals_sequester_the_full_baseline() {
        // 1 ha, all factors 1.0: -0.5 t C -> -0.5 * 44/12 * 1000 kg CO2e.
        let result = soil_carbon_change(
            &field(1.0, FarmingPractice::Conventional, vec![CropClass::Cereals]),
            ClimateZone::TemperateMoist,
            1.0,
        );
        assert_relative_eq!(
            result.soc_change_kg_co2e,
            -0.5 * (44.0 / 12.0) * 1000.0,
            epsilon = 0.0001
        );
        assert_eq!(result.mineralization_n2o_kg_co2e, 0.0);
    }

    #[test]
    fn test_factors_scale_the_baseline_multiplicatively() {
        let result = soil_carbon_change(
            &field(2.0, FarmingPractice::Agroforestry, vec![CropClass::Pasture]),
            ClimateZone::TropicalMoist,
            0.8,
        );
        // -0.5 * 0.4 * 0.6 * 0.9 * 0.8 t C/ha on 2 ha.
        let expected_t_c = -0.5 * 0.4 * 0.6 * 0.9 * 0.8 * 2.0;
        assert_relative_eq!(
            result.soc_change_kg_co2e,
            expected_t_c * (44.0 / 12.0) * 1000.0,
            epsilon = 0.0001
        );
        assert_eq!(result.mineralization_n2o_kg_co2e, 0.0);
    }

    #[test]
    fn test_dry_soil_suppresses_the_stock_change() {
        let profile = field(1.0, FarmingPractice::Mixed, vec![CropClass::Cereals]);
        let moist = soil_carbon_change(&profile, ClimateZone::TemperateDry, 1.0);
        let parched = soil_carbon_change(&profile, ClimateZone::TemperateDry, 0.0);

        assert!(moist.soc_change_kg_co2e < 0.0);
        assert_eq!(parched.soc_change_kg_co2e, 0.0);
    }

    #[test]
    fn test_empty_crop_list_is_neutral() {
        let with_cereals = soil_carbon_change(
            &field(1.0, FarmingPractice::Conventional, vec![CropClass::Cereals]),
            ClimateZone::TemperateMoist,
            1.0,
        );
        let without = soil_carbon_change(
            &field(1.0, FarmingPractice::Conventional, vec![]),
            ClimateZone::TemperateMoist,
            1.0,
        );
        // Cereals carry factor 1.0, same as the empty-list fallback.
        assert_relative_eq!(
            with_cereals.soc_change_kg_co2e,
            without.soc_change_kg_co2e,
            epsilon = 0.0001
        );
    }
}
