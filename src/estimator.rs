//! Emission estimation entry points.
//!
//! [`compute`] and [`assess`] are pure functions over a validated input and
//! an explicit factor dataset; nothing global, nothing cached. The
//! [`EmissionEstimator`] coordinator owns one dataset and adds batch
//! helpers, including a rayon-parallel variant for survey-scale runs.

use anyhow::Result;
use rayon::prelude::*;

use crate::activity::ActivityInput;
use crate::climate::{soil_moisture_factor, ClimateZone};
use crate::error::EstimateError;
use crate::factors::EmissionFactorTable;
use crate::field::FieldProfile;
use crate::recommend::{evaluate_rules, RuleContext};
use crate::report::{
    CarbonIntensity, EmissionReport, FarmAssessment, IntensityDetail, SoilCarbonDetail,
};
use crate::sources::{
    fertilizer_emissions, fuel_emissions, livestock_emissions, soil_carbon_change,
};

// ============================================================================
// PURE ESTIMATION
// ============================================================================

/// Compute the emission report for one activity period.
///
/// Re-checks the float quantities first, so even a hand-built input cannot
/// reach the arithmetic with a negative mass. Fails whole: no partial
/// report is ever returned.
pub fn compute(
    input: &ActivityInput,
    factors: &EmissionFactorTable,
) -> Result<EmissionReport, EstimateError> {
    input.check_quantities()?;

    let fertilizer_kg_co2e =
        fertilizer_emissions(input.fertilizer_kind, input.fertilizer_kg, factors)?;
    let livestock = livestock_emissions(&input.livestock, factors)?;
    let fuel_kg_co2e = fuel_emissions(input.fuel_kind, input.fuel_litres, factors)?;

    let total_kg_co2e = fertilizer_kg_co2e + livestock.total_kg_co2e + fuel_kg_co2e;
    let season_multiplier = factors.season_multiplier(input.season)?;
    let adjusted_kg_co2e = total_kg_co2e * season_multiplier;

    // Rules see pre-adjustment figures: advice should not flip with the season.
    let recommendations = evaluate_rules(
        &factors.rules,
        &RuleContext {
            fertilizer_kg_co2e,
            livestock_kg_co2e: livestock.total_kg_co2e,
            fuel_kg_co2e,
            total_kg_co2e,
        },
    );

    Ok(EmissionReport {
        dataset_version: factors.version.clone(),
        season: input.season,
        fertilizer_kg_co2e,
        livestock_kg_co2e: livestock.total_kg_co2e,
        fuel_kg_co2e,
        total_kg_co2e,
        season_multiplier,
        adjusted_kg_co2e,
        livestock_breakdown: livestock.contributions,
        recommendations,
    })
}

/// Extended assessment: the core report plus soil carbon and intensity when
/// a field profile is supplied.
///
/// The embedded report is exactly what [`compute`] returns for the same
/// input and dataset; the field refinements only add to it.
pub fn assess(
    input: &ActivityInput,
    field: Option<&FieldProfile>,
    factors: &EmissionFactorTable,
) -> Result<FarmAssessment, EstimateError> {
    if let Some(profile) = field {
        profile.validate()?;
    }

    let report = compute(input, factors)?;

    let profile = match field {
        Some(profile) => profile,
        None => {
            let net_kg_co2e = report.adjusted_kg_co2e;
            return Ok(FarmAssessment {
                report,
                soil_carbon: None,
                net_kg_co2e,
                intensity: None,
            });
        }
    };

    let climate_zone = ClimateZone::from_site(&profile.site);
    let moisture_factor = match profile.site.topsoil_moisture {
        Some(layers) => soil_moisture_factor(layers),
        None => 1.0,
    };
    let soc = soil_carbon_change(profile, climate_zone, moisture_factor);

    let net_kg_co2e =
        report.adjusted_kg_co2e + soc.mineralization_n2o_kg_co2e + soc.soc_change_kg_co2e;
    // Sequestration can push net below zero; intensity reads the floored value.
    let kg_co2e_per_ha = net_kg_co2e.max(0.0) / profile.area_ha;
    let class = CarbonIntensity::classify(kg_co2e_per_ha);

    Ok(FarmAssessment {
        report,
        soil_carbon: Some(SoilCarbonDetail {
            climate_zone,
            moisture_factor,
            soc_change_kg_co2e: soc.soc_change_kg_co2e,
            mineralization_n2o_kg_co2e: soc.mineralization_n2o_kg_co2e,
        }),
        net_kg_co2e,
        intensity: Some(IntensityDetail {
            kg_co2e_per_ha,
            class,
            reduction_potential_pct: class.reduction_potential_pct(),
        }),
    })
}

// ============================================================================
// ESTIMATOR COORDINATOR
// ============================================================================

/// Convenience wrapper owning one factor dataset.
pub struct EmissionEstimator {
    factors: EmissionFactorTable,
}

impl EmissionEstimator {
    /// Create an estimator over a dataset, verifying its values first.
    pub fn new(factors: EmissionFactorTable) -> Result<EmissionEstimator> {
        factors.verify()?;

        println!("\nInitializing Emission Estimator...");
        println!("  Factor dataset: {}", factors.version);
        println!("  Advisory rules: {}", factors.rules.len());
        println!();

        Ok(EmissionEstimator { factors })
    }

    /// Estimator over the embedded Cameroon default dataset.
    pub fn with_defaults() -> EmissionEstimator {
        EmissionEstimator {
            factors: EmissionFactorTable::cameroon_default(),
        }
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }

    pub fn compute(&self, input: &ActivityInput) -> Result<EmissionReport, EstimateError> {
        compute(input, &self.factors)
    }

    pub fn assess(
        &self,
        input: &ActivityInput,
        field: Option<&FieldProfile>,
    ) -> Result<FarmAssessment, EstimateError> {
        assess(input, field, &self.factors)
    }

    /// Estimate a batch sequentially. Each input fails or succeeds on its
    /// own; one bad record never poisons the batch.
    pub fn compute_batch(
        &self,
        inputs: &[ActivityInput],
    ) -> Vec<Result<EmissionReport, EstimateError>> {
        inputs.iter().map(|input| self.compute(input)).collect()
    }

    /// Parallel batch over rayon's thread pool. Output order matches input
    /// order.
    pub fn compute_batch_parallel(
        &self,
        inputs: &[ActivityInput],
    ) -> Vec<Result<EmissionReport, EstimateError>> {
        inputs
            .par_iter()
            .map(|input| compute(input, &self.factors))
            .collect()
    }
}
