//! Fertilizer application emissions.
//!
//! Direct N2O from the applied nitrogen, folded into a per-kind factor in
//! kg CO2e per kg of product. Which kinds exist and at what factor is
//! entirely a property of the dataset.

use crate::activity::FertilizerKind;
use crate::error::ConfigurationError;
use crate::factors::EmissionFactorTable;

/// Emissions from fertilizer application, kg CO2e.
///
/// [`FertilizerKind::None`] is zero without a lookup; any other kind needs
/// a dataset entry even at zero mass, so a configuration gap never hides
/// behind an idle season.
pub fn fertilizer_emissions(
    kind: FertilizerKind,
    mass_kg: f64,
    factors: &EmissionFactorTable,
) -> Result<f64, ConfigurationError> {
    if kind == FertilizerKind::None {
        return Ok(0.0);
    }
    let factor = factors.fertilizer_factor(kind)?;
    Ok(mass_kg * factor)
}
