//! Fuel combustion emissions.
//!
//! Litres burned times a per-litre combustion factor. Diesel and petrol
//! carry separate factors in the dataset.

use crate::activity::FuelKind;
use crate::error::ConfigurationError;
use crate::factors::EmissionFactorTable;

/// Emissions from fuel combustion, kg CO2e.
///
/// [`FuelKind::None`] is zero without a lookup; any other kind needs a
/// dataset entry even at zero volume.
pub fn fuel_emissions(
    kind: FuelKind,
    volume_litres: f64,
    factors: &EmissionFactorTable,
) -> Result<f64, ConfigurationError> {
    if kind == FuelKind::None {
        return Ok(0.0);
    }
    let factor = factors.fuel_factor(kind)?;
    Ok(volume_litres * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diesel_litres_times_factor() {
        let table = EmissionFactorTable::cameroon_default();
        let got = fuel_emissions(FuelKind::Diesel, 20.0, &table).unwrap();
        assert_relative_eq!(got, 53.6, epsilon = 0.0001);
    }

    #[test]
    fn test_none_skips_the_lookup() {
        let mut table = EmissionFactorTable::cameroon_default();
        table.fuel.clear();
        let got = fuel_emissions(FuelKind::None, 500.0, &table).unwrap();
        assert_eq!(got, 0.0);
    }

    #[test]
    fn test_missing_petrol_entry_is_a_configuration_error() {
        let mut table = EmissionFactorTable::cameroon_default();
        table.fuel.remove(&FuelKind::Petrol);
        let err = fuel_emissions(FuelKind::Petrol, 10.0, &table).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingFuelFactor {
                kind: FuelKind::Petrol,
                ..
            }
        ));
    }
}
