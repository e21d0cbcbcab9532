//! Livestock emissions: enteric fermentation plus manure management.
//!
//! Both pathways are methane-driven and carried per head per year in the
//! dataset. The subtotal keeps a per-species breakdown so a report can show
//! where the herd's emissions come from.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::activity::Species;
use crate::error::ConfigurationError;
use crate::factors::EmissionFactorTable;

/// One species' share of the livestock subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesContribution {
    pub species: Species,
    pub head_count: u32,
    pub enteric_kg_co2e: f64,
    pub manure_kg_co2e: f64,
}

impl SpeciesContribution {
    pub fn total_kg_co2e(&self) -> f64 {
        self.enteric_kg_co2e + self.manure_kg_co2e
    }
}

/// Livestock subtotal with its per-species breakdown.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LivestockResult {
    pub total_kg_co2e: f64,
    pub contributions: Vec<SpeciesContribution>,
}

/// Emissions from the herd, kg CO2e per year.
///
/// Species are visited in survey order so the breakdown is deterministic.
/// A species listed with a zero count still appears (and still needs a
/// dataset entry); species absent from the map do not.
pub fn livestock_emissions(
    counts: &FxHashMap<Species, u32>,
    factors: &EmissionFactorTable,
) -> Result<LivestockResult, ConfigurationError> {
    let mut result = LivestockResult::default();
    for species in Species::all() {
        let head_count = match counts.get(species) {
            Some(&count) => count,
            None => continue,
        };
        let factor = factors.livestock_factor(*species)?;
        let heads = f64::from(head_count);
        let contribution = SpeciesContribution {
            species: *species,
            head_count,
            enteric_kg_co2e: heads * factor.enteric_kg_co2e,
            manure_kg_co2e: heads * factor.manure_kg_co2e,
        };
        result.total_kg_co2e += contribution.total_kg_co2e();
        result.contributions.push(contribution);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counts(entries: &[(Species, u32)]) -> FxHashMap<Species, u32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_empty_herd_is_zero_with_no_breakdown() {
        let table = EmissionFactorTable::cameroon_default();
        let result = livestock_emissions(&FxHashMap::default(), &table).unwrap();
        assert_eq!(result.total_kg_co2e, 0.0);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_heads_times_per_head_factors() {
        let table = EmissionFactorTable::cameroon_default();
        let result =
            livestock_emissions(&counts(&[(Species::Cattle, 2), (Species::Goats, 10)]), &table)
                .unwrap();

        let expected = 2.0 * table.livestock_factor(Species::Cattle).unwrap().total()
            + 10.0 * table.livestock_factor(Species::Goats).unwrap().total();
        assert_relative_eq!(result.total_kg_co2e, expected, epsilon = 0.0001);
    }

    #[test]
    fn test_breakdown_follows_survey_order() {
        let table = EmissionFactorTable::cameroon_default();
        // Insertion order scrambled on purpose.
        let result = livestock_emissions(
            &counts(&[
                (Species::Rabbits, 5),
                (Species::Cattle, 1),
                (Species::Pigs, 3),
            ]),
            &table,
        )
        .unwrap();

        let order: Vec<Species> = result.contributions.iter().map(|c| c.species).collect();
        assert_eq!(order, vec![Species::Cattle, Species::Pigs, Species::Rabbits]);
    }

    #[test]
    fn test_zero_count_appears_in_breakdown_absent_does_not() {
        let table = EmissionFactorTable::cameroon_default();
        let result =
            livestock_emissions(&counts(&[(Species::Sheep, 0)]), &table).unwrap();

        assert_eq!(result.contributions.len(), 1);
        assert_eq!(result.contributions[0].species, Species::Sheep);
        assert_eq!(result.contributions[0].total_kg_co2e(), 0.0);
        assert_eq!(result.total_kg_co2e, 0.0);
    }

    #[test]
    fn test_missing_species_entry_is_a_configuration_error() {
        let mut table = EmissionFactorTable::cameroon_default();
        table.livestock.remove(&Species::Rabbits);
        let err = livestock_emissions(&counts(&[(Species::Rabbits, 2)]), &table).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingLivestockFactor {
                species: Species::Rabbits,
                ..
            }
        ));
    }
}
