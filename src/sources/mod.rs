//! Per-source emission calculations.
//!
//! One module per emission source. Each exposes a pure function that takes
//! validated activity data plus a factor dataset and returns a small result,
//! leaving aggregation and seasonal adjustment to the estimator.

pub mod fertilizer;
pub mod fuel;
pub mod livestock;
pub mod soil_carbon;

pub use fertilizer::fertilizer_emissions;
pub use fuel::fuel_emissions;
pub use livestock::{livestock_emissions, LivestockResult, SpeciesContribution};
pub use soil_carbon::{soil_carbon_change, SoilCarbonResult};
