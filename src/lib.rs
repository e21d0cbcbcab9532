//! Emission Estimator
//!
//! Agricultural carbon accounting for Cameroon smallholdings: validated
//! activity data plus an explicit, versioned factor dataset in, an emission
//! report with advisory tags out. Pure and stateless throughout; the
//! extended assessment adds soil carbon, intensity, and regional benchmarks.
//!
//! - `activity`: survey drafts, label parsing, validated inputs
//! - `factors`: versioned factor datasets with JSON loading
//! - `sources`: per-source arithmetic (fertilizer, livestock, fuel, soil)
//! - `estimator`: pure entry points plus the batch coordinator
//! - `benchmarks`: regional per-hectare aggregates via Polars

pub mod activity;
pub mod benchmarks;
pub mod climate;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod field;
pub mod recommend;
pub mod report;
pub mod sources;

// Re-export commonly used types
pub use activity::{ActivityDraft, ActivityInput, FertilizerKind, FuelKind, Season, Species};
pub use benchmarks::{BenchmarkComparison, RegionBenchmark, RegionalBenchmarks};
pub use climate::ClimateZone;
pub use error::{ConfigurationError, EstimateError, ValidationError};
pub use estimator::{assess, compute, EmissionEstimator};
pub use factors::{EmissionFactorTable, LivestockFactor};
pub use field::{CropClass, FarmingPractice, FieldProfile, SiteConditions};
pub use recommend::{
    evaluate_rules, RecommendationTag, RuleContext, RuleSubject, ThresholdRule, DEFAULT_RULES,
};
pub use report::{
    CarbonIntensity, EmissionReport, FarmAssessment, IntensityDetail, SoilCarbonDetail,
};
pub use sources::{LivestockResult, SoilCarbonResult, SpeciesContribution};
