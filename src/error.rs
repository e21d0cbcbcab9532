//! Error types for activity validation and factor-table lookups.
//!
//! Problems with user-supplied activity data (negative quantities, unknown
//! labels) surface as [`ValidationError`] before any arithmetic runs. Gaps in
//! a factor dataset (a valid subtype with no entry) surface as
//! [`ConfigurationError`]. [`EstimateError`] unifies the two for the
//! estimation entry points so callers can still tell a bad request from a
//! broken dataset.

use thiserror::Error;

use crate::activity::{FertilizerKind, FuelKind, Season, Species};

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// Rejected activity data. Raised during draft validation or the quantity
/// re-check inside `compute`, always before any emission math.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A physical quantity (mass, volume, headcount) was below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeQuantity { field: &'static str, value: f64 },

    /// A physical quantity was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteQuantity { field: &'static str, value: f64 },

    /// Fertilizer label outside the supported set.
    #[error("unknown fertilizer type '{0}'")]
    UnknownFertilizer(String),

    /// Fuel label outside the supported set.
    #[error("unknown fuel type '{0}'")]
    UnknownFuel(String),

    /// Season label outside the supported set.
    #[error("unknown season '{0}'")]
    UnknownSeason(String),

    /// Livestock label outside the supported species set.
    #[error("unknown livestock species '{0}'")]
    UnknownSpecies(String),

    /// A livestock headcount was below zero.
    #[error("livestock count for {} must be non-negative, got {count}", .species.display_text())]
    NegativeCount { species: Species, count: i64 },

    /// A livestock headcount exceeded the supported range.
    #[error("livestock count for {} is out of range: {count}", .species.display_text())]
    CountTooLarge { species: Species, count: i64 },

    /// Field area must be a positive, finite number of hectares.
    #[error("field area must be positive, got {0} ha")]
    InvalidArea(f64),

    /// Topsoil moisture is a volumetric fraction in [0, 1].
    #[error("topsoil moisture must be a fraction in [0, 1], got {0}")]
    InvalidMoisture(f64),
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// A factor dataset is missing an entry for a subtype or season the input
/// validly uses. This is a dataset bug, not an input problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// No emission factor for a fertilizer kind.
    #[error("factor dataset '{version}' has no entry for fertilizer {}", .kind.display_text())]
    MissingFertilizerFactor { kind: FertilizerKind, version: String },

    /// No enteric/manure factors for a livestock species.
    #[error("factor dataset '{version}' has no entry for {}", .species.display_text())]
    MissingLivestockFactor { species: Species, version: String },

    /// No emission factor for a fuel kind.
    #[error("factor dataset '{version}' has no entry for fuel {}", .kind.display_text())]
    MissingFuelFactor { kind: FuelKind, version: String },

    /// No seasonal multiplier for a season.
    #[error("factor dataset '{version}' has no multiplier for the {} season", .season.display_text())]
    MissingSeasonMultiplier { season: Season, version: String },
}

// ============================================================================
// COMBINED ESTIMATE ERROR
// ============================================================================

/// Either failure mode of an estimation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl EstimateError {
    /// True when the failure came from the activity data itself.
    pub fn is_validation(&self) -> bool {
        matches!(self, EstimateError::Validation(_))
    }

    /// True when the failure came from a gap in the factor dataset.
    pub fn is_configuration(&self) -> bool {
        matches!(self, EstimateError::Configuration(_))
    }
}
