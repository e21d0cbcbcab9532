//! Advisory tags derived from threshold rules over the emission figures.
//!
//! Rules are data, not code: a factor dataset carries an ordered list of
//! [`ThresholdRule`]s and [`evaluate_rules`] walks it top to bottom. A rule
//! fires when its subject figure strictly exceeds the threshold; duplicate
//! tags keep their first firing position only.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// RECOMMENDATION TAGS
// ============================================================================

/// Stable advisory identifiers attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTag {
    ReduceFertilizer,
    SwitchToOrganic,
    ImproveManure,
    RotationalGrazing,
    FuelEfficiency,
    AdoptAgroforestry,
    SeekCarbonAudit,
}

impl RecommendationTag {
    pub fn display_text(&self) -> &'static str {
        match self {
            RecommendationTag::ReduceFertilizer => "Reduce fertilizer use",
            RecommendationTag::SwitchToOrganic => "Switch to organic fertilizer",
            RecommendationTag::ImproveManure => "Improve manure management",
            RecommendationTag::RotationalGrazing => "Adopt rotational grazing",
            RecommendationTag::FuelEfficiency => "Improve fuel efficiency",
            RecommendationTag::AdoptAgroforestry => "Adopt agroforestry",
            RecommendationTag::SeekCarbonAudit => "Seek a carbon audit",
        }
    }

    /// One-sentence field advice behind the tag.
    pub fn description(&self) -> &'static str {
        match self {
            RecommendationTag::ReduceFertilizer => {
                "Split applications and match nitrogen rates to crop demand."
            }
            RecommendationTag::SwitchToOrganic => {
                "Replace part of the synthetic nitrogen with compost or manure."
            }
            RecommendationTag::ImproveManure => {
                "Cover or compost manure heaps to cut methane losses."
            }
            RecommendationTag::RotationalGrazing => {
                "Rotate paddocks to spread deposition and recover pasture."
            }
            RecommendationTag::FuelEfficiency => {
                "Service machinery and consolidate field passes to burn less fuel."
            }
            RecommendationTag::AdoptAgroforestry => {
                "Plant trees among crops to offset emissions on-farm."
            }
            RecommendationTag::SeekCarbonAudit => {
                "Overall emissions are high; a field-level audit can locate the biggest cuts."
            }
        }
    }

    /// All tags in declaration order.
    pub fn all() -> &'static [RecommendationTag] {
        &[
            RecommendationTag::ReduceFertilizer,
            RecommendationTag::SwitchToOrganic,
            RecommendationTag::ImproveManure,
            RecommendationTag::RotationalGrazing,
            RecommendationTag::FuelEfficiency,
            RecommendationTag::AdoptAgroforestry,
            RecommendationTag::SeekCarbonAudit,
        ]
    }
}

// ============================================================================
// THRESHOLD RULES
// ============================================================================

/// Which report figure a rule thresholds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSubject {
    Fertilizer,
    Livestock,
    Fuel,
    GrandTotal,
}

impl RuleSubject {
    /// The figure this subject reads out of a rule context.
    pub fn value_in(&self, context: &RuleContext) -> f64 {
        match self {
            RuleSubject::Fertilizer => context.fertilizer_kg_co2e,
            RuleSubject::Livestock => context.livestock_kg_co2e,
            RuleSubject::Fuel => context.fuel_kg_co2e,
            RuleSubject::GrandTotal => context.total_kg_co2e,
        }
    }
}

/// Pre-adjustment figures the rules are evaluated against, kg CO2e.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub fertilizer_kg_co2e: f64,
    pub livestock_kg_co2e: f64,
    pub fuel_kg_co2e: f64,
    pub total_kg_co2e: f64,
}

/// A single advisory rule: fires when the subject figure strictly exceeds
/// the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub subject: RuleSubject,
    pub threshold_kg_co2e: f64,
    pub tag: RecommendationTag,
}

/// Default advisory rules, in evaluation order. Escalating thresholds per
/// category, then two grand-total backstops.
pub static DEFAULT_RULES: &[ThresholdRule] = &[
    ThresholdRule {
        subject: RuleSubject::Fertilizer,
        threshold_kg_co2e: 400.0,
        tag: RecommendationTag::ReduceFertilizer,
    },
    ThresholdRule {
        subject: RuleSubject::Fertilizer,
        threshold_kg_co2e: 1200.0,
        tag: RecommendationTag::SwitchToOrganic,
    },
    ThresholdRule {
        subject: RuleSubject::Livestock,
        threshold_kg_co2e: 1500.0,
        tag: RecommendationTag::ImproveManure,
    },
    ThresholdRule {
        subject: RuleSubject::Livestock,
        threshold_kg_co2e: 4000.0,
        tag: RecommendationTag::RotationalGrazing,
    },
    ThresholdRule {
        subject: RuleSubject::Fuel,
        threshold_kg_co2e: 250.0,
        tag: RecommendationTag::FuelEfficiency,
    },
    ThresholdRule {
        subject: RuleSubject::GrandTotal,
        threshold_kg_co2e: 5000.0,
        tag: RecommendationTag::AdoptAgroforestry,
    },
    ThresholdRule {
        subject: RuleSubject::GrandTotal,
        threshold_kg_co2e: 10000.0,
        tag: RecommendationTag::SeekCarbonAudit,
    },
];

/// Walk the rules in order and collect the tags that fire, first
/// occurrence only.
pub fn evaluate_rules(rules: &[ThresholdRule], context: &RuleContext) -> Vec<RecommendationTag> {
    let mut seen: FxHashSet<RecommendationTag> = FxHashSet::default();
    let mut tags: SmallVec<[RecommendationTag; 8]> = SmallVec::new();
    for rule in rules {
        if rule.subject.value_in(context) > rule.threshold_kg_co2e && seen.insert(rule.tag) {
            tags.push(rule.tag);
        }
    }
    tags.into_vec()
}
