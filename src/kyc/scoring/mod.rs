mod config;
mod location;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use location::LocationTier;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ClientProfile, LeadPotential, ScoreCategory};

/// Advertised ceiling of the rubric. The category maxima actually sum to 21;
/// the mismatch is inherited from the rubric as deployed and totals are
/// reported uncapped so it stays visible to consumers.
pub const DOCUMENTED_MAX_SCORE: f64 = 20.0;

/// Stateless evaluator applying the fixed rubric to a client profile.
///
/// Total over its input: partial or malformed profiles degrade to the lowest
/// band per category instead of failing.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, profile: &ClientProfile) -> ScoreReport {
        let (components, total_score) = rules::score_profile(profile);
        let potential = policy::classify(total_score, &self.config);

        ScoreReport {
            total_score,
            max_possible_score: DOCUMENTED_MAX_SCORE,
            potential,
            components,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Discrete contribution of one rubric category, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub score: f64,
    pub notes: String,
}

/// Scoring output: total, per-category components, and the derived potential.
/// Constructed fresh per call and never stored by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total_score: f64,
    pub max_possible_score: f64,
    pub potential: LeadPotential,
    pub components: Vec<CategoryScore>,
}

impl ScoreReport {
    /// "score/max" view keyed by category label.
    pub fn breakdown(&self) -> BTreeMap<&'static str, String> {
        self.components
            .iter()
            .map(|component| {
                (
                    component.category.label(),
                    format_points(component.score, component.category.max_points()),
                )
            })
            .collect()
    }
}

fn format_points(score: f64, max: f64) -> String {
    format!("{}/{}", trim_fraction(score), trim_fraction(max))
}

fn trim_fraction(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
