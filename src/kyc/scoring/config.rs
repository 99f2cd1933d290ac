use serde::{Deserialize, Serialize};

/// Thresholds applied on top of the fixed category rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub high_potential_threshold: f64,
    pub medium_potential_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_potential_threshold: 15.0,
            medium_potential_threshold: 10.0,
        }
    }
}
