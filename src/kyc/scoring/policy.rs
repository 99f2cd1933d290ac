use super::config::ScoringConfig;
use crate::kyc::domain::LeadPotential;

/// Map a total score onto the coarse lead-potential bands. Lower bounds are
/// inclusive; anything under the medium threshold is Low.
pub(crate) fn classify(total_score: f64, config: &ScoringConfig) -> LeadPotential {
    if total_score >= config.high_potential_threshold {
        LeadPotential::High
    } else if total_score >= config.medium_potential_threshold {
        LeadPotential::Medium
    } else {
        LeadPotential::Low
    }
}
