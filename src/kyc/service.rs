use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{ClientProfile, LeadId, LeadPotential, LeadRecord, LeadStatus};
use super::repository::{
    FollowUpSuggestion, LeadRepository, RepositoryError, SuggestionError, SuggestionSink,
};
use super::scoring::{ScoreReport, ScoringEngine};

/// Service composing the repository, suggestion sink, and scoring engine.
pub struct LeadScoringService<R, S> {
    repository: Arc<R>,
    suggestions: Arc<S>,
    engine: Arc<ScoringEngine>,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R, S> LeadScoringService<R, S>
where
    R: LeadRepository + 'static,
    S: SuggestionSink + 'static,
{
    pub fn new(repository: Arc<R>, suggestions: Arc<S>, engine: ScoringEngine) -> Self {
        Self {
            repository,
            suggestions,
            engine: Arc::new(engine),
        }
    }

    /// Register an extracted profile, returning the repository-backed record.
    pub fn submit(&self, profile: ClientProfile) -> Result<LeadRecord, LeadServiceError> {
        let record = LeadRecord {
            lead_id: next_lead_id(),
            profile,
            status: LeadStatus::Received,
            report: None,
            scored_at: None,
        };

        let stored = self.repository.insert(record)?;
        info!(lead_id = %stored.lead_id.0, "lead registered");
        Ok(stored)
    }

    /// Score a registered lead and persist the report.
    pub fn score(&self, lead_id: &LeadId) -> Result<ScoreReport, LeadServiceError> {
        let mut record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;

        let report = self.engine.score(&record.profile);

        record.status = LeadStatus::Scored;
        record.scored_at = Some(Utc::now());
        record.report = Some(report.clone());
        self.repository.update(record)?;

        info!(
            lead_id = %lead_id.0,
            total_score = report.total_score,
            potential = report.potential.label(),
            "lead scored"
        );

        if report.potential == LeadPotential::High {
            let mut details = BTreeMap::new();
            details.insert(
                "total_score".to_string(),
                report.total_score.to_string(),
            );
            self.suggestions.publish(FollowUpSuggestion {
                lead_id: lead_id.clone(),
                potential: report.potential,
                details,
            })?;
        }

        Ok(report)
    }

    /// Fetch a lead and its current status for API responses.
    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the lead scoring service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}
