use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::domain::{LeadId, LeadPotential, LeadRecord};

/// Storage abstraction so the service module can be exercised in isolation.
/// The scoring engine itself never touches persistence.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound follow-up hooks (chat suggestions, CRM pings).
pub trait SuggestionSink: Send + Sync {
    fn publish(&self, suggestion: FollowUpSuggestion) -> Result<(), SuggestionError>;
}

/// Follow-up payload emitted when a scored lead is worth pursuing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpSuggestion {
    pub lead_id: LeadId,
    pub potential: LeadPotential,
    pub details: BTreeMap<String, String>,
}

/// Suggestion dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion transport unavailable: {0}")]
    Transport(String),
}

/// Default repository keeping records in process memory. Durable storage
/// belongs to the surrounding deployment, not this crate.
#[derive(Default)]
pub struct InMemoryLeadRepository {
    records: Mutex<HashMap<LeadId, LeadRecord>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.lead_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.lead_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.report.is_none())
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Suggestion sink that logs follow-ups instead of calling an external CRM.
#[derive(Default)]
pub struct LogSuggestionSink;

impl SuggestionSink for LogSuggestionSink {
    fn publish(&self, suggestion: FollowUpSuggestion) -> Result<(), SuggestionError> {
        tracing::info!(
            lead_id = %suggestion.lead_id.0,
            potential = suggestion.potential.label(),
            "follow-up suggested"
        );
        Ok(())
    }
}
