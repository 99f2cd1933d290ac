use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kyc::domain::{ClientProfile, LeadId, LeadRecord, MaritalStatus, SearchFinding};
use crate::kyc::repository::{
    FollowUpSuggestion, LeadRepository, RepositoryError, SuggestionError, SuggestionSink,
};
use crate::kyc::scoring::{ScoringConfig, ScoringEngine};
use crate::kyc::service::LeadScoringService;

/// The reference strong lead: business owner in Johannesburg with crypto
/// holdings. Scores the maximum in every category.
pub(super) fn strong_profile() -> ClientProfile {
    ClientProfile {
        age: Some(45),
        occupation: Some("business owner".to_string()),
        monthly_income: Some(6000.0),
        city: Some("johansburg".to_string()),
        country: Some("south africa".to_string()),
        marital_status: Some(MaritalStatus::Single),
        number_of_children: Some(0),
        has_savings_or_investments: Some(true),
        savings_amount: Some(15_000.0),
        investment_platforms: Some("crypto trading".to_string()),
    }
}

pub(super) fn weak_profile() -> ClientProfile {
    ClientProfile {
        age: Some(30),
        occupation: Some("unemployed".to_string()),
        country: Some("zimbabwe".to_string()),
        ..ClientProfile::default()
    }
}

pub(super) fn finding(title: &str, content: &str) -> SearchFinding {
    SearchFinding {
        title: title.to_string(),
        content: content.to_string(),
        url: "https://example.com/result".to_string(),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
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

    fn pending(&self, _limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("datastore offline".to_string()))
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("datastore offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("datastore offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("datastore offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemorySuggestions {
    events: Arc<Mutex<Vec<FollowUpSuggestion>>>,
}

impl MemorySuggestions {
    pub(super) fn events(&self) -> Vec<FollowUpSuggestion> {
        self.events.lock().expect("suggestion mutex poisoned").clone()
    }
}

impl SuggestionSink for MemorySuggestions {
    fn publish(&self, suggestion: FollowUpSuggestion) -> Result<(), SuggestionError> {
        self.events
            .lock()
            .expect("suggestion mutex poisoned")
            .push(suggestion);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    LeadScoringService<MemoryRepository, MemorySuggestions>,
    Arc<MemoryRepository>,
    Arc<MemorySuggestions>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let suggestions = Arc::new(MemorySuggestions::default());
    let service = LeadScoringService::new(repository.clone(), suggestions.clone(), engine());
    (service, repository, suggestions)
}
