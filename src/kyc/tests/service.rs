use std::sync::Arc;

use super::common::*;
use crate::kyc::domain::{LeadId, LeadPotential, LeadStatus};
use crate::kyc::repository::LeadRepository;
use crate::kyc::service::{LeadScoringService, LeadServiceError};
use crate::kyc::RepositoryError;

#[test]
fn submit_stores_a_received_record() {
    let (service, repository, _) = build_service();

    let record = service.submit(strong_profile()).expect("submit succeeds");

    assert_eq!(record.status, LeadStatus::Received);
    assert!(record.report.is_none());
    assert!(record.scored_at.is_none());

    let stored = repository
        .fetch(&record.lead_id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.profile, record.profile);
}

#[test]
fn scoring_persists_report_and_timestamps() {
    let (service, repository, _) = build_service();
    let record = service.submit(weak_profile()).expect("submit");

    let report = service.score(&record.lead_id).expect("score");
    assert_eq!(report.potential, LeadPotential::Low);

    let stored = repository
        .fetch(&record.lead_id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.status, LeadStatus::Scored);
    assert!(stored.scored_at.is_some());
    assert_eq!(stored.report, Some(report));
}

#[test]
fn high_potential_lead_publishes_follow_up() {
    let (service, _, suggestions) = build_service();
    let record = service.submit(strong_profile()).expect("submit");

    service.score(&record.lead_id).expect("score");

    let events = suggestions.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].lead_id, record.lead_id);
    assert_eq!(events[0].potential, LeadPotential::High);
    assert_eq!(events[0].details.get("total_score"), Some(&"21".to_string()));
}

#[test]
fn low_potential_lead_stays_quiet() {
    let (service, _, suggestions) = build_service();
    let record = service.submit(weak_profile()).expect("submit");

    service.score(&record.lead_id).expect("score");

    assert!(suggestions.events().is_empty());
}

#[test]
fn scoring_unknown_lead_is_not_found() {
    let (service, _, _) = build_service();

    match service.score(&LeadId("lead-000000".to_string())) {
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not-found error, got {other:?}"),
    }
}

#[test]
fn repository_outage_surfaces_as_service_error() {
    let repository = Arc::new(UnavailableRepository);
    let suggestions = Arc::new(MemorySuggestions::default());
    let service = LeadScoringService::new(repository, suggestions, engine());

    match service.submit(strong_profile()) {
        Err(LeadServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
