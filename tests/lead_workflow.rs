//! Integration specifications for the lead intake, scoring, and tool workflow.
//!
//! Scenarios run end-to-end through the public service facade and HTTP router
//! so scoring, persistence, and suggestion behavior are validated without
//! reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use savo_kyc::kyc::{
        ClientProfile, FollowUpSuggestion, LeadId, LeadRecord, LeadRepository, LeadScoringService,
        MaritalStatus, RepositoryError, ScoringConfig, ScoringEngine, SuggestionError,
        SuggestionSink,
    };

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

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
    }

    impl LeadRepository for MemoryRepository {
        fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.lead_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.lead_id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(record.lead_id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn pending(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard
                .values()
                .filter(|record| record.report.is_none())
                .take(limit)
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemorySuggestions {
        events: Arc<Mutex<Vec<FollowUpSuggestion>>>,
    }

    impl MemorySuggestions {
        pub(super) fn events(&self) -> Vec<FollowUpSuggestion> {
            self.events.lock().expect("lock").clone()
        }
    }

    impl SuggestionSink for MemorySuggestions {
        fn publish(&self, suggestion: FollowUpSuggestion) -> Result<(), SuggestionError> {
            self.events.lock().expect("lock").push(suggestion);
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
        let service = LeadScoringService::new(
            repository.clone(),
            suggestions.clone(),
            ScoringEngine::new(ScoringConfig::default()),
        );
        (service, repository, suggestions)
    }
}

mod scoring {
    use super::common::*;
    use savo_kyc::kyc::{LeadPotential, LeadRepository, LeadStatus};

    #[test]
    fn strong_lead_is_scored_high_and_suggested() {
        let (service, repository, suggestions) = build_service();

        let record = service.submit(strong_profile()).expect("submit");
        let report = service.score(&record.lead_id).expect("score");

        assert_eq!(report.potential, LeadPotential::High);
        assert_eq!(report.total_score, 21.0);

        let stored = repository
            .fetch(&record.lead_id)
            .expect("fetch")
            .expect("present");
        assert_eq!(stored.status, LeadStatus::Scored);
        assert!(stored.scored_at.is_some());

        let events = suggestions.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].potential, LeadPotential::High);
    }

    #[test]
    fn weak_lead_is_scored_low_without_suggestions() {
        let (service, _, suggestions) = build_service();

        let record = service.submit(weak_profile()).expect("submit");
        let report = service.score(&record.lead_id).expect("score");

        assert_eq!(report.potential, LeadPotential::Low);
        assert_eq!(report.total_score, 4.0);
        assert!(suggestions.events().is_empty());
    }

    #[test]
    fn rescoring_the_same_lead_is_idempotent() {
        let (service, _, _) = build_service();
        let record = service.submit(strong_profile()).expect("submit");

        let first = service.score(&record.lead_id).expect("first score");
        let second = service.score(&record.lead_id).expect("second score");

        assert_eq!(first, second);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use savo_kyc::kyc::{lead_router, LeadToolbox};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn submit_then_score_over_http() {
        let (service, _, _) = build_service();
        let service = Arc::new(service);
        let router = lead_router(service.clone(), Arc::new(LeadToolbox::default()));

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/kyc/leads")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&strong_profile()).expect("serialize"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let lead_id = payload
            .get("lead_id")
            .and_then(Value::as_str)
            .expect("lead id")
            .to_string();

        let response = router
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/kyc/leads/{lead_id}/score"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let report: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(report.get("potential"), Some(&json!("high")));

        let response = router
            .oneshot(
                Request::get(format!("/api/v1/kyc/leads/{lead_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let view: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(view.get("status"), Some(&json!("scored")));
        assert_eq!(view.get("potential"), Some(&json!("high")));
    }

    #[tokio::test]
    async fn tool_endpoint_scores_profiles_without_persisting() {
        let (service, repository, _) = build_service();
        let router = lead_router(Arc::new(service), Arc::new(LeadToolbox::default()));

        let request_body = json!({
            "tool": "score_client_profile",
            "profile": weak_profile(),
        });

        let response = router
            .oneshot(
                Request::post("/api/v1/kyc/tools")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            payload
                .get("report")
                .and_then(|report| report.get("total_score")),
            Some(&json!(4.0))
        );

        // Tool invocations are stateless; nothing is written through them.
        use savo_kyc::kyc::LeadRepository;
        assert!(repository.pending(10).expect("pending").is_empty());
    }
}
