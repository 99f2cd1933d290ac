//! Lead intake, scoring, and verification for the KYC assistant.

pub mod domain;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod tools;
pub(crate) mod verification;

#[cfg(test)]
mod tests;

pub use domain::{
    ClientProfile, LeadId, LeadPotential, LeadRecord, LeadStatus, LeadStatusView, MaritalStatus,
    ScoreCategory, SearchFinding,
};
pub use repository::{
    FollowUpSuggestion, InMemoryLeadRepository, LeadRepository, LogSuggestionSink,
    RepositoryError, SuggestionError, SuggestionSink,
};
pub use router::lead_router;
pub use scoring::{
    CategoryScore, LocationTier, ScoreReport, ScoringConfig, ScoringEngine, DOCUMENTED_MAX_SCORE,
};
pub use service::{LeadScoringService, LeadServiceError};
pub use tools::{
    descriptor_by_id, LeadToolbox, ToolDescriptor, ToolOutcome, ToolRequest, TOOL_DESCRIPTORS,
};
pub use verification::{
    assess_location_risk, verify_business, verify_income, BusinessVerification, CredibilityLevel,
    IncomeBenchmark, IncomeVerification, LocationRiskAssessment, RiskLevel,
};
