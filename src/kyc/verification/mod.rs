//! Deterministic analyzers over web-search findings supplied by the caller.
//!
//! The search transport itself lives outside this crate; these modules only
//! turn already-retrieved snippets into credibility and risk assessments.

mod business;
mod income;
mod location_risk;

pub use business::{verify_business, BusinessVerification};
pub use income::{verify_income, CredibilityLevel, IncomeBenchmark, IncomeVerification};
pub use location_risk::{assess_location_risk, LocationRiskAssessment, RiskLevel};
