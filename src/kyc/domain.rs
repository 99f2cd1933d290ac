use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::ScoreReport;

/// Identifier wrapper for tracked leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Structured client data produced by the upstream free-text extraction step.
///
/// Every field is optional: extraction is best-effort, and an empty profile is a
/// valid (if unpromising) input. Scoring never mutates a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub age: Option<i64>,
    pub occupation: Option<String>,
    pub monthly_income: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub number_of_children: Option<u32>,
    pub has_savings_or_investments: Option<bool>,
    pub savings_amount: Option<f64>,
    pub investment_platforms: Option<String>,
}

/// Marital status as reported by the client or inferred by extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Separated,
    Widowed,
    Unknown,
}

/// Coarse classification of how promising a lead is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPotential {
    Low,
    Medium,
    High,
}

impl LeadPotential {
    pub const fn label(self) -> &'static str {
        match self {
            LeadPotential::Low => "low",
            LeadPotential::Medium => "medium",
            LeadPotential::High => "high",
        }
    }
}

/// The eight rubric categories. Maxima are fixed policy constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Age,
    Occupation,
    MaritalAndChildren,
    Location,
    WorkSituation,
    HasSavings,
    SavingsAmount,
    InvestmentPlatform,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 8] = [
        ScoreCategory::Age,
        ScoreCategory::Occupation,
        ScoreCategory::MaritalAndChildren,
        ScoreCategory::Location,
        ScoreCategory::WorkSituation,
        ScoreCategory::HasSavings,
        ScoreCategory::SavingsAmount,
        ScoreCategory::InvestmentPlatform,
    ];

    pub const fn max_points(self) -> f64 {
        match self {
            ScoreCategory::Age => 3.0,
            ScoreCategory::Occupation => 3.0,
            ScoreCategory::MaritalAndChildren => 2.0,
            ScoreCategory::Location => 2.0,
            ScoreCategory::WorkSituation => 2.0,
            ScoreCategory::HasSavings => 2.0,
            ScoreCategory::SavingsAmount => 4.0,
            ScoreCategory::InvestmentPlatform => 3.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Age => "age",
            ScoreCategory::Occupation => "occupation",
            ScoreCategory::MaritalAndChildren => "marital_and_children",
            ScoreCategory::Location => "location",
            ScoreCategory::WorkSituation => "work_situation",
            ScoreCategory::HasSavings => "has_savings",
            ScoreCategory::SavingsAmount => "savings_amount",
            ScoreCategory::InvestmentPlatform => "investment_platform",
        }
    }
}

/// High level status tracked throughout the lead workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Received,
    Scored,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::Received => "received",
            LeadStatus::Scored => "scored",
        }
    }
}

/// A snippet returned by the (external) web search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFinding {
    pub title: String,
    pub content: String,
    pub url: String,
}

/// Repository-backed record pairing a profile with its scoring state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub lead_id: LeadId,
    pub profile: ClientProfile,
    pub status: LeadStatus,
    pub report: Option<ScoreReport>,
    pub scored_at: Option<DateTime<Utc>>,
}

impl LeadRecord {
    pub fn status_view(&self) -> LeadStatusView {
        LeadStatusView {
            lead_id: self.lead_id.clone(),
            status: self.status.label(),
            potential: self
                .report
                .as_ref()
                .map(|report| report.potential.label()),
            total_score: self.report.as_ref().map(|report| report.total_score),
        }
    }
}

/// Sanitized representation of a lead's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStatusView {
    pub lead_id: LeadId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
}
