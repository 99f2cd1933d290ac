//! Closed dispatch over the agent-facing tools.
//!
//! The chat layer addresses tools by name on the wire; here that becomes a sum
//! type so a new tool cannot be added without the compiler pointing at every
//! match that must handle it.

use serde::{Deserialize, Serialize};

use super::domain::{ClientProfile, SearchFinding};
use super::scoring::{ScoreReport, ScoringEngine};
use super::verification::{
    assess_location_risk, verify_business, verify_income, BusinessVerification,
    IncomeVerification, LocationRiskAssessment,
};

/// A tool invocation as marshaled by the chat layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolRequest {
    ScoreClientProfile {
        profile: ClientProfile,
    },
    VerifyIncome {
        occupation: String,
        claimed_income: f64,
        country: String,
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        findings: Vec<SearchFinding>,
    },
    AssessLocationRisk {
        country: String,
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        findings: Vec<SearchFinding>,
    },
    VerifyBusiness {
        business_name: String,
        #[serde(default)]
        owner_name: Option<String>,
        #[serde(default)]
        findings: Vec<SearchFinding>,
    },
}

impl ToolRequest {
    pub fn descriptor(&self) -> &'static ToolDescriptor {
        match self {
            ToolRequest::ScoreClientProfile { .. } => &TOOL_DESCRIPTORS[0],
            ToolRequest::VerifyIncome { .. } => &TOOL_DESCRIPTORS[1],
            ToolRequest::AssessLocationRisk { .. } => &TOOL_DESCRIPTORS[2],
            ToolRequest::VerifyBusiness { .. } => &TOOL_DESCRIPTORS[3],
        }
    }
}

/// A tool result, tagged the same way as the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolOutcome {
    ScoreClientProfile { report: ScoreReport },
    VerifyIncome { verification: IncomeVerification },
    AssessLocationRisk { assessment: LocationRiskAssessment },
    VerifyBusiness { verification: BusinessVerification },
}

/// UI-facing metadata per tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub static TOOL_DESCRIPTORS: [ToolDescriptor; 4] = [
    ToolDescriptor {
        id: "score_client_profile",
        name: "Score Client Profile",
        description: "Calculate KYC score for client profile",
    },
    ToolDescriptor {
        id: "verify_income",
        name: "Verify Income",
        description: "Validate income claims against market benchmarks",
    },
    ToolDescriptor {
        id: "assess_location_risk",
        name: "Assess Location Risk",
        description: "Evaluate regulatory and compliance risks for client location",
    },
    ToolDescriptor {
        id: "verify_business",
        name: "Verify Business",
        description: "Verify business ownership claims and assess credibility",
    },
];

static UNKNOWN_TOOL: ToolDescriptor = ToolDescriptor {
    id: "unknown-tool",
    name: "Unknown Tool",
    description: "This tool is not recognized or does not exist.",
};

/// Resolve descriptor metadata by id, falling back to an explicit unknown
/// marker so the UI never renders an empty card.
pub fn descriptor_by_id(id: &str) -> &'static ToolDescriptor {
    TOOL_DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.id == id)
        .unwrap_or(&UNKNOWN_TOOL)
}

/// Executes tool requests against the scoring engine and analyzers.
#[derive(Default)]
pub struct LeadToolbox {
    engine: ScoringEngine,
}

impl LeadToolbox {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn dispatch(&self, request: ToolRequest) -> ToolOutcome {
        match request {
            ToolRequest::ScoreClientProfile { profile } => ToolOutcome::ScoreClientProfile {
                report: self.engine.score(&profile),
            },
            ToolRequest::VerifyIncome {
                occupation,
                claimed_income,
                country,
                city,
                findings,
            } => ToolOutcome::VerifyIncome {
                verification: verify_income(
                    &occupation,
                    claimed_income,
                    &country,
                    city.as_deref(),
                    &findings,
                ),
            },
            ToolRequest::AssessLocationRisk {
                country,
                city,
                findings,
            } => ToolOutcome::AssessLocationRisk {
                assessment: assess_location_risk(&country, city.as_deref(), &findings),
            },
            ToolRequest::VerifyBusiness {
                business_name,
                owner_name,
                findings,
            } => ToolOutcome::VerifyBusiness {
                verification: verify_business(&business_name, owner_name.as_deref(), &findings),
            },
        }
    }
}
