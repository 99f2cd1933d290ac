use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kyc::domain::SearchFinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Regulatory and economic risk snapshot for a client's jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRiskAssessment {
    pub country: String,
    pub city: Option<String>,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub sanctions_status: String,
    pub regulatory_compliance: String,
    pub recommendations: Vec<String>,
    pub assessed_at: DateTime<Utc>,
}

/// Assess jurisdiction risk from search findings about sanctions and
/// financial regulation. Scores run 1 (benign) to 10 (prohibitive).
pub fn assess_location_risk(
    country: &str,
    city: Option<&str>,
    findings: &[SearchFinding],
) -> LocationRiskAssessment {
    let (risk_score, sanctions_found) = risk_score(country, findings);

    let risk_level = if risk_score >= 8 {
        RiskLevel::High
    } else if risk_score <= 3 {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    };

    let sanctions_status = if sanctions_found {
        "Sanctions indicators found".to_string()
    } else {
        "No sanctions detected".to_string()
    };

    let regulatory_compliance = regulatory_status(country, findings);
    let recommendations =
        recommendations(risk_level, sanctions_found, &regulatory_compliance);

    LocationRiskAssessment {
        country: country.to_string(),
        city: city.map(str::to_string),
        risk_level,
        risk_score,
        sanctions_status,
        regulatory_compliance,
        recommendations,
        assessed_at: Utc::now(),
    }
}

fn risk_score(country: &str, findings: &[SearchFinding]) -> (u8, bool) {
    let country = country.to_lowercase();
    let mut score: i32 = 5;
    let mut sanctions_found = false;

    for finding in findings {
        let content = finding.content.to_lowercase();

        if content.contains("sanctions") && content.contains(&country) {
            score += 3;
            sanctions_found = true;
        }
        if content.contains("money laundering") || content.contains("terrorist financing") {
            score += 2;
        }
        if content.contains("fatf") && content.contains("grey list") {
            score += 2;
        }
        if content.contains("restricted") || content.contains("prohibited") {
            score += 2;
        }

        if content.contains("compliant") || content.contains("regulated") {
            score -= 1;
        }
        if content.contains("fsca") || content.contains("financial authority") {
            score -= 1;
        }
    }

    (score.clamp(1, 10) as u8, sanctions_found)
}

fn regulatory_status(country: &str, findings: &[SearchFinding]) -> String {
    let country = country.to_lowercase();

    for finding in findings {
        let content = finding.content.to_lowercase();

        if content.contains(&country) && content.contains("cfd") && content.contains("regulated") {
            return "CFD trading appears regulated".to_string();
        }
        if content.contains(&country)
            && content.contains("financial services")
            && content.contains("authority")
        {
            return "Financial services oversight present".to_string();
        }
    }

    "Regulatory status unclear - requires manual review".to_string()
}

fn recommendations(level: RiskLevel, sanctions_found: bool, regulatory: &str) -> Vec<String> {
    let mut recommendations = Vec::new();

    if level == RiskLevel::High {
        recommendations.push("High-risk jurisdiction - enhanced due diligence required".to_string());
        recommendations.push("Consider additional documentation and verification".to_string());
    }

    if sanctions_found {
        recommendations.push("Sanctions indicators - compliance team review mandatory".to_string());
    }

    if regulatory.contains("unclear") {
        recommendations.push("Verify local CFD trading regulations before onboarding".to_string());
    }

    if level == RiskLevel::Low {
        recommendations.push("Low-risk location - standard KYC procedures sufficient".to_string());
    }

    recommendations
}
