use serde::{Deserialize, Serialize};

use crate::kyc::domain::SearchFinding;

/// Credibility assessment of a claimed business, derived from search snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessVerification {
    pub business_name: String,
    pub credibility_score: u8,
    pub summary: String,
    pub risk_flags: Vec<String>,
}

/// Score a business's online footprint on a 0-10 scale.
pub fn verify_business(
    business_name: &str,
    owner_name: Option<&str>,
    findings: &[SearchFinding],
) -> BusinessVerification {
    let credibility_score = credibility(business_name, owner_name, findings);

    BusinessVerification {
        business_name: business_name.to_string(),
        credibility_score,
        summary: summary(credibility_score).to_string(),
        risk_flags: risk_flags(findings),
    }
}

fn credibility(business_name: &str, owner_name: Option<&str>, findings: &[SearchFinding]) -> u8 {
    let business_name = business_name.to_lowercase();
    let owner_name = owner_name.map(str::to_lowercase);
    let mut score: i32 = 0;

    for finding in findings {
        let content = finding.content.to_lowercase();
        let title = finding.title.to_lowercase();

        if title.contains(&business_name) {
            score += 2;
        }
        if content.contains("company") || content.contains("business") {
            score += 1;
        }
        if content.contains("ceo") || content.contains("founder") || content.contains("director") {
            score += 1;
        }
        if let Some(owner) = &owner_name {
            if content.contains(owner) {
                score += 2;
            }
        }
        if content.contains("linkedin") || content.contains("professional") {
            score += 1;
        }
        if content.contains("website") || content.contains("official") {
            score += 1;
        }

        if content.contains("scam") || content.contains("fraud") {
            score -= 3;
        }
        if content.contains("closed") || content.contains("bankrupt") {
            score -= 2;
        }
    }

    score.clamp(0, 10) as u8
}

fn summary(score: u8) -> &'static str {
    if score >= 7 {
        "Strong business presence found online with credible information"
    } else if score >= 4 {
        "Some business information found, appears legitimate"
    } else if score >= 2 {
        "Limited business information available, verification inconclusive"
    } else {
        "No credible business information found, may require additional verification"
    }
}

fn risk_flags(findings: &[SearchFinding]) -> Vec<String> {
    let mut flags = Vec::new();

    for finding in findings {
        let content = finding.content.to_lowercase();

        if content.contains("scam") || content.contains("fraud") {
            flags.push("Potential fraud indicators found".to_string());
        }
        if content.contains("lawsuit") || content.contains("legal action") {
            flags.push("Legal issues mentioned".to_string());
        }
        if content.contains("closed") || content.contains("bankrupt") {
            flags.push("Business closure indicators".to_string());
        }
    }

    if findings.is_empty() {
        flags.push("No online presence found".to_string());
    }

    flags
}
