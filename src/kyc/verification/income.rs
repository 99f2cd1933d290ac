use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::kyc::domain::SearchFinding;

// Monthly figures outside this window are assumed to be something other than
// a salary (years, percentages, annual totals).
const SALARY_FLOOR: f64 = 100.0;
const SALARY_CEILING: f64 = 50_000.0;

/// Salary range distilled from findings, or from fallback estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeBenchmark {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityLevel {
    Credible,
    Reasonable,
    Uncertain,
    Questionable,
}

impl CredibilityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            CredibilityLevel::Credible => "credible",
            CredibilityLevel::Reasonable => "reasonable",
            CredibilityLevel::Uncertain => "uncertain",
            CredibilityLevel::Questionable => "questionable",
        }
    }
}

/// Outcome of checking a claimed income against market benchmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeVerification {
    pub occupation: String,
    pub claimed_income: f64,
    pub location: String,
    pub benchmark: IncomeBenchmark,
    pub credibility_score: u8,
    pub credibility_level: CredibilityLevel,
    pub risk_flags: Vec<String>,
    pub recommendation: String,
    pub search_summary: String,
}

/// Validate a claimed monthly income (USD) for a profession and location.
pub fn verify_income(
    occupation: &str,
    claimed_income: f64,
    country: &str,
    city: Option<&str>,
    findings: &[SearchFinding],
) -> IncomeVerification {
    let benchmark = extract_benchmarks(findings, occupation, country);
    let (credibility_score, credibility_level, risk_flags, recommendation) =
        assess_credibility(claimed_income, &benchmark, occupation);

    let location = match city {
        Some(city) => format!("{city} {country}"),
        None => country.to_string(),
    };

    IncomeVerification {
        occupation: occupation.to_string(),
        claimed_income,
        location,
        benchmark,
        credibility_score,
        credibility_level,
        risk_flags,
        recommendation,
        search_summary: summarize_findings(findings, occupation, country),
    }
}

fn salary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$?\d{1,3}(?:[,\d]*)(?:\.\d+)?").expect("valid pattern"))
}

fn extract_benchmarks(
    findings: &[SearchFinding],
    occupation: &str,
    country: &str,
) -> IncomeBenchmark {
    let mut salaries: Vec<f64> = Vec::new();

    for finding in findings {
        let content = finding.content.to_lowercase();
        for figure in salary_pattern().find_iter(&content) {
            let cleaned: String = figure
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            if let Ok(value) = cleaned.parse::<f64>() {
                if (SALARY_FLOOR..=SALARY_CEILING).contains(&value) {
                    salaries.push(value);
                }
            }
        }
    }

    if salaries.is_empty() {
        return fallback_benchmark(occupation, country);
    }

    salaries.sort_by(|a, b| a.total_cmp(b));
    let sum: f64 = salaries.iter().sum();

    IncomeBenchmark {
        min: salaries[0],
        max: salaries[salaries.len() - 1],
        average: sum / salaries.len() as f64,
        source: "web search analysis".to_string(),
    }
}

// Base monthly estimates for African markets, scaled by country.
const BASE_SALARIES: &[(&str, f64, f64, f64)] = &[
    ("doctor", 2000.0, 8000.0, 4000.0),
    ("engineer", 1200.0, 5000.0, 2500.0),
    ("teacher", 500.0, 2000.0, 1000.0),
    ("lawyer", 1500.0, 6000.0, 3000.0),
    ("manager", 1000.0, 4000.0, 2000.0),
    ("accountant", 800.0, 3000.0, 1500.0),
    ("nurse", 600.0, 2500.0, 1200.0),
    ("business", 500.0, 10_000.0, 3000.0),
];

const COUNTRY_MULTIPLIERS: &[(&str, f64)] = &[
    ("south africa", 1.2),
    ("nigeria", 0.8),
    ("kenya", 0.7),
    ("ghana", 0.6),
    ("egypt", 0.9),
    ("morocco", 0.8),
    ("tanzania", 0.5),
    ("uganda", 0.4),
];

fn fallback_benchmark(occupation: &str, country: &str) -> IncomeBenchmark {
    let occupation = occupation.to_lowercase();
    let country_key = country.to_lowercase();

    let multiplier = COUNTRY_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == country_key)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0);

    for (keyword, min, max, average) in BASE_SALARIES {
        if occupation.contains(keyword) {
            return IncomeBenchmark {
                min: (min * multiplier).round(),
                max: (max * multiplier).round(),
                average: (average * multiplier).round(),
                source: format!("fallback estimates for {country}"),
            };
        }
    }

    IncomeBenchmark {
        min: (500.0 * multiplier).round(),
        max: (3000.0 * multiplier).round(),
        average: (1500.0 * multiplier).round(),
        source: format!("general estimate for {country}"),
    }
}

fn assess_credibility(
    claimed: f64,
    benchmark: &IncomeBenchmark,
    occupation: &str,
) -> (u8, CredibilityLevel, Vec<String>, String) {
    let mut flags = Vec::new();

    if benchmark.average == 0.0 {
        flags.push("Unable to verify income benchmarks".to_string());
        return (
            5,
            CredibilityLevel::Uncertain,
            flags,
            "Request income documentation for verification".to_string(),
        );
    }

    let ratio = claimed / benchmark.average;

    let mut score: u8 = if ratio >= 3.0 {
        flags.push("Claimed income significantly above market average".to_string());
        2
    } else if ratio >= 1.5 {
        flags.push("Above average income for profession".to_string());
        6
    } else if ratio >= 0.5 {
        8
    } else {
        flags.push("Claimed income below typical range for profession".to_string());
        4
    };

    let occupation_lower = occupation.to_lowercase();
    let is_business_owner = occupation_lower.contains("business")
        || occupation_lower.contains("entrepreneur")
        || occupation_lower.contains("owner");
    if occupation_lower.contains("business") || occupation_lower.contains("entrepreneur") {
        score += 1;
        flags.push("Business income can vary significantly".to_string());
    }

    let level = if score <= 3 {
        CredibilityLevel::Questionable
    } else if score >= 7 {
        CredibilityLevel::Credible
    } else {
        CredibilityLevel::Uncertain
    };

    let recommendation = recommendation(level, ratio, occupation, is_business_owner);
    (score, level, flags, recommendation)
}

fn recommendation(
    level: CredibilityLevel,
    ratio: f64,
    occupation: &str,
    is_business_owner: bool,
) -> String {
    match level {
        CredibilityLevel::Credible => {
            if ratio > 2.0 {
                format!(
                    "Income is {:.0}% above average for {occupation} - verify with recent tax returns or business statements",
                    ratio * 100.0
                )
            } else {
                format!("Income appears reasonable for {occupation} - proceed with standard verification")
            }
        }
        CredibilityLevel::Questionable => {
            if ratio > 3.0 && is_business_owner {
                format!(
                    "Business income claim is {:.0}% above average - request detailed business financials and tax returns",
                    ratio * 100.0
                )
            } else if ratio > 3.0 {
                format!("Income claim significantly exceeds {occupation} averages - require comprehensive income documentation")
            } else {
                format!("Income claim for {occupation} requires additional documentation - request pay slips or tax returns")
            }
        }
        CredibilityLevel::Uncertain => {
            if ratio < 0.5 {
                format!("Income below typical {occupation} range - verify if part-time or entry-level position")
            } else {
                format!("Income verification for {occupation} inconclusive - consider additional due diligence")
            }
        }
        CredibilityLevel::Reasonable => {
            format!("Manual review recommended for {occupation} income validation")
        }
    }
}

fn summarize_findings(findings: &[SearchFinding], occupation: &str, country: &str) -> String {
    if findings.is_empty() {
        format!("No specific income data found for {occupation} in {country}")
    } else {
        format!(
            "Found {} relevant sources discussing {occupation} compensation in {country}",
            findings.len()
        )
    }
}
