//! Per-category band evaluation for the KYC rubric.
//!
//! Every function is total: missing or unrecognized input scores 0 (or the
//! documented default) instead of failing, since profiles come from best-effort
//! free-text extraction and are frequently incomplete.

use super::location::{self, LocationTier};
use super::CategoryScore;
use crate::kyc::domain::{ClientProfile, MaritalStatus, ScoreCategory};

const BUSINESS_KEYWORDS: &[&str] = &[
    "owner",
    "ceo",
    "founder",
    "entrepreneur",
    "business",
    "company",
    "director",
];

const PROFESSION_KEYWORDS: &[&str] = &[
    "doctor",
    "engineer",
    "manager",
    "teacher",
    "lawyer",
    "accountant",
    "nurse",
    "analyst",
    "developer",
    "consultant",
];

const PRECARIOUS_KEYWORDS: &[&str] = &["part-time", "freelance", "student", "contractor"];

const PLATFORM_HIGH_KEYWORDS: &[&str] = &[
    "crypto",
    "stocks",
    "trading",
    "forex",
    "etf",
    "mutual fund",
    "online",
    "platform",
];

const PLATFORM_MEDIUM_KEYWORDS: &[&str] = &["real estate", "property", "business", "capital"];

const PLATFORM_TRADITIONAL_KEYWORDS: &[&str] = &["bank", "savings", "cash", "fixed deposit"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Lowercase and trim, treating empty text as absent.
fn normalize(raw: Option<&str>) -> Option<String> {
    let text = raw?.trim().to_lowercase();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// "unemployed" contains the substring "employed", so the plain substring check
/// has to be guarded or jobless clients would score as employed.
fn mentions_employment(text: &str) -> bool {
    text.contains("full-time") || (text.contains("employed") && !text.contains("unemployed"))
}

pub(crate) fn age_score(age: Option<i64>) -> (f64, String) {
    match age {
        None => (0.0, "age not provided".to_string()),
        Some(age @ 35..=55) => (3.0, format!("age {age} in the 35-55 golden band")),
        Some(age @ 25..=34) | Some(age @ 56..=65) => (2.0, format!("age {age} near the core band")),
        Some(age @ 18..=24) => (1.0, format!("age {age} at the young edge")),
        Some(age) if age >= 66 => (1.0, format!("age {age} past the core band")),
        Some(age) => (0.0, format!("age {age} below the scored range")),
    }
}

pub(crate) fn occupation_score(occupation: Option<&str>) -> (f64, String) {
    let Some(work) = normalize(occupation) else {
        return (0.0, "occupation not provided".to_string());
    };

    if contains_any(&work, BUSINESS_KEYWORDS) {
        return (3.0, "business-owner occupation".to_string());
    }
    if contains_any(&work, PROFESSION_KEYWORDS) || mentions_employment(&work) {
        return (2.0, "professional or full-time occupation".to_string());
    }
    if contains_any(&work, PRECARIOUS_KEYWORDS) {
        return (1.0, "part-time, freelance, or student work".to_string());
    }
    if work.contains("unemployed") || work.contains("jobless") {
        return (0.0, "client reports no employment".to_string());
    }

    // Any other mentioned occupation is treated as full-time work.
    (2.0, "unrecognized occupation treated as employed".to_string())
}

pub(crate) fn marital_children_score(
    marital_status: Option<MaritalStatus>,
    children: u32,
) -> (f64, String) {
    use MaritalStatus::{Married, Separated, Single, Widowed};

    let score = match (marital_status, children) {
        (Some(Single), 0) => 2.0,
        (Some(Married), 0) => 1.5,
        (Some(Married) | Some(Single), _) => 1.0,
        (Some(Separated) | Some(Widowed), n) if n >= 1 => 0.5,
        // Unknown or uncovered status falls back to a children-only rule.
        _ if children == 0 => 2.0,
        _ => 1.0,
    };

    let status = marital_status.map_or("unknown", |status| match status {
        Single => "single",
        Married => "married",
        Separated => "separated",
        Widowed => "widowed",
        MaritalStatus::Unknown => "unknown",
    });
    (score, format!("{status} with {children} child(ren)"))
}

pub(crate) fn location_score(country: Option<&str>, city: Option<&str>) -> (f64, String) {
    let Some(country) = normalize(country) else {
        return (0.0, "country not provided".to_string());
    };
    let city = normalize(city);

    let Some(entry) = location::lookup(&country) else {
        return (0.0, format!("country '{country}' not in the tier table"));
    };

    match entry.tier {
        LocationTier::Tier1 => {
            if entry.cities.is_empty() {
                (2.0, format!("tier 1 country '{country}'"))
            } else if city
                .as_deref()
                .is_some_and(|city| entry.cities.contains(&city))
            {
                (2.0, format!("tier 1 country '{country}' with listed city"))
            } else {
                (1.0, format!("tier 1 country '{country}', city not listed"))
            }
        }
        LocationTier::Tier2 => (1.0, format!("tier 2 country '{country}'")),
        LocationTier::Tier3 => (0.0, format!("tier 3 country '{country}'")),
    }
}

pub(crate) fn work_situation_score(occupation: Option<&str>) -> (f64, String) {
    let Some(work) = normalize(occupation) else {
        return (0.0, "work situation unknown".to_string());
    };

    if contains_any(&work, BUSINESS_KEYWORDS)
        || contains_any(&work, PROFESSION_KEYWORDS)
        || mentions_employment(&work)
    {
        return (2.0, "stable employment or business".to_string());
    }
    if work.contains("freelance") || work.contains("part-time") || work.contains("contractor") {
        return (1.0, "irregular work situation".to_string());
    }
    if work.contains("unemployed") || work.contains("student") {
        return (0.0, "no income-producing work".to_string());
    }

    (2.0, "unrecognized work treated as employed".to_string())
}

pub(crate) fn has_savings_score(
    has_savings: Option<bool>,
    savings_amount: Option<f64>,
) -> (f64, String) {
    match has_savings {
        Some(true) => (2.0, "client reports savings or investments".to_string()),
        Some(false) => (0.0, "client reports no savings".to_string()),
        None => {
            if savings_amount.is_some_and(|amount| amount > 0.0) {
                (2.0, "savings inferred from reported amount".to_string())
            } else {
                (0.0, "no savings information".to_string())
            }
        }
    }
}

pub(crate) fn savings_amount_score(savings_amount: Option<f64>) -> (f64, String) {
    let Some(amount) = savings_amount.filter(|amount| *amount > 0.0) else {
        return (0.0, "no savings amount reported".to_string());
    };

    let score = if amount >= 10_000.0 {
        4.0
    } else if amount >= 5_000.0 {
        3.0
    } else if amount >= 1_000.0 {
        2.0
    } else {
        1.0
    };
    (score, format!("reported savings of {amount:.0} USD"))
}

pub(crate) fn investment_platform_score(platforms: Option<&str>) -> (f64, String) {
    let Some(platforms) = normalize(platforms) else {
        return (0.0, "no investment platforms mentioned".to_string());
    };

    if contains_any(&platforms, PLATFORM_HIGH_KEYWORDS) {
        return (3.0, "trading-adjacent platforms".to_string());
    }
    if contains_any(&platforms, PLATFORM_MEDIUM_KEYWORDS) {
        return (2.0, "tangible-asset investments".to_string());
    }
    if contains_any(&platforms, PLATFORM_TRADITIONAL_KEYWORDS) {
        return (1.0, "traditional savings products".to_string());
    }
    (0.0, "unrecognized platforms".to_string())
}

/// Evaluate every category in rubric order and return the components with
/// their uncapped sum.
pub(crate) fn score_profile(profile: &ClientProfile) -> (Vec<CategoryScore>, f64) {
    let children = profile.number_of_children.unwrap_or(0);

    let evaluated: [(ScoreCategory, (f64, String)); 8] = [
        (ScoreCategory::Age, age_score(profile.age)),
        (
            ScoreCategory::Occupation,
            occupation_score(profile.occupation.as_deref()),
        ),
        (
            ScoreCategory::MaritalAndChildren,
            marital_children_score(profile.marital_status, children),
        ),
        (
            ScoreCategory::Location,
            location_score(profile.country.as_deref(), profile.city.as_deref()),
        ),
        (
            ScoreCategory::WorkSituation,
            work_situation_score(profile.occupation.as_deref()),
        ),
        (
            ScoreCategory::HasSavings,
            has_savings_score(profile.has_savings_or_investments, profile.savings_amount),
        ),
        (
            ScoreCategory::SavingsAmount,
            savings_amount_score(profile.savings_amount),
        ),
        (
            ScoreCategory::InvestmentPlatform,
            investment_platform_score(profile.investment_platforms.as_deref()),
        ),
    ];

    let mut components = Vec::with_capacity(evaluated.len());
    let mut total = 0.0;
    for (category, (score, notes)) in evaluated {
        total += score;
        components.push(CategoryScore {
            category,
            score,
            notes,
        });
    }

    (components, total)
}
