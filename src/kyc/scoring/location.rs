//! Hand-curated country tier table for the location category.
//!
//! Tiers rank countries by attractiveness for CFD-trading leads (1 = best).
//! Tier 1 entries may carry a city allow-list; cities only matter for tier 1.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationTier {
    Tier1,
    Tier2,
    Tier3,
}

pub(crate) struct CountryEntry {
    pub country: &'static str,
    pub tier: LocationTier,
    pub cities: &'static [&'static str],
}

// Keys are pre-normalized: lowercase, trimmed, ASCII only ("cote divoire").
static COUNTRY_TIERS: &[CountryEntry] = &[
    CountryEntry {
        country: "south africa",
        tier: LocationTier::Tier1,
        cities: &["johansburg", "cpt", "dbn"],
    },
    CountryEntry {
        country: "kenya",
        tier: LocationTier::Tier1,
        cities: &["nairobi"],
    },
    CountryEntry {
        country: "nigeria",
        tier: LocationTier::Tier1,
        cities: &["lagos", "abuja"],
    },
    CountryEntry {
        country: "egypt",
        tier: LocationTier::Tier1,
        cities: &[],
    },
    CountryEntry {
        country: "morocco",
        tier: LocationTier::Tier1,
        cities: &[],
    },
    CountryEntry {
        country: "ghana",
        tier: LocationTier::Tier1,
        cities: &["accra"],
    },
    CountryEntry {
        country: "botswana",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "tunisia",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "algeria",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "namibia",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "rwanda",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "zambia",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "senegal",
        tier: LocationTier::Tier2,
        cities: &[],
    },
    CountryEntry {
        country: "cote divoire",
        tier: LocationTier::Tier2,
        cities: &["abidjan"],
    },
    CountryEntry {
        country: "zimbabwe",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "dr congo",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "sudan",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "somalia",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "malawi",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "mozambique",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "central african republic",
        tier: LocationTier::Tier3,
        cities: &[],
    },
    CountryEntry {
        country: "sierra leone",
        tier: LocationTier::Tier3,
        cities: &[],
    },
];

/// Look up a country by its normalized name.
pub(crate) fn lookup(normalized_country: &str) -> Option<&'static CountryEntry> {
    COUNTRY_TIERS
        .iter()
        .find(|entry| entry.country == normalized_country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_on_normalized_names() {
        assert!(lookup("south africa").is_some());
        assert!(lookup("South Africa").is_none());
        assert!(lookup("wakanda").is_none());
    }

    #[test]
    fn tier_one_city_lists_are_normalized() {
        for entry in COUNTRY_TIERS {
            for city in entry.cities {
                assert_eq!(*city, city.trim().to_lowercase());
            }
        }
    }
}
