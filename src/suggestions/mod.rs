mod filters;

use crate::catalog::{Amenity, AmenityCatalog};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Longest suggestion list a caller ever sees once any criteria were applied.
pub const RESULT_BUDGET: usize = 10;

/// Demographic facets to narrow the catalog by. Every field is independently
/// optional; an absent field applies no constraint from that facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionCriteria {
    pub category: Option<String>,
    pub lifestyle: Option<String>,
    pub age_range: Option<String>,
    pub income_range: Option<String>,
}

impl SuggestionCriteria {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.lifestyle.is_none()
            && self.age_range.is_none()
            && self.income_range.is_none()
    }
}

/// Rank amenities for a tenant demographic.
///
/// The candidate set starts as the full catalog in (category, cost) order and
/// each present criterion removes entries in a fixed sequence; filtering never
/// reorders. A criteria object that was never supplied returns the whole
/// ordered catalog, unbounded. When every candidate is filtered away the
/// engine falls back to the universally-popular subset rather than returning
/// nothing, so the operation is total: it always produces a list and raises
/// no errors of its own.
pub fn suggest(catalog: &AmenityCatalog, criteria: Option<&SuggestionCriteria>) -> Vec<Amenity> {
    let all = catalog.list_all();
    let Some(criteria) = criteria else {
        return all;
    };

    let mut filtered = all.clone();

    if let Some(category) = criteria.category.as_deref() {
        filtered.retain(|amenity| filters::matches_category(amenity, category));
    }

    if let Some(lifestyle) = criteria.lifestyle.as_deref() {
        let (key, raw) = filters::lifestyle_needles(lifestyle);
        filtered.retain(|amenity| filters::matches_lifestyle(amenity, &key, &raw));
    }

    if let Some(age_range) = criteria.age_range.as_deref() {
        // An unparsable lower bound falls into no band and narrows nothing.
        if let Some(keywords) = filters::leading_age(age_range).and_then(filters::age_band_keywords)
        {
            filtered.retain(|amenity| filters::matches_age_band(amenity, keywords));
        }
    }

    if let Some(income_range) = criteria.income_range.as_deref() {
        if filters::embedded_income(income_range) >= filters::HIGH_INCOME_THRESHOLD {
            filtered.retain(filters::matches_high_income);
        }
    }

    if filtered.is_empty() {
        debug!(?criteria, "all candidates filtered out, serving popular fallback");
        filtered = all
            .into_iter()
            .filter(filters::is_popular_fallback)
            .collect();
    }

    filtered.truncate(RESULT_BUDGET);
    filtered
}
