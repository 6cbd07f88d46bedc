mod seed;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Opaque catalog identifier, assigned in seed order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmenityId(pub String);

/// Immutable catalog record describing a purchasable property feature.
///
/// `category` is stored as free text, not a closed enum, but all seed data
/// uses the fixed vocabulary (fitness, work, social, family, pets, luxury,
/// convenience, security, general). `target_demographics` tags are matched
/// by substring, never exact equality, except where a filter says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub estimated_cost: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub target_demographics: Vec<String>,
}

impl Amenity {
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.target_demographics
            .iter()
            .any(|tag| tag.contains(needle))
    }
}

/// Read-only amenity reference data, seeded exactly once.
///
/// The `OnceLock` is the single-writer gate: concurrent first-requests race
/// on `get_or_init`, and only one initializer ever runs, so a double seed
/// cannot produce duplicate rows.
#[derive(Debug, Default)]
pub struct AmenityCatalog {
    entries: OnceLock<Vec<Amenity>>,
}

impl AmenityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn seeded(&self) -> &[Amenity] {
        self.entries.get_or_init(|| {
            let mut entries = seed::seed_amenities();
            entries.sort_by(|a, b| {
                a.category
                    .cmp(&b.category)
                    .then(a.estimated_cost.cmp(&b.estimated_cost))
            });
            entries
        })
    }

    /// Seed the catalog if it is empty; a no-op otherwise. Returns the row count.
    pub fn seed(&self) -> usize {
        self.seeded().len()
    }

    /// Full catalog ordered by (category ascending, estimated cost ascending).
    pub fn list_all(&self) -> Vec<Amenity> {
        self.seeded().to_vec()
    }

    /// Distinct category names, alphabetically sorted.
    pub fn categories(&self) -> Vec<String> {
        self.seeded()
            .iter()
            .map(|amenity| amenity.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
