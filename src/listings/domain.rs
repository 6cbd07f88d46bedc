use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

static PROPERTY_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_property_id() -> PropertyId {
    let id = PROPERTY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PropertyId(format!("prop-{id:06}"))
}

pub(crate) fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("profile-{id:06}"))
}

/// A managed building. Created once; no update or delete operations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub location: String,
    pub units: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a property, before validation and id assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    pub location: String,
    pub units: u32,
    #[serde(default)]
    pub preferences: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Demographic description of the tenant a property is marketed toward.
/// At most one exists per property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub id: ProfileId,
    pub property_id: PropertyId,
    pub age_range: String,
    pub income_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<String>,
    pub preferences: Vec<String>,
    pub ideal_tenant: String,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a tenant profile. `preferences` are informational
/// only; the suggestion engine never reads them.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTenantProfile {
    pub age_range: String,
    pub income_range: String,
    #[serde(default)]
    pub lifestyle: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// One-shot marketing blurb computed when a tenant profile is created and
/// never recomputed. Only the text before the location's first comma is used.
pub fn ideal_tenant_description(
    age_range: &str,
    income_range: &str,
    lifestyle: Option<&str>,
    location_label: Option<&str>,
) -> String {
    let lifestyle_prefix = match lifestyle {
        Some(lifestyle) => format!("{lifestyle} "),
        None => String::new(),
    };
    let location_clause = match location_label {
        Some(label) => {
            let short = label.split(',').next().unwrap_or(label);
            format!(" in {short}")
        }
        None => String::new(),
    };

    format!(
        "Ideal tenant profile: {lifestyle_prefix}individuals aged {age_range} with \
         {income_range} annual income{location_clause}. Perfect for those seeking \
         modern amenities and convenient location access."
    )
}
