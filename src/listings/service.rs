use std::sync::Arc;

use tracing::info;

use super::domain::{
    ideal_tenant_description, next_profile_id, next_property_id, NewProperty, NewTenantProfile,
    Property, PropertyId, TenantProfile,
};
use super::repository::{ListingRepository, RepositoryError};

pub const MAX_UNITS: u32 = 10_000;

/// Failures surfaced by property and tenant-profile creation. The messages
/// are shown to the caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("{0}")]
    Validation(String),
    #[error("property {0} not found")]
    PropertyNotFound(PropertyId),
    #[error("a property already exists at these coordinates")]
    CoordinatesTaken,
    #[error("property {0} already has a tenant profile")]
    ProfileExists(PropertyId),
    #[error("storage failure: {0}")]
    Store(RepositoryError),
}

/// Creation flows for properties and tenant profiles. Validation happens
/// before any store mutation; uniqueness is left to the repository so the
/// check and the write share one critical section.
pub struct ListingService<R> {
    repository: Arc<R>,
}

impl<R> ListingService<R>
where
    R: ListingRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn create_property(&self, new: NewProperty) -> Result<Property, ListingError> {
        validate_property(&new)?;

        let property = Property {
            id: next_property_id(),
            location: new.location,
            units: new.units,
            preferences: new.preferences,
            latitude: new.latitude,
            longitude: new.longitude,
            created_at: chrono::Utc::now(),
        };

        let property = self
            .repository
            .insert_property(property)
            .map_err(|err| match err {
                RepositoryError::Conflict => ListingError::CoordinatesTaken,
                other => ListingError::Store(other),
            })?;

        info!(id = %property.id, units = property.units, "property created");
        Ok(property)
    }

    pub fn create_tenant_profile(
        &self,
        property_id: PropertyId,
        new: NewTenantProfile,
    ) -> Result<TenantProfile, ListingError> {
        let property = self
            .repository
            .fetch_property(&property_id)
            .map_err(ListingError::Store)?
            .ok_or_else(|| ListingError::PropertyNotFound(property_id.clone()))?;

        let ideal_tenant = ideal_tenant_description(
            &new.age_range,
            &new.income_range,
            new.lifestyle.as_deref(),
            Some(&property.location),
        );

        let profile = TenantProfile {
            id: next_profile_id(),
            property_id: property_id.clone(),
            age_range: new.age_range,
            income_range: new.income_range,
            lifestyle: new.lifestyle,
            preferences: new.preferences,
            ideal_tenant,
            created_at: chrono::Utc::now(),
        };

        let profile = self
            .repository
            .insert_profile(profile)
            .map_err(|err| match err {
                RepositoryError::Conflict => ListingError::ProfileExists(property_id.clone()),
                RepositoryError::NotFound => ListingError::PropertyNotFound(property_id.clone()),
                other => ListingError::Store(other),
            })?;

        info!(id = %profile.id, property = %property_id, "tenant profile created");
        Ok(profile)
    }

    pub fn properties(&self) -> Result<Vec<Property>, ListingError> {
        self.repository.list_properties().map_err(ListingError::Store)
    }

    pub fn tenant_profile(&self, id: &PropertyId) -> Result<Option<TenantProfile>, ListingError> {
        self.repository
            .profile_for_property(id)
            .map_err(ListingError::Store)
    }
}

fn validate_property(new: &NewProperty) -> Result<(), ListingError> {
    if new.units < 1 || new.units > MAX_UNITS {
        return Err(ListingError::Validation(format!(
            "units must be between 1 and {MAX_UNITS}"
        )));
    }

    match (new.latitude, new.longitude) {
        (None, None) => {}
        (Some(lat), Some(lng)) => {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ListingError::Validation(
                    "latitude must be between -90 and 90".to_string(),
                ));
            }
            if !(-180.0..=180.0).contains(&lng) {
                return Err(ListingError::Validation(
                    "longitude must be between -180 and 180".to_string(),
                ));
            }
        }
        _ => {
            return Err(ListingError::Validation(
                "latitude and longitude must be provided together".to_string(),
            ));
        }
    }

    Ok(())
}
