use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{Property, PropertyId, TenantProfile};

/// Storage abstraction so the service can run against any backing store.
///
/// Implementations own the uniqueness invariants: `insert_property` must
/// reject a coordinate pair already on file and `insert_profile` must reject
/// a second profile for the same property, atomically with the insert itself
/// rather than by a separate lookup.
pub trait ListingRepository: Send + Sync {
    fn insert_property(&self, property: Property) -> Result<Property, RepositoryError>;
    fn fetch_property(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError>;
    fn list_properties(&self) -> Result<Vec<Property>, RepositoryError>;
    fn insert_profile(&self, profile: TenantProfile) -> Result<TenantProfile, RepositoryError>;
    fn profile_for_property(
        &self,
        id: &PropertyId,
    ) -> Result<Option<TenantProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Reference store used by the binary and the test suites. A relational
/// adapter would enforce the same invariants with unique constraints; here a
/// single mutex makes every check-and-insert one critical section.
#[derive(Default, Clone)]
pub struct InMemoryListingStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    properties: Vec<Property>,
    // Exact (latitude, longitude) pairs already taken, keyed by bit pattern.
    coordinates: HashMap<(u64, u64), PropertyId>,
    profiles: HashMap<PropertyId, TenantProfile>,
}

impl ListingRepository for InMemoryListingStore {
    fn insert_property(&self, property: Property) -> Result<Property, RepositoryError> {
        let mut inner = self.inner.lock().expect("listing store mutex poisoned");
        if let (Some(lat), Some(lng)) = (property.latitude, property.longitude) {
            let key = (lat.to_bits(), lng.to_bits());
            if inner.coordinates.contains_key(&key) {
                return Err(RepositoryError::Conflict);
            }
            inner.coordinates.insert(key, property.id.clone());
        }
        inner.properties.push(property.clone());
        Ok(property)
    }

    fn fetch_property(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        let inner = self.inner.lock().expect("listing store mutex poisoned");
        Ok(inner
            .properties
            .iter()
            .find(|property| &property.id == id)
            .cloned())
    }

    fn list_properties(&self) -> Result<Vec<Property>, RepositoryError> {
        let inner = self.inner.lock().expect("listing store mutex poisoned");
        Ok(inner.properties.clone())
    }

    fn insert_profile(&self, profile: TenantProfile) -> Result<TenantProfile, RepositoryError> {
        let mut inner = self.inner.lock().expect("listing store mutex poisoned");
        if !inner
            .properties
            .iter()
            .any(|property| property.id == profile.property_id)
        {
            return Err(RepositoryError::NotFound);
        }
        if inner.profiles.contains_key(&profile.property_id) {
            return Err(RepositoryError::Conflict);
        }
        inner
            .profiles
            .insert(profile.property_id.clone(), profile.clone());
        Ok(profile)
    }

    fn profile_for_property(
        &self,
        id: &PropertyId,
    ) -> Result<Option<TenantProfile>, RepositoryError> {
        let inner = self.inner.lock().expect("listing store mutex poisoned");
        Ok(inner.profiles.get(id).cloned())
    }
}
