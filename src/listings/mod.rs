mod domain;
mod repository;
mod service;

pub use domain::{
    ideal_tenant_description, NewProperty, NewTenantProfile, ProfileId, Property, PropertyId,
    TenantProfile,
};
pub use repository::{InMemoryListingStore, ListingRepository, RepositoryError};
pub use service::{ListingError, ListingService, MAX_UNITS};
