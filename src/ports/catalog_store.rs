use crate::domain::{Catalog, HarvestError};

/// Persistence seam for the template catalog.
pub trait CatalogStore {
    /// Load the current catalog. A store with no catalog yet returns an
    /// empty one; an unreadable or malformed catalog is an error.
    fn load(&self) -> Result<Catalog, HarvestError>;

    /// Replace the persisted catalog as a single atomic whole. A run killed
    /// before this completes must leave the previous catalog intact.
    fn save(&self, catalog: &Catalog) -> Result<(), HarvestError>;
}
