use chrono::Local;

use crate::domain::{Catalog, CatalogMeta, HarvestError, TemplateRecord};
use crate::ports::CatalogStore;

/// Append accepted records to the catalog snapshot and commit the result.
///
/// The snapshot is never mutated: the merged successor is built as a new
/// value and written through the store's atomic replace. `meta` is refreshed
/// on every merge, including merges that accept nothing.
pub fn merge_into<S: CatalogStore + ?Sized>(
    store: &S,
    snapshot: &Catalog,
    accepted: Vec<TemplateRecord>,
) -> Result<Catalog, HarvestError> {
    let now = Local::now();
    let meta = CatalogMeta {
        version: now.format("%Y-%m-%d").to_string(),
        updated_at: now.to_rfc3339(),
    };

    let merged = snapshot.with_appended(accepted, meta);
    store.save(&merged)?;
    Ok(merged)
}
