mod acquire;
mod catalog_store;
mod mirror_client;

pub use acquire::AcquireStrategy;
pub use catalog_store::CatalogStore;
pub use mirror_client::MirrorClient;
