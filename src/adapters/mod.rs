mod catalog_filesystem;
mod git_clone;
mod mirror_fetch;
mod sparse_checkout;

pub use catalog_filesystem::FilesystemCatalogStore;
pub use git_clone::GitCloneAcquirer;
pub use mirror_fetch::{HttpMirrorClient, MirrorFetchAcquirer};
pub use sparse_checkout::SparseCheckoutAcquirer;
