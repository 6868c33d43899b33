pub mod catalog;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod record;
pub mod source;
pub mod template_id;

pub use catalog::{Catalog, CatalogMeta};
pub use config::{HarvestConfig, Limits, MirrorConfig};
pub use error::HarvestError;
pub use fingerprint::{FINGERPRINT_PREFIX_CHARS, PromptFingerprint};
pub use record::{AspectRatio, CandidateRecord, SourceAttribution, TemplateRecord};
pub use source::{DocumentSet, LocalTree, MirrorListing, RepoCoordinates};
