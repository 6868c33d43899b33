//! nbh: harvest community-authored prompt templates from a remote repository
//! into a versioned local catalog.
//!
//! One run is fully synchronous: acquire the document subtree (clone →
//! sparse checkout → raw-content mirrors, first success wins), locate
//! template documents, extract a prompt from each, classify it along four
//! taxonomies, drop duplicates against the persisted catalog, and commit the
//! accepted records with an atomic whole-file replace.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::time::Duration;

use adapters::{
    FilesystemCatalogStore, GitCloneAcquirer, HttpMirrorClient, MirrorFetchAcquirer,
    SparseCheckoutAcquirer,
};
use ports::AcquireStrategy;

pub use domain::{Catalog, HarvestConfig, HarvestError, TemplateRecord};
pub use services::HarvestReport;

/// Load the run configuration from a TOML file; a missing file yields the
/// built-in defaults.
pub fn load_config(path: &Path) -> Result<HarvestConfig, HarvestError> {
    HarvestConfig::load(path)
}

/// Execute one harvest run with the default strategy stack: depth-1 clone,
/// then sparse checkout, then per-file mirror retrieval.
pub fn harvest(config: &HarvestConfig) -> Result<HarvestReport, HarvestError> {
    let client = HttpMirrorClient::new(config.limits.http_timeout_secs)?;

    let git_timeout = Duration::from_secs(config.limits.git_timeout_secs);
    let strategies: Vec<Box<dyn AcquireStrategy>> = vec![
        Box::new(GitCloneAcquirer::new(git_timeout)),
        Box::new(SparseCheckoutAcquirer::new(git_timeout)),
        Box::new(MirrorFetchAcquirer::new(client.clone(), config.mirrors.clone())),
    ];

    let store = FilesystemCatalogStore::new(config.catalog_path.clone());
    services::pipeline::run(config, &strategies, &client, &store)
}
