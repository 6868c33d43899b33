//! Shared harness for nbh integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use nbh::adapters::FilesystemCatalogStore;
use nbh::domain::{
    DocumentSet, HarvestConfig, HarvestError, LocalTree, RepoCoordinates,
};
use nbh::ports::{AcquireStrategy, MirrorClient};
use tempfile::TempDir;

/// Isolated environment: a fixture repository tree plus a tempdir catalog.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Directory acting as the checked-out repository root.
    pub fn repo_root(&self) -> PathBuf {
        self.root.path().join("repo")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.path().join("templates.json")
    }

    pub fn store(&self) -> FilesystemCatalogStore {
        FilesystemCatalogStore::new(self.catalog_path())
    }

    /// Configuration pointing at the fixture; remote coordinates are inert
    /// because tests inject their own strategies.
    pub fn config(&self) -> HarvestConfig {
        let mut config = HarvestConfig::default();
        config.source.subtree = "tpl".to_string();
        config.catalog_path = self.catalog_path();
        config
    }

    /// Write one template document under the fixture subtree.
    pub fn write_document(&self, rel_path: &str, content: &str) {
        let path = self.repo_root().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(path, content).expect("Failed to write fixture document");
    }

    /// A document whose fenced block holds `prompt`.
    pub fn write_prompt_document(&self, rel_path: &str, prompt: &str) {
        self.write_document(rel_path, &format!("# Title\n\n```\n{prompt}\n```\n"));
    }
}

/// Strategy serving the fixture tree, standing in for a successful clone or
/// sparse checkout.
#[allow(dead_code)]
pub struct LocalTreeStrategy {
    name: &'static str,
    root: PathBuf,
}

impl LocalTreeStrategy {
    #[allow(dead_code)]
    pub fn new(name: &'static str, root: PathBuf) -> Self {
        Self { name, root }
    }
}

impl AcquireStrategy for LocalTreeStrategy {
    fn name(&self) -> &str {
        self.name
    }

    fn acquire(&self, _coords: &RepoCoordinates) -> Result<Option<DocumentSet>, HarvestError> {
        Ok(Some(DocumentSet::LocalTree(LocalTree::at(self.root.clone()))))
    }
}

/// Strategy that always fails, standing in for a timed-out clone.
pub struct FailingStrategy;

impl AcquireStrategy for FailingStrategy {
    fn name(&self) -> &str {
        "clone"
    }

    fn acquire(&self, _coords: &RepoCoordinates) -> Result<Option<DocumentSet>, HarvestError> {
        Err(HarvestError::Git { command: "git clone".into(), details: "timed out".into() })
    }
}

/// Mirror client for runs that never touch a mirror.
#[allow(dead_code)]
pub struct NoMirror;

impl MirrorClient for NoMirror {
    fn probe(&self, _url: &str) -> bool {
        false
    }

    fn fetch(&self, url: &str) -> Result<String, HarvestError> {
        Err(HarvestError::Http(format!("unexpected fetch of {url}")))
    }
}

/// Read the persisted catalog JSON verbatim.
#[allow(dead_code)]
pub fn raw_catalog(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read catalog file")
}
