use std::time::{Duration, Instant};

use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks};
use tempfile::TempDir;

use crate::domain::{DocumentSet, HarvestError, LocalTree, RepoCoordinates};
use crate::ports::AcquireStrategy;

/// Primary acquisition strategy: a depth-1 clone of the named reference,
/// restricted client-side to that single branch. The transfer is abandoned
/// once the wall-clock bound elapses.
#[derive(Debug)]
pub struct GitCloneAcquirer {
    timeout: Duration,
}

impl GitCloneAcquirer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl AcquireStrategy for GitCloneAcquirer {
    fn name(&self) -> &str {
        "clone"
    }

    fn acquire(&self, coords: &RepoCoordinates) -> Result<Option<DocumentSet>, HarvestError> {
        let scratch = TempDir::new()?;
        let deadline = Instant::now() + self.timeout;

        // Returning false from the progress callback aborts the transfer,
        // which git2 surfaces as a clone error.
        let mut callbacks = RemoteCallbacks::new();
        callbacks.transfer_progress(move |_| Instant::now() < deadline);

        let mut fetch = FetchOptions::new();
        fetch.depth(1);
        fetch.remote_callbacks(callbacks);

        RepoBuilder::new()
            .branch(&coords.reference)
            .fetch_options(fetch)
            .clone(&coords.clone_url(), scratch.path())
            .map_err(|e| HarvestError::Git {
                command: format!("git2 clone --depth 1 --branch {}", coords.reference),
                details: e.to_string(),
            })?;

        let tree = LocalTree::from_checkout(scratch);
        if !tree.repo_root().join(&coords.subtree).is_dir() {
            // Clone succeeded but the repository does not carry the subtree.
            return Ok(None);
        }
        Ok(Some(DocumentSet::LocalTree(tree)))
    }
}
