use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use crate::domain::{DocumentSet, HarvestError, LocalTree, RepoCoordinates};
use crate::ports::AcquireStrategy;

/// Poll interval while waiting on a git subprocess.
const WAIT_POLL: Duration = Duration::from_millis(50);

/// Second acquisition strategy: a subtree-restricted ("sparse") checkout.
///
/// Initializes an empty working copy, declares only the target subtree of
/// interest, and pulls the reference at depth 1. When the primary reference
/// name fails, retries once with the alternate conventional name. Every git
/// subprocess runs under a wall-clock bound so a stalled remote surfaces as
/// an error and the run falls through to the next strategy.
#[derive(Debug)]
pub struct SparseCheckoutAcquirer {
    timeout: Duration,
}

impl SparseCheckoutAcquirer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<(), HarvestError> {
        run_with_timeout("git", args, cwd, self.timeout)
    }

    fn pull(&self, cwd: &Path, reference: &str) -> Result<(), HarvestError> {
        self.run(&["pull", "origin", reference, "--depth=1"], cwd)
    }
}

/// Run a subprocess with a deadline: poll for exit, kill on expiry.
fn run_with_timeout(
    program: &str,
    args: &[&str],
    cwd: &Path,
    timeout: Duration,
) -> Result<(), HarvestError> {
    let command_line = format!("{} {}", program, args.join(" "));
    let git_error = |details: String| HarvestError::Git {
        command: command_line.clone(),
        details,
    };

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| git_error(e.to_string()))?;

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait().map_err(|e| git_error(e.to_string()))? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(git_error(format!("timed out after {}s", timeout.as_secs())));
            }
            None => thread::sleep(WAIT_POLL),
        }
    };

    if !status.success() {
        let mut stderr = String::new();
        if let Some(mut pipe) = child.stderr.take() {
            let _ = pipe.read_to_string(&mut stderr);
        }
        let stderr = stderr.trim();
        return Err(git_error(if stderr.is_empty() {
            "Unknown error".to_string()
        } else {
            stderr.to_string()
        }));
    }

    Ok(())
}

impl AcquireStrategy for SparseCheckoutAcquirer {
    fn name(&self) -> &str {
        "sparse-checkout"
    }

    fn acquire(&self, coords: &RepoCoordinates) -> Result<Option<DocumentSet>, HarvestError> {
        let scratch = TempDir::new()?;
        let work = scratch.path();

        self.run(&["init"], work)?;
        self.run(&["remote", "add", "origin", &coords.clone_url()], work)?;
        self.run(&["config", "core.sparseCheckout", "true"], work)?;

        let sparse_file = work.join(".git").join("info").join("sparse-checkout");
        if let Some(parent) = sparse_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sparse_file, format!("{}/\n", coords.subtree))?;

        if self.pull(work, &coords.reference).is_err() {
            self.pull(work, &coords.alternate_reference)?;
        }

        let tree = LocalTree::from_checkout(scratch);
        if !tree.repo_root().join(&coords.subtree).is_dir() {
            return Ok(None);
        }
        Ok(Some(DocumentSet::LocalTree(tree)))
    }
}
