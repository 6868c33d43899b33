use std::fs;
use std::path::Path;

use crate::domain::{DocumentSet, HarvestError};

const DOCUMENT_EXTENSION: &str = "md";
const INDEX_BASENAME: &str = "readme.md";

/// Enumerate candidate template documents in a document set.
///
/// Paths are relative to the repository root (subtree prefix included),
/// filtered to template documents, with the index/readme document excluded,
/// and sorted lexicographically so processing order does not depend on the
/// platform's directory enumeration order.
pub fn locate_documents(set: &DocumentSet, subtree: &str) -> Result<Vec<String>, HarvestError> {
    let mut paths = match set {
        DocumentSet::LocalTree(tree) => {
            let root = tree.repo_root().join(subtree);
            if !root.is_dir() {
                return Ok(Vec::new());
            }
            let mut collected = Vec::new();
            walk(&root, subtree, &mut collected)?;
            collected
        }
        DocumentSet::MirrorListing(listing) => {
            listing.paths.iter().filter(|p| is_template_document(p)).cloned().collect()
        }
    };

    paths.sort();
    Ok(paths)
}

fn walk(dir: &Path, prefix: &str, out: &mut Vec<String>) -> Result<(), HarvestError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            walk(&path, &format!("{prefix}/{name}"), out)?;
        } else if is_template_document(&name) {
            out.push(format!("{prefix}/{name}"));
        }
    }
    Ok(())
}

fn is_template_document(path: &str) -> bool {
    let base = path.rsplit('/').next().unwrap_or(path);
    if base.eq_ignore_ascii_case(INDEX_BASENAME) {
        return false;
    }
    match base.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION),
        None => false,
    }
}
