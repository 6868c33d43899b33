use std::path::{Path, PathBuf};

use tempfile::TempDir;
use url::Url;

/// Repository coordinates and the subtree we harvest from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub host: String,
    pub owner: String,
    pub repo: String,
    /// Primary reference name (branch) to fetch.
    pub reference: String,
    /// Conventional alternate tried once when the primary reference fails.
    pub alternate_reference: String,
    /// Path prefix under the repository root containing template documents.
    pub subtree: String,
}

impl RepoCoordinates {
    pub fn clone_url(&self) -> String {
        format!("https://{}/{}/{}.git", self.host, self.owner, self.repo)
    }

    /// Web URL of one document, used for record attribution.
    pub fn blob_url(&self, rel_path: &str) -> String {
        format!(
            "https://{}/{}/{}/blob/{}/{}",
            self.host, self.owner, self.repo, self.reference, rel_path
        )
    }
}

/// A repository tree checked out on local disk.
///
/// Holds the scratch checkout directory so it lives as long as the document
/// set; dropping the set removes the checkout. Document paths are always
/// relative to the repository root, subtree prefix included, matching the
/// paths a mirror listing carries.
#[derive(Debug)]
pub struct LocalTree {
    _checkout: Option<TempDir>,
    repo_root: PathBuf,
}

impl LocalTree {
    /// Wrap a scratch checkout whose path is the repository root.
    pub fn from_checkout(checkout: TempDir) -> Self {
        let repo_root = checkout.path().to_path_buf();
        Self { _checkout: Some(checkout), repo_root }
    }

    /// Wrap a caller-owned directory acting as the repository root.
    pub fn at(repo_root: PathBuf) -> Self {
        Self { _checkout: None, repo_root }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

/// A lazy list of documents served by a raw-content mirror, fetched one by
/// one as they are processed.
#[derive(Debug, Clone)]
pub struct MirrorListing {
    pub base: Url,
    pub owner: String,
    pub repo: String,
    pub reference: String,
    pub paths: Vec<String>,
}

impl MirrorListing {
    /// Raw-content URL for one relative document path,
    /// `{mirror}/{owner}/{repo}/{ref}/{path}`.
    pub fn document_url(&self, rel_path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base.as_str().trim_end_matches('/'),
            self.owner,
            self.repo,
            self.reference,
            rel_path
        )
    }
}

/// Output of a successful acquisition: where the documents live and how to
/// read them.
#[derive(Debug)]
pub enum DocumentSet {
    LocalTree(LocalTree),
    MirrorListing(MirrorListing),
}

impl DocumentSet {
    /// Short human-readable origin, reported in run summaries.
    pub fn origin(&self) -> String {
        match self {
            DocumentSet::LocalTree(tree) => tree.repo_root().display().to_string(),
            DocumentSet::MirrorListing(listing) => listing.base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_url_points_at_originating_document() {
        let coords = RepoCoordinates {
            host: "github.com".into(),
            owner: "xianyu110".into(),
            repo: "awesome-nanobananapro-prompts".into(),
            reference: "master".into(),
            alternate_reference: "main".into(),
            subtree: "gpt4o-image-prompts-master".into(),
        };
        assert_eq!(
            coords.blob_url("gpt4o-image-prompts-master/Portrait/Anime-character.md"),
            "https://github.com/xianyu110/awesome-nanobananapro-prompts/blob/master/gpt4o-image-prompts-master/Portrait/Anime-character.md"
        );
    }

    #[test]
    fn document_url_composes_mirror_base_and_coordinates() {
        let listing = MirrorListing {
            base: Url::parse("https://raw.githubusercontent.com").unwrap(),
            owner: "o".into(),
            repo: "r".into(),
            reference: "master".into(),
            paths: vec![],
        };
        assert_eq!(
            listing.document_url("dir/File.md"),
            "https://raw.githubusercontent.com/o/r/master/dir/File.md"
        );
    }
}
