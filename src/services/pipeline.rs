use std::fs;

use crate::domain::{
    CandidateRecord, DocumentSet, HarvestConfig, HarvestError, SourceAttribution,
};
use crate::ports::{AcquireStrategy, CatalogStore, MirrorClient};
use crate::services::acquirer::acquire_with_fallback;
use crate::services::classifier::classify;
use crate::services::dedup::Deduplicator;
use crate::services::locator::locate_documents;
use crate::services::parser::parse_document;

/// Outcome of one harvest run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarvestReport {
    /// Name of the acquisition strategy that produced the documents, or
    /// `None` when every strategy was exhausted and the run ended early.
    pub strategy: Option<String>,
    /// Documents considered, bounded by `limits.max_per_run`.
    pub scanned: usize,
    /// Records accepted and merged this run.
    pub accepted: usize,
    /// Candidates dropped for a prompt fingerprint collision.
    pub duplicates: usize,
    /// Documents with no extractable prompt.
    pub parse_failures: usize,
    /// Documents whose content could not be read or fetched.
    pub unreadable: usize,
    /// Catalog size after the merge; 0 when no merge ran (no source).
    pub catalog_len: usize,
}

/// Execute one full harvest run: acquire, locate, parse, classify,
/// deduplicate, merge. Sequential and single-threaded; the catalog file is
/// the only shared mutable resource and is committed once, atomically.
pub fn run(
    config: &HarvestConfig,
    strategies: &[Box<dyn AcquireStrategy>],
    mirror_client: &dyn MirrorClient,
    store: &dyn CatalogStore,
) -> Result<HarvestReport, HarvestError> {
    let Some((strategy, set)) = acquire_with_fallback(strategies, &config.source) else {
        // No source: zero accepted records, catalog untouched.
        return Ok(HarvestReport::default());
    };

    let snapshot = store.load()?;
    let documents = locate_documents(&set, &config.source.subtree)?;

    let mut dedup = Deduplicator::new(&snapshot);
    let mut accepted = Vec::new();
    let mut report = HarvestReport { strategy: Some(strategy), ..HarvestReport::default() };

    for rel_path in documents.iter().take(config.limits.max_per_run) {
        report.scanned += 1;

        let Some(content) = read_document(&set, rel_path, mirror_client) else {
            report.unreadable += 1;
            continue;
        };

        let Some(parsed) = parse_document(&content, rel_path) else {
            report.parse_failures += 1;
            continue;
        };

        let hint = category_hint(rel_path);
        let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);
        let classification = classify(file_name, hint);

        let candidate = CandidateRecord {
            tips: format!(
                "{}类提示词模板，适用于{}风格的图像生成",
                hint.unwrap_or("通用"),
                parsed.title
            ),
            title: parsed.title,
            channels: classification.channels,
            materials: classification.materials,
            industries: classification.industries,
            ratio: classification.ratio,
            prompt: parsed.prompt,
            prompt_params: parsed.prompt_params,
            source: SourceAttribution {
                name: format!("@{}", config.source.owner),
                label: "GitHub".to_string(),
                url: config.source.blob_url(rel_path),
            },
        };

        match dedup.admit(candidate) {
            Some(record) => accepted.push(record),
            None => report.duplicates += 1,
        }
    }

    report.accepted = accepted.len();
    let merged = crate::services::merger::merge_into(store, &snapshot, accepted)?;
    report.catalog_len = merged.items.len();
    Ok(report)
}

/// Read one document's content. Unreadable or unfetchable documents are
/// skipped, not fatal.
fn read_document(
    set: &DocumentSet,
    rel_path: &str,
    mirror_client: &dyn MirrorClient,
) -> Option<String> {
    match set {
        DocumentSet::LocalTree(tree) => fs::read_to_string(tree.repo_root().join(rel_path)).ok(),
        DocumentSet::MirrorListing(listing) => {
            mirror_client.fetch(&listing.document_url(rel_path)).ok()
        }
    }
}

/// Directory/category hint: the document's parent directory name, when the
/// path is deep enough to carry one below the subtree root.
fn category_hint(rel_path: &str) -> Option<&str> {
    let parts: Vec<&str> = rel_path.split('/').collect();
    if parts.len() >= 3 { Some(parts[parts.len() - 2]) } else { None }
}
