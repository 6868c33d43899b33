use std::collections::HashSet;

use crate::domain::template_id;
use crate::domain::{CandidateRecord, Catalog, PromptFingerprint, TemplateRecord};

/// Filters candidates against the catalog and the records already accepted
/// earlier in the same run, and allocates ids for the survivors.
pub struct Deduplicator {
    fingerprints: HashSet<PromptFingerprint>,
    known_ids: Vec<String>,
}

impl Deduplicator {
    /// Seed from the existing catalog snapshot.
    pub fn new(catalog: &Catalog) -> Self {
        let fingerprints =
            catalog.items.iter().map(|item| PromptFingerprint::of(&item.prompt)).collect();
        let known_ids = catalog.items.iter().map(|item| item.id.clone()).collect();
        Self { fingerprints, known_ids }
    }

    /// Admit a candidate: `None` when its prompt fingerprint collides with an
    /// existing or already-accepted record, otherwise the record with the
    /// next identifier allocated.
    pub fn admit(&mut self, candidate: CandidateRecord) -> Option<TemplateRecord> {
        let fingerprint = PromptFingerprint::of(&candidate.prompt);
        if !self.fingerprints.insert(fingerprint) {
            return None;
        }

        let id = template_id::next_id(self.known_ids.iter().map(String::as_str));
        self.known_ids.push(id.clone());
        Some(candidate.into_record(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AspectRatio, CatalogMeta, SourceAttribution};

    fn candidate(prompt: &str) -> CandidateRecord {
        CandidateRecord {
            title: "T".into(),
            channels: vec!["全部".into()],
            materials: vec!["全部".into()],
            industries: vec!["通用".into()],
            ratio: AspectRatio::Square,
            prompt: prompt.into(),
            prompt_params: "p".into(),
            tips: "t".into(),
            source: SourceAttribution {
                name: "@o".into(),
                label: "GitHub".into(),
                url: "https://example.com/a.md".into(),
            },
        }
    }

    fn catalog_with(prompts_and_ids: &[(&str, &str)]) -> Catalog {
        Catalog {
            meta: CatalogMeta::default(),
            items: prompts_and_ids
                .iter()
                .map(|(id, prompt)| candidate(prompt).into_record(id.to_string()))
                .collect(),
        }
    }

    #[test]
    fn ids_are_unique_and_strictly_increasing_with_acceptance_order() {
        let mut dedup = Deduplicator::new(&catalog_with(&[("nbp-004", "existing prompt")]));

        let a = dedup.admit(candidate("first new prompt")).unwrap();
        let b = dedup.admit(candidate("second new prompt")).unwrap();
        assert_eq!(a.id, "nbp-005");
        assert_eq!(b.id, "nbp-006");
    }

    #[test]
    fn matching_hundred_char_prefix_is_a_duplicate() {
        let prefix = "Professional logo design".to_string() + &"x".repeat(100);
        let existing: String = prefix.chars().take(120).collect();
        let mut dedup = Deduplicator::new(&catalog_with(&[("nbp-001", &existing)]));

        let same_prefix: String =
            prefix.chars().take(100).collect::<String>() + " but a different tail entirely";
        assert!(dedup.admit(candidate(&same_prefix)).is_none());
    }

    #[test]
    fn duplicates_within_one_run_are_dropped() {
        let mut dedup = Deduplicator::new(&Catalog::default());

        assert!(dedup.admit(candidate("a prompt that will repeat")).is_some());
        assert!(dedup.admit(candidate("a prompt that will repeat")).is_none());
        assert!(dedup.admit(candidate("a prompt that is distinct")).is_some());
    }

    #[test]
    fn dropped_duplicates_do_not_consume_ids() {
        let mut dedup = Deduplicator::new(&Catalog::default());

        let first = dedup.admit(candidate("alpha")).unwrap();
        assert!(dedup.admit(candidate("alpha")).is_none());
        let second = dedup.admit(candidate("beta")).unwrap();

        assert_eq!(first.id, "nbp-001");
        assert_eq!(second.id, "nbp-002");
    }
}
