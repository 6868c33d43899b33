use serde::{Deserialize, Serialize};

use crate::domain::TemplateRecord;

/// Version metadata refreshed on every successful merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMeta {
    /// Date of the last merge, `YYYY-MM-DD`.
    pub version: String,
    /// RFC 3339 timestamp of the last merge.
    pub updated_at: String,
}

/// The persisted, versioned collection of template records.
///
/// Invariants: `items` order is append-preserving, ids are unique, and no two
/// items share a prompt fingerprint. A merge never mutates a loaded catalog;
/// it builds a new value and commits it with an atomic file replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub meta: CatalogMeta,
    pub items: Vec<TemplateRecord>,
}

impl Catalog {
    /// Build the merged successor of this catalog: the existing items in
    /// their original order, the accepted records appended in arrival order,
    /// and refreshed meta.
    pub fn with_appended(&self, accepted: Vec<TemplateRecord>, meta: CatalogMeta) -> Catalog {
        let mut items = self.items.clone();
        items.extend(accepted);
        Catalog { meta, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AspectRatio, SourceAttribution};

    fn record(id: &str, prompt: &str) -> TemplateRecord {
        TemplateRecord {
            id: id.to_string(),
            title: "Test".to_string(),
            channels: vec!["全部".to_string()],
            materials: vec!["全部".to_string()],
            industries: vec!["通用".to_string()],
            ratio: AspectRatio::Square,
            preview: String::new(),
            image: String::new(),
            prompt: prompt.to_string(),
            prompt_params: String::new(),
            tips: String::new(),
            source: SourceAttribution {
                name: "@test".to_string(),
                label: "GitHub".to_string(),
                url: "https://example.com".to_string(),
            },
        }
    }

    #[test]
    fn with_appended_preserves_existing_order() {
        let base = Catalog {
            meta: CatalogMeta::default(),
            items: vec![record("nbp-001", "a"), record("nbp-002", "b")],
        };
        let merged = base.with_appended(
            vec![record("nbp-003", "c")],
            CatalogMeta { version: "2026-08-29".into(), updated_at: "now".into() },
        );

        let ids: Vec<&str> = merged.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["nbp-001", "nbp-002", "nbp-003"]);
        // Source catalog untouched.
        assert_eq!(base.items.len(), 2);
    }

    #[test]
    fn with_appended_refreshes_meta_even_when_empty() {
        let base = Catalog::default();
        let meta = CatalogMeta { version: "2026-08-29".into(), updated_at: "t".into() };
        let merged = base.with_appended(Vec::new(), meta.clone());
        assert_eq!(merged.meta, meta);
        assert!(merged.items.is_empty());
    }
}
