use serde::{Deserialize, Serialize};

/// Output aspect ratio for a template. Every record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "3:4")]
    Poster,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9:16",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Poster => "3:4",
            AspectRatio::Square => "1:1",
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

/// Attribution to the document a record was harvested from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAttribution {
    pub name: String,
    pub label: String,
    pub url: String,
}

/// A fully parsed and classified record that has not been accepted yet.
///
/// Candidates carry no id; one is allocated only when the deduplicator
/// admits the candidate into the run's accepted set.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    pub title: String,
    pub channels: Vec<String>,
    pub materials: Vec<String>,
    pub industries: Vec<String>,
    pub ratio: AspectRatio,
    pub prompt: String,
    pub prompt_params: String,
    pub tips: String,
    pub source: SourceAttribution,
}

impl CandidateRecord {
    pub fn into_record(self, id: String) -> TemplateRecord {
        TemplateRecord {
            id,
            title: self.title,
            channels: self.channels,
            materials: self.materials,
            industries: self.industries,
            ratio: self.ratio,
            preview: String::new(),
            image: String::new(),
            prompt: self.prompt,
            prompt_params: self.prompt_params,
            tips: self.tips,
            source: self.source,
        }
    }
}

/// One harvested prompt entry plus its classification tags and attribution.
///
/// Records become immutable once persisted: later runs may append new records
/// to the catalog but never alter or remove existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub title: String,
    pub channels: Vec<String>,
    pub materials: Vec<String>,
    pub industries: Vec<String>,
    pub ratio: AspectRatio,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub image: String,
    pub prompt: String,
    pub prompt_params: String,
    pub tips: String,
    pub source: SourceAttribution,
}
