use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{HarvestError, RepoCoordinates};

/// Mirror endpoints tried in order when both git strategies fail, and the
/// conventional document paths used to probe them (and, on success, as the
/// lazy per-file fetch list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    pub bases: Vec<Url>,
    pub probe_paths: Vec<String>,
}

/// Per-run cost bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum candidate documents ingested per run.
    pub max_per_run: usize,
    /// Per-request timeout for mirror probing and fetching.
    pub http_timeout_secs: u64,
    /// Wall-clock bound on each git operation (clone, pull). A stalled
    /// remote trips this and the run falls through to the next strategy.
    pub git_timeout_secs: u64,
}

/// Full run configuration, loaded from a TOML file or built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    pub source: RepoCoordinates,
    pub mirrors: MirrorConfig,
    pub limits: Limits,
    pub catalog_path: PathBuf,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        let bases = [
            "https://raw.githubusercontent.com",
            "https://ghproxy.net/https://raw.githubusercontent.com",
            "https://mirror.ghproxy.com/https://raw.githubusercontent.com",
        ]
        .iter()
        .map(|s| Url::parse(s).expect("default mirror URL must parse"))
        .collect();

        let probe_paths = [
            "gpt4o-image-prompts-master/Portrait/Realistic-portrait.md",
            "gpt4o-image-prompts-master/Portrait/Anime-character.md",
            "gpt4o-image-prompts-master/Art-style/Cyberpunk.md",
            "gpt4o-image-prompts-master/Art-style/Digital-art.md",
            "gpt4o-image-prompts-master/Photography/Product-photography.md",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            source: RepoCoordinates {
                host: "github.com".into(),
                owner: "xianyu110".into(),
                repo: "awesome-nanobananapro-prompts".into(),
                reference: "master".into(),
                alternate_reference: "main".into(),
                subtree: "gpt4o-image-prompts-master".into(),
            },
            mirrors: MirrorConfig { bases, probe_paths },
            limits: Limits { max_per_run: 50, http_timeout_secs: 30, git_timeout_secs: 120 },
            catalog_path: PathBuf::from("templates.json"),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a TOML file. A missing file yields defaults;
    /// a malformed one is a configuration error.
    pub fn load(path: &Path) -> Result<Self, HarvestError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self, HarvestError> {
        let dto: dto::ConfigDto = toml::from_str(content)?;
        let config: HarvestConfig = dto.try_into()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), HarvestError> {
        if self.source.reference.is_empty() {
            return Err(HarvestError::config_error("source.reference must not be empty"));
        }
        if self.source.subtree.is_empty() {
            return Err(HarvestError::config_error("source.subtree must not be empty"));
        }
        if self.limits.max_per_run == 0 {
            return Err(HarvestError::config_error("limits.max_per_run must be at least 1"));
        }
        if self.limits.http_timeout_secs == 0 || self.limits.git_timeout_secs == 0 {
            return Err(HarvestError::config_error("timeouts must be at least 1 second"));
        }
        if self.mirrors.bases.is_empty() {
            return Err(HarvestError::config_error("mirrors.bases must list at least one endpoint"));
        }
        Ok(())
    }
}

mod dto {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct ConfigDto {
        #[serde(default)]
        source: SourceDto,
        #[serde(default)]
        mirrors: MirrorsDto,
        #[serde(default)]
        limits: LimitsDto,
        #[serde(default)]
        catalog: CatalogDto,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct SourceDto {
        host: Option<String>,
        owner: Option<String>,
        repo: Option<String>,
        reference: Option<String>,
        alternate_reference: Option<String>,
        subtree: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct MirrorsDto {
        bases: Option<Vec<Url>>,
        probe_paths: Option<Vec<String>>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct LimitsDto {
        max_per_run: Option<usize>,
        http_timeout_secs: Option<u64>,
        git_timeout_secs: Option<u64>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct CatalogDto {
        path: Option<PathBuf>,
    }

    impl TryFrom<ConfigDto> for HarvestConfig {
        type Error = HarvestError;

        fn try_from(dto: ConfigDto) -> Result<Self, Self::Error> {
            let defaults = HarvestConfig::default();
            Ok(HarvestConfig {
                source: RepoCoordinates {
                    host: dto.source.host.unwrap_or(defaults.source.host),
                    owner: dto.source.owner.unwrap_or(defaults.source.owner),
                    repo: dto.source.repo.unwrap_or(defaults.source.repo),
                    reference: dto.source.reference.unwrap_or(defaults.source.reference),
                    alternate_reference: dto
                        .source
                        .alternate_reference
                        .unwrap_or(defaults.source.alternate_reference),
                    subtree: dto.source.subtree.unwrap_or(defaults.source.subtree),
                },
                mirrors: MirrorConfig {
                    bases: dto.mirrors.bases.unwrap_or(defaults.mirrors.bases),
                    probe_paths: dto.mirrors.probe_paths.unwrap_or(defaults.mirrors.probe_paths),
                },
                limits: Limits {
                    max_per_run: dto.limits.max_per_run.unwrap_or(defaults.limits.max_per_run),
                    http_timeout_secs: dto
                        .limits
                        .http_timeout_secs
                        .unwrap_or(defaults.limits.http_timeout_secs),
                    git_timeout_secs: dto
                        .limits
                        .git_timeout_secs
                        .unwrap_or(defaults.limits.git_timeout_secs),
                },
                catalog_path: dto.catalog.path.unwrap_or(defaults.catalog_path),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = HarvestConfig::parse_toml("").unwrap();
        assert_eq!(config, HarvestConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = HarvestConfig::parse_toml(
            r#"
            [source]
            reference = "main"
            alternate_reference = "master"

            [limits]
            max_per_run = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.source.reference, "main");
        assert_eq!(config.source.alternate_reference, "master");
        assert_eq!(config.limits.max_per_run, 10);
        // Untouched sections keep defaults.
        assert_eq!(config.source.owner, "xianyu110");
        assert_eq!(config.limits.http_timeout_secs, 30);
        assert_eq!(config.limits.git_timeout_secs, 120);
    }

    #[test]
    fn zero_max_per_run_is_rejected() {
        let err = HarvestConfig::parse_toml("[limits]\nmax_per_run = 0\n").unwrap_err();
        assert!(matches!(err, HarvestError::Config(_)));
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let err = HarvestConfig::parse_toml("[limits]\ngit_timeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, HarvestError::Config(_)));
        let err = HarvestConfig::parse_toml("[limits]\nhttp_timeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, HarvestError::Config(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HarvestConfig::parse_toml("[source]\nbranch = \"main\"\n").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = HarvestConfig::load(Path::new("/nonexistent/nbh.toml")).unwrap();
        assert_eq!(config, HarvestConfig::default());
    }
}
