use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{Catalog, HarvestError};
use crate::ports::CatalogStore;

/// Catalog persisted as a UTF-8 JSON file.
///
/// Writes are whole-file replacements committed with write-temp-then-rename,
/// so a run killed mid-write leaves the previous catalog intact. Non-ASCII
/// characters are written unescaped with stable 2-space indentation.
#[derive(Debug, Clone)]
pub struct FilesystemCatalogStore {
    path: PathBuf,
}

impl FilesystemCatalogStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, details: impl ToString) -> HarvestError {
        HarvestError::CatalogIo { path: self.path.clone(), details: details.to_string() }
    }
}

impl CatalogStore for FilesystemCatalogStore {
    fn load(&self) -> Result<Catalog, HarvestError> {
        if !self.path.exists() {
            return Ok(Catalog::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|e| HarvestError::CatalogFormat {
            path: self.path.clone(),
            details: e.to_string(),
        })
    }

    fn save(&self, catalog: &Catalog) -> Result<(), HarvestError> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| self.io_error(format!("serialize: {}", e)))?;

        // The temp file must live in the target directory so the rename
        // stays on one filesystem and is atomic.
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.write_all(b"\n").map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}
