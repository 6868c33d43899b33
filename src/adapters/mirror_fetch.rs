use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::{DocumentSet, HarvestError, MirrorConfig, MirrorListing, RepoCoordinates};
use crate::ports::{AcquireStrategy, MirrorClient};

/// Number of probe paths checked per mirror before moving to the next one.
const PROBES_PER_MIRROR: usize = 2;

/// Blocking HTTP transport for raw-content mirrors.
///
/// Every request carries the configured timeout; on timeout or transport
/// error the current candidate is abandoned, never retried.
#[derive(Debug, Clone)]
pub struct HttpMirrorClient {
    client: Client,
}

impl HttpMirrorClient {
    pub fn new(timeout_secs: u64) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HarvestError::Http(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl MirrorClient for HttpMirrorClient {
    fn probe(&self, url: &str) -> bool {
        match self.client.head(url).send() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn fetch(&self, url: &str) -> Result<String, HarvestError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| HarvestError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Http(format!("GET {} returned {}", url, status)));
        }

        response.text().map_err(|e| HarvestError::Http(format!("GET {} body: {}", url, e)))
    }
}

/// Last-resort acquisition strategy: per-file retrieval through an ordered
/// list of mirror base endpoints. Each mirror gets a lightweight existence
/// probe before any full fetch; the first mirror that answers wins and its
/// document list is fetched lazily, one file at a time.
pub struct MirrorFetchAcquirer<C> {
    client: C,
    mirrors: MirrorConfig,
}

impl<C: MirrorClient> MirrorFetchAcquirer<C> {
    pub fn new(client: C, mirrors: MirrorConfig) -> Self {
        Self { client, mirrors }
    }
}

impl<C: MirrorClient> AcquireStrategy for MirrorFetchAcquirer<C> {
    fn name(&self) -> &str {
        "mirror"
    }

    fn acquire(&self, coords: &RepoCoordinates) -> Result<Option<DocumentSet>, HarvestError> {
        for base in &self.mirrors.bases {
            let listing = MirrorListing {
                base: base.clone(),
                owner: coords.owner.clone(),
                repo: coords.repo.clone(),
                reference: coords.reference.clone(),
                paths: self.mirrors.probe_paths.clone(),
            };

            let answered = self
                .mirrors
                .probe_paths
                .iter()
                .take(PROBES_PER_MIRROR)
                .any(|path| self.client.probe(&listing.document_url(path)));

            if answered {
                return Ok(Some(DocumentSet::MirrorListing(listing)));
            }
        }

        Ok(None)
    }
}
