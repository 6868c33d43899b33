use crate::domain::HarvestError;

/// Raw-content HTTP access used by the mirror strategy and by per-document
/// reads from a mirror listing.
pub trait MirrorClient {
    /// Lightweight existence probe (HEAD). `false` covers both negative
    /// answers and transport errors; probing never propagates a failure.
    fn probe(&self, url: &str) -> bool;

    /// Fetch one document body.
    fn fetch(&self, url: &str) -> Result<String, HarvestError>;
}
