use crate::domain::{DocumentSet, HarvestError, RepoCoordinates};

/// One named retrieval strategy for obtaining the document subtree.
///
/// Strategies are evaluated in a fixed priority order; the first one that
/// yields a document set wins. `Ok(None)` means the strategy ran but found
/// nothing usable (for example, no mirror answered); errors are treated the
/// same way by the fallback walk and never abort the run.
pub trait AcquireStrategy {
    fn name(&self) -> &str;

    fn acquire(&self, coords: &RepoCoordinates) -> Result<Option<DocumentSet>, HarvestError>;
}
