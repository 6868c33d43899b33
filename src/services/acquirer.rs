use crate::domain::{DocumentSet, RepoCoordinates};
use crate::ports::AcquireStrategy;

/// Walk the configured strategies in priority order and return the first
/// document set obtained, together with the winning strategy's name.
///
/// A strategy that errors or comes back empty falls through to the next one;
/// exhausting the list is the "no source" outcome, not an error.
pub fn acquire_with_fallback(
    strategies: &[Box<dyn AcquireStrategy>],
    coords: &RepoCoordinates,
) -> Option<(String, DocumentSet)> {
    for strategy in strategies {
        match strategy.acquire(coords) {
            Ok(Some(set)) => return Some((strategy.name().to_string(), set)),
            Ok(None) | Err(_) => continue,
        }
    }
    None
}
