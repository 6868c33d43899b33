pub mod acquirer;
pub mod classifier;
pub mod dedup;
pub mod locator;
pub mod merger;
pub mod parser;
pub mod pipeline;

pub use acquirer::acquire_with_fallback;
pub use classifier::{Classification, classify};
pub use dedup::Deduplicator;
pub use locator::locate_documents;
pub use merger::merge_into;
pub use parser::{ParsedDocument, parse_document};
pub use pipeline::HarvestReport;
