//! Parser module — comment normalization and tag extraction.

pub mod normalize;
pub mod tags;

use crate::error::{Error, Result};
use crate::model::{DocEntry, RawPair};
use tracing::trace;

pub use normalize::normalize;
pub use tags::parse_entry;

/// Parse one scanned comment into an entry, attributing any failure to
/// the pair's position in the source.
pub fn parse_pair(pair: &RawPair) -> Result<DocEntry> {
    normalize(&pair.comment)
        .and_then(|text| {
            trace!(index = pair.index, normalized = %text, "normalized comment");
            parse_entry(&text)
        })
        .map_err(|source| Error::Entry {
            index: pair.index,
            line: pair.line,
            source,
        })
}
