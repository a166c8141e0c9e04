//! Error types for documentation extraction.

use thiserror::Error;

/// A fault in a single documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The block is not framed by `/**` and `*/`. The scanner only yields
    /// framed blocks, so this points at a scanner bug.
    #[error("malformed comment block: {0}")]
    MalformedCommentBlock(&'static str),

    #[error("degenerate comment body: expected a name line followed by a brief line")]
    DegenerateCommentBody,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("entry #{index} at line {line}")]
    Entry {
        index: usize,
        line: usize,
        #[source]
        source: EntryError,
    },

    #[error("invalid constant prefix `{prefix}`")]
    ConstantPrefix {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
