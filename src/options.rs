//! Generation options.

/// Settings for a single generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Header name shown in the preamble's `#include` line
    pub include: String,
    /// Language tag for code fences
    pub lang: String,
    /// Only highlight constants named `PREFIX_...`; `None` highlights any
    /// shouting constant
    pub constant_prefix: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include: "header.h".to_string(),
            lang: "c".to_string(),
            constant_prefix: None,
        }
    }
}
