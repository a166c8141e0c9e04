//! Source scanner — finds documentation comments and the declarations
//! that follow them.
//!
//! A documentation comment opens with `/**` followed by whitespace, so
//! banner comments like `/*****...` are skipped. Each comment binds to the
//! nearest following text up to and including a `;`.

use crate::error::{Error, Result};
use crate::model::RawPair;
use regex::{CaptureMatches, Captures, Regex};
use std::sync::LazyLock;

static RE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(/\*\*\s.*?\*/)([^;]*?;)").unwrap());

/// Any shouting constant: `FOO_BAR`, `W65C02S_LINK`, `X_1`.
static RE_CONSTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)+\b").unwrap());

/// Scans header text for documented declarations.
#[derive(Debug, Clone)]
pub struct Scanner {
    constants: Regex,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            constants: RE_CONSTANT.clone(),
        }
    }
}

impl Scanner {
    /// Build a scanner. With a prefix, only constants named `PREFIX_...`
    /// are highlighted as code.
    pub fn new(constant_prefix: Option<&str>) -> Result<Self> {
        let Some(prefix) = constant_prefix else {
            return Ok(Self::default());
        };
        let pattern = format!(r"\b{}_[A-Z0-9_]+\b", regex::escape(prefix));
        let constants = Regex::new(&pattern).map_err(|source| Error::ConstantPrefix {
            prefix: prefix.to_string(),
            source,
        })?;
        Ok(Self { constants })
    }

    /// Lazily yield comment/declaration pairs in source order.
    pub fn scan<'s, 'a>(&'s self, source: &'a str) -> Pairs<'s, 'a> {
        Pairs {
            scanner: self,
            source,
            matches: RE_PAIR.captures_iter(source),
            index: 0,
            offset: 0,
            line: 1,
        }
    }

    /// Wrap every shouting constant in backticks, leaving ones the author
    /// already wrote as code spans alone.
    pub fn highlight_constants(&self, comment: &str) -> String {
        self.constants
            .replace_all(comment, |caps: &Captures| {
                let quoted = caps.get(0).is_some_and(|m| {
                    comment[..m.start()].ends_with('`') && comment[m.end()..].starts_with('`')
                });
                if quoted {
                    caps[0].to_string()
                } else {
                    format!("`{}`", &caps[0])
                }
            })
            .into_owned()
    }
}

/// Iterator returned by [`Scanner::scan`].
pub struct Pairs<'s, 'a> {
    scanner: &'s Scanner,
    source: &'a str,
    matches: CaptureMatches<'static, 'a>,
    index: usize,
    // Line counting resumes from the previous match instead of rescanning.
    offset: usize,
    line: usize,
}

impl Iterator for Pairs<'_, '_> {
    type Item = RawPair;

    fn next(&mut self) -> Option<RawPair> {
        let caps = self.matches.next()?;
        let comment = caps.get(1)?;

        self.line += self.source[self.offset..comment.start()]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.offset = comment.start();
        self.index += 1;

        Some(RawPair {
            index: self.index,
            line: self.line,
            comment: self.scanner.highlight_constants(comment.as_str()),
            signature: caps[2].to_string(),
        })
    }
}
