//! Renderer module — Markdown sections behind a fixed preamble.

pub mod markdown;
pub mod wrap;

pub use markdown::render_entry;

/// Opening block of every generated document: a code fence showing how to
/// include the documented header.
pub fn preamble(include: &str, lang: &str) -> String {
    format!("```{}\n#include \"{}\"\n```\n\n", lang, include)
}
