//! Markdown renderer for a single documented declaration.

use crate::model::DocEntry;
use crate::render::wrap::{wrap, wrap_with, WIDTH};

const CONTINUATION: &str = "  ";

/// Render one entry and its declaration as a Markdown section.
///
/// ````text
/// ## name
/// brief, wrapped
///
/// ```c
/// signature;
/// ```
///
/// description paragraph, wrapped
///
/// * **Parameter** `x`: what x is
/// * **Return value**: what comes back
///
/// ````
pub fn render_entry(entry: &DocEntry, signature: &str, lang: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}", entry.name));
    lines.extend(wrap(&entry.brief, WIDTH));
    lines.push(String::new());

    lines.push(format!("```{}", lang));
    lines.push(signature.trim().to_string());
    lines.push("```".to_string());
    lines.push(String::new());

    for paragraph in entry.paragraphs() {
        lines.extend(wrap(paragraph, WIDTH));
        lines.push(String::new());
    }

    for param in &entry.parameters {
        let prefix = format!("* **Parameter** `{}`: ", param.name);
        lines.extend(bullet(&prefix, &param.description));
    }

    // Empty `[Return value]` tags render nothing.
    if let Some(value) = entry.return_value.as_deref().filter(|v| !v.is_empty()) {
        lines.extend(bullet("* **Return value**: ", value));
    }

    lines.push(String::new());

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// A wrapped bullet; the prefix is kept even when there is no text.
fn bullet(prefix: &str, text: &str) -> Vec<String> {
    let lines = wrap_with(text, WIDTH, prefix, CONTINUATION);
    if lines.is_empty() {
        vec![prefix.trim_end().to_string()]
    } else {
        lines
    }
}
