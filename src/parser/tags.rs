//! Tag parser — turns normalized comment text into a [`DocEntry`].
//!
//! Line 1 is the name, line 2 the brief. Every later line is either a
//! `[Label] content` tag or a paragraph of the description:
//!
//! ```text
//! [Parameter: cpu] The CPU instance
//! [Return value] The number of cycles run
//! ```

use crate::error::EntryError;
use crate::model::{DocEntry, Parameter};
use tracing::debug;

const PARAMETER: &str = "Parameter";
const RETURN_VALUE: &str = "Return value";

/// Classified logical line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Parameter { name: &'a str, description: &'a str },
    ReturnValue(&'a str),
    UnknownTag(&'a str),
    Prose(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let Some((label, content)) = line
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
    else {
        return Line::Prose(line);
    };

    let label = label.trim();
    let content = content.trim();
    match label.split_once(':') {
        Some((kind, name)) if kind.trim() == PARAMETER && !name.trim().is_empty() => {
            Line::Parameter {
                name: name.trim(),
                description: content,
            }
        }
        _ if label == RETURN_VALUE => Line::ReturnValue(content),
        _ => Line::UnknownTag(label),
    }
}

/// Parse normalized comment text into a documentation entry.
///
/// Parameters accumulate in order, duplicates included. A second
/// `[Return value]` replaces the first; only one slot exists for it.
pub fn parse_entry(text: &str) -> Result<DocEntry, EntryError> {
    let mut lines = text.lines();
    let mut next_usable = || {
        lines
            .by_ref()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or(EntryError::DegenerateCommentBody)
    };
    let name = next_usable()?.to_string();
    let brief = next_usable()?.to_string();

    let mut description = String::new();
    let mut parameters = Vec::new();
    let mut return_value = None;

    for line in lines {
        match classify(line) {
            Line::Parameter {
                name: param,
                description: text,
            } => parameters.push(Parameter {
                name: param.to_string(),
                description: text.to_string(),
            }),
            Line::ReturnValue(value) => return_value = Some(value.to_string()),
            Line::UnknownTag(label) => debug!(label, "ignoring unknown tag"),
            Line::Prose(text) => {
                description.push_str(text);
                description.push('\n');
            }
        }
    }

    description.truncate(description.trim_end().len());

    Ok(DocEntry {
        name,
        brief,
        description,
        parameters,
        return_value,
    })
}
