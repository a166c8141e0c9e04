//! Comment normalizer — strips delimiters and decoration, then reflows
//! wrapped prose so that the only remaining line breaks are semantic.

use crate::error::EntryError;
use regex::Regex;
use std::sync::LazyLock;

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

/// Leading decoration: indentation, one `*` marker, up to two blanks.
static RE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:\*[ \t]{0,2})?").unwrap());

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Normalize a raw `/** ... */` block into logical lines.
///
/// The first line (the name) always stands alone. After it, a line break
/// is kept only before a blank line or a `[tag]` line; every other break
/// was a wrap and becomes a single space.
pub fn normalize(block: &str) -> Result<String, EntryError> {
    let body = block
        .trim()
        .strip_prefix(OPEN)
        .ok_or(EntryError::MalformedCommentBlock("missing `/**` opening"))?
        .trim_start()
        .strip_suffix(CLOSE)
        .ok_or(EntryError::MalformedCommentBlock("missing `*/` closing"))?;

    let lines: Vec<&str> = body
        .lines()
        .map(|line| &line[RE_DECORATION.find(line).map_or(0, |m| m.end())..])
        .collect();

    let reflowed = reflow(&lines);
    let collapsed = RE_SPACES.replace_all(&reflowed, " ");

    Ok(collapsed
        .lines()
        .map(|line| line.trim_start_matches(' '))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn reflow(lines: &[&str]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(if i == 1 || is_hard_break(line) { '\n' } else { ' ' });
        }
        out.push_str(line);
    }
    out
}

/// A break before this line survives reflowing.
fn is_hard_break(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with('[')
}
