//! Data model for extracted documentation — format-agnostic.

/// One documentation comment together with the declaration it precedes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    /// 1-based position in scan order
    pub index: usize,
    /// 1-based source line where the comment opens
    pub line: usize,
    /// `/** ... */` block, with shouting constants already wrapped in backticks
    pub comment: String,
    /// Declaration text up to and including its terminating `;`
    pub signature: String,
}

/// A single documented declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub name: String,
    pub brief: String,
    /// Free-form prose, one paragraph per line
    pub description: String,
    /// `[Parameter: name]` tags in order of appearance, duplicates kept
    pub parameters: Vec<Parameter>,
    /// `[Return value]` tag; a later tag replaces an earlier one
    pub return_value: Option<String>,
}

/// Parsed `[Parameter: name]` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub description: String,
}

impl DocEntry {
    /// Paragraphs of the description, skipping empty lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description
            .lines()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_skip_blank_lines() {
        let entry = DocEntry {
            description: "First.\n\n  Second. \n".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.paragraphs().collect::<Vec<_>>(), ["First.", "Second."]);
    }

    #[test]
    fn paragraphs_empty_description() {
        let entry = DocEntry::default();
        assert_eq!(entry.paragraphs().count(), 0);
    }
}
