//! Greedy word wrapping.

/// Output column limit, prefixes included.
pub const WIDTH: usize = 79;

/// Wrap `text` into lines of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_with(text, width, "", "")
}

/// Wrap `text` with `initial` before the first line and `subsequent`
/// before every other line.
///
/// Words are split on whitespace only and never broken; a word wider than
/// the remaining space goes on its own line even if it overflows. Empty
/// text yields no lines.
pub fn wrap_with(text: &str, width: usize, initial: &str, subsequent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut has_word = false;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !has_word {
            let prefix = if lines.is_empty() { initial } else { subsequent };
            current.push_str(prefix);
            current_len = prefix.chars().count();
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current_len += 1;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(subsequent);
            current_len = subsequent.chars().count();
        }
        current.push_str(word);
        current_len += word_len;
        has_word = true;
    }

    if has_word {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_text_single_line() {
        assert_eq!(wrap("Does foo.", WIDTH), ["Does foo."]);
    }

    #[test]
    fn empty_text_no_lines() {
        assert!(wrap("", WIDTH).is_empty());
        assert!(wrap("   \n ", WIDTH).is_empty());
    }

    #[test]
    fn breaks_greedily() {
        assert_eq!(wrap("aaa bbb ccc ddd", 7), ["aaa bbb", "ccc ddd"]);
        assert_eq!(wrap("aaa bbb ccc ddd", 8), ["aaa bbb", "ccc ddd"]);
        assert_eq!(wrap("aaa bbb ccc ddd", 11), ["aaa bbb ccc", "ddd"]);
    }

    #[test]
    fn never_splits_long_words() {
        assert_eq!(
            wrap("a supercalifragilistic word", 10),
            ["a", "supercalifragilistic", "word"]
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(wrap("  a \t b\n c  ", WIDTH), ["a b c"]);
    }

    #[test]
    fn prefixes_count_toward_width() {
        assert_eq!(
            wrap_with("one two three four", 12, "* x: ", "  "),
            ["* x: one two", "  three four"]
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(wrap("ééé ééé", 7), ["ééé ééé"]);
    }

    #[test]
    fn exact_fit() {
        let text = format!("{} {}", "a".repeat(39), "b".repeat(39));
        assert_eq!(wrap(&text, WIDTH), [text.clone()]);
        let text = format!("{} {}", "a".repeat(39), "b".repeat(40));
        assert_eq!(wrap(&text, WIDTH).len(), 2);
    }

    proptest! {
        #[test]
        fn rewrapping_is_a_noop(words in prop::collection::vec("[a-z`_]{1,12}", 0..60)) {
            let once = wrap(&words.join(" "), WIDTH);
            let twice = wrap(&once.join("\n"), WIDTH);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn lines_fit_unless_single_word(words in prop::collection::vec("[a-zA-Z0-9]{1,90}", 0..40)) {
            for line in wrap(&words.join(" "), WIDTH) {
                prop_assert!(line.chars().count() <= WIDTH || !line.contains(' '));
            }
        }

        #[test]
        fn wrapping_preserves_words(words in prop::collection::vec("[a-z]{1,20}", 0..40)) {
            let lines = wrap(&words.join(" "), WIDTH);
            let rejoined: Vec<String> = lines
                .iter()
                .flat_map(|l| l.split(' ').map(str::to_string))
                .collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
