// Text Utilities
// Greedy word wrapping for panel content

/// Wrap text to the given width, breaking on whitespace
/// Explicit newlines are preserved; a word longer than the width gets its
/// own line rather than being split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;

        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();

            if current_len == 0 {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Wrap text with a hanging indent: the first line gets `first` as prefix,
/// continuation lines get spaces of the same width
pub fn wrap_indented(text: &str, width: usize, first: &str) -> Vec<String> {
    let prefix_len = first.chars().count();
    let inner_width = width.saturating_sub(prefix_len).max(1);
    let continuation: String = " ".repeat(prefix_len);

    wrap_text(text, inner_width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}{}", first, line)
            } else {
                format!("{}{}", continuation, line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        assert_eq!(wrap_text("first\n\nsecond", 20), vec!["first", "", "second"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        assert_eq!(
            wrap_text("a supercalifragilistic b", 10),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_wrap_indented() {
        assert_eq!(
            wrap_indented("alpha beta gamma", 10, "- "),
            vec!["- alpha", "  beta", "  gamma"]
        );
    }
}
