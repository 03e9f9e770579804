//! Line splitting shared by the tokenizer and the folding computer.

/// Splits a document into lines on `\n`, stripping a trailing `\r` from each
/// line so `\r\n` endings are transparent.
///
/// The split keeps degenerate lines: the empty document is one empty line,
/// and a trailing newline yields a final empty line. Token and fold line
/// indices are indices into this sequence.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn trailing_newline_keeps_the_empty_tail() {
        assert_eq!(split_lines("@ \n"), vec!["@ ", ""]);
    }

    #[test]
    fn crlf_is_transparent() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn lone_carriage_return_is_kept_mid_line() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }
}
