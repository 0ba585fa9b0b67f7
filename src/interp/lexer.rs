//! Lexer for placeholder spans in template strings using logos

use logos::Logos;

/// Segment classes of a template string.
///
/// A placeholder span includes the run of backslashes directly in front of
/// its opening brace, so the escape rule can be decided from the matched
/// slice alone. The hint part excludes `}` and line breaks, which makes the
/// match stop at the first closing brace on the same line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `{name}` or `{name:hint}`, with any number of leading backslashes
    #[regex(r"\\*\{[A-Za-z0-9_]+(:[^}\n]*)?\}", priority = 3)]
    Placeholder,

    /// A run of backslashes not attached to a placeholder
    #[regex(r"\\+")]
    Backslashes,

    /// A `{` that does not open a well-formed placeholder
    #[token("{")]
    OpenBrace,

    /// Anything else, copied through verbatim
    #[regex(r"[^\\{]+")]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(input: &str) -> Vec<(Segment, &str)> {
        let mut lex = Segment::lexer(input);
        let mut out = Vec::new();
        while let Some(token) = lex.next() {
            out.push((token.expect("all inputs tokenize"), lex.slice()));
        }
        out
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        assert_eq!(segments("hello world"), vec![(Segment::Text, "hello world")]);
    }

    #[test]
    fn test_placeholder_with_leading_backslashes() {
        assert_eq!(
            segments(r"a\\{0}b"),
            vec![
                (Segment::Text, "a"),
                (Segment::Placeholder, r"\\{0}"),
                (Segment::Text, "b"),
            ]
        );
    }

    #[test]
    fn test_unterminated_placeholder_splits_into_literals() {
        assert_eq!(
            segments("{name"),
            vec![(Segment::OpenBrace, "{"), (Segment::Text, "name")]
        );
    }

    #[test]
    fn test_hint_stops_at_first_closing_brace() {
        assert_eq!(
            segments("{0:hint}rest}"),
            vec![
                (Segment::Placeholder, "{0:hint}"),
                (Segment::Text, "rest}"),
            ]
        );
    }

    #[test]
    fn test_lone_backslashes_are_literal() {
        assert_eq!(segments(r"a\\b"), vec![
            (Segment::Text, "a"),
            (Segment::Backslashes, r"\\"),
            (Segment::Text, "b"),
        ]);
    }

    #[test]
    fn test_hint_may_not_span_lines() {
        assert_eq!(
            segments("{0:a\nb}"),
            vec![
                (Segment::OpenBrace, "{"),
                (Segment::Text, "0:a\nb}"),
            ]
        );
    }
}
