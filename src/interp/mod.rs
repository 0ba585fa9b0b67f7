//! Template interpolation over `{name[:hint]}` placeholders
//!
//! A template is scanned left to right for placeholder spans. A span is an
//! optional run of backslashes, `{`, a name of `[A-Za-z0-9_]+`, an optional
//! `:` followed by a hint, and `}`. Hints document the expected value for
//! translators and are never part of the output. The backslash run controls
//! escaping:
//!
//! - even count `n` (including zero): emit `n/2` literal backslashes, then
//!   the substitution value, or the placeholder unchanged when no value is
//!   supplied under that name;
//! - odd count `n`: emit `(n-1)/2` literal backslashes, then the placeholder
//!   unchanged (substitution suppressed).
//!
//! Text outside placeholder spans, including malformed spans such as an
//! unterminated `{name`, is copied through verbatim.

mod lexer;
mod values;

pub use values::Values;

use lexer::Segment;
use logos::Logos;

/// Substitute `values` into the placeholders of `template`.
///
/// Pure function; the input is never mutated and lookup misses are not
/// errors. Templates without placeholders come back unchanged.
///
/// # Example
///
/// ```rust
/// use lingo::{interpolate, Values};
///
/// let out = interpolate("'{0:Name}' ready", &Values::positional(["Demo"]));
/// assert_eq!(out, "'Demo' ready");
/// ```
pub fn interpolate(template: &str, values: &Values) -> String {
    if !template.contains('{') {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut lex = Segment::lexer(template);
    while let Some(token) = lex.next() {
        let slice = lex.slice();
        match token {
            Ok(Segment::Placeholder) => expand_placeholder(slice, values, &mut out),
            // Literal text, stray backslashes, and unmatched braces pass
            // through untouched.
            _ => out.push_str(slice),
        }
    }
    out
}

/// Variant of [`interpolate`] for templates that may be absent.
///
/// `None` in, `None` out; an absent template is never treated as an empty
/// one.
pub fn interpolate_opt(template: Option<&str>, values: &Values) -> Option<String> {
    template.map(|t| interpolate(t, values))
}

/// Expand one matched placeholder span into `out`.
///
/// `slice` is the full span including its leading backslash run.
fn expand_placeholder(slice: &str, values: &Values, out: &mut String) {
    let slashes = slice.len() - slice.trim_start_matches('\\').len();
    // From `{` to `}`, hint included.
    let body = &slice[slashes..];
    let name_end = body[1..]
        .find([':', '}'])
        .map(|i| i + 1)
        .unwrap_or(body.len() - 1);
    let name = &body[1..name_end];

    if slashes % 2 == 0 {
        push_backslashes(out, slashes / 2);
        match values.get(name) {
            Some(value) => out.push_str(value),
            // Unknown keys stay visible rather than vanishing.
            None => out.push_str(body),
        }
    } else {
        push_backslashes(out, (slashes - 1) / 2);
        out.push_str(body);
    }
}

fn push_backslashes(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('\\');
    }
}
