use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII whitespace only; a no-break space stays inside its token.
    static ref WHITESPACE: Regex = Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("valid regex");
}

fn is_trailing_keep(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// Normalize one raw whitespace-delimited token into a term.
///
/// Lowercases, strips trailing characters that are neither ASCII letters nor `'`,
/// then strips leading characters that are not ASCII letters. The trailing strip
/// runs first. A token made only of digits or punctuation normalizes to `""`,
/// which is kept as a real term.
pub fn normalize_token(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .trim_end_matches(|c: char| !is_trailing_keep(c))
        .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
        .to_string()
}

/// Split `text` on runs of ASCII whitespace.
///
/// Leading whitespace yields an empty first token; trailing whitespace yields
/// nothing. Text without any whitespace, including `""`, is a single token.
pub fn split_tokens(text: &str) -> Vec<&str> {
    if !WHITESPACE.is_match(text) {
        return vec![text];
    }
    let mut tokens: Vec<&str> = WHITESPACE.split(text).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Split text on runs of whitespace and normalize every token, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    split_tokens(text).into_iter().map(normalize_token).collect()
}
