//! Text normalization for identity comparison

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize raw text for comparison
///
/// - Applies canonical Unicode decomposition (NFKD)
/// - Drops combining marks, folding accented letters to their base letter
/// - Trims surrounding whitespace
/// - Converts to lowercase
///
/// Never fails: an empty string normalizes to an empty string.
pub fn normalize(raw: &str) -> String {
    raw.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// True for the delimiters that separate name tokens
fn is_token_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '_' | '-' | '\\')
}

/// Split a raw name into normalized tokens
///
/// Tokens are split on runs of whitespace, period, underscore, hyphen,
/// or backslash. Order is preserved: first token is the given name and
/// the last token is the surname by convention.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(is_token_delimiter)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the surname (last token) from a raw name
///
/// Returns an empty string when the name has no tokens.
pub fn surname(raw: &str) -> String {
    tokenize(raw).into_iter().last().unwrap_or_default()
}

/// Extract the given name (first token) from a raw name
pub fn first_name(raw: &str) -> String {
    tokenize(raw).into_iter().next().unwrap_or_default()
}

/// First character of a name part, when the part is long enough to have
/// a meaningful initial
///
/// A single-letter part has no initial distinct from itself, so this
/// returns `None` unless the part is at least two characters long.
pub fn initial(part: &str) -> Option<char> {
    if part.chars().count() > 1 {
        part.chars().next()
    } else {
        None
    }
}
