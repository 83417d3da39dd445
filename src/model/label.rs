//! Label character classes, the sentinel label, and quoting.
//!
//! Plain labels consist of alphanumeric characters, `_` and `-` and are
//! written bare in tree notation. Any other non-empty label is written in
//! single quotes, without escaping, so it must not contain a single quote
//! itself.

/// Label substituted for an empty label.
pub const SENTINEL_LABEL: &str = "_";

/// Delimiter of quoted labels.
pub const QUOTE: char = '\'';

/// Checks whether a character may appear in an unquoted label.
///
/// # Examples
/// ```
/// # use treemaker::model::label::is_label_char;
/// assert!(is_label_char('a'));
/// assert!(is_label_char('7'));
/// assert!(is_label_char('_'));
/// assert!(is_label_char('-'));
/// assert!(!is_label_char(' '));
/// assert!(!is_label_char('('));
/// ```
#[inline]
pub fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Checks whether a label can be written without quotes.
///
/// # Examples
/// ```
/// # use treemaker::model::label::is_plain;
/// assert!(is_plain("Kereru"));
/// assert!(is_plain("A1-b_2"));
/// assert!(!is_plain("New Zealand pigeon"));
/// assert!(!is_plain(""));
/// ```
pub fn is_plain(label: &str) -> bool {
    !label.is_empty() && label.chars().all(is_label_char)
}

/// Replaces an empty label with [SENTINEL_LABEL].
///
/// # Examples
/// ```
/// # use treemaker::model::label::normalize_label;
/// assert_eq!(normalize_label(""), "_");
/// assert_eq!(normalize_label("Takahe"), "Takahe");
/// ```
pub fn normalize_label(label: &str) -> String {
    if label.is_empty() {
        SENTINEL_LABEL.to_string()
    } else {
        label.to_string()
    }
}

/// Writes a label the way it appears in tree notation:
/// bare if it is plain, otherwise wrapped in single quotes.
///
/// # Examples
/// ```
/// # use treemaker::model::label::quote_label;
/// assert_eq!(quote_label("Pukeko"), "Pukeko");
/// assert_eq!(quote_label("Swamp hen"), "'Swamp hen'");
/// assert_eq!(quote_label("Pu(ke)ko"), "'Pu(ke)ko'");
/// ```
pub fn quote_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 2);
    push_label(&mut out, label);
    out
}

/// Appends a label in its tree notation form to `out`.
pub(crate) fn push_label(out: &mut String, label: &str) {
    if is_plain(label) {
        out.push_str(label);
    } else {
        out.push(QUOTE);
        out.push_str(label);
        out.push(QUOTE);
    }
}
