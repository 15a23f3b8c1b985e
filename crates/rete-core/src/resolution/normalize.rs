//! Field normalization for author comparison

use unicode_normalization::UnicodeNormalization;

/// Not-a-value tokens used by IRIS exports, compared case-insensitively
pub const DEFAULT_NA_TOKENS: &[&str] = &["n.d.", "n.d", "nd", "n.a.", "n.a", "na"];

/// Normalize a raw author field into a comparison-ready form.
///
/// Trims whitespace, lowercases, and folds accented characters to ASCII;
/// blank values and values in the not-a-value token set become `None`.
/// Unknown text passes through unchanged beyond those steps.
/// Total: never fails.
pub fn normalize_field(raw: &str, na_tokens: &[&str]) -> Option<String> {
    let value = fold_diacritics(&raw.trim().to_lowercase());

    if value.is_empty() {
        return None;
    }
    if na_tokens.iter().any(|token| token.to_lowercase() == value) {
        return None;
    }

    Some(value)
}

/// Fold accented characters to ASCII so "müller" and "muller" compare equal
pub(crate) fn fold_diacritics(value: &str) -> String {
    value.nfkd().filter(char::is_ascii).collect()
}

/// Normalize an optional raw field; absent fields stay `None`
pub fn normalize_opt(raw: Option<&str>, na_tokens: &[&str]) -> Option<String> {
    raw.and_then(|value| normalize_field(value, na_tokens))
}
