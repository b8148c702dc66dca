//! Word counting over visible text.

/// Count whitespace-delimited words.
///
/// Tokens are runs of non-whitespace; there is no punctuation stripping
/// and no locale awareness. Deterministic for identical input.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
