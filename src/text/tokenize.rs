use crate::text::normalize::normalize;

/// Split text into canonical word tokens.
///
/// The text is normalized first and then split on the single spaces the
/// normalizer leaves between words. Punctuation stays attached to its word
/// and nothing is dropped, so `"amet."` and `"amet,"` are distinct tokens.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<String> {
    let canonical = normalize(raw);
    if canonical.is_empty() {
        return Vec::new();
    }

    canonical.split(' ').map(str::to_string).collect()
}
