/// Splits on runs of whitespace and lowercases each token.
/// No stemming, stop words or punctuation stripping: `"Disk,"` stays `"disk,"`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
