/// Chooses the indefinite article for a noun.
///
/// Only the first letter is considered: nouns starting with a vowel `a, e, i, o, u`
/// (any case) take "an", everything else, including an empty noun, takes "a".
///
/// # Arguments
/// - `noun` - Word the article precedes
///
/// # Returns
/// - `"an"` or `"a"`
pub fn indefinite_article(noun: &str) -> &'static str {
    match noun.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
