//! Free-text search predicate.
//!
//! Case-insensitive substring over the entity's descriptive fields and tag
//! collection. Substring only; no tokenization, no fuzzy matching.

/// True when `needle` is empty, or its lowercase form appears in any of
/// `fields` or any entry of `tags` (both lowercased).
pub fn search_matches<'a, I>(needle: &str, fields: I, tags: &[String]) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if needle.is_empty() {
        return true;
    }
    let q = needle.to_lowercase();
    fields.into_iter().any(|f| f.to_lowercase().contains(&q))
        || tags.iter().any(|t| t.to_lowercase().contains(&q))
}
