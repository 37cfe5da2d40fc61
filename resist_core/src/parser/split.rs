//! Attribute list splitting

/// Split an attribute list on any of the delimiter glyphs
///
/// Runs of delimiters and surrounding whitespace never yield empty names.
pub fn split_attributes(part: &str, delimiters: &[char]) -> Vec<String> {
    part.split(|c: char| delimiters.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
