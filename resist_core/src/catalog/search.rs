//! Fuzzy creature name lookup

use super::CreatureCatalog;

/// Number of suggestions returned when the caller has no preference
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Fold hiragana to katakana and full-width ASCII to half-width, lowercased
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
            'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sort key: exact matches, then prefix matches, then shorter names
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Rank<'a> {
    not_exact_normalized: bool,
    not_exact_raw: bool,
    not_prefix_normalized: bool,
    not_prefix_raw: bool,
    length: usize,
    name: &'a str,
}

impl CreatureCatalog {
    /// Names matching a partial query, best match first
    ///
    /// Matches the normalized name, the lowercased raw name, or the family.
    /// An empty query lists the first `limit` names.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim();
        if query.is_empty() {
            return self.names().take(limit).collect();
        }

        let normalized_query = normalize_name(query);
        let lower_query = query.to_lowercase();

        let mut ranked: Vec<Rank<'_>> = self
            .iter()
            .filter_map(|(name, creature)| {
                let normalized = normalize_name(name);
                let lower = name.to_lowercase();
                let family_hit = creature
                    .family
                    .as_deref()
                    .is_some_and(|f| f.contains(query));

                if !normalized.contains(&normalized_query)
                    && !lower.contains(&lower_query)
                    && !family_hit
                {
                    return None;
                }

                Some(Rank {
                    not_exact_normalized: normalized != normalized_query,
                    not_exact_raw: lower != lower_query,
                    not_prefix_normalized: !normalized.starts_with(&normalized_query),
                    not_prefix_raw: !lower.starts_with(&lower_query),
                    length: name.chars().count(),
                    name,
                })
            })
            .collect();

        ranked.sort();
        ranked.into_iter().take(limit).map(|r| r.name).collect()
    }
}
