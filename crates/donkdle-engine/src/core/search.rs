use crate::Location;

/// Maximum number of suggestions returned by [`Catalog::search`](crate::Catalog::search).
pub const MAX_HITS: usize = 15;

/// Queries shorter than this (in characters) produce no suggestions.
pub const MIN_QUERY_LEN: usize = 2;

const EXACT_WORD_SCORE: f64 = 50.0;
const WORD_PREFIX_SCORE: f64 = 30.0;
const SUBSTRING_SCORE: f64 = 10.0;
const NAME_PREFIX_BONUS: f64 = 100.0;

/// A location whose name matched a search query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub location: &'a Location,
    pub score: f64,
}

/// Ranks `locations` against a free-text query.
///
/// The query is lowercased and split on spaces. Each term must match the name
/// as a whole word, a word prefix, or a substring (in decreasing score order).
/// Names starting with the first term get a bonus, and shorter names rank
/// slightly higher. Ties keep catalog order.
pub(crate) fn rank<'a>(locations: &'a [Location], query: &str, limit: usize) -> Vec<SearchHit<'a>> {
    if query.chars().count() < MIN_QUERY_LEN {
        return vec![];
    }
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split(' ').filter(|t| !t.is_empty()).collect();
    if terms.is_empty() {
        return vec![];
    }

    let mut hits: Vec<_> = locations
        .iter()
        .filter_map(|location| {
            let score = score_name(location.name(), &terms)?;
            Some(SearchHit { location, score })
        })
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(limit);
    hits
}

#[expect(clippy::cast_precision_loss)]
fn score_name(name: &str, terms: &[&str]) -> Option<f64> {
    let name = name.to_lowercase();
    let words: Vec<&str> = name.split(' ').collect();

    let mut score = 0.0;
    for term in terms {
        score += if words.contains(term) {
            EXACT_WORD_SCORE
        } else if words.iter().any(|word| word.starts_with(term)) {
            WORD_PREFIX_SCORE
        } else if name.contains(term) {
            SUBSTRING_SCORE
        } else {
            return None;
        };
    }

    if name.starts_with(terms[0]) {
        score += NAME_PREFIX_BONUS;
    }
    score += (100.0 - name.chars().count() as f64) / 10.0;
    Some(score)
}
