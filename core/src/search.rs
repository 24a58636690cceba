//! Local, case-insensitive search over the cached item list.

use crate::types::Item;

/// Result of the most recent explicit search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No search ran, or the query was blank. Nothing is shown.
    #[default]
    Cleared,
    /// Matching items in list order. Never empty.
    Matches(Vec<Item>),
    /// A non-blank query matched nothing; the view shows a notice.
    NoMatches,
}

impl SearchOutcome {
    pub fn results(&self) -> &[Item] {
        match self {
            SearchOutcome::Matches(items) => items,
            SearchOutcome::Cleared | SearchOutcome::NoMatches => &[],
        }
    }

    pub fn shows_no_match_notice(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

/// Filter `items` by `query` against id, name and description.
///
/// A blank query clears the outcome. The query is lower-cased but not
/// trimmed, so surrounding spaces take part in matching.
pub fn search(items: &[Item], query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::Cleared;
    }
    let needle = query.to_lowercase();
    let hits: Vec<Item> = items
        .iter()
        .filter(|item| item.contains_lowercase(&needle))
        .cloned()
        .collect();
    if hits.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(hits)
    }
}
