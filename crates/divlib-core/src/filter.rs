//! Catalog search
//!
//! Case-insensitive substring filtering over title and author. The
//! empty query is a sentinel meaning "no filter": callers render the
//! full sequence, not an empty one.

use crate::types::BookRecord;

/// Filter the catalog by a raw query string.
///
/// Returns `None` when the trimmed query is empty (render the full
/// sequence). Otherwise returns the subsequence of records whose title
/// or author contains the query, case-insensitively, preserving the
/// original order. No ranking.
pub fn filter_books(query: &str, books: &[BookRecord]) -> Option<Vec<BookRecord>> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    Some(
        books
            .iter()
            .filter(|book| field_contains(&book.title, &q) || field_contains(&book.author, &q))
            .cloned()
            .collect(),
    )
}

fn field_contains(field: &Option<String>, query: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|text| text.to_lowercase().contains(query))
}
