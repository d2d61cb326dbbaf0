//! Property-based tests for the catalog filter
//!
//! Uses proptest to verify the filter's subsequence and
//! case-insensitivity guarantees over arbitrary catalogs.

use proptest::prelude::*;

use divlib_core::{filter_books, BookRecord};

fn text_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[а-яa-z0-9 ]{0,16}").expect("valid regex"))
}

fn book_strategy() -> impl Strategy<Value = BookRecord> {
    (text_strategy(), text_strategy()).prop_map(|(title, author)| BookRecord {
        title,
        author,
        desc: None,
    })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<BookRecord>> {
    prop::collection::vec(book_strategy(), 0..24)
}

/// `needle` appears in `haystack` in order (not necessarily contiguous)
fn is_subsequence(needle: &[BookRecord], haystack: &[BookRecord]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|item| rest.any(|candidate| candidate == item))
}

proptest! {
    /// Filtering returns an order-preserving subsequence of the catalog
    #[test]
    fn filter_is_order_preserving_subsequence(
        catalog in catalog_strategy(),
        query in "[а-яa-z0-9]{1,6}",
    ) {
        if let Some(hits) = filter_books(&query, &catalog) {
            prop_assert!(hits.len() <= catalog.len());
            prop_assert!(is_subsequence(&hits, &catalog));
        }
    }

    /// A blank query is always the "no filter" sentinel
    #[test]
    fn blank_query_is_no_filter(catalog in catalog_strategy(), pad in "[ \t]{0,4}") {
        prop_assert_eq!(filter_books(&pad, &catalog), None);
    }

    /// Every hit really contains the query in title or author
    #[test]
    fn hits_contain_query(
        catalog in catalog_strategy(),
        query in "[а-яa-z0-9]{1,6}",
    ) {
        let q = query.to_lowercase();
        for hit in filter_books(&query, &catalog).unwrap_or_default() {
            let title = hit.title.as_deref().unwrap_or_default().to_lowercase();
            let author = hit.author.as_deref().unwrap_or_default().to_lowercase();
            prop_assert!(title.contains(&q) || author.contains(&q));
        }
    }

    /// The query's letter case never changes the result
    #[test]
    fn filter_is_case_insensitive(
        catalog in catalog_strategy(),
        query in "[а-яa-z]{1,6}",
    ) {
        let lower = filter_books(&query, &catalog);
        let upper = filter_books(&query.to_uppercase(), &catalog);
        prop_assert_eq!(lower, upper);
    }
}
