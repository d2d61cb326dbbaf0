//! Catalog Card Component

use dioxus::prelude::*;
use divlib_core::BookCardView;

/// One book in the catalog grid.
///
/// Missing fields render as empty elements so the grid layout stays
/// stable across records.
#[component]
pub fn BookCard(view: BookCardView) -> Element {
    rsx! {
        article {
            class: "book-card",
            "data-title": "{view.title}",
            "data-author": "{view.author}",

            h3 { "{view.title}" }
            p { class: "author", "{view.author}" }
            p { class: "desc", "{view.desc}" }
        }
    }
}
