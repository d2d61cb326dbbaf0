//! The library's single page: catalog, staff, gallery and contacts.

use dioxus::prelude::*;
use divlib_core::{filter_books, BookCardView, BookRecord, StaffRecord};

use crate::components::cards::{BookCard, StaffCard};
use crate::components::gallery::{LightboxOverlay, PhotoGrid};
use crate::components::{ContactForm, SearchBar, StaffModal};
use crate::context::{use_books, use_notes, use_staff};

/// Home page component.
///
/// Holds the filtered catalog view (`None` means "show everything")
/// and the staff member currently opened in the detail modal.
#[component]
pub fn Home() -> Element {
    let books = use_books();
    let staff = use_staff();
    let notes = use_notes();

    // Filtering produces a new sequence; the source stays untouched
    let mut filtered: Signal<Option<Vec<BookRecord>>> = use_signal(|| None);
    let mut staff_detail: Signal<Option<StaffRecord>> = use_signal(|| None);

    let shown_books = filtered().unwrap_or_else(|| books());
    let notes_now = notes();
    let staff_records = staff();

    rsx! {
        main { class: "site",
            header { class: "site-header",
                h1 { "Дивенская библиотека" }
                p { class: "tagline", "Книги, люди и события нашей библиотеки" }
            }

            section { class: "section", id: "catalog",
                h2 { "Каталог" }
                SearchBar {
                    on_search: move |query: String| filtered.set(filter_books(&query, &books())),
                }
                if let Some(note) = notes_now.catalog.clone() {
                    p { class: "section-note", id: "catalogNote", "{note}" }
                }
                div { class: "books-grid", id: "booksGrid",
                    for (i, view) in shown_books.iter().map(BookCardView::from_record).enumerate() {
                        BookCard { key: "{i}", view: view }
                    }
                }
            }

            section { class: "section", id: "staff",
                h2 { "Сотрудники" }
                if let Some(note) = notes_now.staff.clone() {
                    p { class: "section-note", "{note}" }
                }
                div { class: "staff-grid", id: "staffGrid",
                    for (i, record) in staff_records.iter().enumerate() {
                        StaffCard {
                            key: "{i}",
                            record: record.clone(),
                            on_details: move |r| staff_detail.set(Some(r)),
                        }
                    }
                }
            }

            section { class: "section", id: "gallery",
                h2 { "Фотогалерея" }
                PhotoGrid {}
            }

            section { class: "section", id: "contacts",
                h2 { "Обратная связь" }
                ContactForm {}
            }
        }

        if let Some(record) = staff_detail() {
            StaffModal {
                record: record,
                on_close: move |_| staff_detail.set(None),
            }
        }

        LightboxOverlay {}
    }
}
