use dioxus::prelude::*;
use divlib_core::{BookRecord, DataLoader, FsFetcher, GalleryRecord, Lightbox, StaffRecord};

use crate::context::{get_data_dir, PosterInflight, SectionNotes};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The site is a single page with anchored sections.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

const CATALOG_LOAD_FAILED: &str = "Не удалось загрузить каталог.";
const STAFF_LOAD_FAILED: &str = "Не удалось загрузить список сотрудников.";

/// Root application component.
///
/// Provides global styles, the shared record sequences, and routing.
/// The three loads are independent and may complete in any order; one
/// failing section never takes the others down with it.
#[component]
pub fn App() -> Element {
    let mut books: Signal<Vec<BookRecord>> = use_signal(Vec::new);
    let mut staff: Signal<Vec<StaffRecord>> = use_signal(Vec::new);
    let mut gallery: Signal<Vec<GalleryRecord>> = use_signal(Vec::new);
    let mut notes: Signal<SectionNotes> = use_signal(SectionNotes::default);
    let lightbox: Signal<Lightbox> = use_signal(Lightbox::new);
    let poster_inflight: Signal<PosterInflight> = use_signal(PosterInflight::default);

    use_context_provider(|| books);
    use_context_provider(|| staff);
    use_context_provider(|| gallery);
    use_context_provider(|| notes);
    use_context_provider(|| lightbox);
    use_context_provider(|| poster_inflight);

    // Fetch all three record kinds on mount
    use_effect(move || {
        spawn(async move {
            let loader = DataLoader::new(FsFetcher::new(get_data_dir()));
            match loader.load_books().await {
                Ok(records) => books.set(records),
                Err(e) => {
                    tracing::error!("Books load error: {}", e);
                    notes.with_mut(|n| n.catalog = Some(CATALOG_LOAD_FAILED.to_string()));
                }
            }
        });

        spawn(async move {
            let loader = DataLoader::new(FsFetcher::new(get_data_dir()));
            match loader.load_staff().await {
                Ok(records) => staff.set(records),
                Err(e) => {
                    tracing::error!("Employees load error: {}", e);
                    notes.with_mut(|n| n.staff = Some(STAFF_LOAD_FAILED.to_string()));
                }
            }
        });

        spawn(async move {
            let loader = DataLoader::new(FsFetcher::new(get_data_dir()));
            match loader.load_gallery().await {
                Ok(records) => gallery.set(records),
                // The gallery shows no note on failure, it just stays empty
                Err(e) => tracing::error!("Photos load error: {}", e),
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
