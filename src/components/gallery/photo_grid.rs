//! Gallery Grid Component
//!
//! Renders the full gallery sequence as cards and owns the lazy-load
//! wiring: cards are replaced wholesale on every data change, so the
//! pending-source watches are discarded and rebuilt each pass. The
//! viewport watching runs in the webview as an IntersectionObserver
//! with the trigger margin from the core; environments without the
//! observer API fall back to eager loading.

use std::collections::HashMap;

use dioxus::document;
use dioxus::prelude::*;
use divlib_core::{GalleryCardView, LazyLoader, LAZY_MARGIN_PX};

use crate::components::cards::PhotoCard;
use crate::context::{use_gallery, use_lightbox, use_poster_inflight};
use crate::poster_source::{pending_posters, spawn_poster};

/// The photo/video grid with lazy thumbnails.
#[component]
pub fn PhotoGrid() -> Element {
    let gallery = use_gallery();
    let mut lightbox = use_lightbox();
    let poster_inflight = use_poster_inflight();

    let mut loader: Signal<LazyLoader> = use_signal(LazyLoader::new);
    let mut loaded: Signal<HashMap<usize, String>> = use_signal(HashMap::new);

    // Rebuild watches and kick off poster generation after every
    // wholesale card replacement
    use_effect(move || {
        let records = gallery();
        let sources: Vec<(usize, String)> = records
            .iter()
            .enumerate()
            .map(|(i, record)| (i, GalleryCardView::from_record(record, i).pending_src))
            .collect();

        let applied = loader.write().rebuild(sources);
        let mut visible = HashMap::new();
        visible.extend(applied);
        loaded.set(visible);

        for index in pending_posters(&records, &poster_inflight.peek().0) {
            spawn_poster(gallery, poster_inflight, index);
        }

        spawn(async move {
            let mut eval = document::eval(&observer_js());
            while let Ok(index) = eval.recv::<usize>().await {
                if let Some(src) = loader.write().enter(index) {
                    loaded.write().insert(index, src);
                }
            }
        });
    });

    let records = gallery();
    let len = records.len();
    let applied = loaded();

    rsx! {
        div { class: "photos-grid", id: "photosGrid",
            for (index, record) in records.iter().enumerate() {
                {
                    let view = GalleryCardView::from_record(record, index);
                    let display_src = applied
                        .get(&index)
                        .cloned()
                        .unwrap_or_else(|| divlib_core::cards::CLEAR_PIXEL.to_string());
                    let pending = !applied.contains_key(&index);
                    rsx! {
                        PhotoCard {
                            key: "{index}",
                            view: view,
                            display_src: display_src,
                            pending: pending,
                            on_open: move |idx| {
                                lightbox.write().open(idx, len);
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Install the one-shot viewport observer over the grid's pending
/// images. Each intersection reports the card index back and stops
/// watching that node; without `IntersectionObserver` every index is
/// reported immediately (eager fallback).
fn observer_js() -> String {
    format!(
        r#"
        (function() {{
            const imgs = Array.from(document.querySelectorAll('#photosGrid img[data-pending]'));
            if (window.__galleryObserver) {{
                window.__galleryObserver.disconnect();
                window.__galleryObserver = null;
            }}
            if (!('IntersectionObserver' in window)) {{
                for (const img of imgs) dioxus.send(Number(img.dataset.index));
                return;
            }}
            const observer = new IntersectionObserver((entries, obs) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting) {{
                        dioxus.send(Number(entry.target.dataset.index));
                        obs.unobserve(entry.target);
                    }}
                }}
            }}, {{ rootMargin: '{margin}px 0px' }});
            for (const img of imgs) observer.observe(img);
            window.__galleryObserver = observer;
        }})();
        "#,
        margin = LAZY_MARGIN_PX
    )
}
