//! Gallery Card Component

use dioxus::prelude::*;
use divlib_core::GalleryCardView;

/// One gallery item: an activatable card carrying its original-sequence
/// index. The real image source stays pending (`data-pending`) until
/// the lazy-load pass hands it over; until then a transparent pixel
/// keeps the layout. Videos get a play-badge overlay.
#[component]
pub fn PhotoCard(
    view: GalleryCardView,
    /// Source currently applied to the img node
    display_src: String,
    /// Whether the real source is still pending lazy load
    pending: bool,
    /// Called with the record's index on activation
    on_open: EventHandler<usize>,
) -> Element {
    let index = view.index;

    rsx! {
        button {
            class: "photo-card",
            r#type: "button",
            aria_label: "{view.aria_label}",
            "data-index": "{index}",
            onclick: move |_| on_open.call(index),

            if pending {
                img {
                    alt: "{view.alt}",
                    src: "{display_src}",
                    "data-index": "{index}",
                    "data-pending": "{view.pending_src}",
                }
            } else {
                img {
                    alt: "{view.alt}",
                    src: "{display_src}",
                    "data-index": "{index}",
                }
            }

            if view.is_video {
                span { class: "play-badge", aria_hidden: "true" }
            }

            div { class: "photo-caption", "{view.caption}" }
        }
    }
}
