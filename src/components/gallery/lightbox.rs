//! Lightbox Overlay Component
//!
//! Full-page modal presenting one gallery item at a time. The state
//! machine itself lives in the core (`Lightbox`); this component wires
//! it to the overlay: backdrop-only click-to-close, Escape/arrow keys,
//! circular prev/next controls, focus on the close control and page
//! scroll suppression while open.

use dioxus::document;
use dioxus::prelude::*;

use crate::context::{use_gallery, use_lightbox, use_poster_inflight};
use crate::poster_source::spawn_poster;

#[component]
pub fn LightboxOverlay() -> Element {
    let gallery = use_gallery();
    let mut lightbox = use_lightbox();
    let poster_inflight = use_poster_inflight();

    // Suppress page scroll while open, restore on close
    use_effect(move || {
        let open = lightbox().is_open();
        let js = format!(
            "document.body.style.overflow = '{}';",
            if open { "hidden" } else { "" }
        );
        document::eval(&js);
    });

    // A video shown without a poster asks the generator for one; the
    // task keeps running detached if the modal closes meanwhile
    use_effect(move || {
        if let Some(index) = lightbox().current() {
            let needs_poster = gallery
                .peek()
                .get(index)
                .is_some_and(|r| r.is_video() && r.thumb.is_none());
            if needs_poster {
                spawn_poster(gallery, poster_inflight, index);
            }
        }
    });

    let records = gallery();
    let len = records.len();
    let Some(index) = lightbox().current() else {
        return rsx! {};
    };
    let Some(record) = records.get(index).cloned() else {
        return rsx! {};
    };

    let caption = record.caption.clone().unwrap_or_default();
    let alt = record
        .caption
        .clone()
        .or_else(|| record.alt.clone())
        .unwrap_or_default();
    let src = record.src.clone().unwrap_or_default();

    rsx! {
        div {
            class: "modal-overlay open",
            role: "dialog",
            aria_modal: "true",
            aria_hidden: "false",
            tabindex: "-1",
            onclick: move |_| lightbox.write().close(),
            onkeydown: move |e| match e.key() {
                Key::Escape => lightbox.write().close(),
                Key::ArrowLeft => {
                    lightbox.write().show_prev(len);
                }
                Key::ArrowRight => {
                    lightbox.write().show_next(len);
                }
                _ => {}
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Закрыть",
                    autofocus: true,
                    onclick: move |_| lightbox.write().close(),
                    "×"
                }

                // Keyed by index so navigation replaces the media node,
                // which also stops any prior video playback immediately
                if record.is_video() {
                    video {
                        key: "{index}",
                        class: "modal-media",
                        src: "{src}",
                        poster: record.thumb.clone().unwrap_or_default(),
                        controls: true,
                        // Autoplay rejection is the webview's to swallow
                        autoplay: true,
                    }
                } else {
                    img {
                        key: "{index}",
                        class: "modal-media",
                        src: "{src}",
                        alt: "{alt}",
                    }
                }

                div { class: "modal-caption", "{caption}" }

                button {
                    class: "modal-prev",
                    r#type: "button",
                    aria_label: "Предыдущее",
                    onclick: move |_| {
                        lightbox.write().show_prev(len);
                    },
                    "‹"
                }
                button {
                    class: "modal-next",
                    r#type: "button",
                    aria_label: "Следующее",
                    onclick: move |_| {
                        lightbox.write().show_next(len);
                    },
                    "›"
                }
            }
        }
    }
}
