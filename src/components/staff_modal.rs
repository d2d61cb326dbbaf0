//! Staff Detail Modal Component

use dioxus::prelude::*;
use divlib_core::{StaffCardView, StaffRecord};

/// Modal with one staff member's full details.
///
/// Closes on the close control, Escape, or a click on the backdrop
/// itself (not its content).
#[component]
pub fn StaffModal(
    /// The staff member to display
    record: StaffRecord,
    /// Callback when the modal is closed
    on_close: EventHandler<()>,
) -> Element {
    let view = StaffCardView::from_record(&record);

    rsx! {
        div {
            class: "modal-overlay open",
            role: "dialog",
            aria_modal: "true",
            aria_hidden: "false",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "staff-modal",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Закрыть",
                    autofocus: true,
                    onclick: move |_| on_close.call(()),
                    "×"
                }

                div { class: "staff-avatar staff-modal-avatar", aria_hidden: "true",
                    if let Some(photo) = view.photo.clone() {
                        img { src: "{photo}", alt: "{view.photo_alt}", loading: "lazy" }
                    } else {
                        "{view.initials}"
                    }
                }

                h3 { class: "staff-modal-name", "{view.name}" }
                span { class: "role", "{view.role}" }

                div { class: "staff-modal-contacts",
                    if let Some(email) = view.email.clone() {
                        a {
                            class: "contact-link",
                            href: "{email.href}",
                            aria_label: "Email: {email.text}",
                            "{email.text}"
                        }
                    }
                    if let Some(phone) = view.phone.clone() {
                        a {
                            class: "contact-link",
                            href: "{phone.href}",
                            aria_label: "Телефон: {phone.text}",
                            "{phone.text}"
                        }
                    }
                }

                div { class: "staff-modal-bio", "{view.bio}" }
            }
        }
    }
}
