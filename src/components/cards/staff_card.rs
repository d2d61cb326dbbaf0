//! Staff Card Component

use dioxus::prelude::*;
use divlib_core::{StaffCardView, StaffRecord};

/// One staff member in the directory grid.
///
/// The card itself is not interactive; the explicit "Подробнее" button
/// opens the detail modal, so the contact links keep working on their
/// own. A missing photo falls back to an initials avatar.
#[component]
pub fn StaffCard(
    /// The staff member to display
    record: StaffRecord,
    /// Called with the record when the details button is activated
    on_details: EventHandler<StaffRecord>,
) -> Element {
    let view = StaffCardView::from_record(&record);
    let record_for_click = record.clone();

    rsx! {
        div { class: "staff-card",
            div { class: "staff-avatar", aria_hidden: "true",
                if let Some(photo) = view.photo.clone() {
                    img { src: "{photo}", alt: "{view.photo_alt}", loading: "lazy" }
                } else {
                    "{view.initials}"
                }
            }

            div { class: "staff-info",
                h3 { "{view.name}" }
                span { class: "role", "{view.role}" }

                div { class: "contact",
                    if let Some(email) = view.email.clone() {
                        div { class: "contact-item",
                            a {
                                class: "contact-link",
                                href: "{email.href}",
                                aria_label: "Email: {email.text}",
                                onclick: move |e| e.stop_propagation(),
                                "{email.text}"
                            }
                        }
                    }
                    if let Some(phone) = view.phone.clone() {
                        div { class: "contact-item",
                            a {
                                class: "contact-link",
                                href: "{phone.href}",
                                aria_label: "Телефон: {phone.text}",
                                onclick: move |e| e.stop_propagation(),
                                "{phone.text}"
                            }
                        }
                    }
                }

                div { class: "bio", "{view.bio}" }

                button {
                    class: "details-button",
                    r#type: "button",
                    onclick: move |_| on_details.call(record_for_click.clone()),
                    "Подробнее"
                }
            }
        }
    }
}
