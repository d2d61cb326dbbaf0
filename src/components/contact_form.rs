//! Contact Form Component
//!
//! Local-only: fields are validated in place and acknowledged with a
//! timed inline message. Nothing is submitted anywhere.

use dioxus::prelude::*;
use divlib_core::contact::{validate, ContactMessage, CONTACT_THANKS, CONTACT_THANKS_TTL};

#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    // (is_ok, text); None hides the status line
    let mut status: Signal<Option<(bool, String)>> = use_signal(|| None);
    let mut epoch: Signal<u32> = use_signal(|| 0);

    let submit = move |e: Event<FormData>| {
        e.prevent_default();

        let form = ContactMessage {
            name: name(),
            email: email(),
            message: message(),
        };
        match validate(&form) {
            Ok(()) => {
                status.set(Some((true, CONTACT_THANKS.to_string())));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());

                // Clear the acknowledgment after a few seconds, unless a
                // newer submit replaced it meanwhile
                let my_epoch = epoch() + 1;
                epoch.set(my_epoch);
                spawn(async move {
                    tokio::time::sleep(CONTACT_THANKS_TTL).await;
                    if epoch() == my_epoch {
                        status.set(None);
                    }
                });
            }
            Err(err) => status.set(Some((false, err.to_string()))),
        }
    };

    rsx! {
        form { class: "contact-form", id: "contactForm", onsubmit: submit,
            label { r#for: "contactName", "Имя" }
            input {
                id: "contactName",
                name: "name",
                r#type: "text",
                value: "{name()}",
                oninput: move |e| name.set(e.value()),
            }

            label { r#for: "contactEmail", "Email" }
            input {
                id: "contactEmail",
                name: "email",
                r#type: "email",
                value: "{email()}",
                oninput: move |e| email.set(e.value()),
            }

            label { r#for: "contactMessage", "Сообщение" }
            textarea {
                id: "contactMessage",
                name: "message",
                value: "{message()}",
                oninput: move |e| message.set(e.value()),
            }

            button { class: "btn-primary", r#type: "submit", "Отправить" }

            if let Some((ok, text)) = status() {
                p {
                    class: if ok { "form-message ok" } else { "form-message error" },
                    "{text}"
                }
            }
        }
    }
}
