//! Catalog Search Bar Component
//!
//! Keystrokes run through the core debouncer so filtering executes at
//! most once per 200ms of input quiescence, with the newest query only.
//! The debounced value comes back to the UI task over a channel.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use divlib_core::{Debouncer, SEARCH_DEBOUNCE};
use tokio::sync::mpsc;

#[component]
pub fn SearchBar(
    /// Called with the settled query text
    on_search: EventHandler<String>,
) -> Element {
    let (debouncer, rx_slot) = use_hook(|| {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE, move |query: String| {
            let _ = tx.send(query);
        });
        (
            Rc::new(RefCell::new(debouncer)),
            Rc::new(RefCell::new(Some(rx))),
        )
    });

    use_future(move || {
        let rx = rx_slot.borrow_mut().take();
        async move {
            if let Some(mut rx) = rx {
                while let Some(query) = rx.recv().await {
                    on_search.call(query);
                }
            }
        }
    });

    rsx! {
        div { class: "search-row",
            input {
                class: "search-input",
                id: "search",
                r#type: "search",
                placeholder: "Поиск по названию или автору…",
                aria_label: "Поиск по каталогу",
                oninput: move |e| debouncer.borrow_mut().call(e.value()),
            }
        }
    }
}
