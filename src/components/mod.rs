//! UI Components for the library site.

pub mod cards;
pub mod gallery;

mod contact_form;
mod search_bar;
mod staff_modal;

pub use contact_form::ContactForm;
pub use search_bar::SearchBar;
pub use staff_modal::StaffModal;
