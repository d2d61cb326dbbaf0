//! Page components for the library site.

mod home;

pub use home::Home;
