//! Theme for the library site.

mod styles;

pub use styles::GLOBAL_STYLES;
