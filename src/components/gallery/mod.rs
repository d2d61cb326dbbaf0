//! Gallery components: the lazy-loading grid and the lightbox viewer.

mod lightbox;
mod photo_grid;

pub use lightbox::LightboxOverlay;
pub use photo_grid::PhotoGrid;
