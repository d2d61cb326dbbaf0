//! Divenskaya Library Site Core
//!
//! The UI-free half of the library's public site: loading the static
//! JSON record sequences, mapping records to card views, searching the
//! catalog, tracking lazy-load and lightbox state, and generating video
//! posters.
//!
//! ## Pipeline
//!
//! Data loader → card views → grid render, with two loops back in:
//! debounced search re-filters the catalog, and the lazy-load pass
//! applies deferred image sources as cards near the viewport. Gallery
//! cards open the lightbox at their original-sequence index.
//!
//! ## Quick Start
//!
//! ```ignore
//! use divlib_core::{DataLoader, FsFetcher, filter_books, BookCardView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DataLoader::new(FsFetcher::new("data"));
//!     let books = loader.load_books().await?;
//!
//!     let hits = filter_books("булгаков", &books).unwrap_or(books);
//!     for view in hits.iter().map(BookCardView::from_record) {
//!         println!("{} — {}", view.title, view.author);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cards;
pub mod contact;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod lightbox;
pub mod loader;
pub mod poster;
pub mod types;

// Re-exports
pub use cards::{BookCardView, ContactLink, GalleryCardView, StaffCardView};
pub use contact::ContactMessage;
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{SiteError, SiteResult};
pub use filter::filter_books;
pub use lazy::{LazyLoader, LAZY_MARGIN_PX};
pub use lightbox::Lightbox;
pub use loader::{DataKind, DataLoader, Fetcher, FsFetcher};
pub use poster::{generate_poster, FrameSource, VideoMeta, POSTER_TIMEOUT};
pub use types::{BookRecord, GalleryRecord, MediaKind, StaffRecord};
