//! Shared site state for the library pages.
//!
//! The three record sequences are loaded once at startup and provided
//! to all components via context, together with per-section status
//! notes and the lightbox state.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let books = use_books();
//! let notes = use_notes();
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use dioxus::prelude::*;
use divlib_core::{BookRecord, GalleryRecord, Lightbox, StaffRecord};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Localized status messages per page section.
///
/// A set message means the section's load failed; the section renders
/// the message in its note area and otherwise stays empty. The gallery
/// deliberately has no note: its failures are log-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionNotes {
    pub catalog: Option<String>,
    pub staff: Option<String>,
}

/// Gallery indices with a poster generation attempt behind them.
///
/// An index stays in the set after a failed attempt: poster failures
/// are silent and never retried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosterInflight(pub HashSet<usize>);

/// Hook to access the catalog record sequence.
pub fn use_books() -> Signal<Vec<BookRecord>> {
    use_context::<Signal<Vec<BookRecord>>>()
}

/// Hook to access the staff record sequence.
pub fn use_staff() -> Signal<Vec<StaffRecord>> {
    use_context::<Signal<Vec<StaffRecord>>>()
}

/// Hook to access the full, unfiltered gallery sequence.
///
/// Shared (read) by the grid, the lazy-load pass and the lightbox;
/// only a record's `thumb` is ever written after load, by the poster
/// generator, at most once per record.
pub fn use_gallery() -> Signal<Vec<GalleryRecord>> {
    use_context::<Signal<Vec<GalleryRecord>>>()
}

/// Hook to access the per-section status notes.
pub fn use_notes() -> Signal<SectionNotes> {
    use_context::<Signal<SectionNotes>>()
}

/// Hook to access the lightbox state.
pub fn use_lightbox() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}

/// Hook to access the poster in-flight set.
pub fn use_poster_inflight() -> Signal<PosterInflight> {
    use_context::<Signal<PosterInflight>>()
}
