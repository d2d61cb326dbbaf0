//! Pure record → card-view mapping
//!
//! Rendering never touches the records themselves: each record maps to
//! an immutable view struct with every displayed field resolved
//! (placeholders, fallbacks, contact hrefs, the deferred image source).
//! The UI consumes these views; tests assert on them directly.

use base64::Engine as _;

use crate::types::{BookRecord, GalleryRecord, StaffRecord};

/// Shown when a book has no title
pub const BOOK_TITLE_PLACEHOLDER: &str = "Без названия";

/// Shown when a staff member has no name
pub const STAFF_NAME_PLACEHOLDER: &str = "Без имени";

/// 1x1 transparent GIF shown in gallery cards until lazy loading fires
pub const CLEAR_PIXEL: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Resolved display fields of one catalog card.
///
/// Missing fields become empty text, never an omitted element, so the
/// card layout stays stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCardView {
    pub title: String,
    pub author: String,
    pub desc: String,
}

impl BookCardView {
    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            title: record
                .title
                .clone()
                .unwrap_or_else(|| BOOK_TITLE_PLACEHOLDER.to_string()),
            author: record.author.clone().unwrap_or_default(),
            desc: record.desc.clone().unwrap_or_default(),
        }
    }
}

/// A `mailto:` or `tel:` contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub href: String,
    pub text: String,
}

/// Resolved display fields of one staff card (also used by the staff
/// detail modal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffCardView {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Shown in the avatar circle when there is no photo
    pub initials: String,
    pub photo: Option<String>,
    pub photo_alt: String,
    pub email: Option<ContactLink>,
    pub phone: Option<ContactLink>,
}

impl StaffCardView {
    pub fn from_record(record: &StaffRecord) -> Self {
        let name = record
            .name
            .clone()
            .unwrap_or_else(|| STAFF_NAME_PLACEHOLDER.to_string());
        let photo_alt = match &record.name {
            Some(name) => format!("{name} — фото"),
            None => "Фото сотрудника".to_string(),
        };
        Self {
            initials: initials(record.name.as_deref().unwrap_or_default()),
            name,
            role: record.role.clone().unwrap_or_default(),
            bio: record.bio.clone().unwrap_or_default(),
            photo: record.photo.clone(),
            photo_alt,
            email: record.email.as_deref().map(|email| ContactLink {
                href: format!("mailto:{email}"),
                text: email.to_string(),
            }),
            phone: record.phone.as_deref().map(|phone| ContactLink {
                href: format!("tel:{}", sanitize_phone(phone)),
                text: phone.to_string(),
            }),
        }
    }
}

/// Uppercased first letters of the first two name parts.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Keep digits and `+` only, for a `tel:` href.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Resolved display fields of one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCardView {
    /// Index into the full, unfiltered gallery sequence; the lightbox
    /// opens at this index.
    pub index: usize,
    /// Deferred image source, applied by the lazy-load pass
    pub pending_src: String,
    pub alt: String,
    pub caption: String,
    /// Videos get a play-badge overlay
    pub is_video: bool,
    pub aria_label: String,
}

impl GalleryCardView {
    pub fn from_record(record: &GalleryRecord, index: usize) -> Self {
        let is_video = record.is_video();
        let kind_word = if is_video { "Видео" } else { "Фото" };
        let label_base = record.caption.as_deref().unwrap_or(kind_word);
        let pending_src = if is_video {
            // A video file itself is never used as an <img> source
            record
                .thumb
                .clone()
                .unwrap_or_else(|| video_placeholder(label_base))
        } else {
            record
                .src
                .clone()
                .or_else(|| record.thumb.clone())
                .unwrap_or_default()
        };
        Self {
            index,
            pending_src,
            alt: record
                .caption
                .clone()
                .or_else(|| record.alt.clone())
                .unwrap_or_default(),
            caption: record.caption.clone().unwrap_or_default(),
            is_video,
            aria_label: if is_video {
                format!("{label_base} — открыть видео")
            } else {
                format!("{label_base} — открыть")
            },
        }
    }
}

/// Inline SVG placeholder for a video without a thumbnail, titled with
/// its caption.
pub fn video_placeholder(title: &str) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600" viewBox="0 0 800 600">"#,
            r##"<rect width="100%" height="100%" fill="#e9e9e9"/>"##,
            r##"<text x="50%" y="46%" font-family="Georgia,serif" font-size="28" text-anchor="middle" fill="#6b6b6b">{}</text>"##,
            r#"</svg>"#
        ),
        escape_xml(title)
    );
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("data:image/svg+xml;base64,{encoded}")
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
