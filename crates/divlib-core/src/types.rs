//! Record types for the library site
//!
//! Three record kinds share the load → render → interact pipeline:
//! catalog books, staff members and gallery items. Every field is
//! optional; a record with nothing in it still renders as an (empty)
//! card so the grid layout stays stable.

use serde::{Deserialize, Serialize};

/// One catalog entry from `data/books.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub desc: Option<String>,
}

/// One staff entry from `data/employees.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffRecord {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    /// Resource path to a portrait; initials are shown when absent
    pub photo: Option<String>,
}

/// Media kind of a gallery entry. Anything that is not explicitly
/// `"video"` is treated as an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

fn media_kind_lenient<'de, D>(deserializer: D) -> Result<MediaKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(match tag.as_deref() {
        Some("video") => MediaKind::Video,
        _ => MediaKind::Image,
    })
}

/// One gallery entry from `data/photos.json`
///
/// `thumb` is the only field mutated after load: the poster generator
/// fills it in place at most once for videos shipped without one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryRecord {
    #[serde(rename = "type", deserialize_with = "media_kind_lenient")]
    pub kind: MediaKind,
    /// Resource path to the full image or the video file
    pub src: Option<String>,
    pub caption: Option<String>,
    pub alt: Option<String>,
    /// Thumbnail path or a generated data URI
    pub thumb: Option<String>,
}

impl GalleryRecord {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_all_fields_optional() {
        let book: BookRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(book, BookRecord::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let book: BookRecord =
            serde_json::from_str(r#"{"title":"Обломов","year":1859}"#).unwrap();
        assert_eq!(book.title.as_deref(), Some("Обломов"));
        assert_eq!(book.author, None);
    }

    #[test]
    fn test_gallery_kind_defaults_to_image() {
        let photo: GalleryRecord =
            serde_json::from_str(r#"{"src":"images/hall.jpg"}"#).unwrap();
        assert_eq!(photo.kind, MediaKind::Image);
        assert!(!photo.is_video());
    }

    #[test]
    fn test_gallery_video_kind() {
        let video: GalleryRecord =
            serde_json::from_str(r#"{"type":"video","src":"video/tour.mp4"}"#).unwrap();
        assert!(video.is_video());
        assert_eq!(video.thumb, None);
    }

    #[test]
    fn test_gallery_unrecognized_kind_is_image() {
        let item: GalleryRecord =
            serde_json::from_str(r#"{"type":"panorama","src":"images/yard.jpg"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
    }
}
