//! Poster generation for gallery videos
//!
//! A video record shipped without a thumbnail gets one derived from a
//! random frame of the video itself: probe the duration, seek to a
//! uniformly random timestamp (keeping 0.2s clear of the end), rasterize
//! the frame and encode it as a JPEG data URI, falling back to PNG when
//! JPEG encoding fails. The whole attempt is best-effort: it runs under
//! a 6-second watchdog and every failure is silent to the user - the
//! card simply keeps its placeholder.
//!
//! The result is written into the record's `thumb` field at most once;
//! a second attempt short-circuits on the populated field.

use std::time::Duration;

use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use rand::Rng;

use crate::error::{SiteError, SiteResult};
use crate::types::GalleryRecord;

/// Watchdog for one generation attempt
pub const POSTER_TIMEOUT: Duration = Duration::from_secs(6);

/// JPEG quality for generated posters (matches canvas quality 0.8)
pub const POSTER_JPEG_QUALITY: u8 = 80;

/// Seek no closer than this to the end of the video
const END_GUARD_SECS: f64 = 0.2;

/// Basic properties of a video, probed before seeking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMeta {
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
}

/// A video decoder that can report metadata and rasterize one frame.
///
/// The UI layer backs this with the webview's video element; tests use
/// in-memory doubles. Implementations detach their decoder on drop so
/// cleanup happens on every exit path, including the watchdog one.
pub trait FrameSource {
    fn metadata(&mut self) -> impl std::future::Future<Output = SiteResult<VideoMeta>>;
    fn frame_at(
        &mut self,
        seconds: f64,
    ) -> impl std::future::Future<Output = SiteResult<RgbaImage>>;
}

/// Pick the seek timestamp: uniformly random in `[0, duration - 0.2)`,
/// `0` when the duration is unknown or non-positive. Floored to whole
/// milliseconds, which some decoders need to seek reliably.
pub fn seek_target(duration_secs: f64) -> f64 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0.0;
    }
    let max_seek = (duration_secs - END_GUARD_SECS).max(0.0);
    let target = if max_seek > 0.0 {
        rand::rng().random::<f64>() * max_seek
    } else {
        0.0
    };
    (target * 1000.0).floor() / 1000.0
}

/// Encode a frame as a compressed data URI: JPEG at quality 80, with a
/// PNG fallback when the JPEG encoder refuses the frame.
pub fn encode_poster(frame: &RgbaImage) -> SiteResult<String> {
    let rgb = image::DynamicImage::ImageRgba8(frame.clone()).to_rgb8();
    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, POSTER_JPEG_QUALITY);
    if encoder.encode_image(&rgb).is_ok() {
        return Ok(data_uri("image/jpeg", &jpeg));
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            frame.as_raw(),
            frame.width(),
            frame.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| SiteError::Poster(format!("poster encoding failed: {e}")))?;
    Ok(data_uri("image/png", &png))
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

/// Generate a poster for `record` and store it into `thumb`.
///
/// Idempotent: returns the existing thumbnail immediately when one is
/// already set. Requires a video source path. The probe/seek/encode
/// sequence runs under [`POSTER_TIMEOUT`]; on timeout the record is left
/// untouched.
pub async fn generate_poster<S: FrameSource>(
    record: &mut GalleryRecord,
    source: &mut S,
) -> SiteResult<String> {
    if let Some(existing) = &record.thumb {
        return Ok(existing.clone());
    }
    if record.src.is_none() {
        return Err(SiteError::Poster("record has no video source".to_string()));
    }

    let uri = tokio::time::timeout(POSTER_TIMEOUT, capture(source))
        .await
        .map_err(|_| SiteError::PosterTimeout)??;
    record.thumb = Some(uri.clone());
    Ok(uri)
}

async fn capture<S: FrameSource>(source: &mut S) -> SiteResult<String> {
    let meta = source.metadata().await?;
    let frame = source.frame_at(seek_target(meta.duration_secs)).await?;
    encode_poster(&frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;

    struct MockSource {
        duration: f64,
        metadata_calls: usize,
        stall: bool,
    }

    impl MockSource {
        fn new(duration: f64) -> Self {
            Self {
                duration,
                metadata_calls: 0,
                stall: false,
            }
        }

        fn stalled() -> Self {
            Self {
                duration: 0.0,
                metadata_calls: 0,
                stall: true,
            }
        }
    }

    impl FrameSource for MockSource {
        async fn metadata(&mut self) -> SiteResult<VideoMeta> {
            self.metadata_calls += 1;
            if self.stall {
                // Unreachable src: no metadata event ever fires
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            Ok(VideoMeta {
                duration_secs: self.duration,
                width: 2,
                height: 2,
            })
        }

        async fn frame_at(&mut self, seconds: f64) -> SiteResult<RgbaImage> {
            assert!(seconds >= 0.0 && seconds < self.duration.max(f64::MIN_POSITIVE));
            Ok(RgbaImage::from_pixel(2, 2, image::Rgba([40, 80, 120, 255])))
        }
    }

    fn video_record() -> GalleryRecord {
        GalleryRecord {
            kind: MediaKind::Video,
            src: Some("video/tour.mp4".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_seek_target_bounds() {
        for _ in 0..200 {
            let t = seek_target(10.0);
            assert!((0.0..9.8).contains(&t));
            // floored to milliseconds
            let millis = t * 1000.0;
            assert!((millis - millis.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_seek_target_degenerate_durations() {
        assert_eq!(seek_target(0.0), 0.0);
        assert_eq!(seek_target(-3.0), 0.0);
        assert_eq!(seek_target(f64::NAN), 0.0);
        assert_eq!(seek_target(f64::INFINITY), 0.0);
        assert_eq!(seek_target(0.1), 0.0);
    }

    #[test]
    fn test_encode_poster_is_jpeg_data_uri() {
        let frame = RgbaImage::from_pixel(4, 4, image::Rgba([200, 10, 10, 255]));
        let uri = encode_poster(&frame).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_generate_stores_thumb_once() {
        let mut record = video_record();
        let mut source = MockSource::new(12.0);

        let uri = generate_poster(&mut record, &mut source).await.unwrap();
        assert!(uri.starts_with("data:image/"));
        assert_eq!(record.thumb.as_deref(), Some(uri.as_str()));
        assert_eq!(source.metadata_calls, 1);

        // Second invocation short-circuits on the populated thumb
        let again = generate_poster(&mut record, &mut source).await.unwrap();
        assert_eq!(again, uri);
        assert_eq!(source.metadata_calls, 1);
    }

    #[tokio::test]
    async fn test_generate_requires_source_path() {
        let mut record = GalleryRecord {
            kind: MediaKind::Video,
            ..Default::default()
        };
        let mut source = MockSource::new(5.0);
        let err = generate_poster(&mut record, &mut source).await.unwrap_err();
        assert!(matches!(err, SiteError::Poster(_)));
        assert_eq!(record.thumb, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watchdog_fires_on_stalled_decoder() {
        let mut record = video_record();
        let mut source = MockSource::stalled();
        let err = generate_poster(&mut record, &mut source).await.unwrap_err();
        assert!(matches!(err, SiteError::PosterTimeout));
        assert_eq!(record.thumb, None, "card keeps its placeholder");
    }
}
