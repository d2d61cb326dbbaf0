//! Webview-backed video frame capture.
//!
//! Implements the core `FrameSource` seam on top of the page's own
//! media pipeline: a hidden, muted video element probes metadata and
//! rasterizes the seeked frame through an off-screen canvas. Each probe
//! detaches its element on every JS exit path (metadata, seek, error),
//! so a watchdog-abandoned capture leaks nothing.

use std::collections::HashSet;

use base64::Engine as _;
use dioxus::document;
use dioxus::prelude::*;
use divlib_core::{generate_poster, FrameSource, GalleryRecord, SiteError, SiteResult, VideoMeta};

use crate::context::PosterInflight;

/// `FrameSource` over the webview's video decoder.
pub struct WebviewFrameSource {
    src: String,
}

impl WebviewFrameSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    fn src_literal(&self) -> String {
        // JSON string == valid JS string literal
        serde_json::Value::String(self.src.clone()).to_string()
    }
}

impl FrameSource for WebviewFrameSource {
    async fn metadata(&mut self) -> SiteResult<VideoMeta> {
        let js = format!(
            r#"
            const video = document.createElement('video');
            video.muted = true;
            video.preload = 'metadata';
            video.crossOrigin = 'anonymous';
            const done = (payload) => {{
                video.removeAttribute('src');
                video.load();
                dioxus.send(payload);
            }};
            video.addEventListener('loadedmetadata', () => done({{
                duration: Number.isFinite(video.duration) ? video.duration : 0,
                width: video.videoWidth || 640,
                height: video.videoHeight || 360,
            }}), {{ once: true }});
            video.addEventListener('error', () => done(null), {{ once: true }});
            video.src = {src};
            video.load();
            "#,
            src = self.src_literal()
        );
        let mut eval = document::eval(&js);
        let value: serde_json::Value = eval
            .recv()
            .await
            .map_err(|e| SiteError::Poster(format!("metadata probe failed: {e:?}")))?;
        let meta = value
            .as_object()
            .ok_or_else(|| SiteError::Poster(format!("video load error: {}", self.src)))?;
        Ok(VideoMeta {
            duration_secs: meta.get("duration").and_then(|v| v.as_f64()).unwrap_or(0.0),
            width: meta.get("width").and_then(|v| v.as_u64()).unwrap_or(640) as u32,
            height: meta.get("height").and_then(|v| v.as_u64()).unwrap_or(360) as u32,
        })
    }

    async fn frame_at(&mut self, seconds: f64) -> SiteResult<image::RgbaImage> {
        let js = format!(
            r#"
            const video = document.createElement('video');
            video.muted = true;
            video.preload = 'auto';
            video.crossOrigin = 'anonymous';
            const done = (payload) => {{
                video.removeAttribute('src');
                video.load();
                dioxus.send(payload);
            }};
            video.addEventListener('loadedmetadata', () => {{
                video.currentTime = {seconds};
            }}, {{ once: true }});
            video.addEventListener('seeked', () => {{
                try {{
                    const canvas = document.createElement('canvas');
                    canvas.width = video.videoWidth || 640;
                    canvas.height = video.videoHeight || 360;
                    canvas.getContext('2d').drawImage(video, 0, 0, canvas.width, canvas.height);
                    done(canvas.toDataURL('image/png'));
                }} catch (err) {{
                    done(null);
                }}
            }}, {{ once: true }});
            video.addEventListener('error', () => done(null), {{ once: true }});
            video.src = {src};
            video.load();
            "#,
            seconds = seconds,
            src = self.src_literal()
        );
        let mut eval = document::eval(&js);
        let value: serde_json::Value = eval
            .recv()
            .await
            .map_err(|e| SiteError::Poster(format!("frame capture failed: {e:?}")))?;
        let data_url = value
            .as_str()
            .ok_or_else(|| SiteError::Poster(format!("frame rasterization failed: {}", self.src)))?;
        decode_data_url(data_url)
    }
}

fn decode_data_url(data_url: &str) -> SiteResult<image::RgbaImage> {
    let payload = data_url
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| SiteError::Poster("unexpected canvas data URL".to_string()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| SiteError::Poster(format!("canvas payload decode failed: {e}")))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| SiteError::Poster(format!("canvas frame decode failed: {e}")))?;
    Ok(decoded.to_rgba8())
}

/// Kick off a best-effort poster generation for the gallery record at
/// `index`, writing the data URI back into the shared sequence.
///
/// Returns immediately for non-videos, records that already carry a
/// thumbnail, and records already attempted (failures are silent and
/// never retried). The running task is detached: closing the lightbox
/// or re-rendering the grid never cancels it; its own watchdog is the
/// sole cancellation mechanism.
pub fn spawn_poster(
    mut gallery: Signal<Vec<GalleryRecord>>,
    mut inflight: Signal<PosterInflight>,
    index: usize,
) {
    let Some(record) = gallery.peek().get(index).cloned() else {
        return;
    };
    if !record.is_video() || record.thumb.is_some() {
        return;
    }
    if !inflight.write().0.insert(index) {
        return;
    }

    spawn(async move {
        let src = record.src.clone().unwrap_or_default();
        let mut source = WebviewFrameSource::new(src);
        let mut working = record;
        match generate_poster(&mut working, &mut source).await {
            Ok(uri) => {
                let mut records = gallery.write();
                if let Some(slot) = records.get_mut(index) {
                    if slot.thumb.is_none() {
                        slot.thumb = Some(uri);
                    }
                }
            }
            // Silent: the card keeps its placeholder
            Err(e) => tracing::debug!("Poster generation failed for item {}: {}", index, e),
        }
    });
}

/// Indices of records that still need a poster attempt.
pub fn pending_posters(records: &[GalleryRecord], attempted: &HashSet<usize>) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(i, r)| r.is_video() && r.thumb.is_none() && !attempted.contains(i))
        .map(|(i, _)| i)
        .collect()
}
