use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use log::debug;
use rc_capture::{CaptureRegion, CaptureSink, ImageCaptureSink, encode_png};
use rc_geometry::Rectangle;

/// File name for a capture taken at `at`, e.g. `screenshot_20240131_235959.png`.
pub fn screenshot_file_name(at: NaiveDateTime) -> String {
    format!("screenshot_{}.png", at.format("%Y%m%d_%H%M%S"))
}

/// `<pictures>/screenshots/screenshot_<timestamp>.png`.
///
/// Falls back to `./screenshots` when the platform has no pictures directory.
pub fn default_capture_path() -> PathBuf {
    let base = dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("screenshots")
        .join(screenshot_file_name(chrono::Local::now().naive_local()))
}

/// Crop `selection` out of the screen image at `screen_path` and write it as PNG to `out`.
///
/// Missing parent directories of `out` are created.
pub fn capture_to_file(
    selection: &Rectangle,
    screen_path: &Path,
    out: &Path,
) -> anyhow::Result<CaptureRegion> {
    let screen = image::open(screen_path)
        .with_context(|| format!("failed to open screen image {}", screen_path.display()))?
        .to_rgba8();

    let region = CaptureRegion::from_selection(selection)?;
    let mut sink = ImageCaptureSink::new(screen);
    sink.capture(region)?;

    let captured = sink
        .last_capture()
        .context("capture sink produced no image")?;
    let png = encode_png(captured)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
        debug!("capture directory ready: {}", parent.display());
    }
    fs::write(out, png).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(region)
}
