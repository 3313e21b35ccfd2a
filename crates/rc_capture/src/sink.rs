use image::RgbaImage;
use log::info;
use rc_geometry::Rectangle;

use crate::{CaptureRegion, Result, crop};

/// Collaborator that receives confirmed selections.
pub trait CaptureSink {
    fn capture(&mut self, region: CaptureRegion) -> Result<()>;

    /// Convert and hand off a confirmed selection.
    fn capture_selection(&mut self, selection: &Rectangle) -> Result<()> {
        self.capture(CaptureRegion::from_selection(selection)?)
    }
}

/// Crops captures out of an already-grabbed screen image.
pub struct ImageCaptureSink {
    screen: RgbaImage,
    captures: Vec<RgbaImage>,
}

impl ImageCaptureSink {
    pub fn new(screen: RgbaImage) -> Self {
        Self {
            screen,
            captures: Vec::new(),
        }
    }

    pub fn captures(&self) -> &[RgbaImage] {
        &self.captures
    }

    pub fn last_capture(&self) -> Option<&RgbaImage> {
        self.captures.last()
    }
}

impl CaptureSink for ImageCaptureSink {
    fn capture(&mut self, region: CaptureRegion) -> Result<()> {
        let image = crop(&self.screen, region)?;
        info!(
            "captured region {},{} {}x{}",
            region.x, region.y, region.width, region.height
        );
        self.captures.push(image);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureError;
    use rc_geometry::Point;

    #[test]
    fn sink_crops_confirmed_selection() {
        let mut sink = ImageCaptureSink::new(RgbaImage::new(100, 80));
        let sel = Rectangle::spanning(Point::new(10, 10), Point::new(40, 30));
        sink.capture_selection(&sel).unwrap();
        assert_eq!(sink.captures().len(), 1);
        assert_eq!(sink.last_capture().unwrap().dimensions(), (30, 20));
    }

    #[test]
    fn sink_reports_out_of_bounds() {
        let mut sink = ImageCaptureSink::new(RgbaImage::new(50, 50));
        let sel = Rectangle::spanning(Point::new(10, 10), Point::new(60, 30));
        let err = sink.capture_selection(&sel).unwrap_err();
        assert!(matches!(err, CaptureError::OutOfBounds { .. }));
        assert!(sink.captures().is_empty());
    }
}
