use std::io::Cursor;

use image::{ImageFormat, RgbaImage, imageops};
use log::debug;
use rc_geometry::Rectangle;
use serde::Serialize;

use crate::{CaptureError, Result};

/// Pixel region handed to the capture routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptureRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Convert a confirmed selection into an unsigned capture region.
    pub fn from_selection(selection: &Rectangle) -> Result<Self> {
        if selection.width() <= 0 || selection.height() <= 0 {
            return Err(CaptureError::EmptySelection {
                width: selection.width(),
                height: selection.height(),
            });
        }
        let (Ok(x), Ok(y)) = (
            u32::try_from(selection.start_x()),
            u32::try_from(selection.start_y()),
        ) else {
            return Err(CaptureError::NegativeOrigin {
                x: selection.start_x(),
                y: selection.start_y(),
            });
        };

        // Both sizes are positive here.
        Ok(Self {
            x,
            y,
            width: selection.width().unsigned_abs(),
            height: selection.height().unsigned_abs(),
        })
    }

    /// Reject regions that do not fit on a `screen_width` x `screen_height` screen.
    pub fn ensure_within(&self, screen_width: u32, screen_height: u32) -> Result<()> {
        let fits_x = self
            .x
            .checked_add(self.width)
            .is_some_and(|right| right <= screen_width);
        let fits_y = self
            .y
            .checked_add(self.height)
            .is_some_and(|bottom| bottom <= screen_height);
        if fits_x && fits_y {
            Ok(())
        } else {
            Err(CaptureError::OutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                screen_width,
                screen_height,
            })
        }
    }
}

/// Crop `screen` to `region` after checking it fits.
pub fn crop(screen: &RgbaImage, region: CaptureRegion) -> Result<RgbaImage> {
    region.ensure_within(screen.width(), screen.height())?;
    let cropped =
        imageops::crop_imm(screen, region.x, region.y, region.width, region.height).to_image();
    debug!(
        "cropped {}x{} screen to {}x{}",
        screen.width(),
        screen.height(),
        cropped.width(),
        cropped.height()
    );
    Ok(cropped)
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
