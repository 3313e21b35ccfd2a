use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptureError>;

/// Capture-related errors
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Selection is empty ({width}x{height})")]
    EmptySelection { width: i32, height: i32 },

    #[error("Selection origin ({x}, {y}) is outside the screen")]
    NegativeOrigin { x: i32, y: i32 },

    #[error(
        "Region {x},{y} {width}x{height} exceeds screen bounds {screen_width}x{screen_height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        screen_width: u32,
        screen_height: u32,
    },

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
