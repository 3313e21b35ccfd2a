pub mod error;
pub mod region;
pub mod sink;

pub use error::{CaptureError, Result};
pub use region::{CaptureRegion, crop, encode_png};
pub use sink::{CaptureSink, ImageCaptureSink};
