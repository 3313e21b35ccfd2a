pub mod element;
pub mod events;
pub mod surface;

pub use element::*;
pub use events::*;
pub use surface::*;
