pub mod capture;
pub mod replay;

pub use capture::{capture_to_file, default_capture_path, screenshot_file_name};
pub use replay::{SessionReport, default_script, load_script, replay};

// Public compatibility modules (re-exporting the crates).
pub use rc_app as selection;
pub use rc_capture as screenshot;
pub use rc_settings as settings;
