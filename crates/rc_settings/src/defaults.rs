use std::path::PathBuf;

// Selection thresholds (pixels)
pub fn default_min_confirm_size() -> i32 {
    5
}

pub fn default_min_resize_size() -> i32 {
    10
}

// Corner handle defaults
pub fn default_handle_hit_radius() -> i32 {
    8
}

pub fn default_handle_class() -> String {
    "resize-handle".to_string()
}

pub fn default_confirm_class() -> String {
    "confirm-button".to_string()
}

// Settings directory root
pub fn default_config_path() -> String {
    // Prefer a user home directory.
    if let Ok(home_dir) = std::env::var("HOME") {
        return home_dir;
    }
    if let Ok(home_dir) = std::env::var("USERPROFILE") {
        return home_dir;
    }

    // Fallback: program directory.
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.to_string_lossy().to_string();
    }

    // Last resort: cwd.
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}
