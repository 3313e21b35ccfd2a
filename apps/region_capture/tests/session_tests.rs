use std::fs;

use image::{Rgba, RgbaImage};
use rc_geometry::Rectangle;
use region_capture::settings::{CornerDetection, Settings};
use region_capture::{capture_to_file, load_script, replay};

const SCRIPT: &str = r#"[
    {"kind": "down", "button": "left", "x": 300, "y": 300},
    {"kind": "move", "x": 200, "y": 250},
    {"kind": "up", "button": "left", "x": 200, "y": 250},
    {"kind": "down", "button": "left", "x": 201, "y": 251},
    {"kind": "move", "x": 206, "y": 256},
    {"kind": "up", "button": "left", "x": 206, "y": 256}
]"#;

#[test]
fn scripted_session_with_hit_radius_corners() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, SCRIPT).unwrap();

    let events = load_script(&path).unwrap();
    assert_eq!(events.len(), 6);

    let settings = Settings {
        corner_detection: CornerDetection::HitRadius,
        ..Settings::default()
    };
    let report = replay(&settings, &events);

    assert_eq!(report.confirmed, vec![Rectangle::from_edges(200, 250, 300, 300)]);
    // The second press lands on the top-left handle and shrinks the selection.
    assert_eq!(report.selection, Some(Rectangle::from_edges(205, 255, 300, 300)));
}

#[test]
fn marker_detection_ignores_bare_corner_press() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, SCRIPT).unwrap();

    // Without a handle element the second press starts a new (too small) selection.
    let report = replay(&Settings::default(), &load_script(&path).unwrap());
    assert_eq!(report.selection, None);
    assert_eq!(report.discarded, 1);
}

#[test]
fn malformed_script_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"kind": "hover"}]"#).unwrap();
    let err = load_script(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse script"));
}

#[test]
fn capture_writes_cropped_png() {
    let dir = tempfile::tempdir().unwrap();
    let screen_path = dir.path().join("screen.png");
    let out = dir.path().join("capture.png");

    let screen = RgbaImage::from_fn(120, 90, |x, y| Rgba([x as u8, y as u8, 7, 255]));
    screen.save(&screen_path).unwrap();

    let selection = Rectangle::from_edges(10, 20, 50, 60);
    let region = capture_to_file(&selection, &screen_path, &out).unwrap();
    assert_eq!((region.width, region.height), (40, 40));

    let captured = image::open(&out).unwrap().to_rgba8();
    assert_eq!(captured.dimensions(), (40, 40));
    assert_eq!(captured.get_pixel(0, 0), &Rgba([10, 20, 7, 255]));
}

#[test]
fn capture_outside_screen_fails() {
    let dir = tempfile::tempdir().unwrap();
    let screen_path = dir.path().join("screen.png");
    RgbaImage::new(30, 30).save(&screen_path).unwrap();

    let selection = Rectangle::from_edges(10, 10, 40, 20);
    let err = capture_to_file(&selection, &screen_path, &dir.path().join("out.png")).unwrap_err();
    assert!(err.to_string().contains("exceeds screen bounds"));
}

#[test]
fn capture_creates_missing_output_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let screen_path = dir.path().join("screen.png");
    RgbaImage::new(64, 64).save(&screen_path).unwrap();

    let out = dir
        .path()
        .join("screenshots")
        .join(region_capture::screenshot_file_name(
            chrono::NaiveDate::from_ymd_opt(2024, 5, 6)
                .unwrap()
                .and_hms_opt(7, 8, 9)
                .unwrap(),
        ));
    capture_to_file(&Rectangle::from_edges(0, 0, 16, 16), &screen_path, &out).unwrap();

    assert!(out.ends_with("screenshots/screenshot_20240506_070809.png"));
    assert_eq!(image::open(&out).unwrap().to_rgba8().dimensions(), (16, 16));
}
