use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use region_capture::settings::{ConfigManager, CornerDetection, Settings};
use region_capture::{capture_to_file, default_capture_path, default_script, load_script, replay};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DetectionArg {
    MarkerClass,
    HitRadius,
}

impl From<DetectionArg> for CornerDetection {
    fn from(arg: DetectionArg) -> Self {
        match arg {
            DetectionArg::MarkerClass => CornerDetection::MarkerClass,
            DetectionArg::HitRadius => CornerDetection::HitRadius,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "region_capture",
    about = "Replay a pointer session through the region selection tracker"
)]
struct Cli {
    /// Settings file (defaults to ~/.region_capture/settings.json)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the corner detection strategy from the settings file
    #[arg(long, value_enum)]
    corner_detection: Option<DetectionArg>,

    /// JSON array of pointer events; a built-in draw-and-resize session if omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Screen image to crop the final selection from
    #[arg(long)]
    image: Option<PathBuf>,

    /// Where to write the cropped PNG (defaults to <pictures>/screenshots/screenshot_<timestamp>.png)
    #[arg(long, requires = "image")]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.settings {
        Some(path) => ConfigManager::from_path(path)
            .with_context(|| format!("invalid settings file {}", path.display()))?,
        None => ConfigManager::new(),
    };
    if let Some(detection) = cli.corner_detection {
        config.update(Settings {
            corner_detection: detection.into(),
            ..config.get()
        })?;
    }

    let events = match &cli.script {
        Some(path) => load_script(path)?,
        None => default_script(),
    };

    let report = replay(&config.get(), &events);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(image) = &cli.image {
        let selection = report
            .selection
            .context("session ended without a selection to capture")?;
        let out = cli.out.clone().unwrap_or_else(default_capture_path);
        let region = capture_to_file(&selection, image, &out)?;
        info!(
            "wrote {}x{} capture to {}",
            region.width,
            region.height,
            out.display()
        );
    }

    Ok(())
}
