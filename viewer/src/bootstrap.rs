use anyhow::Context;
use display::{LoopSummary, Surface};
use image_engine::ImageBuffer;
use tracing_subscriber::EnvFilter;

use crate::config::ViewerConfig;

#[cfg(test)]
mod tests;

/// Foundation init: `.env`, tracing, configuration.
///
/// Tracing goes up before the configuration is read so that warnings about
/// rejected settings reach the log.
pub fn init_foundation<I, A>(args: I) -> ViewerConfig
where
    I: IntoIterator<Item = A>,
    A: Into<String>,
{
    let dotenv = load_dotenv();
    init_tracing(&ViewerConfig::log_level_from(|key| std::env::var(key).ok()));
    let config = ViewerConfig::load().with_args(args);

    match dotenv {
        Some(path) => tracing::info!("Loaded .env from: {path}"),
        None => tracing::info!("No .env file found, using system environment variables"),
    }
    tracing::info!(
        image = %config.image_path.display(),
        title = %config.window_title,
        scale = config.scale,
        poll_ms = config.poll_interval_ms,
        "Settings loaded"
    );
    config
}

/// Decode the configured image and scale it for display.
pub fn prepare_frame(config: &ViewerConfig) -> anyhow::Result<ImageBuffer> {
    let path = &config.image_path;
    let original = image_engine::load(path)
        .with_context(|| format!("Image not found or undecodable: {}", path.display()))?;
    tracing::info!(
        width = original.width(),
        height = original.height(),
        channels = original.channels(),
        "Image loaded"
    );

    let frame = image_engine::resize(&original, config.scale, config.scale)
        .with_context(|| format!("Failed to resize {}", path.display()))?;
    tracing::info!(
        width = frame.width(),
        height = frame.height(),
        "Image resized"
    );
    Ok(frame)
}

/// Prepare the frame, open a surface through `open`, and run the display loop.
///
/// `open` receives the window title and the frame's width and height.
pub fn run_with<S, F>(config: &ViewerConfig, open: F) -> anyhow::Result<LoopSummary>
where
    S: Surface,
    F: FnOnce(&str, u32, u32) -> display::Result<S>,
{
    let frame = prepare_frame(config)?;
    let surface = open(&config.window_title, frame.width(), frame.height())
        .context("Failed to open display")?;

    let summary = display::display_loop(surface, &frame, config.loop_options())
        .context("Display loop failed")?;
    tracing::info!(frames = summary.frames_rendered, "Viewer closed");
    Ok(summary)
}

/// Run the viewer in a native SDL2 window.
#[cfg(feature = "sdl")]
pub fn run(config: &ViewerConfig) -> anyhow::Result<LoopSummary> {
    run_with(config, display::SdlSurface::open)
}

/// `RUST_LOG` wins; otherwise `fallback_level` applies to every target.
fn log_filter(fallback_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level))
}

fn init_tracing(fallback_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(fallback_level))
        .init();
}

fn load_dotenv() -> Option<&'static str> {
    let candidates = [".env", "../.env", "../../.env"];
    candidates
        .into_iter()
        .find(|path| dotenvy::from_filename(path).is_ok())
}
