//! Window display for decoded images.
//!
//! A [`Surface`] is anything that can show an [`image_engine::ImageBuffer`]
//! and report key presses. [`DisplayContext`] owns a surface and guarantees
//! its windows are closed exactly once, and [`DisplayLoop`] drives the
//! render-then-poll cycle until Escape is pressed.

pub mod backend;
pub mod context;
pub mod event_loop;
pub mod keys;
pub mod surface;

// Re-exports for convenience
pub use backend::{FrameCache, ScriptedSurface};
#[cfg(feature = "sdl")]
pub use backend::SdlSurface;
pub use context::DisplayContext;
pub use event_loop::{DisplayLoop, LoopOptions, LoopState, LoopSummary, display_loop};
pub use keys::is_exit_key;
pub use surface::Surface;

/// Errors that can occur while displaying images.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Display initialization failed: {0}")]
    Init(String),

    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Surface already closed")]
    Closed,

    #[error("Key script exhausted before an exit key was seen")]
    ScriptExhausted,
}

/// Result type alias for display operations.
pub type Result<T> = std::result::Result<T, DisplayError>;
