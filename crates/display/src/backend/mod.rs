//! Concrete [`crate::Surface`] implementations.

mod frame_cache;
mod scripted;
#[cfg(feature = "sdl")]
mod sdl;

pub use frame_cache::FrameCache;
pub use scripted::ScriptedSurface;
#[cfg(feature = "sdl")]
pub use sdl::SdlSurface;
