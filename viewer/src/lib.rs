//! Puppy viewer: load an image, halve it, and show it until Escape.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{init_foundation, prepare_frame, run_with};
#[cfg(feature = "sdl")]
pub use bootstrap::run;
