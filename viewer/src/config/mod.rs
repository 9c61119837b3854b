//! Configuration management: defaults, validation, loading from environment.

pub mod defaults;
pub mod validation;
pub mod viewer_config;

pub use viewer_config::ViewerConfig;
