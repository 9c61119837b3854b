//! Runtime viewer configuration loaded from environment overrides.

use std::path::PathBuf;
use std::time::Duration;

use display::LoopOptions;

use super::defaults::{self, IMAGE_PATH, LOG_LEVEL, POLL_MS, SCALE, WINDOW_TITLE};
use super::validation::validate_setting;

/// Runtime configuration. Defaults reproduce the stock puppy viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub image_path: PathBuf,
    pub window_title: String,
    pub scale: f64,
    pub poll_interval_ms: u64,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("DATA/00-puppy.jpg"),
            window_title: "Puppy".into(),
            scale: image_engine::DEFAULT_SCALE,
            poll_interval_ms: 1,
            log_level: "info".into(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to their defaults; invalid values are logged
    /// and fall back too.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let fallback = || defaults::get_default(key).unwrap_or_default().to_string();
            match lookup(key) {
                Some(value) => match validate_setting(key, &value) {
                    Ok(()) => value,
                    Err(reason) => {
                        tracing::warn!("Ignoring invalid {key}={value:?}: {reason}");
                        fallback()
                    }
                },
                None => fallback(),
            }
        };

        let base = Self::default();
        Self {
            image_path: PathBuf::from(g(IMAGE_PATH)),
            window_title: g(WINDOW_TITLE),
            scale: g(SCALE).parse().unwrap_or(base.scale),
            poll_interval_ms: g(POLL_MS).parse().unwrap_or(base.poll_interval_ms),
            log_level: g(LOG_LEVEL).to_ascii_lowercase(),
        }
    }

    /// Read just the log level, for installing tracing before [`Self::load_from`].
    ///
    /// An invalid value falls back to the default here without a warning;
    /// the full load reports it once the subscriber is up.
    pub fn log_level_from(lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup(LOG_LEVEL)
            .filter(|value| validate_setting(LOG_LEVEL, value).is_ok())
            .unwrap_or_else(|| Self::default().log_level)
            .to_ascii_lowercase()
    }

    /// Apply command-line arguments (program name already stripped).
    ///
    /// The first argument, when present and non-empty, replaces the image path.
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        if let Some(path) = args.into_iter().next().map(Into::into) {
            if validate_setting(IMAGE_PATH, &path).is_ok() {
                self.image_path = PathBuf::from(path);
            }
        }
        self
    }

    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}
