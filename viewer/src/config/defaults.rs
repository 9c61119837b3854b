//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const IMAGE_PATH: &str = "PUPPY_IMAGE_PATH";
pub const WINDOW_TITLE: &str = "PUPPY_WINDOW_TITLE";
pub const SCALE: &str = "PUPPY_SCALE";
pub const POLL_MS: &str = "PUPPY_POLL_MS";
pub const LOG_LEVEL: &str = "PUPPY_LOG_LEVEL";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (IMAGE_PATH, "DATA/00-puppy.jpg", "Image file to display"),
    (WINDOW_TITLE, "Puppy", "Title of the viewer window"),
    (SCALE, "0.5", "Scale factor applied to both axes"),
    (POLL_MS, "1", "Milliseconds to wait for a key between frames"),
    (LOG_LEVEL, "info", "Log level used when RUST_LOG is unset"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// All setting keys, in definition order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}
