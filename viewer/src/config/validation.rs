//! Setting value validation.

use super::defaults::{IMAGE_PATH, LOG_LEVEL, POLL_MS, SCALE, WINDOW_TITLE};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        IMAGE_PATH => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        WINDOW_TITLE => {
            if value.is_empty() || value.chars().count() > 255 {
                return Err("title must be 1-255 characters".into());
            }
        }
        SCALE => {
            let v: f64 = value.parse().map_err(|_| "must be a float")?;
            if !(0.01..=8.0).contains(&v) {
                return Err("must be between 0.01 and 8.0".into());
            }
        }
        POLL_MS => validate_int_range(value, 1, 1000)?,
        LOG_LEVEL => {
            if !LOG_LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
                return Err("must be trace, debug, info, warn, or error".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path() {
        assert!(validate_setting(IMAGE_PATH, "DATA/00-puppy.jpg").is_ok());
        assert!(validate_setting(IMAGE_PATH, "").is_err());
        assert!(validate_setting(IMAGE_PATH, "   ").is_err());
    }

    #[test]
    fn test_window_title() {
        assert!(validate_setting(WINDOW_TITLE, "Puppy").is_ok());
        assert!(validate_setting(WINDOW_TITLE, "").is_err());
        assert!(validate_setting(WINDOW_TITLE, &"x".repeat(256)).is_err());
        assert!(validate_setting(WINDOW_TITLE, &"x".repeat(255)).is_ok());
    }

    #[test]
    fn test_scale() {
        assert!(validate_setting(SCALE, "0.5").is_ok());
        assert!(validate_setting(SCALE, "8").is_ok());
        assert!(validate_setting(SCALE, "0").is_err());
        assert!(validate_setting(SCALE, "-0.5").is_err());
        assert!(validate_setting(SCALE, "NaN").is_err());
        assert_eq!(
            validate_setting(SCALE, "half").unwrap_err(),
            "must be a float"
        );
    }

    #[test]
    fn test_poll_ms() {
        assert!(validate_setting(POLL_MS, "1").is_ok());
        assert!(validate_setting(POLL_MS, "1000").is_ok());
        assert_eq!(
            validate_setting(POLL_MS, "0").unwrap_err(),
            "must be between 1 and 1000"
        );
        assert!(validate_setting(POLL_MS, "1.5").is_err());
    }

    #[test]
    fn test_log_level() {
        assert!(validate_setting(LOG_LEVEL, "debug").is_ok());
        assert!(validate_setting(LOG_LEVEL, "WARN").is_ok());
        assert!(validate_setting(LOG_LEVEL, "verbose").is_err());
    }

    #[test]
    fn test_unknown_key_accepted() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
