use std::path::PathBuf;

use display::ScriptedSurface;
use display::keys::{ENTER, ESCAPE};
use image::{Rgb, RgbImage};

use super::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("puppy-viewer-{}-{name}", std::process::id()))
}

fn write_test_image(name: &str, width: u32, height: u32) -> PathBuf {
    let path = temp_path(name);
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]))
        .save(&path)
        .unwrap();
    path
}

fn config_for(path: PathBuf) -> ViewerConfig {
    ViewerConfig {
        image_path: path,
        ..ViewerConfig::default()
    }
}

#[test]
fn test_prepare_frame_halves_image() {
    let path = write_test_image("halve.png", 400, 300);
    let frame = prepare_frame(&config_for(path.clone())).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(frame.dimensions(), (200, 150));
    assert_eq!(frame.channels(), 3);
}

#[test]
fn test_end_to_end_enter_enter_escape() {
    let path = write_test_image("e2e.png", 400, 300);
    let config = config_for(path.clone());

    let mut surface = ScriptedSurface::from_keys(&[ENTER, ENTER, ESCAPE]);
    let mut opened = None;
    let (surface_ref, opened_ref) = (&mut surface, &mut opened);
    let summary = run_with(&config, move |title, width, height| {
        *opened_ref = Some((title.to_string(), width, height));
        Ok(surface_ref)
    })
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(opened, Some(("Puppy".to_string(), 200, 150)));
    assert_eq!(summary.frames_rendered, 3);
    assert_eq!(surface.renders(), 3);
    assert_eq!(surface.last_frame(), Some((200, 150, 3)));
    assert_eq!(surface.open_windows(), 0);
}

#[test]
fn test_missing_file_reported_before_opening_display() {
    let config = config_for(temp_path("missing.jpg"));
    let mut opened = false;

    let err = run_with(&config, |_, _, _| {
        opened = true;
        Ok(ScriptedSurface::from_keys(&[ESCAPE]))
    })
    .unwrap_err();

    assert!(!opened);
    assert!(err.to_string().contains("Image not found or undecodable"));
    assert!(matches!(
        err.downcast_ref::<image_engine::ImageError>(),
        Some(image_engine::ImageError::NotFound { .. })
    ));
}

#[test]
fn test_one_pixel_image_is_rejected() {
    let path = write_test_image("tiny.png", 1, 1);
    let err = prepare_frame(&config_for(path.clone())).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(
        err.downcast_ref::<image_engine::ImageError>(),
        Some(image_engine::ImageError::EmptyResult { .. })
    ));
}

#[test]
fn test_configured_scale_applies() {
    let path = write_test_image("quarter.png", 400, 300);
    let config = ViewerConfig {
        scale: 0.25,
        ..config_for(path.clone())
    };
    let frame = prepare_frame(&config).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(frame.dimensions(), (100, 75));
}

#[test]
fn test_display_open_failure_propagates() {
    let path = write_test_image("noopen.png", 8, 8);
    let err = run_with(&config_for(path.clone()), |_, _, _| {
        Err::<ScriptedSurface, _>(display::DisplayError::Init("no video device".into()))
    })
    .unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(err.to_string().contains("Failed to open display"));
}
