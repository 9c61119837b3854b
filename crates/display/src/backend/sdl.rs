//! SDL2 window backend.

use std::time::Duration;

use image_engine::ImageBuffer;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Texture, WindowCanvas};
use tracing::{debug, info};

use super::FrameCache;
use crate::{DisplayError, Result, Surface};

/// A single native window showing one image.
///
/// The frame is uploaded to a texture on first render and re-presented on
/// every later render until a different frame arrives.
pub struct SdlSurface {
    // Dropping the context shuts SDL down, so it lives as long as the surface.
    _context: sdl2::Sdl,
    // Textures belong to the canvas' renderer and must be destroyed before it.
    textures: FrameCache<Texture>,
    canvas: Option<WindowCanvas>,
    event_pump: EventPump,
}

impl SdlSurface {
    /// Initialise SDL video and open a centred `width x height` window.
    pub fn open(title: &str, width: u32, height: u32) -> Result<Self> {
        let context = sdl2::init().map_err(DisplayError::Init)?;
        let video = context.video().map_err(DisplayError::Init)?;

        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| DisplayError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Window(e.to_string()))?;

        let event_pump = context.event_pump().map_err(DisplayError::Init)?;

        info!(title, width, height, "Window opened");
        Ok(Self {
            _context: context,
            textures: FrameCache::new(),
            canvas: Some(canvas),
            event_pump,
        })
    }
}

impl Surface for SdlSurface {
    fn render(&mut self, frame: &ImageBuffer) -> Result<()> {
        let canvas = self.canvas.as_mut().ok_or(DisplayError::Closed)?;
        let texture = self
            .textures
            .get_or_try_insert_with(frame, |frame, stale| {
                if let Some(stale) = stale {
                    // SAFETY: the renderer that owns it is still alive.
                    unsafe { stale.destroy() };
                }
                upload(canvas, frame)
            })?;

        canvas.set_draw_color(Color::BLACK);
        canvas.clear();
        canvas
            .copy(texture, None, None)
            .map_err(DisplayError::Render)?;
        canvas.present();
        Ok(())
    }

    fn wait_key(&mut self, timeout: Duration) -> Result<Option<i32>> {
        let timeout_ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);

        match self.event_pump.wait_event_timeout(timeout_ms) {
            Some(Event::KeyDown {
                keycode: Some(keycode),
                ..
            }) => Ok(Some(keycode as i32)),
            Some(Event::Quit { .. }) => {
                debug!("Ignoring window close request; press Escape to exit");
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn close_all(&mut self) {
        if let Some(texture) = self.textures.take() {
            // SAFETY: destroyed before the canvas and its renderer below.
            unsafe { texture.destroy() };
        }
        if let Some(canvas) = self.canvas.take() {
            drop(canvas);
            info!("Window closed");
        }
    }

    fn open_windows(&self) -> usize {
        usize::from(self.canvas.is_some())
    }
}

/// Copy `frame` into a new RGB24 texture.
fn upload(canvas: &WindowCanvas, frame: &ImageBuffer) -> Result<Texture> {
    let (width, height) = frame.dimensions();

    let converted;
    let pixels: &[u8] = if frame.channels() == 3 {
        frame.as_bytes()
    } else {
        converted = frame.to_rgb8();
        converted.as_raw()
    };

    let mut texture = canvas
        .texture_creator()
        .create_texture_static(PixelFormatEnum::RGB24, width, height)
        .map_err(|e| DisplayError::Render(e.to_string()))?;
    texture
        .update(None, pixels, width as usize * 3)
        .map_err(|e| DisplayError::Render(e.to_string()))?;

    debug!(width, height, "Frame uploaded to texture");
    Ok(texture)
}
