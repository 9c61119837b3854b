//! Headless surface that replays a fixed key sequence.

use std::collections::VecDeque;
use std::time::Duration;

use image_engine::ImageBuffer;

use super::FrameCache;
use crate::{DisplayError, Result, Surface};

/// A surface with no real window, driven by a pre-recorded key script.
///
/// Each `wait_key` call consumes one script entry (`None` meaning the poll
/// timed out). Once the script is empty, `wait_key` fails with
/// [`DisplayError::ScriptExhausted`] so a loop that never sees Escape
/// still finishes.
#[derive(Debug)]
pub struct ScriptedSurface {
    script: VecDeque<Option<i32>>,
    open: bool,
    renders: u64,
    uploads: u64,
    frames: FrameCache<()>,
    fail_render_at: Option<u64>,
    timeouts: Vec<Duration>,
    close_calls: u32,
    last_frame: Option<(u32, u32, u8)>,
}

impl ScriptedSurface {
    pub fn new(events: impl IntoIterator<Item = Option<i32>>) -> Self {
        Self {
            script: events.into_iter().collect(),
            open: true,
            renders: 0,
            uploads: 0,
            frames: FrameCache::new(),
            fail_render_at: None,
            timeouts: Vec::new(),
            close_calls: 0,
            last_frame: None,
        }
    }

    /// Script where every poll yields a key press.
    pub fn from_keys(keys: &[i32]) -> Self {
        Self::new(keys.iter().copied().map(Some))
    }

    /// Make the `n`th render (1-based) fail.
    pub fn fail_render_at(mut self, n: u64) -> Self {
        self.fail_render_at = Some(n);
        self
    }

    /// Successful renders so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Times a frame's pixels were uploaded; repeated frames are not counted.
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Timeouts passed to each `wait_key` call, in order.
    pub fn timeouts(&self) -> &[Duration] {
        &self.timeouts
    }

    pub fn close_calls(&self) -> u32 {
        self.close_calls
    }

    /// `(width, height, channels)` of the most recent frame.
    pub fn last_frame(&self) -> Option<(u32, u32, u8)> {
        self.last_frame
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Surface for ScriptedSurface {
    fn render(&mut self, frame: &ImageBuffer) -> Result<()> {
        if !self.open {
            return Err(DisplayError::Closed);
        }
        if self.fail_render_at == Some(self.renders + 1) {
            return Err(DisplayError::Render("scripted render failure".into()));
        }
        let uploads = &mut self.uploads;
        self.frames
            .get_or_try_insert_with(frame, |_, _| {
                *uploads += 1;
                Ok::<_, DisplayError>(())
            })?;
        self.renders += 1;
        self.last_frame = Some((frame.width(), frame.height(), frame.channels()));
        Ok(())
    }

    fn wait_key(&mut self, timeout: Duration) -> Result<Option<i32>> {
        if !self.open {
            return Err(DisplayError::Closed);
        }
        self.timeouts.push(timeout);
        self.script.pop_front().ok_or(DisplayError::ScriptExhausted)
    }

    fn close_all(&mut self) {
        self.frames.take();
        self.open = false;
        self.close_calls += 1;
    }

    fn open_windows(&self) -> usize {
        usize::from(self.open)
    }
}
