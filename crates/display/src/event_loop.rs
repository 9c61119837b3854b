//! The render-then-poll display loop.

use std::time::Duration;

use image_engine::ImageBuffer;
use tracing::{debug, info, warn};

use crate::keys::is_exit_key;
use crate::{DisplayContext, Result, Surface};

/// Default wait for a key press between frames.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Upper bound on how long each iteration waits for a key.
    pub poll_interval: Duration,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Counters collected over one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames_rendered: u64,
    pub keys_ignored: u64,
}

/// Drives a surface until an exit key is pressed.
#[derive(Debug)]
pub struct DisplayLoop {
    options: LoopOptions,
    state: LoopState,
}

impl DisplayLoop {
    pub fn new(options: LoopOptions) -> Self {
        Self {
            options,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Render `frame` and poll for keys until Escape arrives.
    ///
    /// Every iteration renders before it polls, so the number of frames
    /// rendered equals the number of polls. A backend error ends the loop
    /// early; the state is `Terminated` afterwards either way. The context
    /// is left for the caller to release.
    pub fn run<S: Surface>(
        &mut self,
        ctx: &mut DisplayContext<S>,
        frame: &ImageBuffer,
    ) -> Result<LoopSummary> {
        self.state = LoopState::Running;
        info!(
            width = frame.width(),
            height = frame.height(),
            poll_ms = self.options.poll_interval.as_millis() as u64,
            "Display loop started"
        );

        let mut summary = LoopSummary::default();
        let result = self.poll_until_exit(ctx.surface_mut(), frame, &mut summary);
        self.state = LoopState::Terminated;

        match &result {
            Ok(()) => info!(
                frames = summary.frames_rendered,
                ignored_keys = summary.keys_ignored,
                "Display loop terminated by exit key"
            ),
            Err(e) => warn!(
                frames = summary.frames_rendered,
                "Display loop aborted: {e}"
            ),
        }

        result.map(|()| summary)
    }

    fn poll_until_exit<S: Surface>(
        &mut self,
        surface: &mut S,
        frame: &ImageBuffer,
        summary: &mut LoopSummary,
    ) -> Result<()> {
        loop {
            surface.render(frame)?;
            summary.frames_rendered += 1;

            match surface.wait_key(self.options.poll_interval)? {
                Some(code) if is_exit_key(code) => return Ok(()),
                Some(code) => {
                    summary.keys_ignored += 1;
                    debug!(code, "Ignoring key");
                }
                None => {}
            }
        }
    }
}

impl Default for DisplayLoop {
    fn default() -> Self {
        Self::new(LoopOptions::default())
    }
}

/// Show `frame` on `surface` until Escape, then close every window.
///
/// Windows are closed on the error path too.
pub fn display_loop<S: Surface>(
    surface: S,
    frame: &ImageBuffer,
    options: LoopOptions,
) -> Result<LoopSummary> {
    let mut ctx = DisplayContext::acquire(surface);
    let summary = DisplayLoop::new(options).run(&mut ctx, frame)?;
    ctx.close();
    Ok(summary)
}
