//! The display backend abstraction.

use std::time::Duration;

use image_engine::ImageBuffer;

use crate::Result;

/// A place an image can be shown, plus the keyboard attached to it.
pub trait Surface {
    /// Draw `frame`, replacing whatever was shown before.
    fn render(&mut self, frame: &ImageBuffer) -> Result<()>;

    /// Block up to `timeout` for a key press.
    ///
    /// Returns `Ok(None)` when no key arrived in time. Non-keyboard events
    /// are swallowed.
    fn wait_key(&mut self, timeout: Duration) -> Result<Option<i32>>;

    /// Close every window this surface opened. Must be idempotent.
    fn close_all(&mut self);

    /// Number of windows currently open.
    fn open_windows(&self) -> usize;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render(&mut self, frame: &ImageBuffer) -> Result<()> {
        (**self).render(frame)
    }

    fn wait_key(&mut self, timeout: Duration) -> Result<Option<i32>> {
        (**self).wait_key(timeout)
    }

    fn close_all(&mut self) {
        (**self).close_all()
    }

    fn open_windows(&self) -> usize {
        (**self).open_windows()
    }
}
