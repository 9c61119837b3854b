//! Per-frame upload cache shared by the backends.

use image_engine::ImageBuffer;

/// Keeps a value built from the last frame shown (e.g. a GPU texture).
///
/// The value is rebuilt only when a frame with different contents arrives.
/// The display loop shows one constant frame, so a backend uploads once and
/// re-presents afterwards.
#[derive(Debug)]
pub struct FrameCache<T> {
    entry: Option<(ImageBuffer, T)>,
}

impl<T> FrameCache<T> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Return the value for `frame`, building it if the cached one is stale.
    ///
    /// `build` receives the outdated value, if any, so it can be released or
    /// reused.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        frame: &ImageBuffer,
        build: impl FnOnce(&ImageBuffer, Option<T>) -> Result<T, E>,
    ) -> Result<&mut T, E> {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == *frame => (cached, value),
            stale => (frame.clone(), build(frame, stale.map(|(_, value)| value))?),
        };
        let (_, value) = self.entry.insert(entry);
        Ok(value)
    }

    /// Drop the cached frame, handing back its value.
    pub fn take(&mut self) -> Option<T> {
        self.entry.take().map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

impl<T> Default for FrameCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
