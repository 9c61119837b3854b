//! Scoped ownership of a display surface.

use tracing::{debug, info};

use crate::Surface;

/// Owns a [`Surface`] and closes its windows exactly once.
///
/// Release happens on [`DisplayContext::release`], on [`DisplayContext::close`],
/// or on drop, whichever comes first. Error and panic paths therefore never
/// leak a window.
pub struct DisplayContext<S: Surface> {
    surface: S,
    released: bool,
}

impl<S: Surface> DisplayContext<S> {
    /// Take ownership of an already-opened surface.
    pub fn acquire(surface: S) -> Self {
        info!(windows = surface.open_windows(), "Display context acquired");
        Self {
            surface,
            released: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Close all windows. Later calls are no-ops.
    pub fn release(&mut self) {
        if self.released {
            debug!("Display context already released");
            return;
        }
        self.surface.close_all();
        self.released = true;
        info!("Display context released");
    }

    /// Release and consume the context.
    pub fn close(mut self) {
        self.release();
    }
}

impl<S: Surface> Drop for DisplayContext<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSurface;

    #[test]
    fn test_release_closes_windows() {
        let mut surface = ScriptedSurface::from_keys(&[]);
        assert_eq!(surface.open_windows(), 1);

        let mut ctx = DisplayContext::acquire(&mut surface);
        ctx.release();
        assert!(ctx.is_released());
        assert_eq!(ctx.surface().open_windows(), 0);
        drop(ctx);

        assert_eq!(surface.close_calls(), 1);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut surface = ScriptedSurface::from_keys(&[]);
        let mut ctx = DisplayContext::acquire(&mut surface);
        ctx.release();
        ctx.release();
        ctx.close();

        assert_eq!(surface.close_calls(), 1);
    }

    #[test]
    fn test_drop_releases() {
        let mut surface = ScriptedSurface::from_keys(&[]);
        {
            let _ctx = DisplayContext::acquire(&mut surface);
        }
        assert_eq!(surface.open_windows(), 0);
        assert_eq!(surface.close_calls(), 1);
    }

    #[test]
    fn test_panic_releases() {
        let mut surface = ScriptedSurface::from_keys(&[]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ctx = DisplayContext::acquire(&mut surface);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(surface.open_windows(), 0);
    }
}
