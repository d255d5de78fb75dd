//! Ghost-window lifecycle
//!
//! Thin stateful wrapper around the snap-feedback overlay. The surface is
//! optional because snapping can be toggled off in the middle of a
//! gesture; every call on an absent surface is a safe no-op rather than
//! a crash.

use log::trace;

use crate::domain::geometry::Rect;
use crate::platform::PreviewSurface;

/// Drives the transparent overlay used as snap-target feedback.
pub struct PreviewController<P> {
    surface: Option<P>,
}

impl<P: PreviewSurface> PreviewController<P> {
    pub fn new(surface: Option<P>) -> Self {
        Self { surface }
    }

    /// Attaches a surface if none is present
    pub fn attach(&mut self, surface: P) {
        if self.surface.is_none() {
            self.surface = Some(surface);
        }
    }

    /// Closes and drops the surface
    pub fn detach(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.close();
        }
    }

    /// Returns true if a surface is attached
    pub fn exists(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns true if the overlay is currently visible
    pub fn is_showing(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.is_showing())
    }

    /// Repositions the overlay and shows it
    pub fn show_at(&mut self, rect: Rect) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_geometry(rect);
            surface.show();
            trace!("preview shown at {rect:?}");
        }
    }

    /// Hides the overlay
    pub fn hide(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.close();
        }
    }
}
