//! Collaborator interfaces
//!
//! The engine mutates the real window, queries the monitor layout, drives
//! the ghost preview and warps the OS cursor exclusively through the
//! traits in this module. The `win32` submodule provides the Windows
//! implementations; other hosts supply their own.

use thiserror::Error;

use crate::domain::geometry::Rect;

#[cfg(target_os = "windows")]
pub mod win32;

/// A monitor as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monitor {
    /// Full bounds of the monitor.
    ///
    /// Intersection queries run against these, so a pointer hovering over
    /// the taskbar still finds its monitor.
    pub bounds: Rect,
    /// Usable bounds: the visible area excluding reserved OS chrome such
    /// as the taskbar. All snap geometry is computed against these.
    pub usable_bounds: Rect,
    /// Whether this is the primary monitor.
    pub is_primary: bool,
}

/// Errors raised while enumerating monitors.
///
/// These never reach the engine: adapters degrade failures to an empty
/// monitor set, which makes the requesting operation a no-op.
#[derive(Debug, Error)]
pub enum MonitorQueryError {
    #[error("failed to enumerate monitors")]
    EnumerationFailed,
    #[error("no monitors reported by the host")]
    NoMonitors,
}

/// Ordered monitor lookup.
///
/// Implementations must list the primary monitor first; the order of the
/// remaining monitors is unspecified.
pub trait MonitorQuery {
    /// Returns the monitors whose full bounds intersect `rect`.
    fn monitors_intersecting(&self, rect: Rect) -> Vec<Monitor>;
}

/// The toolkit window the engine manipulates.
///
/// All geometry is screen-space f64, matching what toolkits report for
/// undecorated stages. Setters are expected to apply immediately; the
/// engine never batches.
pub trait WindowHandle {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);

    fn min_width(&self) -> f64 {
        0.0
    }
    fn min_height(&self) -> f64 {
        0.0
    }
    fn max_width(&self) -> f64 {
        f64::INFINITY
    }
    fn max_height(&self) -> f64 {
        f64::INFINITY
    }

    fn set_iconified(&mut self, iconified: bool);

    /// Keeps the window above the ghost preview while a snap target is
    /// being shown. Cleared by the engine on every gesture exit path.
    fn set_always_on_top(&mut self, on_top: bool);
}

/// The transparent ghost window shown as snap feedback.
pub trait PreviewSurface {
    /// Shows the surface, or raises it if already showing
    fn show(&mut self);
    /// Hides the surface; must be safe to call while hidden
    fn close(&mut self);
    /// Moves and resizes the surface
    fn set_geometry(&mut self, rect: Rect);
    fn is_showing(&self) -> bool;
}

/// Host pointer device used to keep the cursor inside usable bounds.
pub trait PointerDevice {
    /// Warps the cursor to the given screen position.
    fn move_to(&mut self, x: f64, y: f64);
}

/// Hosts without cursor warping pass `()`.
impl PointerDevice for () {
    fn move_to(&mut self, _x: f64, _y: f64) {}
}

/// Optional OS hook invoked around iconify transitions to keep the native
/// minimize animation working on undecorated windows.
///
/// Absence or failure degrades animation smoothness only; it must never
/// affect engine state.
pub trait AnimationHint {
    /// Called when the window is about to iconify
    fn enable(&mut self);
    /// Called when the window is restored
    fn disable(&mut self);
}

/// Hosts without an animation hook pass `()`.
impl AnimationHint for () {
    fn enable(&mut self) {}
    fn disable(&mut self) {}
}
