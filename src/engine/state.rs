//! Engine state types
//!
//! The mode enum, the previous-geometry memory and the drag anchor. The
//! state itself is owned by `SnapController`; these types only guarantee
//! that reads of not-yet-populated memory degrade to live window bounds
//! instead of garbage.

use crate::domain::geometry::{Point, Size};
use crate::platform::WindowHandle;

/// Exclusive window mode.
///
/// Minimized is tracked separately by the controller because a window
/// keeps its mode while iconified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
    Snapped,
}

/// Last known Normal-mode geometry.
///
/// Written whenever the window is about to leave Normal mode, read when
/// it returns. Each component starts as an "unset" sentinel and is lazily
/// filled from the live window on first read, so a restore that happens
/// before any snapshot still produces real coordinates.
#[derive(Debug, Clone)]
pub struct PreviousGeometry {
    size: Size,
    pos: Option<Point>,
}

impl PreviousGeometry {
    pub fn new() -> Self {
        Self {
            size: Size::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            pos: None,
        }
    }

    /// Snapshots the window's full live geometry
    pub fn capture(&mut self, window: &impl WindowHandle) {
        self.size = Size::new(window.width(), window.height());
        self.pos = Some(Point::new(window.x(), window.y()));
    }

    /// Records only height and y, leaving width/x untouched.
    ///
    /// Used by the vertical-only snap toggle. A still-unset x is filled
    /// from the live window so the pair is never half-garbage.
    pub fn record_vertical(&mut self, height: f64, y: f64, window: &impl WindowHandle) {
        self.size.height = height;
        let x = self.pos.map_or_else(|| window.x(), |p| p.x);
        self.pos = Some(Point::new(x, y));
    }

    /// Returns the remembered size, filling unset components from the
    /// live window
    pub fn size(&mut self, window: &impl WindowHandle) -> Size {
        if self.size.width == f64::NEG_INFINITY {
            self.size.width = window.width();
        }
        if self.size.height == f64::NEG_INFINITY {
            self.size.height = window.height();
        }
        self.size
    }

    /// Returns the remembered position, filling it from the live window
    /// if never written
    pub fn pos(&mut self, window: &impl WindowHandle) -> Point {
        *self
            .pos
            .get_or_insert_with(|| Point::new(window.x(), window.y()))
    }
}

impl Default for PreviousGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor data captured when a move drag starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragAnchor {
    /// Pointer offset from the window origin; subtracted from each drag
    /// sample so the grab point stays under the cursor.
    pub offset: Point,
    /// Screen x at press. A release at exactly this x means the drag had
    /// no net horizontal movement and commits nothing.
    pub press_x: f64,
    /// Vertical extent of the move grip. A snapped window un-snaps once
    /// the pointer drops below this line.
    pub release_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWindow;

    impl WindowHandle for FixedWindow {
        fn x(&self) -> f64 {
            100.0
        }
        fn y(&self) -> f64 {
            200.0
        }
        fn width(&self) -> f64 {
            800.0
        }
        fn height(&self) -> f64 {
            600.0
        }
        fn set_x(&mut self, _: f64) {}
        fn set_y(&mut self, _: f64) {}
        fn set_width(&mut self, _: f64) {}
        fn set_height(&mut self, _: f64) {}
        fn set_iconified(&mut self, _: bool) {}
        fn set_always_on_top(&mut self, _: bool) {}
    }

    #[test]
    fn unset_memory_reads_live_bounds() {
        let mut prev = PreviousGeometry::new();
        let window = FixedWindow;
        assert_eq!(prev.size(&window), Size::new(800.0, 600.0));
        assert_eq!(prev.pos(&window), Point::new(100.0, 200.0));
    }

    #[test]
    fn capture_overrides_lazy_init() {
        let mut prev = PreviousGeometry::new();
        let window = FixedWindow;
        prev.capture(&window);
        assert_eq!(prev.size(&window), Size::new(800.0, 600.0));
        assert_eq!(prev.pos(&window), Point::new(100.0, 200.0));
    }

    #[test]
    fn record_vertical_fills_missing_x_from_window() {
        let mut prev = PreviousGeometry::new();
        let window = FixedWindow;
        prev.record_vertical(450.0, 30.0, &window);
        assert_eq!(prev.pos(&window), Point::new(100.0, 30.0));
        // Width was never written, so it still lazily reads the window.
        assert_eq!(prev.size(&window), Size::new(800.0, 450.0));
    }

    #[test]
    fn record_vertical_keeps_existing_x() {
        let mut prev = PreviousGeometry::new();
        let window = FixedWindow;
        prev.capture(&window);
        prev.record_vertical(450.0, 30.0, &window);
        assert_eq!(prev.pos(&window), Point::new(100.0, 30.0));
        assert_eq!(prev.size(&window), Size::new(800.0, 450.0));
    }
}
