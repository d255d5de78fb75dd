//! Snap geometry planning
//!
//! Computes the rectangle a window (or its ghost preview) should occupy
//! for a requested snap direction, the full-height rectangle used while
//! vertically resizing near a monitor edge, and the clamped rectangle used
//! to revert out of a snapped state on a possibly different monitor.

use crate::domain::geometry::{Direction, Point, Rect, Size};

/// Computes the target rectangle for a snap direction on one monitor.
///
/// Pure vertical edges map to the full usable bounds (the caller routes
/// those to maximize); left/right map to side-anchored half tiles; corners
/// map to quarter tiles. No dimension is ever below `min`, and the anchor
/// side is preserved after the floor is applied.
pub fn plan_snap(direction: Direction, screen: Rect, min: Size) -> Rect {
    let half_w = (screen.w / 2.0).max(min.width);
    let half_h = (screen.h / 2.0).max(min.height);
    let full_w = screen.w.max(min.width);
    let full_h = screen.h.max(min.height);

    match direction {
        Direction::Top | Direction::Bottom => Rect::new(screen.x, screen.y, full_w, full_h),
        Direction::Left => Rect::new(screen.x, screen.y, half_w, full_h),
        Direction::Right => Rect::new(screen.right() - half_w, screen.y, half_w, full_h),
        Direction::TopLeft => Rect::new(screen.x, screen.y, half_w, half_h),
        Direction::TopRight => Rect::new(screen.right() - half_w, screen.y, half_w, half_h),
        Direction::BottomLeft => {
            Rect::new(screen.x, screen.bottom() - half_h, half_w, half_h)
        }
        Direction::BottomRight => Rect::new(
            screen.right() - half_w,
            screen.bottom() - half_h,
            half_w,
            half_h,
        ),
    }
}

/// Full monitor height at the window's current horizontal span.
///
/// Used as the preview/commit rectangle when a vertical resize reaches a
/// monitor edge.
pub fn plan_full_height(x: f64, width: f64, screen: Rect) -> Rect {
    Rect::new(x, screen.y, width, screen.h)
}

/// Clamps a remembered geometry into a monitor's usable bounds.
///
/// The width/height land in `[min, min(monitor, max)]` and the position in
/// the monitor's coordinate range. The target monitor may differ from the
/// one the geometry was captured on.
pub fn plan_revert(prev_pos: Point, prev_size: Size, screen: Rect, min: Size, max: Size) -> Rect {
    let max_w = screen.w.min(max.width);
    let max_h = screen.h.min(max.height);

    Rect::new(
        clamp(prev_pos.x, screen.x, screen.right()),
        clamp(prev_pos.y, screen.y, screen.bottom()),
        clamp(prev_size.width, min.width, max_w),
        clamp(prev_size.height, min.height, max_h),
    )
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 1920.0,
        h: 1080.0,
    };
    const NO_MIN: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[test]
    fn right_half_is_side_anchored() {
        let rect = plan_snap(Direction::Right, SCREEN, NO_MIN);
        assert_eq!(rect, Rect::new(960.0, 0.0, 960.0, 1080.0));
    }

    #[test]
    fn left_half_starts_at_origin() {
        let rect = plan_snap(Direction::Left, SCREEN, NO_MIN);
        assert_eq!(rect, Rect::new(0.0, 0.0, 960.0, 1080.0));
    }

    #[test]
    fn corners_are_quarter_tiles() {
        assert_eq!(
            plan_snap(Direction::TopLeft, SCREEN, NO_MIN),
            Rect::new(0.0, 0.0, 960.0, 540.0)
        );
        assert_eq!(
            plan_snap(Direction::TopRight, SCREEN, NO_MIN),
            Rect::new(960.0, 0.0, 960.0, 540.0)
        );
        assert_eq!(
            plan_snap(Direction::BottomLeft, SCREEN, NO_MIN),
            Rect::new(0.0, 540.0, 960.0, 540.0)
        );
        assert_eq!(
            plan_snap(Direction::BottomRight, SCREEN, NO_MIN),
            Rect::new(960.0, 540.0, 960.0, 540.0)
        );
    }

    #[test]
    fn vertical_edges_cover_the_whole_monitor() {
        assert_eq!(
            plan_snap(Direction::Top, SCREEN, NO_MIN),
            Rect::new(0.0, 0.0, 1920.0, 1080.0)
        );
        assert_eq!(
            plan_snap(Direction::Bottom, SCREEN, NO_MIN),
            Rect::new(0.0, 0.0, 1920.0, 1080.0)
        );
    }

    #[test]
    fn half_width_is_floored_to_min_size() {
        let min = Size::new(1200.0, 0.0);
        let rect = plan_snap(Direction::Right, SCREEN, min);
        assert_eq!(rect.w, 1200.0);
        // Anchoring uses the floored width so the tile still hugs its side.
        assert_eq!(rect.right(), SCREEN.right());
    }

    #[test]
    fn quarter_tiles_are_floored_to_min_size() {
        let min = Size::new(1000.0, 600.0);
        let rect = plan_snap(Direction::BottomRight, SCREEN, min);
        assert_eq!(rect.w, 1000.0);
        assert_eq!(rect.h, 600.0);
        assert_eq!(rect.right(), SCREEN.right());
        assert_eq!(rect.bottom(), SCREEN.bottom());
    }

    #[test]
    fn planned_rect_stays_inside_monitor() {
        let directions = [
            Direction::Top,
            Direction::Bottom,
            Direction::Left,
            Direction::Right,
            Direction::TopLeft,
            Direction::TopRight,
            Direction::BottomLeft,
            Direction::BottomRight,
        ];
        let screen = Rect::new(-1920.0, 100.0, 1920.0, 1080.0);
        for direction in directions {
            let rect = plan_snap(direction, screen, NO_MIN);
            assert!(rect.x >= screen.x, "{direction:?} x out of bounds");
            assert!(rect.y >= screen.y, "{direction:?} y out of bounds");
            assert!(rect.right() <= screen.right(), "{direction:?} too wide");
            assert!(rect.bottom() <= screen.bottom(), "{direction:?} too tall");
        }
    }

    #[test]
    fn full_height_keeps_horizontal_span() {
        let rect = plan_full_height(300.0, 420.0, SCREEN);
        assert_eq!(rect, Rect::new(300.0, 0.0, 420.0, 1080.0));
    }

    #[test]
    fn revert_clamps_size_to_monitor_and_max() {
        let rect = plan_revert(
            Point::new(100.0, 100.0),
            Size::new(4000.0, 3000.0),
            SCREEN,
            NO_MIN,
            Size::new(1600.0, f64::INFINITY),
        );
        assert_eq!(rect.w, 1600.0);
        assert_eq!(rect.h, 1080.0);
    }

    #[test]
    fn revert_clamps_position_into_monitor() {
        let rect = plan_revert(
            Point::new(-500.0, 5000.0),
            Size::new(800.0, 600.0),
            SCREEN,
            NO_MIN,
            Size::new(f64::INFINITY, f64::INFINITY),
        );
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 1080.0);
        assert_eq!(rect.w, 800.0);
        assert_eq!(rect.h, 600.0);
    }

    #[test]
    fn revert_respects_min_size() {
        let rect = plan_revert(
            Point::new(10.0, 10.0),
            Size::new(50.0, 50.0),
            SCREEN,
            Size::new(200.0, 150.0),
            Size::new(f64::INFINITY, f64::INFINITY),
        );
        assert_eq!(rect.w, 200.0);
        assert_eq!(rect.h, 150.0);
    }
}
