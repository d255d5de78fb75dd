//! Snap-direction resolution
//!
//! Maps a pointer position to a snap intent against one monitor's usable
//! bounds. This is pure geometry: whether a resolved direction is disabled
//! is the caller's concern.

use crate::domain::geometry::{Direction, Point, Rect};

/// Resolves the snap direction for a pointer position.
///
/// Corner bands are evaluated before edge bands because corner zones
/// overlap edge zones; the first match wins. All boundary comparisons are
/// inclusive. Returns `None` when the pointer is outside every band.
pub fn resolve(
    pointer: Point,
    screen: Rect,
    allowance: f64,
    corner_allowance: f64,
) -> Option<Direction> {
    if pointer.y <= screen.y + corner_allowance && pointer.x >= screen.right() - corner_allowance {
        return Some(Direction::TopRight);
    }

    if pointer.y <= screen.y + corner_allowance && pointer.x <= screen.x + corner_allowance {
        return Some(Direction::TopLeft);
    }

    if pointer.y >= screen.bottom() - corner_allowance
        && pointer.x >= screen.right() - corner_allowance
    {
        return Some(Direction::BottomRight);
    }

    if pointer.y >= screen.bottom() - corner_allowance
        && pointer.x <= screen.x + corner_allowance
    {
        return Some(Direction::BottomLeft);
    }

    if pointer.x >= screen.right() - allowance {
        return Some(Direction::Right);
    }

    if pointer.x <= screen.x + allowance {
        return Some(Direction::Left);
    }

    if pointer.y <= screen.y + allowance {
        return Some(Direction::Top);
    }

    if pointer.y >= screen.bottom() - allowance {
        return Some(Direction::Bottom);
    }

    None
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

    fn resolve_default(x: f64, y: f64) -> Option<Direction> {
        resolve(Point::new(x, y), SCREEN, 25.0, 50.0)
    }

    #[test]
    fn center_resolves_nothing() {
        assert_eq!(resolve_default(960.0, 540.0), None);
    }

    #[test]
    fn edges_resolve_within_allowance() {
        assert_eq!(resolve_default(1919.0, 500.0), Some(Direction::Right));
        assert_eq!(resolve_default(5.0, 500.0), Some(Direction::Left));
        assert_eq!(resolve_default(960.0, 10.0), Some(Direction::Top));
        assert_eq!(resolve_default(960.0, 1070.0), Some(Direction::Bottom));
    }

    #[test]
    fn edge_bands_are_inclusive() {
        assert_eq!(resolve_default(25.0, 500.0), Some(Direction::Left));
        assert_eq!(resolve_default(26.0, 500.0), None);
        assert_eq!(resolve_default(1895.0, 500.0), Some(Direction::Right));
        assert_eq!(resolve_default(1894.0, 500.0), None);
    }

    #[test]
    fn corners_resolve_within_corner_allowance() {
        assert_eq!(resolve_default(5.0, 5.0), Some(Direction::TopLeft));
        assert_eq!(resolve_default(1915.0, 5.0), Some(Direction::TopRight));
        assert_eq!(resolve_default(5.0, 1075.0), Some(Direction::BottomLeft));
        assert_eq!(resolve_default(1915.0, 1075.0), Some(Direction::BottomRight));
    }

    #[test]
    fn corners_take_priority_over_edges() {
        // Within both the left edge band and the top-left corner band.
        assert_eq!(resolve_default(10.0, 40.0), Some(Direction::TopLeft));
        // Within the corner band but outside the edge bands.
        assert_eq!(resolve_default(40.0, 40.0), Some(Direction::TopLeft));
    }

    #[test]
    fn offset_monitor_uses_its_own_origin() {
        let screen = Rect::new(1920.0, 0.0, 1920.0, 1080.0);
        let resolved = resolve(Point::new(1925.0, 500.0), screen, 25.0, 50.0);
        assert_eq!(resolved, Some(Direction::Left));
    }
}
