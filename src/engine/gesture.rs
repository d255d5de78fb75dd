//! Input gesture sequencing
//!
//! Translates raw pointer samples into engine operations. The trackers
//! are small pure state machines (Idle -> Pressed -> Dragging) so the
//! press/drag/release protocol can be tested without any toolkit; the
//! embedder forwards its toolkit's pointer events and applies the
//! returned actions to the controller.
//!
//! Losing the press without a release sample (e.g. focus loss) is out of
//! scope: the tracker simply stays in its current phase until the next
//! release sample resets it.

use crate::domain::geometry::{Direction, Point};

/// Mouse button of a pointer sample.
///
/// Only the primary button drives move and resize gestures; samples from
/// other buttons are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// A raw pointer sample in the gesture protocol.
///
/// `scene` is the position relative to the window origin, `screen` the
/// absolute position; `click_count` is the toolkit's running click count
/// for the press/release pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSample {
    Pressed {
        button: PointerButton,
        scene: Point,
        screen: Point,
        click_count: u8,
    },
    Moved {
        scene: Point,
        screen: Point,
    },
    Released {
        button: PointerButton,
        screen: Point,
        click_count: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed,
    Dragging,
}

/// Operations produced by the move gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveAction {
    Begin {
        scene: Point,
        screen: Point,
        grip_height: f64,
    },
    Drag {
        screen: Point,
    },
    Release {
        screen: Point,
    },
    DoubleClick,
}

/// Sequences press/drag/release over the move grip.
#[derive(Debug)]
pub struct MoveGesture {
    phase: Phase,
    grip_height: f64,
}

impl MoveGesture {
    /// Creates a tracker for a move grip of the given vertical extent.
    ///
    /// The extent is forwarded with every `Begin`; it is the threshold
    /// below which a snapped window detaches during a drag.
    pub fn new(grip_height: f64) -> Self {
        Self {
            phase: Phase::Idle,
            grip_height,
        }
    }

    /// Updates the grip extent after a layout change
    pub fn set_grip_height(&mut self, grip_height: f64) {
        self.grip_height = grip_height;
    }

    /// Feeds one sample; returns the actions to apply in order.
    pub fn feed(&mut self, sample: PointerSample) -> Vec<MoveAction> {
        match (self.phase, sample) {
            (
                Phase::Idle,
                PointerSample::Pressed {
                    button: PointerButton::Primary,
                    scene,
                    screen,
                    ..
                },
            ) => {
                self.phase = Phase::Pressed;
                vec![MoveAction::Begin {
                    scene,
                    screen,
                    grip_height: self.grip_height,
                }]
            }
            (Phase::Pressed | Phase::Dragging, PointerSample::Moved { screen, .. }) => {
                self.phase = Phase::Dragging;
                vec![MoveAction::Drag { screen }]
            }
            (
                Phase::Pressed,
                PointerSample::Released {
                    button: PointerButton::Primary,
                    screen,
                    click_count,
                },
            ) => {
                self.phase = Phase::Idle;
                let mut actions = vec![MoveAction::Release { screen }];
                // A double-click only counts when the press never turned
                // into a drag.
                if click_count >= 2 {
                    actions.push(MoveAction::DoubleClick);
                }
                actions
            }
            (
                Phase::Dragging,
                PointerSample::Released {
                    button: PointerButton::Primary,
                    screen,
                    ..
                },
            ) => {
                self.phase = Phase::Idle;
                vec![MoveAction::Release { screen }]
            }
            // Non-primary buttons and out-of-sequence samples are ignored.
            _ => Vec::new(),
        }
    }
}

/// Operations produced by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeAction {
    Begin,
    Resize { scene: Point, screen: Point },
    Release { screen: Point },
    DoubleClick,
}

/// Sequences press/drag/release over one resize handle.
///
/// Each handle owns one tracker; the handle's direction is fixed at
/// construction.
#[derive(Debug)]
pub struct ResizeGesture {
    direction: Direction,
    phase: Phase,
}

impl ResizeGesture {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            phase: Phase::Idle,
        }
    }

    /// The edge or corner this tracker handles
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Feeds one sample; returns the actions to apply in order.
    pub fn feed(&mut self, sample: PointerSample) -> Vec<ResizeAction> {
        match (self.phase, sample) {
            (
                Phase::Idle,
                PointerSample::Pressed {
                    button: PointerButton::Primary,
                    ..
                },
            ) => {
                self.phase = Phase::Pressed;
                vec![ResizeAction::Begin]
            }
            (Phase::Pressed | Phase::Dragging, PointerSample::Moved { scene, screen }) => {
                self.phase = Phase::Dragging;
                vec![ResizeAction::Resize { scene, screen }]
            }
            (
                Phase::Pressed,
                PointerSample::Released {
                    button: PointerButton::Primary,
                    screen,
                    click_count,
                },
            ) => {
                self.phase = Phase::Idle;
                let mut actions = vec![ResizeAction::Release { screen }];
                if click_count >= 2 {
                    actions.push(ResizeAction::DoubleClick);
                }
                actions
            }
            (
                Phase::Dragging,
                PointerSample::Released {
                    button: PointerButton::Primary,
                    screen,
                    ..
                },
            ) => {
                self.phase = Phase::Idle;
                vec![ResizeAction::Release { screen }]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f64, y: f64, clicks: u8) -> PointerSample {
        PointerSample::Pressed {
            button: PointerButton::Primary,
            scene: Point::new(x, y),
            screen: Point::new(x + 100.0, y + 100.0),
            click_count: clicks,
        }
    }

    fn moved(x: f64, y: f64) -> PointerSample {
        PointerSample::Moved {
            scene: Point::new(x, y),
            screen: Point::new(x + 100.0, y + 100.0),
        }
    }

    fn release(x: f64, y: f64, clicks: u8) -> PointerSample {
        PointerSample::Released {
            button: PointerButton::Primary,
            screen: Point::new(x + 100.0, y + 100.0),
            click_count: clicks,
        }
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut gesture = MoveGesture::new(30.0);

        let begin = gesture.feed(press(10.0, 10.0, 1));
        assert!(matches!(begin[0], MoveAction::Begin { grip_height, .. } if grip_height == 30.0));

        let drag = gesture.feed(moved(20.0, 20.0));
        assert!(matches!(drag[0], MoveAction::Drag { .. }));

        let end = gesture.feed(release(20.0, 20.0, 1));
        assert_eq!(end.len(), 1);
        assert!(matches!(end[0], MoveAction::Release { .. }));
    }

    #[test]
    fn double_click_fires_on_undragged_release() {
        let mut gesture = MoveGesture::new(30.0);
        gesture.feed(press(10.0, 10.0, 2));
        let end = gesture.feed(release(10.0, 10.0, 2));
        assert_eq!(end.len(), 2);
        assert!(matches!(end[1], MoveAction::DoubleClick));
    }

    #[test]
    fn double_click_suppressed_after_drag() {
        let mut gesture = MoveGesture::new(30.0);
        gesture.feed(press(10.0, 10.0, 2));
        gesture.feed(moved(50.0, 10.0));
        let end = gesture.feed(release(50.0, 10.0, 2));
        assert_eq!(end.len(), 1);
        assert!(matches!(end[0], MoveAction::Release { .. }));
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut gesture = MoveGesture::new(30.0);
        let actions = gesture.feed(PointerSample::Pressed {
            button: PointerButton::Secondary,
            scene: Point::new(0.0, 0.0),
            screen: Point::new(0.0, 0.0),
            click_count: 1,
        });
        assert!(actions.is_empty());
        // A move without a press does not start a drag either.
        assert!(gesture.feed(moved(5.0, 5.0)).is_empty());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut gesture = MoveGesture::new(30.0);
        assert!(gesture.feed(release(0.0, 0.0, 1)).is_empty());
    }

    #[test]
    fn resize_tracker_carries_its_direction() {
        let mut gesture = ResizeGesture::new(Direction::BottomRight);
        assert_eq!(gesture.direction(), Direction::BottomRight);

        let begin = gesture.feed(press(799.0, 599.0, 1));
        assert_eq!(begin, vec![ResizeAction::Begin]);

        let resize = gesture.feed(moved(820.0, 620.0));
        assert!(matches!(resize[0], ResizeAction::Resize { .. }));

        let end = gesture.feed(release(820.0, 620.0, 1));
        assert!(matches!(end[0], ResizeAction::Release { .. }));
    }

    #[test]
    fn resize_double_click_on_undragged_release() {
        let mut gesture = ResizeGesture::new(Direction::Bottom);
        gesture.feed(press(400.0, 599.0, 2));
        let end = gesture.feed(release(400.0, 599.0, 2));
        assert_eq!(end.len(), 2);
        assert!(matches!(end[1], ResizeAction::DoubleClick));
    }
}
