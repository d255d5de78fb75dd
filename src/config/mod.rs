//! Configuration surface
//!
//! All snap behavior is tuned through [`AeroSnapConfig`]. Every knob is
//! mutable at runtime; nothing is persisted. The engine re-reads the
//! config on each sample, so changes take effect mid-gesture.

use std::collections::HashSet;

use crate::domain::geometry::Direction;

/// Runtime-tunable knobs for snap docking.
#[derive(Debug, Clone)]
pub struct AeroSnapConfig {
    /// Whether snap docking is active at all. The ghost preview window
    /// exists exactly while this is true.
    pub enabled: bool,
    /// Pixel distance from a monitor edge within which a snap intent is
    /// recognized.
    pub allowance: f64,
    /// Pixel distance from a monitor corner within which a quarter-tile
    /// intent is recognized. Corner bands overlap and outrank edge bands.
    pub corner_allowance: f64,
    /// Whether resizing a vertical edge up to a monitor edge snaps the
    /// window to full height.
    pub vertical_resize_snap: bool,
    /// Whether double-clicking the move grip toggles maximize.
    pub double_click_maximize: bool,
    /// Whether the OS cursor is clamped to the monitor's usable bounds
    /// during a gesture, keeping it off reserved chrome such as the
    /// taskbar.
    pub prevent_mouse_over_taskbar: bool,
    /// Directions that never produce a snap.
    pub disabled_directions: HashSet<Direction>,
}

impl AeroSnapConfig {
    pub const DEFAULT_ALLOWANCE: f64 = 25.0;
    pub const DEFAULT_CORNER_ALLOWANCE: f64 = 50.0;

    /// Returns true if snapping toward `direction` is disabled
    pub fn is_disabled(&self, direction: Direction) -> bool {
        self.disabled_directions.contains(&direction)
    }

    /// Disables snapping toward `direction`
    pub fn disable_direction(&mut self, direction: Direction) {
        self.disabled_directions.insert(direction);
    }

    /// Re-enables snapping toward `direction`
    pub fn enable_direction(&mut self, direction: Direction) {
        self.disabled_directions.remove(&direction);
    }
}

impl Default for AeroSnapConfig {
    fn default() -> Self {
        // Bottom starts disabled: dragging against the taskbar edge is
        // almost always a move, not a maximize request.
        let mut disabled_directions = HashSet::new();
        disabled_directions.insert(Direction::Bottom);

        Self {
            enabled: true,
            allowance: Self::DEFAULT_ALLOWANCE,
            corner_allowance: Self::DEFAULT_CORNER_ALLOWANCE,
            vertical_resize_snap: true,
            double_click_maximize: true,
            prevent_mouse_over_taskbar: true,
            disabled_directions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AeroSnapConfig::default();
        assert!(config.enabled);
        assert_eq!(config.allowance, 25.0);
        assert_eq!(config.corner_allowance, 50.0);
        assert!(config.vertical_resize_snap);
        assert!(config.double_click_maximize);
        assert!(config.prevent_mouse_over_taskbar);
    }

    #[test]
    fn bottom_is_disabled_by_default() {
        let config = AeroSnapConfig::default();
        assert!(config.is_disabled(Direction::Bottom));
        assert!(!config.is_disabled(Direction::Top));
        assert!(!config.is_disabled(Direction::Left));
    }

    #[test]
    fn directions_can_be_toggled() {
        let mut config = AeroSnapConfig::default();
        config.disable_direction(Direction::Left);
        assert!(config.is_disabled(Direction::Left));
        config.enable_direction(Direction::Left);
        assert!(!config.is_disabled(Direction::Left));
        config.enable_direction(Direction::Bottom);
        assert!(!config.is_disabled(Direction::Bottom));
    }
}
