//! Move, resize and snap behaviors for undecorated toolkit windows.
//!
//! An undecorated window loses everything the native title bar provided:
//! drag-to-move, edge and corner resizing, double-click maximize, and
//! snap docking against monitor edges. This crate reimplements that
//! behavior as a toolkit-independent engine: half-screen, quarter-screen
//! and full-screen tiling with a live ghost preview while dragging,
//! across single- or multi-monitor setups.
//!
//! The crate owns only the decision logic. The real window, the monitor
//! layout, the ghost surface and the OS pointer are reached through the
//! traits in [`platform`]; embedders forward their toolkit's pointer and
//! key events to [`engine::SnapController`], optionally through the
//! gesture trackers in [`engine::gesture`]. Windows hosts can use the
//! adapters in `platform::win32`.

pub mod config;
pub mod domain;
pub mod engine;
pub mod platform;

pub use config::AeroSnapConfig;
pub use domain::geometry::{Direction, HDirection, Point, Rect, Size, VDirection};
pub use engine::{SnapController, SnapShortcut, WindowMode};
