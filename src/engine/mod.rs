//! Engine: state machine and orchestration
//!
//! The engine consumes raw pointer/keyboard samples, asks the domain
//! layer for snap intents and target rectangles, and issues geometry
//! commands to the owned window and the ghost preview.

pub mod controller;
pub mod gesture;
pub mod preview;
pub mod state;

pub use controller::{SnapController, SnapShortcut};
pub use gesture::{MoveGesture, PointerButton, PointerSample, ResizeGesture};
pub use state::WindowMode;
