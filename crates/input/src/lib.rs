//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! Mouse clicks are resolved against the [`crate::types::HitRegions`] the
//! renderer reported for the last frame, so the overlay buttons work without
//! the input layer knowing anything about layout.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
