//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `tui_2048::{core,input,store,term,types}` so
//! the binary, the integration tests and the benches share one import path.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
