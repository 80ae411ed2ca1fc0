//! Application state modules for perch.
//!
//! - [state]: the session controller owning all mutable session state.
//! - [nav]: current directory, snapshot, cursor, and scroll offset.
//! - [history]: the back-navigation stack.
//! - [keymap]: raw key events decoded into session commands.

pub mod history;
pub mod keymap;
pub mod nav;
pub mod state;

pub use history::History;
pub use keymap::{Command, Keymap};
pub use nav::NavState;
pub use state::{AppState, KeypressResult};
