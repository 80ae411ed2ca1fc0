//! UI rendering modules for perch.
//!
//! - [render]: the top-level frame renderer used by the terminal loop.
//! - [overlays]: acknowledged full-screen views (help, entry info,
//!   warnings).

pub mod overlays;
pub mod render;

pub use render::render;
