//! Configuration for perch.
//!
//! - [general]: the `[general]` table and the runtime [Settings] record.
//! - [input]: the `[keys]` table with per-command binding lists.
//! - [load]: file discovery, parsing, and the processed [Config].

pub mod general;
pub mod input;
pub mod load;

pub use general::{General, Settings, SortMode};
pub use input::Keys;
pub use load::{Config, RawConfig};
