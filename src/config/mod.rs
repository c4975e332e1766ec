//! Configuration module for game data structures
//!
//! This module holds the life event catalog and the server settings. The
//! catalog is loaded from JSON, either a file named by the settings or the
//! catalog bundled with the crate.

mod catalog;
mod event;
mod settings;

pub use catalog::*;
pub use event::*;
pub use settings::*;
