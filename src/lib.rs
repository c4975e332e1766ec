//! STEM Life Core - life simulation engine with STEM career guidance
//!
//! A player ages through life stages by resolving life events drawn from a
//! catalog. Choices shift stats and interests, and from age 18 the engine
//! recommends one of four STEM fields.
//!
//! The engine is served over HTTP by the `stem-life-server` binary and, with
//! the `python` feature, exposed to Python via PyO3.

pub mod config;
pub mod error;
pub mod event;
pub mod property;
pub mod recommendation;
pub mod server;
pub mod simulator;
pub mod store;

#[cfg(feature = "python")]
mod python;

pub use config::{Catalog, ServerSettings};
pub use error::{Result, StemLifeError};
pub use simulator::GameEngine;
pub use store::{GameStore, InMemoryStore};
