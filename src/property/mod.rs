//! Player state and progress tracking

mod progress;
mod state;

#[cfg(test)]
mod property_tests;

pub use progress::*;
pub use state::*;

/// Identifier of a player character
pub type PlayerId = u64;

/// Identifier of an authenticated account, supplied by the host
pub type AccountId = u64;
