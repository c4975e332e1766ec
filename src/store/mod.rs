//! Persistence of players and their progress
//!
//! [`GameStore`] is the seam to whatever relational store the host uses.
//! [`InMemoryStore`] keeps everything in process memory behind a single
//! lock, which also serializes mutations of the same player.

mod memory;

pub use memory::*;

use crate::error::Result;
use crate::property::{AccountId, Player, PlayerId, PlayerProgress};

/// A player together with its one-to-one progress record
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player: Player,
    pub progress: PlayerProgress,
}

/// Storage of player records
pub trait GameStore: Send + Sync {
    /// Create a player in its initial state, owned by `creator`
    fn create_player(&self, creator: AccountId, name: &str) -> Result<PlayerId>;

    /// Player the account belongs to
    fn player_for_account(&self, account: AccountId) -> Result<PlayerId>;

    /// Copy of the stored record
    fn load(&self, id: PlayerId) -> Result<PlayerRecord>;

    /// Run `f` on a working copy of the record and persist it only if `f`
    /// succeeds. Transactions on the same store never interleave.
    fn transact<T, F>(&self, id: PlayerId, f: F) -> Result<T>
    where
        F: FnOnce(&mut PlayerRecord) -> Result<T>;
}
