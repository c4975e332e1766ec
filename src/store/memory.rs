//! In-memory store backed by hash maps

use super::{GameStore, PlayerRecord};
use crate::error::{Result, StemLifeError};
use crate::property::{AccountId, Player, PlayerId, PlayerProgress};
use ahash::AHashMap;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct Tables {
    players: AHashMap<PlayerId, PlayerRecord>,
    // account -> player, maintained from Player::members
    memberships: AHashMap<AccountId, PlayerId>,
    next_id: PlayerId,
}

/// Process-local [`GameStore`]
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored players
    pub fn len(&self) -> usize {
        self.tables.read().players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GameStore for InMemoryStore {
    fn create_player(&self, creator: AccountId, name: &str) -> Result<PlayerId> {
        let mut tables = self.tables.write();
        if tables.memberships.contains_key(&creator) {
            return Err(StemLifeError::AlreadyExists);
        }

        tables.next_id += 1;
        let id = tables.next_id;
        let record = PlayerRecord {
            player: Player::new(id, name, creator),
            progress: PlayerProgress::new(),
        };
        tables.players.insert(id, record);
        tables.memberships.insert(creator, id);
        Ok(id)
    }

    fn player_for_account(&self, account: AccountId) -> Result<PlayerId> {
        let tables = self.tables.read();
        let id = tables
            .memberships
            .get(&account)
            .copied()
            .ok_or(StemLifeError::PlayerNotFound)?;

        // The index may lag behind a member removed inside a transaction
        match tables.players.get(&id) {
            Some(record) if record.player.is_member(account) => Ok(id),
            _ => Err(StemLifeError::PlayerNotFound),
        }
    }

    fn load(&self, id: PlayerId) -> Result<PlayerRecord> {
        self.tables
            .read()
            .players
            .get(&id)
            .cloned()
            .ok_or(StemLifeError::PlayerNotFound)
    }

    fn transact<T, F>(&self, id: PlayerId, f: F) -> Result<T>
    where
        F: FnOnce(&mut PlayerRecord) -> Result<T>,
    {
        let mut tables = self.tables.write();
        let stored = tables
            .players
            .get_mut(&id)
            .ok_or(StemLifeError::PlayerNotFound)?;

        let mut working = stored.clone();
        let value = f(&mut working)?;
        *stored = working;
        Ok(value)
    }
}
