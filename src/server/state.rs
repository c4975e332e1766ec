//! Shared application state for the HTTP server.

use std::sync::Arc;

use crate::config::Catalog;
use crate::simulator::GameEngine;
use crate::store::InMemoryStore;

/// Engine shared by every request handler
pub struct AppState {
    pub engine: GameEngine<InMemoryStore>,
}

impl AppState {
    pub fn new(engine: GameEngine<InMemoryStore>) -> Self {
        Self { engine }
    }

    /// State over a fresh in-memory store
    pub fn with_catalog(catalog: Arc<Catalog>, max_aging_steps: u32) -> Self {
        Self::new(GameEngine::new(catalog, InMemoryStore::new()).with_max_aging_steps(max_aging_steps))
    }
}
