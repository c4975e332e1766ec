//! Per-player progress through the event catalog

use crate::config::EventId;
use ahash::RandomState;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Event id -> completion count
pub type CompletionCounts = HashMap<EventId, u32, RandomState>;

/// Current offered event plus how often each event was resolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerProgress {
    /// Lookup key into the catalog, set between offer and resolution
    pub current_event: Option<EventId>,
    pub completed_events: CompletionCounts,
    /// Seconds since the Unix epoch
    pub created_at: u64,
    pub updated_at: u64,
}

impl PlayerProgress {
    pub fn new() -> Self {
        let now = unix_now();
        Self {
            current_event: None,
            completed_events: CompletionCounts::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn completions(&self, event_id: EventId) -> u32 {
        self.completed_events.get(&event_id).copied().unwrap_or(0)
    }

    /// Count one more resolution of `event_id`
    pub fn record_completion(&mut self, event_id: EventId) {
        *self.completed_events.entry(event_id).or_insert(0) += 1;
    }

    /// Total resolutions across all events
    pub fn total_completions(&self) -> u32 {
        self.completed_events.values().sum()
    }

    pub fn clear(&mut self) {
        self.current_event = None;
        self.completed_events.clear();
    }

    pub fn touch(&mut self) {
        self.updated_at = unix_now();
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
