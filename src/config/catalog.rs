//! Event catalog: validated, immutable, shared across players

use crate::config::{EventId, LifeEvent, Stage};
use crate::error::{Result, StemLifeError};
use ahash::AHashMap;
use std::path::Path;

/// Catalog bundled with the crate, covering all six stages
pub const BUNDLED_CATALOG: &str = include_str!("../../data/life_events.json");

/// Read-only collection of life events
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // Sorted by id so candidate order is stable
    events: Vec<LifeEvent>,
    index: AHashMap<EventId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed entries
    pub fn from_events(mut events: Vec<LifeEvent>) -> Result<Self> {
        events.sort_by_key(|e| e.id);

        let mut index = AHashMap::with_capacity(events.len());
        for (pos, event) in events.iter().enumerate() {
            validate_event(event)?;
            if index.insert(event.id, pos).is_some() {
                return Err(StemLifeError::InvalidCatalog(format!(
                    "duplicate event id {}",
                    event.id
                )));
            }
        }

        Ok(Self { events, index })
    }

    /// Parse a catalog from a JSON array of events
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<LifeEvent> = serde_json::from_str(json)?;
        Self::from_events(events)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            StemLifeError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// The catalog shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[inline]
    pub fn get(&self, id: EventId) -> Option<&LifeEvent> {
        self.index.get(&id).map(|&pos| &self.events[pos])
    }

    /// Events of `stage` whose age range contains `age`
    pub fn candidates(&self, stage: Stage, age: f64) -> impl Iterator<Item = &LifeEvent> {
        self.events
            .iter()
            .filter(move |e| e.stage == stage && e.covers_age(age))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifeEvent> {
        self.events.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn validate_event(event: &LifeEvent) -> Result<()> {
    let choices = event.choices.len();
    if !(2..=3).contains(&choices) {
        return Err(StemLifeError::InvalidCatalog(format!(
            "event {} has {} choices, expected 2 or 3",
            event.id, choices
        )));
    }
    if event.min_age > event.max_age {
        return Err(StemLifeError::InvalidCatalog(format!(
            "event {} has min_age {} above max_age {}",
            event.id, event.min_age, event.max_age
        )));
    }
    Ok(())
}
