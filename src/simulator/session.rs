//! Response views handed to the HTTP layer and the Python host
//!
//! These are detached, serializable copies of engine state so that callers
//! never hold references into the store or the catalog.

use serde::Serialize;

use crate::config::{Category, EventChoice, EventId, LifeEvent, Stage};
use crate::property::PlayerSnapshot;
use crate::recommendation::{InterestSummary, StemField};

/// Public view of a catalog event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventView {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub stage: Stage,
    pub choices: Vec<EventChoice>,
}

impl From<&LifeEvent> for EventView {
    fn from(event: &LifeEvent) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category,
            stage: event.stage,
            choices: event.choices.to_vec(),
        }
    }
}

/// Event offered to the player plus the player's stats at that moment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentEvent {
    pub event: EventView,
    pub player: PlayerSnapshot,
}

/// Result of resolving a choice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceResult {
    pub success: bool,
    pub player: PlayerSnapshot,
    pub stem_recommendation: Option<StemField>,
}

/// Recommendation with the interests it was derived from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub recommendation: StemField,
    pub interests: InterestSummary,
}

/// Acknowledgement for operations without further payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub const OK: Ack = Ack { success: true };
}
