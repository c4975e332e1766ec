//! Choice resolution logic

use crate::config::{Catalog, ChoiceEffect, EventId};
use crate::error::{Result, StemLifeError};
use crate::property::{Player, PlayerProgress};
use crate::recommendation::{recommend, StemField};
use tracing::info;

/// Age added when a choice carries no positive age increment
pub const DEFAULT_AGE_STEP: f64 = 0.5;

/// Age from which a resolved choice also yields a recommendation
pub const RECOMMENDATION_AGE: f64 = 18.0;

/// Result of resolving a choice
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOutcome {
    pub event_id: EventId,
    pub choice_index: usize,
    /// Age actually added to the player
    pub age_step: f64,
    pub recommendation: Option<StemField>,
}

/// Age step for a choice: its own increment when positive, else the default
#[inline]
pub fn age_step(effect: &ChoiceEffect) -> f64 {
    if effect.age > 0.0 {
        effect.age
    } else {
        DEFAULT_AGE_STEP
    }
}

/// Apply the chosen option of the current event to the player.
///
/// On error nothing has been modified.
pub fn resolve_choice(
    player: &mut Player,
    progress: &mut PlayerProgress,
    catalog: &Catalog,
    choice_index: i64,
) -> Result<ChoiceOutcome> {
    let event_id = progress.current_event.ok_or(StemLifeError::InvalidState)?;
    let event = catalog
        .get(event_id)
        .ok_or(StemLifeError::EventNotFound(event_id))?;

    let available = event.choices.len();
    let index = usize::try_from(choice_index)
        .ok()
        .filter(|&i| i < available)
        .ok_or(StemLifeError::InvalidIndex {
            index: choice_index,
            available,
        })?;
    let effects = &event.choices[index].effects;

    player.apply_effect(effects);
    let step = age_step(effects);
    player.age += step;
    player.clamp_stats();

    progress.record_completion(event_id);
    progress.current_event = None;
    progress.touch();

    let recommendation = (player.age >= RECOMMENDATION_AGE).then(|| recommend(player));

    info!(
        player_id = player.id,
        event_id,
        choice_index = index,
        age = player.age,
        recommendation = recommendation.map(StemField::label),
        "choice resolved"
    );

    Ok(ChoiceOutcome {
        event_id,
        choice_index: index,
        age_step: step,
        recommendation,
    })
}
