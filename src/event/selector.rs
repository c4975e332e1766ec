//! Event selection logic
//!
//! Picks an eligible life event for the player's age and stage. When the
//! stage has nothing left to offer, time passes: the player ages and the
//! selection is retried, up to a fixed number of steps.

use crate::config::{Catalog, Frequency, LifeEvent, Stage};
use crate::error::{Result, StemLifeError};
use crate::property::{Player, PlayerProgress};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Selection stops once a player reaches this age
pub const MAX_PLAYABLE_AGE: f64 = 150.0;

/// Outcome of a successful selection
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub event: &'a LifeEvent,
    /// Fallback aging steps taken before an event was found
    pub aging_steps: u32,
}

/// Candidates for the stage/age split into those still allowed by their
/// frequency class. The flag reports whether any candidate existed at all.
pub fn eligible_events<'a>(
    catalog: &'a Catalog,
    stage: Stage,
    age: f64,
    progress: &PlayerProgress,
) -> (Vec<&'a LifeEvent>, bool) {
    let mut had_candidates = false;
    let eligible: Vec<&'a LifeEvent> = catalog
        .candidates(stage, age)
        .inspect(|_| had_candidates = true)
        .filter(|e| e.frequency.allows(progress.completions(e.id)))
        .collect();
    (eligible, had_candidates)
}

/// Uniform pick, preferring `once` events over everything else
pub fn pick_event<'a, R: Rng + ?Sized>(
    eligible: &[&'a LifeEvent],
    rng: &mut R,
) -> Option<&'a LifeEvent> {
    let once: Vec<&LifeEvent> = eligible
        .iter()
        .copied()
        .filter(|e| e.frequency == Frequency::Once)
        .collect();

    if once.is_empty() {
        eligible.choose(rng).copied()
    } else {
        once.choose(rng).copied()
    }
}

/// Age after a failed selection attempt.
///
/// With candidates present but all exhausted, one year passes. With no
/// candidates at all, the player jumps to the stage ceiling (or one year,
/// whichever is sooner); adults simply age a year.
pub fn fallback_age(stage: Stage, age: f64, had_candidates: bool) -> f64 {
    let next = age + 1.0;
    if had_candidates {
        return next;
    }
    match stage.ceiling() {
        Some(ceiling) => next.min(ceiling.max(age)),
        None => next,
    }
}

/// Select the next event for the player and mark it as current.
///
/// Mutates the player's age and stage as time passes; callers discard the
/// mutation when this returns an error.
pub fn select_event<'a, R: Rng + ?Sized>(
    player: &mut Player,
    progress: &mut PlayerProgress,
    catalog: &'a Catalog,
    max_aging_steps: u32,
    rng: &mut R,
) -> Result<Selection<'a>> {
    for step in 0..=max_aging_steps {
        let stage = player.refresh_stage();
        if player.age >= MAX_PLAYABLE_AGE {
            break;
        }

        let (eligible, had_candidates) = eligible_events(catalog, stage, player.age, progress);
        if let Some(event) = pick_event(&eligible, rng) {
            progress.current_event = Some(event.id);
            return Ok(Selection {
                event,
                aging_steps: step,
            });
        }

        if step == max_aging_steps {
            break;
        }

        let from = player.age;
        player.age = fallback_age(stage, from, had_candidates);
        debug!(
            player_id = player.id,
            stage = stage.as_str(),
            from,
            to = player.age,
            had_candidates,
            "no eligible event, aging player"
        );
    }

    warn!(
        player_id = player.id,
        age = player.age,
        max_aging_steps,
        "no events available"
    );
    Err(StemLifeError::NoEventsAvailable)
}
