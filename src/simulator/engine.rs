//! Main game engine
//!
//! Ties the catalog, the selector, the resolver and the recommendation
//! together on top of a [`GameStore`]. Every operation takes the resolved
//! [`PlayerId`] explicitly and runs as a single store transaction.

use crate::config::{Catalog, DEFAULT_MAX_AGING_STEPS};
use crate::error::{Result, StemLifeError};
use crate::event::{resolve_choice, select_event};
use crate::property::{AccountId, PlayerId};
use crate::recommendation::{recommend, InterestSummary};
use crate::store::GameStore;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

use super::{ChoiceResult, CurrentEvent, EventView, RecommendationView};

/// Longest accepted character name
pub const MAX_NAME_LEN: usize = 50;

/// Game engine over a shared catalog and a store
pub struct GameEngine<S> {
    catalog: Arc<Catalog>,
    store: S,
    max_aging_steps: u32,
}

impl<S: GameStore> GameEngine<S> {
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            store,
            max_aging_steps: DEFAULT_MAX_AGING_STEPS,
        }
    }

    /// Override the cap on fallback aging steps per selection
    pub fn with_max_aging_steps(mut self, steps: u32) -> Self {
        self.max_aging_steps = steps;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the character for an account
    pub fn create_character(&self, account: AccountId, name: &str) -> Result<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StemLifeError::MalformedInput("name is required".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(StemLifeError::MalformedInput(format!(
                "name is longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        let id = self.store.create_player(account, name)?;
        info!(player_id = id, account, "character created");
        Ok(id)
    }

    /// Resolve the player an account belongs to
    #[inline]
    pub fn player_for_account(&self, account: AccountId) -> Result<PlayerId> {
        self.store.player_for_account(account)
    }

    /// Offer the next life event
    pub fn current_event(&self, id: PlayerId) -> Result<CurrentEvent> {
        self.current_event_with_rng(id, &mut rand::thread_rng())
    }

    /// Offer the next life event using the given randomness source
    pub fn current_event_with_rng<R: Rng + ?Sized>(
        &self,
        id: PlayerId,
        rng: &mut R,
    ) -> Result<CurrentEvent> {
        let catalog = &*self.catalog;
        let max_aging_steps = self.max_aging_steps;

        self.store.transact(id, |record| {
            let selection = select_event(
                &mut record.player,
                &mut record.progress,
                catalog,
                max_aging_steps,
                rng,
            )?;
            record.progress.touch();

            info!(
                player_id = id,
                event_id = selection.event.id,
                stage = record.player.current_stage.as_str(),
                age = record.player.age,
                aging_steps = selection.aging_steps,
                "event offered"
            );

            Ok(CurrentEvent {
                event: EventView::from(selection.event),
                player: record.player.snapshot(),
            })
        })
    }

    /// Resolve a choice of the current event
    pub fn make_choice(&self, id: PlayerId, choice_index: i64) -> Result<ChoiceResult> {
        let catalog = &*self.catalog;

        self.store.transact(id, |record| {
            let outcome =
                resolve_choice(&mut record.player, &mut record.progress, catalog, choice_index)?;

            Ok(ChoiceResult {
                success: true,
                player: record.player.snapshot(),
                stem_recommendation: outcome.recommendation,
            })
        })
    }

    /// Current recommendation, at any age
    pub fn stem_recommendation(&self, id: PlayerId) -> Result<RecommendationView> {
        let record = self.store.load(id)?;
        Ok(RecommendationView {
            recommendation: recommend(&record.player),
            interests: InterestSummary::from(&record.player),
        })
    }

    /// Restore the initial state and forget all progress
    pub fn reset_game(&self, id: PlayerId) -> Result<()> {
        let cleared = self.store.transact(id, |record| {
            let cleared = record.progress.total_completions();
            record.player.reset();
            record.progress.clear();
            record.progress.touch();
            Ok(cleared)
        })?;
        info!(player_id = id, cleared_completions = cleared, "game reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Category, ChoiceEffect, EventChoice, Frequency, LifeEvent, Stage};
    use crate::recommendation::StemField;
    use crate::store::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smallvec::smallvec;

    fn engine() -> GameEngine<InMemoryStore> {
        let catalog = Catalog::from_events(vec![
            LifeEvent {
                id: 1,
                title: "First words".to_string(),
                description: "You try to say your first word.".to_string(),
                stage: Stage::Infant,
                category: Category::Milestone,
                min_age: 0.0,
                max_age: 2.99,
                frequency: Frequency::Once,
                choices: smallvec![
                    EventChoice {
                        text: "Count to two".to_string(),
                        effects: ChoiceEffect {
                            math: 30,
                            logic: 25,
                            age: 1.0,
                            ..Default::default()
                        },
                    },
                    EventChoice {
                        text: "Babble".to_string(),
                        effects: ChoiceEffect {
                            social: 5,
                            ..Default::default()
                        },
                    },
                ],
            },
            LifeEvent {
                id: 2,
                title: "Puzzle box".to_string(),
                description: "A puzzle box appears.".to_string(),
                stage: Stage::Toddler,
                category: Category::Hobby,
                min_age: 3.0,
                max_age: 5.99,
                frequency: Frequency::Common,
                choices: smallvec![
                    EventChoice {
                        text: "Solve it".to_string(),
                        effects: ChoiceEffect {
                            logic: 5,
                            ..Default::default()
                        },
                    },
                    EventChoice {
                        text: "Ignore it".to_string(),
                        effects: ChoiceEffect::default(),
                    },
                ],
            },
        ])
        .unwrap();
        GameEngine::new(Arc::new(catalog), InMemoryStore::new())
    }

    #[test]
    fn test_full_cycle() {
        let engine = engine();
        let id = engine.create_character(7, "  Ada  ").unwrap();
        assert_eq!(engine.player_for_account(7).unwrap(), id);
        assert_eq!(engine.store().load(id).unwrap().player.name, "Ada");

        let mut rng = StdRng::seed_from_u64(3);
        let offered = engine.current_event_with_rng(id, &mut rng).unwrap();
        assert_eq!(offered.event.id, 1);
        assert_eq!(offered.player.health, 100);

        let result = engine.make_choice(id, 0).unwrap();
        assert!(result.success);
        assert_eq!(result.player.age, 1.0);
        assert_eq!(result.player.math_interest, 30);
        assert_eq!(result.player.logic, 75);
        assert!(result.stem_recommendation.is_none());

        // Event 1 is spent, so the infant is moved on to the toddler event
        let offered = engine.current_event_with_rng(id, &mut rng).unwrap();
        assert_eq!(offered.event.id, 2);
        assert_eq!(offered.player.age, 3.0);

        let view = engine.stem_recommendation(id).unwrap();
        assert_eq!(view.recommendation, StemField::Mathematics);
        assert_eq!(view.interests.math, 30);
    }

    #[test]
    fn test_choice_without_event() {
        let engine = engine();
        let id = engine.create_character(7, "Ada").unwrap();
        assert!(matches!(
            engine.make_choice(id, 0),
            Err(StemLifeError::InvalidState)
        ));
    }

    #[test]
    fn test_double_submission_applies_once() {
        let engine = engine();
        let id = engine.create_character(7, "Ada").unwrap();
        engine.current_event(id).unwrap();

        engine.make_choice(id, 1).unwrap();
        assert!(matches!(
            engine.make_choice(id, 1),
            Err(StemLifeError::InvalidState)
        ));
        assert_eq!(engine.store().load(id).unwrap().player.social_skills, 55);
    }

    #[test]
    fn test_failed_selection_persists_nothing() {
        let engine = engine().with_max_aging_steps(200);
        let id = engine.create_character(7, "Ada").unwrap();
        engine
            .store()
            .transact(id, |record| {
                record.player.age = 40.0;
                Ok(())
            })
            .unwrap();
        let before = engine.store().load(id).unwrap();

        assert!(matches!(
            engine.current_event(id),
            Err(StemLifeError::NoEventsAvailable)
        ));
        assert_eq!(engine.store().load(id).unwrap(), before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let engine = engine();
        let id = engine.create_character(7, "Ada").unwrap();
        engine.current_event(id).unwrap();
        engine.make_choice(id, 0).unwrap();
        engine.current_event(id).unwrap();

        engine.reset_game(id).unwrap();
        let once = engine.store().load(id).unwrap();
        engine.reset_game(id).unwrap();
        let mut twice = engine.store().load(id).unwrap();

        twice.progress.updated_at = once.progress.updated_at;
        assert_eq!(once, twice);
        assert_eq!(once.player.age, 0.0);
        assert_eq!(once.player.current_stage, Stage::Infant);
        assert!(once.progress.current_event.is_none());
        assert!(once.progress.completed_events.is_empty());
    }

    #[test]
    fn test_name_validation() {
        let engine = engine();
        assert!(matches!(
            engine.create_character(7, "   "),
            Err(StemLifeError::MalformedInput(_))
        ));
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            engine.create_character(7, &long),
            Err(StemLifeError::MalformedInput(_))
        ));
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_unknown_player() {
        let engine = engine();
        assert!(matches!(
            engine.current_event(5),
            Err(StemLifeError::PlayerNotFound)
        ));
        assert!(matches!(
            engine.stem_recommendation(5),
            Err(StemLifeError::PlayerNotFound)
        ));
        assert!(matches!(
            engine.reset_game(5),
            Err(StemLifeError::PlayerNotFound)
        ));
    }
}
