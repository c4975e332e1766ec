//! Property tests for property module
//!
//! Stat clamping keeps every skill and interest within bounds, and reset
//! always lands on the same canonical state.

use proptest::prelude::*;

use crate::config::{ChoiceEffect, Stage};
use crate::property::{Player, PlayerProgress, StatKind, STAT_MAX, STAT_MIN};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate a choice effect with arbitrary (possibly extreme) deltas
fn effect_strategy() -> impl Strategy<Value = ChoiceEffect> {
    (
        prop::array::uniform9(-150..=150i32),
        -2.0..=5.0f64,
    )
        .prop_map(|(d, age)| ChoiceEffect {
            science: d[0],
            technology: d[1],
            engineering: d[2],
            math: d[3],
            health: d[4],
            intelligence: d[5],
            creativity: d[6],
            logic: d[7],
            social: d[8],
            age,
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Any sequence of effects followed by clamping stays in [0, 100]
    #[test]
    fn prop_clamped_stats_in_bounds(
        effects in prop::collection::vec(effect_strategy(), 1..=30)
    ) {
        let mut player = Player::new(1, "Test", 1);

        for effect in &effects {
            player.apply_effect(effect);
            player.clamp_stats();

            for kind in StatKind::ALL {
                let value = player.stat(kind);
                prop_assert!(
                    (STAT_MIN..=STAT_MAX).contains(&value),
                    "{:?} = {} out of bounds", kind, value
                );
            }
        }
    }

    /// Clamping only changes values that were out of bounds
    #[test]
    fn prop_clamp_is_identity_in_bounds(
        values in prop::array::uniform9(0..=100i32)
    ) {
        let mut player = Player::new(1, "Test", 1);
        for (kind, value) in StatKind::ALL.into_iter().zip(values) {
            *player.stat_mut(kind) = value;
        }
        let before = player.clone();
        player.clamp_stats();
        prop_assert_eq!(player, before);
    }

    /// Reset twice equals reset once, whatever the prior state
    #[test]
    fn prop_reset_idempotent(
        effects in prop::collection::vec(effect_strategy(), 0..=10),
        age in 0.0..150.0f64,
        completed in prop::collection::vec(1..=50i32, 0..=20)
    ) {
        let mut player = Player::new(1, "Test", 1);
        let mut progress = PlayerProgress::new();
        for effect in &effects {
            player.apply_effect(effect);
        }
        player.age = age;
        player.refresh_stage();
        for id in &completed {
            progress.record_completion(*id);
        }
        progress.current_event = completed.first().copied();

        player.reset();
        progress.clear();
        let once = (player.clone(), progress.clone());

        player.reset();
        progress.clear();

        prop_assert_eq!(&player, &once.0);
        prop_assert_eq!(&progress, &once.1);
        prop_assert_eq!(player.current_stage, Stage::Infant);
        prop_assert_eq!(progress.total_completions(), 0);
    }
}
