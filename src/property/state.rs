//! Player state structure and stat operations

use crate::config::{ChoiceEffect, Stage};
use serde::Serialize;
use smallvec::SmallVec;

use super::{AccountId, PlayerId};

/// Lower bound of every clamped stat
pub const STAT_MIN: i32 = 0;
/// Upper bound of every clamped stat
pub const STAT_MAX: i32 = 100;

/// Stats touched by choice effects and clamped after resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Health,
    Intelligence,
    Creativity,
    Logic,
    SocialSkills,
    ScienceInterest,
    TechnologyInterest,
    EngineeringInterest,
    MathInterest,
}

impl StatKind {
    pub const ALL: [StatKind; 9] = [
        StatKind::Health,
        StatKind::Intelligence,
        StatKind::Creativity,
        StatKind::Logic,
        StatKind::SocialSkills,
        StatKind::ScienceInterest,
        StatKind::TechnologyInterest,
        StatKind::EngineeringInterest,
        StatKind::MathInterest,
    ];

    /// Delta this stat receives from a choice effect
    #[inline]
    pub fn delta(self, effect: &ChoiceEffect) -> i32 {
        match self {
            StatKind::Health => effect.health,
            StatKind::Intelligence => effect.intelligence,
            StatKind::Creativity => effect.creativity,
            StatKind::Logic => effect.logic,
            StatKind::SocialSkills => effect.social,
            StatKind::ScienceInterest => effect.science,
            StatKind::TechnologyInterest => effect.technology,
            StatKind::EngineeringInterest => effect.engineering,
            StatKind::MathInterest => effect.math,
        }
    }
}

/// Player character record
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub creator: AccountId,
    /// Accounts sharing this player, creator included
    pub members: SmallVec<[AccountId; 2]>,

    pub age: f64,
    pub health: i32,
    pub intelligence: i32,
    pub creativity: i32,
    pub logic: i32,
    pub social_skills: i32,

    pub science_interest: i32,
    pub technology_interest: i32,
    pub engineering_interest: i32,
    pub math_interest: i32,

    pub current_stage: Stage,
    pub is_alive: bool,
}

impl Player {
    /// Create a player in its initial state
    pub fn new(id: PlayerId, name: impl Into<String>, creator: AccountId) -> Self {
        let mut members = SmallVec::new();
        members.push(creator);
        let mut player = Self {
            id,
            name: name.into(),
            creator,
            members,
            age: 0.0,
            health: 0,
            intelligence: 0,
            creativity: 0,
            logic: 0,
            social_skills: 0,
            science_interest: 0,
            technology_interest: 0,
            engineering_interest: 0,
            math_interest: 0,
            current_stage: Stage::Infant,
            is_alive: true,
        };
        player.reset();
        player
    }

    /// Restore the initial numeric state. Identity is kept.
    pub fn reset(&mut self) {
        self.age = 0.0;
        self.health = 100;
        self.intelligence = 50;
        self.creativity = 50;
        self.logic = 50;
        self.social_skills = 50;
        self.science_interest = 0;
        self.technology_interest = 0;
        self.engineering_interest = 0;
        self.math_interest = 0;
        self.current_stage = Stage::Infant;
        self.is_alive = true;
    }

    #[inline]
    pub fn stat(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Intelligence => self.intelligence,
            StatKind::Creativity => self.creativity,
            StatKind::Logic => self.logic,
            StatKind::SocialSkills => self.social_skills,
            StatKind::ScienceInterest => self.science_interest,
            StatKind::TechnologyInterest => self.technology_interest,
            StatKind::EngineeringInterest => self.engineering_interest,
            StatKind::MathInterest => self.math_interest,
        }
    }

    #[inline]
    pub fn stat_mut(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::Creativity => &mut self.creativity,
            StatKind::Logic => &mut self.logic,
            StatKind::SocialSkills => &mut self.social_skills,
            StatKind::ScienceInterest => &mut self.science_interest,
            StatKind::TechnologyInterest => &mut self.technology_interest,
            StatKind::EngineeringInterest => &mut self.engineering_interest,
            StatKind::MathInterest => &mut self.math_interest,
        }
    }

    /// Add every stat delta of `effect`. Age is handled by the resolver.
    pub fn apply_effect(&mut self, effect: &ChoiceEffect) {
        for kind in StatKind::ALL {
            let delta = kind.delta(effect);
            if delta != 0 {
                let value = self.stat_mut(kind);
                *value = value.saturating_add(delta);
            }
        }
    }

    /// Clamp all stats into [STAT_MIN, STAT_MAX]
    pub fn clamp_stats(&mut self) {
        for kind in StatKind::ALL {
            let value = self.stat_mut(kind);
            *value = (*value).clamp(STAT_MIN, STAT_MAX);
        }
    }

    /// Re-derive the stage from the current age and store it
    #[inline]
    pub fn refresh_stage(&mut self) -> Stage {
        self.current_stage = Stage::from_age(self.age);
        self.current_stage
    }

    pub fn is_member(&self, account: AccountId) -> bool {
        self.members.contains(&account)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            age: self.age,
            health: self.health,
            intelligence: self.intelligence,
            creativity: self.creativity,
            logic: self.logic,
            social_skills: self.social_skills,
            science_interest: self.science_interest,
            technology_interest: self.technology_interest,
            engineering_interest: self.engineering_interest,
            math_interest: self.math_interest,
        }
    }
}

/// Public view of a player's stats
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub age: f64,
    pub health: i32,
    pub intelligence: i32,
    pub creativity: i32,
    pub logic: i32,
    pub social_skills: i32,
    pub science_interest: i32,
    pub technology_interest: i32,
    pub engineering_interest: i32,
    pub math_interest: i32,
}
