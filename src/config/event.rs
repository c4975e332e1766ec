//! Life event catalog structures

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Catalog identifier of a life event
pub type EventId = i32;

/// Life stage, derived from age
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Infant,
    Toddler,
    Child,
    Teen,
    YoungAdult,
    Adult,
}

impl Stage {
    /// All stages in life order.
    pub const ALL: [Stage; 6] = [
        Stage::Infant,
        Stage::Toddler,
        Stage::Child,
        Stage::Teen,
        Stage::YoungAdult,
        Stage::Adult,
    ];

    /// Derive the stage for an age using the fixed thresholds.
    pub fn from_age(age: f64) -> Self {
        if age < 3.0 {
            Stage::Infant
        } else if age < 6.0 {
            Stage::Toddler
        } else if age < 13.0 {
            Stage::Child
        } else if age < 20.0 {
            Stage::Teen
        } else if age < 30.0 {
            Stage::YoungAdult
        } else {
            Stage::Adult
        }
    }

    /// First age that no longer belongs to this stage. Adults have none.
    pub fn ceiling(self) -> Option<f64> {
        match self {
            Stage::Infant => Some(3.0),
            Stage::Toddler => Some(6.0),
            Stage::Child => Some(13.0),
            Stage::Teen => Some(20.0),
            Stage::YoungAdult => Some(30.0),
            Stage::Adult => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Infant => "infant",
            Stage::Toddler => "toddler",
            Stage::Child => "child",
            Stage::Teen => "teen",
            Stage::YoungAdult => "young_adult",
            Stage::Adult => "adult",
        }
    }
}

/// How many times an event may be offered to the same player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Rare,
    Multiple,
    Common,
}

impl Frequency {
    /// Completions at which the event stops being offered.
    #[inline]
    pub fn completion_limit(self) -> u32 {
        match self {
            Frequency::Once | Frequency::Rare => 1,
            Frequency::Multiple => 3,
            Frequency::Common => 5,
        }
    }

    #[inline]
    pub fn allows(self, completions: u32) -> bool {
        completions < self.completion_limit()
    }
}

/// Descriptive tag of a life event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Social,
    Health,
    Hobby,
    Family,
    Career,
    Milestone,
}

/// Effect vector of a choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceEffect {
    #[serde(default)]
    pub science: i32,
    #[serde(default)]
    pub technology: i32,
    #[serde(default)]
    pub engineering: i32,
    #[serde(default)]
    pub math: i32,
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub intelligence: i32,
    #[serde(default)]
    pub creativity: i32,
    #[serde(default)]
    pub logic: i32,
    #[serde(default)]
    pub social: i32,
    /// Age increment; zero or negative means the default step
    #[serde(default)]
    pub age: f64,
}

/// A selectable option of a life event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventChoice {
    pub text: String,
    #[serde(default)]
    pub effects: ChoiceEffect,
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub stage: Stage,
    pub category: Category,
    pub min_age: f64,
    pub max_age: f64,
    pub frequency: Frequency,
    pub choices: SmallVec<[EventChoice; 3]>,
}

impl LifeEvent {
    /// Whether the inclusive age range contains `age`.
    #[inline]
    pub fn covers_age(&self, age: f64) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}
