//! STEM field recommendation
//!
//! A pure classification of a player's skills and interests into one of four
//! fields. Rules are checked in a fixed order and the first match wins; when
//! none applies, the strongest interest decides, ties going to the field
//! listed first.

use crate::property::Player;
use serde::Serialize;
use std::fmt;

#[cfg(test)]
mod property_tests;

/// Recommended STEM field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StemField {
    Science,
    Technology,
    Engineering,
    Mathematics,
}

impl StemField {
    /// Tie-break order for the highest-interest fallback
    pub const ALL: [StemField; 4] = [
        StemField::Science,
        StemField::Technology,
        StemField::Engineering,
        StemField::Mathematics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StemField::Science => "Science",
            StemField::Technology => "Technology",
            StemField::Engineering => "Engineering",
            StemField::Mathematics => "Mathematics",
        }
    }
}

impl fmt::Display for StemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs of the recommendation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StemProfile {
    pub logic: i32,
    pub creativity: i32,
    pub intelligence: i32,
    pub science_interest: i32,
    pub technology_interest: i32,
    pub engineering_interest: i32,
    pub math_interest: i32,
}

impl StemProfile {
    #[inline]
    fn interest(&self, field: StemField) -> i32 {
        match field {
            StemField::Science => self.science_interest,
            StemField::Technology => self.technology_interest,
            StemField::Engineering => self.engineering_interest,
            StemField::Mathematics => self.math_interest,
        }
    }
}

impl From<&Player> for StemProfile {
    fn from(player: &Player) -> Self {
        Self {
            logic: player.logic,
            creativity: player.creativity,
            intelligence: player.intelligence,
            science_interest: player.science_interest,
            technology_interest: player.technology_interest,
            engineering_interest: player.engineering_interest,
            math_interest: player.math_interest,
        }
    }
}

/// Interest counters as reported alongside a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestSummary {
    pub science: i32,
    pub technology: i32,
    pub engineering: i32,
    pub math: i32,
}

impl From<&Player> for InterestSummary {
    fn from(player: &Player) -> Self {
        Self {
            science: player.science_interest,
            technology: player.technology_interest,
            engineering: player.engineering_interest,
            math: player.math_interest,
        }
    }
}

/// Recommend a field for the player
#[inline]
pub fn recommend(player: &Player) -> StemField {
    classify(&StemProfile::from(player))
}

/// Recommend a field for a bare profile
pub fn classify(p: &StemProfile) -> StemField {
    if p.logic > 70 && p.math_interest > 60 {
        return StemField::Mathematics;
    }
    if p.creativity > 70 && p.science_interest > 60 {
        return StemField::Science;
    }
    if p.intelligence > 70 && p.technology_interest > 60 {
        return StemField::Technology;
    }
    if p.logic > 60 && p.engineering_interest > 60 {
        return StemField::Engineering;
    }

    // First strictly greater value wins, keeping earlier fields on ties
    let mut best = StemField::Science;
    for field in StemField::ALL {
        if p.interest(field) > p.interest(best) {
            best = field;
        }
    }
    best
}
