//! Property tests for recommendation module
//!
//! The classification is deterministic and follows the fixed rule order.

use proptest::prelude::*;

use crate::recommendation::{classify, StemField, StemProfile};

fn profile_strategy() -> impl Strategy<Value = StemProfile> {
    prop::array::uniform7(0..=100i32).prop_map(|v| StemProfile {
        logic: v[0],
        creativity: v[1],
        intelligence: v[2],
        science_interest: v[3],
        technology_interest: v[4],
        engineering_interest: v[5],
        math_interest: v[6],
    })
}

/// Straightforward restatement of the rules used as an oracle
fn expected(p: &StemProfile) -> StemField {
    if p.logic > 70 && p.math_interest > 60 {
        StemField::Mathematics
    } else if p.creativity > 70 && p.science_interest > 60 {
        StemField::Science
    } else if p.intelligence > 70 && p.technology_interest > 60 {
        StemField::Technology
    } else if p.logic > 60 && p.engineering_interest > 60 {
        StemField::Engineering
    } else {
        let interests = [
            (StemField::Science, p.science_interest),
            (StemField::Technology, p.technology_interest),
            (StemField::Engineering, p.engineering_interest),
            (StemField::Mathematics, p.math_interest),
        ];
        let max = interests.iter().map(|(_, v)| *v).max().unwrap_or(0);
        interests
            .iter()
            .find(|(_, v)| *v == max)
            .map(|(f, _)| *f)
            .unwrap_or(StemField::Science)
    }
}

proptest! {
    /// Identical inputs always give the identical label
    #[test]
    fn prop_recommendation_is_pure(profile in profile_strategy()) {
        let first = classify(&profile);
        for _ in 0..5 {
            prop_assert_eq!(classify(&profile), first);
        }
    }

    /// Decision order is rules 1-4, then highest interest in field order
    #[test]
    fn prop_recommendation_matches_rule_order(profile in profile_strategy()) {
        prop_assert_eq!(classify(&profile), expected(&profile));
    }

    /// Without any rule firing, the pick carries the maximum interest
    #[test]
    fn prop_fallback_has_max_interest(
        interests in prop::array::uniform4(0..=100i32)
    ) {
        let profile = StemProfile {
            science_interest: interests[0],
            technology_interest: interests[1],
            engineering_interest: interests[2],
            math_interest: interests[3],
            ..Default::default()
        };
        let field = classify(&profile);
        let index = StemField::ALL.iter().position(|f| *f == field).unwrap();
        let max = *interests.iter().max().unwrap();
        prop_assert_eq!(interests[index], max);
        prop_assert!(interests[..index].iter().all(|v| *v < max));
    }
}
