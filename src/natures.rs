//! The 25 natures, numbered 1..=25. Each of the first 20 raises one stat by
//! 10% and lowers another by 10%; 21..=25 are neutral.

use schema::StatKind;

pub const NATURE_COUNT: u8 = 25;

/// (raised, lowered) for natures 1..=20, in id order.
const NATURE_TABLE: [(StatKind, StatKind); 20] = [
    (StatKind::Attack, StatKind::Defense),
    (StatKind::Attack, StatKind::SpecialAttack),
    (StatKind::Attack, StatKind::SpecialDefense),
    (StatKind::Attack, StatKind::Speed),
    (StatKind::Defense, StatKind::Attack),
    (StatKind::Defense, StatKind::SpecialAttack),
    (StatKind::Defense, StatKind::SpecialDefense),
    (StatKind::Defense, StatKind::Speed),
    (StatKind::SpecialAttack, StatKind::Attack),
    (StatKind::SpecialAttack, StatKind::Defense),
    (StatKind::SpecialAttack, StatKind::SpecialDefense),
    (StatKind::SpecialAttack, StatKind::Speed),
    (StatKind::SpecialDefense, StatKind::Attack),
    (StatKind::SpecialDefense, StatKind::Defense),
    (StatKind::SpecialDefense, StatKind::SpecialAttack),
    (StatKind::SpecialDefense, StatKind::Speed),
    (StatKind::Speed, StatKind::Attack),
    (StatKind::Speed, StatKind::Defense),
    (StatKind::Speed, StatKind::SpecialAttack),
    (StatKind::Speed, StatKind::SpecialDefense),
];

/// The stats a nature raises and lowers, or `None` for neutral or unknown ids.
pub fn nature_modifiers(nature: u8) -> Option<(StatKind, StatKind)> {
    match nature {
        1..=20 => Some(NATURE_TABLE[(nature - 1) as usize]),
        _ => None,
    }
}

/// Multiplier a nature applies to `stat`.
pub fn nature_multiplier(nature: u8, stat: StatKind) -> f64 {
    match nature_modifiers(nature) {
        Some((raised, _)) if raised == stat => 1.1,
        Some((_, lowered)) if lowered == stat => 0.9,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, StatKind::Attack, 1.1)]
    #[case(1, StatKind::Defense, 0.9)]
    #[case(1, StatKind::Speed, 1.0)]
    #[case(12, StatKind::SpecialAttack, 1.1)]
    #[case(12, StatKind::Speed, 0.9)]
    #[case(20, StatKind::SpecialDefense, 0.9)]
    #[case(21, StatKind::Attack, 1.0)]
    #[case(25, StatKind::Speed, 1.0)]
    #[case(0, StatKind::Attack, 1.0)]
    fn test_nature_multiplier(#[case] nature: u8, #[case] stat: StatKind, #[case] expected: f64) {
        assert_eq!(nature_multiplier(nature, stat), expected);
    }

    #[test]
    fn test_no_nature_raises_and_lowers_same_stat() {
        for nature in 1..=NATURE_COUNT {
            if let Some((raised, lowered)) = nature_modifiers(nature) {
                assert_ne!(raised, lowered, "nature {}", nature);
            }
        }
    }
}
