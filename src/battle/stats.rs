use crate::battle::combatant::Combatant;
use schema::{MoveCategory, StatKind, StatusCondition};

/// Apply stat stage multipliers according to Pokemon formula
/// Stages range from -6 to +6
/// Negative stages: (2 / (2 + |stage|))
/// Positive stages: ((2 + stage) / 2)
pub fn stat_stage_multiplier(stage: i8) -> f64 {
    let clamped_stage = stage.clamp(-6, 6);
    if clamped_stage < 0 {
        2.0 / (2.0 + (-clamped_stage) as f64)
    } else {
        (2.0 + clamped_stage as f64) / 2.0
    }
}

/// Apply accuracy/evasion stage multipliers according to Pokemon formula
/// Uses different multipliers than regular stats
/// Stages range from -6 to +6
pub fn accuracy_stage_multiplier(stage: i8) -> f64 {
    match stage.clamp(-6, 6) {
        -6 => 3.0 / 9.0,
        -5 => 3.0 / 8.0,
        -4 => 3.0 / 7.0,
        -3 => 3.0 / 6.0,
        -2 => 3.0 / 5.0,
        -1 => 3.0 / 4.0,
        0 => 1.0,
        1 => 4.0 / 3.0,
        2 => 5.0 / 3.0,
        3 => 6.0 / 3.0,
        4 => 7.0 / 3.0,
        5 => 8.0 / 3.0,
        _ => 9.0 / 3.0,
    }
}

/// Attack-side stat for a move of `category`, with stages applied. A burned
/// attacker's physical attack is halved.
pub fn effective_attack(attacker: &Combatant, category: MoveCategory) -> f64 {
    let (stat, kind) = match category {
        MoveCategory::Physical => (attacker.pokemon.stat(StatKind::Attack), StatKind::Attack),
        MoveCategory::Special => (
            attacker.pokemon.stat(StatKind::SpecialAttack),
            StatKind::SpecialAttack,
        ),
    };
    let mut attack = stat as f64 * stat_stage_multiplier(attacker.stages.get(kind));
    if category == MoveCategory::Physical && attacker.pokemon.status == Some(StatusCondition::Burn) {
        attack /= 2.0;
    }
    attack
}

/// Defense-side stat for a move of `category`, with stages applied. Never
/// below 1 so the damage ratio stays finite.
pub fn effective_defense(defender: &Combatant, category: MoveCategory) -> f64 {
    let kind = match category {
        MoveCategory::Physical => StatKind::Defense,
        MoveCategory::Special => StatKind::SpecialDefense,
    };
    let defense = defender.pokemon.stat(kind) as f64 * stat_stage_multiplier(defender.stages.get(kind));
    defense.max(1.0)
}

/// Speed with stages applied; paralysis quarters it.
pub fn effective_speed(combatant: &Combatant) -> u16 {
    let speed = combatant.pokemon.stat(StatKind::Speed) as f64
        * stat_stage_multiplier(combatant.stages.get(StatKind::Speed));
    let mut speed = speed.round() as u16;
    if combatant.pokemon.status == Some(StatusCondition::Paralysis) {
        speed /= 4;
    }
    speed
}

/// Final hit probability for a move with base accuracy `base` (a fraction),
/// scaled by the attacker's accuracy stage minus the defender's evasion
/// stage and capped at 1.0.
pub fn hit_chance(base: f64, attacker: &Combatant, defender: &Combatant) -> f64 {
    let adjusted_stage = (attacker.stages.get(StatKind::Accuracy)
        - defender.stages.get(StatKind::Evasion))
    .clamp(-6, 6);
    (base * accuracy_stage_multiplier(adjusted_stage)).min(1.0)
}
