//! Hard immunities: the defender refuses the whole move.

use crate::abilities::hooks::{HookOutcome, MoveContext};
use crate::abilities::Ability;
use crate::errors::AbilityResult;
use schema::{PokemonType, StatKind, StatusCondition, Weather};

use super::{is_attack, name_matches};

const SOUND_MOVES: &[&str] = &["sing", "growl", "hypervoice", "echoedvoice", "chatter"];
const EXPLOSIVE_MOVES: &[&str] = &["selfdestruct", "explod", "mindblown"];
const STEALING_MOVES: &[&str] = &["knock", "thief", "steal", "pluck"];
const FORCED_SWITCH_MOVES: &[&str] = &["roar", "whirlwind", "dragontail", "circlethrow"];

fn block_status(
    ctx: &MoveContext<'_>,
    status: StatusCondition,
    ability: Ability,
) -> HookOutcome {
    if ctx.data().apply_status == Some(status) {
        HookOutcome::blocked_by(ability)
    } else {
        HookOutcome::pass()
    }
}

pub fn insomnia(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    Ok(block_status(ctx, StatusCondition::Sleep, Ability::Insomnia))
}

pub fn vital_spirit(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    Ok(block_status(ctx, StatusCondition::Sleep, Ability::VitalSpirit))
}

pub fn limber(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    Ok(block_status(ctx, StatusCondition::Paralysis, Ability::Limber))
}

pub fn immunity(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    Ok(block_status(ctx, StatusCondition::Poison, Ability::Immunity))
}

pub fn water_veil(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    Ok(block_status(ctx, StatusCondition::Burn, Ability::WaterVeil))
}

/// Any status move is refused in harsh sunlight.
pub fn leaf_guard(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().apply_status.is_some() && ctx.defender.weather == Weather::Sun {
        return Ok(HookOutcome::blocked_by(Ability::LeafGuard));
    }
    Ok(HookOutcome::pass())
}

pub fn own_tempo(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().confusion_chance.is_some_and(|chance| chance > 0.0) {
        return Ok(HookOutcome::blocked_by(Ability::OwnTempo));
    }
    Ok(HookOutcome::pass())
}

pub fn clear_body(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if !ctx.data().debuff_stats.is_empty() {
        return Ok(HookOutcome::blocked_by(Ability::ClearBody));
    }
    Ok(HookOutcome::pass())
}

pub fn hyper_cutter(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().debuff_stats.contains(&StatKind::Attack) {
        return Ok(HookOutcome::blocked_by(Ability::HyperCutter));
    }
    Ok(HookOutcome::pass())
}

pub fn keen_eye(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().debuff_stats.contains(&StatKind::Accuracy) {
        return Ok(HookOutcome::blocked_by(Ability::KeenEye));
    }
    Ok(HookOutcome::pass())
}

pub fn soundproof(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if name_matches(ctx.move_name, SOUND_MOVES) {
        return Ok(HookOutcome::blocked_by(Ability::Soundproof));
    }
    Ok(HookOutcome::pass())
}

pub fn levitate(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if !ctx.descriptor.mold_breaker
        && ctx.data().move_type == PokemonType::Ground
        && is_attack(ctx.descriptor)
    {
        return Ok(HookOutcome::blocked_by(Ability::Levitate));
    }
    Ok(HookOutcome::pass())
}

pub fn damp(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if !ctx.descriptor.mold_breaker && name_matches(ctx.move_name, EXPLOSIVE_MOVES) {
        return Ok(HookOutcome::blocked_by(Ability::Damp));
    }
    Ok(HookOutcome::pass())
}

pub fn sticky_hold(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if name_matches(ctx.move_name, STEALING_MOVES) {
        return Ok(HookOutcome::blocked_by(Ability::StickyHold));
    }
    Ok(HookOutcome::pass())
}

pub fn magnet_pull(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if name_matches(ctx.move_name, FORCED_SWITCH_MOVES) {
        return Ok(HookOutcome::blocked_by(Ability::MagnetPull));
    }
    Ok(HookOutcome::pass())
}

pub fn arena_trap(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if name_matches(ctx.move_name, FORCED_SWITCH_MOVES) {
        return Ok(HookOutcome::blocked_by(Ability::ArenaTrap));
    }
    Ok(HookOutcome::pass())
}

pub fn suction_cups(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if !ctx.descriptor.mold_breaker && name_matches(ctx.move_name, FORCED_SWITCH_MOVES) {
        return Ok(HookOutcome::blocked_by(Ability::SuctionCups));
    }
    Ok(HookOutcome::pass())
}
