//! Abilities that swallow or bounce a move instead of just refusing it.

use crate::abilities::hooks::{HookOutcome, MoveContext};
use crate::abilities::Ability;
use crate::battle::state::{ResultEvent, Target};
use crate::errors::AbilityResult;
use schema::{MoveKind, PokemonType, StatKind};

use super::is_attack;

/// Heal a quarter of max HP (at least 1) and block the move.
fn absorb(ctx: &mut MoveContext<'_>, ability: Ability) -> HookOutcome {
    let amount = (ctx.defender.max_hp() / 4).max(1);
    let restored = ctx.defender.pokemon.heal(amount);
    HookOutcome::blocked_by(ability)
        .activated()
        .with_event(ResultEvent::Healed {
            target: Target::Defender,
            amount: restored,
            ability: ability.name(),
        })
}

fn absorbs(ctx: &MoveContext<'_>, move_type: PokemonType) -> bool {
    !ctx.descriptor.mold_breaker && ctx.data().move_type == move_type && is_attack(ctx.descriptor)
}

pub fn water_absorb(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if absorbs(ctx, PokemonType::Water) {
        return Ok(absorb(ctx, Ability::WaterAbsorb));
    }
    Ok(HookOutcome::pass())
}

pub fn volt_absorb(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if absorbs(ctx, PokemonType::Electric) {
        return Ok(absorb(ctx, Ability::VoltAbsorb));
    }
    Ok(HookOutcome::pass())
}

/// Absorbs water like Water Absorb; takes extra damage from fire.
pub fn dry_skin(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if absorbs(ctx, PokemonType::Water) {
        return Ok(absorb(ctx, Ability::DrySkin));
    }
    if !ctx.descriptor.mold_breaker && ctx.data().move_type == PokemonType::Fire {
        ctx.descriptor.scale_power(1.25);
    }
    Ok(HookOutcome::pass())
}

pub fn flash_fire(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().move_type == PokemonType::Fire {
        ctx.defender.flags.flash_fire_active = true;
        return Ok(HookOutcome::blocked_by(Ability::FlashFire).activated());
    }
    Ok(HookOutcome::pass())
}

/// Draws in electric attacks and raises Special Attack.
pub fn lightning_rod(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().move_type != PokemonType::Electric || !is_attack(ctx.descriptor) {
        return Ok(HookOutcome::pass());
    }
    let change = ctx.defender.stages.change(StatKind::SpecialAttack, 1);
    let stage = ctx.defender.stages.get(StatKind::SpecialAttack);
    Ok(HookOutcome::blocked_by(Ability::LightningRod)
        .activated()
        .with_event(ResultEvent::StatStageChanged {
            target: Target::Defender,
            stat: StatKind::SpecialAttack,
            change,
            stage,
        }))
}

/// Sends any non-damaging move back at its user.
pub fn magic_bounce(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().kind != MoveKind::Damaging {
        return Ok(HookOutcome::reflected_by(Ability::MagicBounce));
    }
    Ok(HookOutcome::pass())
}
