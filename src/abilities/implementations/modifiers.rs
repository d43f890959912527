//! Abilities that rewrite the move descriptor: power, accuracy, secondary
//! effect chances and damage tags.

use crate::abilities::hooks::{HookOutcome, MoveContext};
use crate::abilities::Ability;
use crate::errors::{AbilityError, AbilityResult};
use schema::{Accuracy, MoveCategory, PokemonType};

use super::{is_attack, name_matches};

/// Defender effectiveness, or an error naming the missing species.
fn defender_effectiveness(ctx: &MoveContext<'_>) -> AbilityResult<f64> {
    ctx.effectiveness_on_defender()
        .ok_or_else(|| AbilityError::MissingSpecies(ctx.defender.pokemon.species.clone()))
}

fn pinch_boost(ctx: &mut MoveContext<'_>, move_type: PokemonType) -> AbilityResult<HookOutcome> {
    let max_hp = ctx.attacker.max_hp();
    if ctx.data().move_type == move_type
        && max_hp > 0
        && u32::from(ctx.attacker.hp()) * 3 <= u32::from(max_hp)
    {
        ctx.descriptor.scale_power(1.5);
    }
    Ok(HookOutcome::pass())
}

pub fn overgrow(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    pinch_boost(ctx, PokemonType::Grass)
}

pub fn blaze(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    pinch_boost(ctx, PokemonType::Fire)
}

pub fn torrent(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    pinch_boost(ctx, PokemonType::Water)
}

pub fn swarm(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    pinch_boost(ctx, PokemonType::Bug)
}

pub fn iron_fist(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if name_matches(ctx.move_name, &["punch"]) {
        ctx.descriptor.scale_power(1.2);
    }
    Ok(HookOutcome::pass())
}

pub fn guts(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().category == MoveCategory::Physical && ctx.attacker.status().is_some() {
        ctx.descriptor.scale_power(1.5);
    }
    Ok(HookOutcome::pass())
}

pub fn technician(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().power <= 60 {
        ctx.descriptor.scale_power(1.5);
    }
    Ok(HookOutcome::pass())
}

pub fn reckless(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().recoil.is_some_and(|recoil| recoil > 0.0) {
        ctx.descriptor.scale_power(1.2);
    }
    Ok(HookOutcome::pass())
}

/// Stronger against the same gender, weaker against the opposite one.
pub fn rivalry(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    match ctx.attacker.pokemon.gender.same_as(ctx.defender.pokemon.gender) {
        Some(true) => ctx.descriptor.scale_power(1.25),
        Some(false) => ctx.descriptor.scale_power(0.75),
        None => {}
    }
    Ok(HookOutcome::pass())
}

pub fn thick_fat(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if matches!(ctx.data().move_type, PokemonType::Fire | PokemonType::Ice) {
        ctx.descriptor.scale_power(0.5);
    }
    Ok(HookOutcome::pass())
}

pub fn compound_eyes(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    ctx.descriptor.scale_accuracy(1.3);
    Ok(HookOutcome::pass())
}

pub fn illuminate(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    ctx.descriptor.scale_accuracy(1.1);
    Ok(HookOutcome::pass())
}

/// Every move used by or against the holder lands. Accuracy and evasion
/// stages no longer apply since no roll is made.
pub fn no_guard(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    ctx.descriptor.data.accuracy = Accuracy::AlwaysHits;
    Ok(HookOutcome::pass())
}

pub fn serene_grace(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    for chance in ctx.descriptor.chance_fields_mut() {
        if let Some(value) = chance {
            *value = (*value * 2.0).min(1.0);
        }
    }
    Ok(HookOutcome::pass())
}

/// No secondary effects land on the holder.
pub fn shield_dust(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    for chance in ctx.descriptor.chance_fields_mut() {
        if chance.is_some() {
            *chance = Some(0.0);
        }
    }
    Ok(HookOutcome::pass())
}

pub fn inner_focus(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().flinch_chance.is_some() {
        ctx.descriptor.data.flinch_chance = Some(0.0);
    }
    Ok(HookOutcome::pass())
}

pub fn stench(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().contact {
        let flinch = ctx.data().flinch_chance.unwrap_or(0.0);
        ctx.descriptor.data.flinch_chance = Some((flinch + 0.1).min(1.0));
    }
    Ok(HookOutcome::pass())
}

/// Doubles power of not-very-effective attacks.
pub fn tinted_lens(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.data().power == 0 {
        return Ok(HookOutcome::pass());
    }
    if defender_effectiveness(ctx)? < 1.0 {
        ctx.descriptor.scale_power(2.0);
    }
    Ok(HookOutcome::pass())
}

/// Only super-effective attacks get through.
pub fn wonder_guard(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if ctx.descriptor.mold_breaker || !is_attack(ctx.descriptor) {
        return Ok(HookOutcome::pass());
    }
    if defender_effectiveness(ctx)? <= 1.0 {
        return Ok(HookOutcome::blocked_by(Ability::WonderGuard));
    }
    Ok(HookOutcome::pass())
}

pub fn mold_breaker(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    ctx.descriptor.mold_breaker = true;
    Ok(HookOutcome::pass())
}

pub fn sniper(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    ctx.descriptor.sniper = true;
    Ok(HookOutcome::pass())
}

/// Normal and Fighting moves connect with Ghost types.
pub fn scrappy(ctx: &mut MoveContext<'_>) -> AbilityResult<HookOutcome> {
    if matches!(ctx.data().move_type, PokemonType::Normal | PokemonType::Fighting) {
        ctx.descriptor.scrappy = true;
    }
    Ok(HookOutcome::pass())
}
