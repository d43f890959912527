//! Reactions once the move has been applied. These read the result log,
//! and may append to it or rewrite entries in place.

use crate::abilities::hooks::AfterMoveContext;
use crate::abilities::Ability;
use crate::battle::state::{ResultEvent, Target};
use crate::errors::AbilityResult;
use schema::{StatKind, StatusCondition};

const CONTACT_PROC_CHANCE: f64 = 0.3;
const SHED_SKIN_CHANCE: f64 = 0.33;
const EFFECT_SPORE_STATUSES: [StatusCondition; 3] = [
    StatusCondition::Sleep,
    StatusCondition::Poison,
    StatusCondition::Paralysis,
];

fn contact_status(
    ctx: &mut AfterMoveContext<'_>,
    status: StatusCondition,
    ability: Ability,
) -> AbilityResult<()> {
    if !ctx.is_contact() {
        return Ok(());
    }
    if ctx.rng.chance(CONTACT_PROC_CHANCE, ability.as_ref()) && ctx.attacker.status().is_none() {
        ctx.attacker.pokemon.status = Some(status);
        ctx.push(ResultEvent::StatusInflicted {
            target: Target::Attacker,
            status,
            ability: ability.name(),
        });
    }
    Ok(())
}

pub fn static_body(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    contact_status(ctx, StatusCondition::Paralysis, Ability::Static)
}

pub fn flame_body(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    contact_status(ctx, StatusCondition::Burn, Ability::FlameBody)
}

pub fn poison_point(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    contact_status(ctx, StatusCondition::Poison, Ability::PoisonPoint)
}

/// Proc roll first, then a second draw picks the status.
pub fn effect_spore(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if !ctx.is_contact() || !ctx.rng.chance(CONTACT_PROC_CHANCE, "effect spore") {
        return Ok(());
    }
    let Some(&status) = ctx.rng.pick(&EFFECT_SPORE_STATUSES, "effect spore status") else {
        return Ok(());
    };
    if ctx.attacker.status().is_none() {
        ctx.attacker.pokemon.status = Some(status);
        ctx.push(ResultEvent::StatusInflicted {
            target: Target::Attacker,
            status,
            ability: Ability::EffectSpore.name(),
        });
    }
    Ok(())
}

pub fn cute_charm(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.is_contact() && ctx.rng.chance(CONTACT_PROC_CHANCE, "cute charm") {
        ctx.attacker.flags.infatuated = true;
        ctx.push(ResultEvent::Infatuated {
            target: Target::Attacker,
            ability: Ability::CuteCharm.name(),
        });
    }
    Ok(())
}

pub fn shed_skin(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.defender.status().is_some() && ctx.rng.chance(SHED_SKIN_CHANCE, "shed skin") {
        ctx.defender.pokemon.status = None;
        ctx.push(ResultEvent::StatusCured {
            target: Target::Defender,
            ability: Ability::ShedSkin.name(),
        });
    }
    Ok(())
}

pub fn poison_heal(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.defender.status() == Some(StatusCondition::Poison) {
        let amount = (ctx.defender.max_hp() / 8).max(1);
        let restored = ctx.defender.pokemon.heal(amount);
        ctx.push(ResultEvent::Healed {
            target: Target::Defender,
            amount: restored,
            ability: Ability::PoisonHeal.name(),
        });
    }
    Ok(())
}

/// Damages a contact attacker by an eighth of its max HP, rounded up.
pub fn rough_skin(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    let hit = ctx
        .log
        .any(|event| matches!(event, ResultEvent::MoveAttack { .. }));
    if !ctx.is_contact() || !hit {
        return Ok(());
    }
    let damage = ctx.attacker.max_hp().div_ceil(8).max(1);
    let lost = ctx.attacker.pokemon.take_damage(damage);
    ctx.push(ResultEvent::ContactDamage {
        target: Target::Attacker,
        damage: lost,
        ability: Ability::RoughSkin.name(),
    });
    Ok(())
}

/// Hits back for a quarter of the attacker's max HP when a contact move
/// knocks the holder out.
pub fn aftermath(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if !ctx.is_contact() || ctx.defender.hp() > 0 {
        return Ok(());
    }
    let damage = (ctx.attacker.max_hp() / 4).max(1);
    let lost = ctx.attacker.pokemon.take_damage(damage);
    ctx.push(ResultEvent::AftermathDamage {
        target: Target::Attacker,
        damage: lost,
    });
    Ok(())
}

/// Passes a status the holder just received back to an unstatused attacker.
pub fn synchronize(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.attacker.status().is_some() {
        return Ok(());
    }
    let received = ctx.log.events().iter().find_map(|event| match event {
        ResultEvent::StatusApplied {
            target: Target::Defender,
            status,
        } => Some(*status),
        _ => None,
    });
    if let Some(status) = received {
        ctx.attacker.pokemon.status = Some(status);
        ctx.push(ResultEvent::StatusSynchronized {
            target: Target::Attacker,
            status,
        });
    }
    Ok(())
}

/// Costs the attacker one extra PP for the move it just used.
pub fn pressure(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    let Some(slot) = ctx.attacker.pokemon.move_slot(ctx.move_name) else {
        return Ok(());
    };
    let drained = ctx.attacker.pokemon.moves[slot]
        .as_mut()
        .is_some_and(|instance| instance.use_move());
    if drained {
        let move_name = ctx.move_name.to_string();
        ctx.push(ResultEvent::PpDrained {
            target: Target::Attacker,
            move_name,
            slot,
        });
    }
    Ok(())
}

/// Leaves the holder at 1 HP after a hit that would have knocked it out.
pub fn sturdy(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.defender.hp() > 0 {
        return Ok(());
    }
    let knockout = ctx.log.events_mut().iter_mut().find_map(|event| match event {
        ResultEvent::MoveAttack {
            target: Target::Defender,
            resulting_hp,
            ..
        } if *resulting_hp == 0 => Some(resulting_hp),
        _ => None,
    });
    if let Some(resulting_hp) = knockout {
        *resulting_hp = 1;
        ctx.defender.pokemon.set_hp(1);
        ctx.push(ResultEvent::Endured {
            target: Target::Defender,
            ability: Ability::Sturdy.name(),
        });
    }
    Ok(())
}

/// Turns HP the attacker drained from the holder into damage.
pub fn liquid_ooze(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    let mut hp = ctx.attacker.hp();
    for event in ctx.log.events_mut().iter_mut() {
        if let ResultEvent::Drained {
            target: Target::Attacker,
            amount,
        } = *event
        {
            // Undo the heal, then apply the same amount as damage.
            hp = hp.saturating_sub(amount).saturating_sub(amount);
            *event = ResultEvent::LiquidOoze {
                target: Target::Attacker,
                damage: amount,
            };
        }
    }
    ctx.attacker.pokemon.set_hp(hp);
    Ok(())
}

pub fn tangled_feet(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.defender.flags.confused {
        let change = ctx.defender.stages.change(StatKind::Evasion, 1);
        let stage = ctx.defender.stages.get(StatKind::Evasion);
        ctx.push(ResultEvent::StatStageChanged {
            target: Target::Defender,
            stat: StatKind::Evasion,
            change,
            stage,
        });
    }
    Ok(())
}

pub fn early_bird(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    if ctx.defender.status() == Some(StatusCondition::Sleep) && !ctx.defender.flags.early_bird {
        ctx.defender.flags.early_bird = true;
        ctx.push(ResultEvent::EarlyBird {
            target: Target::Defender,
        });
    }
    Ok(())
}

fn no_op(ctx: &mut AfterMoveContext<'_>, ability: Ability) -> AbilityResult<()> {
    ctx.push(ResultEvent::AbilityNoOp {
        target: Target::Defender,
        ability: ability.name(),
    });
    Ok(())
}

pub fn pickup(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    no_op(ctx, Ability::Pickup)
}

pub fn run_away(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    no_op(ctx, Ability::RunAway)
}

/// Same contact roll as Poison Point, under its own name.
pub fn poison_touch(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    contact_status(ctx, StatusCondition::Poison, Ability::PoisonTouch)
}
