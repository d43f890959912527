//! Effects that fire when the holder enters the field.

use crate::abilities::hooks::SwitchInContext;
use crate::abilities::Ability;
use crate::battle::combatant::Combatant;
use crate::battle::state::{ResultEvent, Target};
use crate::battle::stats::effective_defense;
use crate::errors::{AbilityError, AbilityResult};
use schema::{MoveCategory, StatKind, Weather};

fn stage_event(combatant: &mut Combatant, target: Target, stat: StatKind, delta: i8) -> ResultEvent {
    let change = combatant.stages.change(stat, delta);
    ResultEvent::StatStageChanged {
        target,
        stat,
        change,
        stage: combatant.stages.get(stat),
    }
}

fn boost_holder(ctx: &mut SwitchInContext<'_>, stat: StatKind) {
    let event = stage_event(ctx.holder, Target::Holder, stat, 1);
    ctx.events.push(event);
}

fn cure_holder(ctx: &mut SwitchInContext<'_>, ability: Ability) {
    if ctx.holder.pokemon.status.take().is_some() {
        ctx.events.push(ResultEvent::StatusCured {
            target: Target::Holder,
            ability: ability.name(),
        });
    }
}

/// Lowers every opponent's Attack by one stage.
pub fn intimidate(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    ctx.events.push(ResultEvent::AbilityActivated {
        target: Target::Holder,
        ability: Ability::Intimidate.name(),
    });
    for (index, opponent) in ctx.opponents.iter_mut().enumerate() {
        let event = stage_event(opponent, Target::Opponent(index), StatKind::Attack, -1);
        ctx.events.push(event);
    }
    Ok(())
}

pub fn sand_veil(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    boost_holder(ctx, StatKind::Evasion);
    Ok(())
}

pub fn swift_swim(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    if ctx.holder.weather == Weather::Rain {
        boost_holder(ctx, StatKind::Speed);
    }
    Ok(())
}

pub fn chlorophyll(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    if ctx.holder.weather == Weather::Sun {
        boost_holder(ctx, StatKind::Speed);
    }
    Ok(())
}

pub fn hydration(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    if ctx.holder.weather == Weather::Rain {
        cure_holder(ctx, Ability::Hydration);
    }
    Ok(())
}

pub fn natural_cure(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    cure_holder(ctx, Ability::NaturalCure);
    Ok(())
}

/// Reveals the strongest move the first opponent knows.
pub fn forewarn(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    let Some(opponent) = ctx.opponents.first() else {
        return Ok(());
    };
    let mut strongest: Option<(&str, u16)> = None;
    for instance in opponent.pokemon.moves.iter().flatten() {
        let Some(data) = ctx.catalog.move_data(&instance.move_name) else {
            continue;
        };
        if data.power > 0 && strongest.map_or(true, |(_, best)| data.power > best) {
            strongest = Some((&instance.move_name, data.power));
        }
    }
    if let Some((move_name, power)) = strongest {
        ctx.events.push(ResultEvent::MoveRevealed {
            target: Target::Opponent(0),
            move_name: move_name.to_string(),
            power,
        });
    }
    Ok(())
}

/// Copies the first opponent's ability for the rest of the battle.
pub fn trace(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    let Some(opponent) = ctx.opponents.first() else {
        return Ok(());
    };
    if opponent.ability_name.is_empty() {
        return Ok(());
    }
    ctx.holder.ability_name = opponent.ability_name.clone();
    ctx.events.push(ResultEvent::AbilityCopied {
        target: Target::Holder,
        ability: opponent.ability_name.clone(),
    });
    Ok(())
}

/// Raises Attack if the first opponent's Defense is higher than its Special
/// Defense, Special Attack otherwise.
pub fn download(ctx: &mut SwitchInContext<'_>) -> AbilityResult<()> {
    let Some(opponent) = ctx.opponents.first() else {
        return Ok(());
    };
    if opponent.max_hp() == 0 {
        return Err(AbilityError::Failed {
            ability: Ability::Download.name(),
            reason: format!("opponent {} has no derived stats", opponent.pokemon.species),
        });
    }
    let defense = effective_defense(opponent, MoveCategory::Physical);
    let special_defense = effective_defense(opponent, MoveCategory::Special);
    let stat = if defense > special_defense {
        StatKind::Attack
    } else {
        StatKind::SpecialAttack
    };
    boost_holder(ctx, stat);
    Ok(())
}
