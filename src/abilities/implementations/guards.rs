//! Abilities that cancel side effects already written to the log. Each
//! matching event is replaced by a "blocked" event and the HP or flag it
//! changed is put back.

use crate::abilities::hooks::AfterMoveContext;
use crate::battle::state::{ResultEvent, Target};
use crate::errors::AbilityResult;

/// Replace every event for `holder` that `convert` maps to a new event,
/// restoring the HP it returns alongside.
fn rewrite_events(
    ctx: &mut AfterMoveContext<'_>,
    holder: Target,
    convert: impl Fn(&ResultEvent) -> Option<(u16, ResultEvent)>,
) {
    let mut restored = 0u16;
    for event in ctx.log.events_mut().iter_mut() {
        if event.target() != holder {
            continue;
        }
        if let Some((hp, replacement)) = convert(event) {
            restored = restored.saturating_add(hp);
            *event = replacement;
        }
    }
    if restored > 0 {
        ctx.combatant_mut(holder).pokemon.heal(restored);
    }
}

/// No recoil or contact damage for the holder's own attacks.
pub fn rock_head(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    rewrite_events(ctx, Target::Attacker, |event| match *event {
        ResultEvent::Recoil { target, damage } | ResultEvent::ContactDamage { target, damage, .. } => {
            Some((damage, ResultEvent::RecoilBlocked { target, damage }))
        }
        _ => None,
    });
    Ok(())
}

fn magic_guard(ctx: &mut AfterMoveContext<'_>, holder: Target) {
    rewrite_events(ctx, holder, |event| match *event {
        ResultEvent::Recoil { target, damage }
        | ResultEvent::ContactDamage { target, damage, .. }
        | ResultEvent::AftermathDamage { target, damage }
        | ResultEvent::LiquidOoze { target, damage } => {
            Some((damage, ResultEvent::IndirectDamageBlocked { target, damage }))
        }
        _ => None,
    });
}

pub fn magic_guard_attacker(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    magic_guard(ctx, Target::Attacker);
    Ok(())
}

pub fn magic_guard_defender(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    magic_guard(ctx, Target::Defender);
    Ok(())
}

fn oblivious(ctx: &mut AfterMoveContext<'_>, holder: Target) {
    rewrite_events(ctx, holder, |event| match *event {
        ResultEvent::Infatuated { target, .. } => {
            Some((0, ResultEvent::InfatuationBlocked { target }))
        }
        _ => None,
    });
    ctx.combatant_mut(holder).flags.infatuated = false;
}

pub fn oblivious_attacker(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    oblivious(ctx, Target::Attacker);
    Ok(())
}

pub fn oblivious_defender(ctx: &mut AfterMoveContext<'_>) -> AbilityResult<()> {
    oblivious(ctx, Target::Defender);
    Ok(())
}
