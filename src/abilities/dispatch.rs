use super::hooks::{AfterMoveContext, HookOutcome, MoveContext, SwitchInContext};
use super::Ability;
use crate::battle::combatant::Combatant;
use crate::battle::descriptor::MoveDescriptor;
use crate::battle::state::{EventLog, ResultEvent, Target, TurnRng};
use crate::catalog::Catalog;
use tracing::{debug, warn};

/// Run the attacker's and then the defender's before-move hook. The first
/// hook that blocks wins and later hooks are skipped; events from every hook
/// that ran are kept in order.
///
/// A hook that fails is rolled back: both combatants and the descriptor go
/// back to how they were before it ran, and the move carries on as if the
/// ability had no hook.
pub fn before_move_apply(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_name: &str,
    descriptor: &mut MoveDescriptor,
    catalog: &Catalog,
) -> HookOutcome {
    let mut merged = HookOutcome::pass();

    let sides = [
        (Target::Attacker, attacker.ability()),
        (Target::Defender, defender.ability()),
    ];
    for (side, ability) in sides {
        let Some(ability) = ability else { continue };
        let Some(hooks) = ability.hooks() else {
            continue;
        };
        let hook = match side {
            Target::Attacker => hooks.on_before_move_attacker,
            _ => hooks.on_before_move_defender,
        };
        let Some(hook) = hook else { continue };

        let snapshot = (attacker.clone(), defender.clone(), descriptor.clone());
        let result = {
            let mut ctx = MoveContext {
                attacker: &mut *attacker,
                defender: &mut *defender,
                move_name,
                descriptor: &mut *descriptor,
                catalog,
            };
            hook(&mut ctx)
        };

        match result {
            Ok(mut outcome) => {
                merged.events.append(&mut outcome.events);
                if outcome.blocked {
                    debug!(ability = ?ability, move_name, "move blocked by ability");
                    merged.blocked = true;
                    merged.reason = outcome.reason.or(Some(ability));
                    merged.reflect = outcome.reflect;
                    merged.activate = outcome.activate;
                    merged.holder = Some(side);
                    break;
                }
            }
            Err(error) => {
                warn!(
                    ability = ?ability,
                    move_name,
                    %error,
                    "before-move hook failed, state rolled back"
                );
                (*attacker, *defender, *descriptor) = snapshot;
            }
        }
    }

    merged
}

/// Run the defender's and then the attacker's after-move hook over the
/// result log. Failed hooks are rolled back like in [`before_move_apply`];
/// random draws they consumed stay consumed.
pub fn after_move_apply(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_name: &str,
    descriptor: &MoveDescriptor,
    log: &mut EventLog,
    catalog: &Catalog,
    rng: &mut TurnRng,
) {
    let sides = [
        (Target::Defender, defender.ability()),
        (Target::Attacker, attacker.ability()),
    ];
    for (side, ability) in sides {
        let Some(hooks) = ability.and_then(Ability::hooks) else {
            continue;
        };
        let hook = match side {
            Target::Attacker => hooks.on_after_move_attacker,
            _ => hooks.on_after_move_defender,
        };
        let Some(hook) = hook else { continue };

        let snapshot = (attacker.clone(), defender.clone(), log.clone());
        let result = {
            let mut ctx = AfterMoveContext {
                attacker: &mut *attacker,
                defender: &mut *defender,
                move_name,
                descriptor,
                log: &mut *log,
                catalog,
                rng: &mut *rng,
            };
            hook(&mut ctx)
        };

        if let Err(error) = result {
            warn!(
                ability = ?ability,
                move_name,
                %error,
                "after-move hook failed, state rolled back"
            );
            (*attacker, *defender, *log) = snapshot;
        }
    }
}

/// Run the holder's switch-in hook. Returns the events it produced; a
/// failing hook produces none and leaves every combatant untouched.
pub fn on_switch_in(
    holder: &mut Combatant,
    opponents: &mut [Combatant],
    catalog: &Catalog,
) -> Vec<ResultEvent> {
    let Some(ability) = holder.ability() else {
        return Vec::new();
    };
    let Some(hook) = ability.hooks().and_then(|hooks| hooks.on_switch_in) else {
        return Vec::new();
    };

    let holder_snapshot = holder.clone();
    let opponents_snapshot = opponents.to_vec();
    let result = {
        let mut ctx = SwitchInContext {
            holder: &mut *holder,
            opponents: &mut *opponents,
            catalog,
            events: Vec::new(),
        };
        hook(&mut ctx).map(|()| ctx.events)
    };

    match result {
        Ok(events) => {
            debug!(ability = ?ability, events = events.len(), "switch-in ability");
            events
        }
        Err(error) => {
            warn!(
                ability = ?ability,
                %error,
                "switch-in hook failed, state rolled back"
            );
            *holder = holder_snapshot;
            opponents.clone_from_slice(&opponents_snapshot);
            Vec::new()
        }
    }
}
