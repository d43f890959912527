use super::Ability;
use crate::battle::combatant::Combatant;
use crate::battle::descriptor::MoveDescriptor;
use crate::battle::state::{EventLog, ResultEvent, Target, TurnRng};
use crate::catalog::Catalog;
use crate::errors::AbilityResult;
use schema::MoveData;

/// What a before-move hook sees: both sides, the move being used and the
/// descriptor it may rewrite.
pub struct MoveContext<'a> {
    pub attacker: &'a mut Combatant,
    pub defender: &'a mut Combatant,
    pub move_name: &'a str,
    pub descriptor: &'a mut MoveDescriptor,
    pub catalog: &'a Catalog,
}

impl MoveContext<'_> {
    pub fn data(&self) -> &MoveData {
        &self.descriptor.data
    }

    /// Catalog effectiveness of the current move type against the
    /// defender's species types. `None` if the species is missing.
    pub fn effectiveness_on_defender(&self) -> Option<f64> {
        let types = self.defender.species_types(self.catalog)?;
        Some(
            self.catalog
                .effectiveness_against(self.descriptor.data.move_type, types),
        )
    }
}

/// Result of a before-move hook.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HookOutcome {
    pub blocked: bool,
    pub reason: Option<Ability>,
    /// Reflect the move back at its user instead of just blocking it.
    pub reflect: bool,
    /// Emit an "ability activated" event ahead of the block.
    pub activate: bool,
    pub events: Vec<ResultEvent>,
    /// Side the ability belongs to, filled in by the dispatcher.
    pub holder: Option<Target>,
}

impl HookOutcome {
    /// Nothing to report; the move continues.
    pub fn pass() -> Self {
        HookOutcome::default()
    }

    pub fn blocked_by(ability: Ability) -> Self {
        HookOutcome {
            blocked: true,
            reason: Some(ability),
            ..HookOutcome::default()
        }
    }

    pub fn reflected_by(ability: Ability) -> Self {
        HookOutcome {
            reflect: true,
            ..HookOutcome::blocked_by(ability)
        }
    }

    pub fn activated(mut self) -> Self {
        self.activate = true;
        self
    }

    pub fn with_event(mut self, event: ResultEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// What an after-move hook sees: both sides, the move as it was resolved,
/// and the result log so far (which it may extend or rewrite).
pub struct AfterMoveContext<'a> {
    pub attacker: &'a mut Combatant,
    pub defender: &'a mut Combatant,
    pub move_name: &'a str,
    pub descriptor: &'a MoveDescriptor,
    pub log: &'a mut EventLog,
    pub catalog: &'a Catalog,
    pub rng: &'a mut TurnRng,
}

impl AfterMoveContext<'_> {
    pub fn combatant_mut(&mut self, target: Target) -> &mut Combatant {
        match target {
            Target::Defender => &mut *self.defender,
            _ => &mut *self.attacker,
        }
    }

    pub fn is_contact(&self) -> bool {
        self.descriptor.data.contact
    }

    pub fn push(&mut self, event: ResultEvent) {
        self.log.push(event);
    }
}

/// What a switch-in hook sees.
pub struct SwitchInContext<'a> {
    pub holder: &'a mut Combatant,
    pub opponents: &'a mut [Combatant],
    pub catalog: &'a Catalog,
    pub events: Vec<ResultEvent>,
}

pub type BeforeMoveHook = fn(&mut MoveContext<'_>) -> AbilityResult<HookOutcome>;
pub type AfterMoveHook = fn(&mut AfterMoveContext<'_>) -> AbilityResult<()>;
pub type SwitchInHook = fn(&mut SwitchInContext<'_>) -> AbilityResult<()>;

/// The hook set one ability registers. Unset hooks are skipped.
#[derive(Clone, Copy, Default)]
pub struct AbilityHooks {
    /// Runs when the holder is the attacker.
    pub on_before_move_attacker: Option<BeforeMoveHook>,
    /// Runs when the holder is the defender.
    pub on_before_move_defender: Option<BeforeMoveHook>,
    pub on_after_move_attacker: Option<AfterMoveHook>,
    pub on_after_move_defender: Option<AfterMoveHook>,
    pub on_switch_in: Option<SwitchInHook>,
}

impl AbilityHooks {
    pub const NONE: AbilityHooks = AbilityHooks {
        on_before_move_attacker: None,
        on_before_move_defender: None,
        on_after_move_attacker: None,
        on_after_move_defender: None,
        on_switch_in: None,
    };
}
