use crate::abilities::{after_move_apply, before_move_apply, on_switch_in, Ability};
use crate::battle::combatant::Combatant;
use crate::battle::damage::calculate_damage;
use crate::battle::descriptor::MoveDescriptor;
use crate::battle::state::{EventLog, ResultEvent, Target, TurnRng};
use crate::battle::stats::hit_chance;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use schema::{Accuracy, MoveData, MoveKind};
use tracing::debug;

/// Resolves single move invocations against a shared catalog.
///
/// Resolution never fails: unknown moves are substituted, hook faults are
/// rolled back by the ability dispatcher, and every outcome is reported as
/// events in the returned log.
#[derive(Debug, Clone, Copy)]
pub struct MoveResolver<'a> {
    catalog: &'a Catalog,
    config: &'a EngineConfig,
}

impl<'a> MoveResolver<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a EngineConfig) -> Self {
        MoveResolver { catalog, config }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolve `move_name` used by `attacker` on `defender`. Event targets
    /// are relative to this call, even for moves that get reflected.
    pub fn process_move(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        move_name: &str,
        rng: &mut TurnRng,
    ) -> EventLog {
        self.resolve(attacker, defender, move_name, rng, false)
    }

    /// Run the switch-in ability of `combatant` against `opponents`.
    pub fn switch_in(&self, combatant: &mut Combatant, opponents: &mut [Combatant]) -> Vec<ResultEvent> {
        on_switch_in(combatant, opponents, self.catalog)
    }

    /// Catalog move for `move_name`. Unknown names and self-targeting buffs
    /// become the configured fallback move.
    fn move_data(&self, move_name: &str) -> MoveData {
        match self.catalog.move_data(move_name) {
            Some(data) if data.kind != MoveKind::Buff => data.clone(),
            found => {
                debug!(
                    move_name,
                    known = found.is_some(),
                    fallback = %self.config.fallback_move,
                    "substituting fallback move"
                );
                self.catalog
                    .move_data(&self.config.fallback_move)
                    .cloned()
                    .unwrap_or_else(MoveData::builtin_fallback)
            }
        }
    }

    fn resolve(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        move_name: &str,
        rng: &mut TurnRng,
        reflected: bool,
    ) -> EventLog {
        let mut descriptor = MoveDescriptor::new(self.move_data(move_name));
        let name = descriptor.name().to_string();
        let mut log = EventLog::new();

        let outcome = before_move_apply(attacker, defender, &name, &mut descriptor, self.catalog);
        if outcome.blocked {
            let holder = outcome.holder.unwrap_or(Target::Defender);
            let ability = outcome.reason.map(Ability::name);

            if outcome.reflect && !reflected {
                debug!(move_name = %name, ?ability, "move reflected");
                log.push(ResultEvent::MoveReflected {
                    target: holder,
                    ability: ability.unwrap_or_default(),
                });
                let mut inner = self.resolve(defender, attacker, &name, rng, true);
                inner.swap_sides();
                log.extend(inner.into_events());
                return log;
            }

            if outcome.activate {
                if let Some(ability) = &ability {
                    log.push(ResultEvent::AbilityActivated {
                        target: holder,
                        ability: ability.clone(),
                    });
                }
            }
            log.extend(outcome.events);
            log.push(ResultEvent::MoveBlocked {
                target: holder,
                ability,
            });
            return log;
        }
        log.extend(outcome.events);

        if let Accuracy::Fraction(base) = descriptor.data.accuracy {
            let chance = hit_chance(base, attacker, defender);
            let roll = rng.next_f64("accuracy");
            if roll >= chance {
                debug!(move_name = %name, roll, chance, "move missed");
                log.push(ResultEvent::MoveMissed {
                    target: Target::Defender,
                    move_name: name,
                });
                return log;
            }
        }

        match descriptor.data.kind {
            MoveKind::Damaging => {
                self.apply_damaging(attacker, defender, &name, &mut descriptor, &mut log, rng)
            }
            MoveKind::Status => {
                log.push(neutral_attack(&name, defender));
                if let Some(status) = descriptor.data.apply_status {
                    defender.pokemon.status = Some(status);
                    log.push(ResultEvent::StatusApplied {
                        target: Target::Defender,
                        status,
                    });
                }
            }
            MoveKind::Debuff => {
                log.push(ResultEvent::MoveDebuff {
                    target: Target::Defender,
                    move_name: name.clone(),
                    stats: descriptor.data.debuff_stats.clone(),
                });
            }
            MoveKind::Buff | MoveKind::Other => log.push(neutral_attack(&name, defender)),
        }

        after_move_apply(
            attacker,
            defender,
            &name,
            &descriptor,
            &mut log,
            self.catalog,
            rng,
        );
        log
    }

    fn apply_damaging(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        name: &str,
        descriptor: &mut MoveDescriptor,
        log: &mut EventLog,
        rng: &mut TurnRng,
    ) {
        let damage = calculate_damage(attacker, defender, descriptor, self.catalog, rng);
        let dealt = defender.pokemon.take_damage(damage.damage);
        log.push(ResultEvent::MoveAttack {
            target: Target::Defender,
            move_name: name.to_string(),
            damage: dealt,
            resulting_hp: defender.hp(),
            critical: damage.critical,
            effectiveness: damage.effectiveness,
        });

        if !defender.is_fainted() {
            self.apply_secondary_effects(attacker, defender, name, descriptor, log, rng);
        }

        if dealt == 0 {
            return;
        }
        if let Some(recoil) = descriptor.data.recoil.filter(|r| *r > 0.0) {
            let amount = ((dealt as f64 * recoil).floor() as u16).max(1);
            let lost = attacker.pokemon.take_damage(amount);
            log.push(ResultEvent::Recoil {
                target: Target::Attacker,
                damage: lost,
            });
        }
        if let Some(drain) = descriptor.data.drain.filter(|d| *d > 0.0) {
            let amount = ((dealt as f64 * drain).floor() as u16).max(1);
            let restored = attacker.pokemon.heal(amount);
            log.push(ResultEvent::Drained {
                target: Target::Attacker,
                amount: restored,
            });
        }
    }

    /// Status, debuff, flinch and confusion rolls for a hit the defender
    /// survived. The status roll is always drawn; the others only when the
    /// move carries the effect. A landed status overwrites any existing one
    /// unless the second before-move pass blocks it.
    fn apply_secondary_effects(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
        name: &str,
        descriptor: &mut MoveDescriptor,
        log: &mut EventLog,
        rng: &mut TurnRng,
    ) {
        let status_roll = rng.next_f64("secondary status");
        if let Some(status) = descriptor.data.apply_status {
            let chance = descriptor.data.apply_status_chance.unwrap_or(1.0);
            if status_roll < chance {
                let check = before_move_apply(attacker, defender, name, descriptor, self.catalog);
                log.extend(check.events);
                if check.blocked {
                    log.push(ResultEvent::StatusBlocked {
                        target: Target::Defender,
                        ability: check.reason.map(Ability::name),
                    });
                } else {
                    defender.pokemon.status = Some(status);
                    log.push(ResultEvent::StatusApplied {
                        target: Target::Defender,
                        status,
                    });
                }
            }
        }

        if !descriptor.data.debuff_stats.is_empty() {
            let chance = descriptor.data.debuff_chance.unwrap_or(1.0);
            if rng.next_f64("secondary debuff") < chance {
                for &stat in &descriptor.data.debuff_stats {
                    let change = defender.stages.change(stat, -descriptor.data.debuff_amount);
                    log.push(ResultEvent::StatStageChanged {
                        target: Target::Defender,
                        stat,
                        change,
                        stage: defender.stages.get(stat),
                    });
                }
            }
        }

        if let Some(chance) = descriptor.data.flinch_chance.filter(|c| *c > 0.0) {
            if rng.chance(chance, "flinch") {
                defender.flags.flinched = true;
                log.push(ResultEvent::Flinched {
                    target: Target::Defender,
                });
            }
        }

        if let Some(chance) = descriptor.data.confusion_chance.filter(|c| *c > 0.0) {
            if rng.chance(chance, "confusion") {
                defender.flags.confused = true;
                log.push(ResultEvent::Confused {
                    target: Target::Defender,
                });
            }
        }
    }
}

/// A zero-damage hit, reported for moves that do not damage.
fn neutral_attack(name: &str, defender: &Combatant) -> ResultEvent {
    ResultEvent::MoveAttack {
        target: Target::Defender,
        move_name: name.to_string(),
        damage: 0,
        resulting_hp: defender.hp(),
        critical: false,
        effectiveness: 1.0,
    }
}
