use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::{StatKind, StatusCondition};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which participant an event is about, relative to the outermost move
/// invocation (or to the switching-in Pokemon for switch-in events).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    Attacker,
    Defender,
    /// The Pokemon whose switch-in ability fired.
    Holder,
    /// An opponent of the holder, by position in the opponent list.
    Opponent(usize),
}

impl Target {
    /// The same participant seen from the other side of a reflected move.
    pub fn swapped(self) -> Self {
        match self {
            Target::Attacker => Target::Defender,
            Target::Defender => Target::Attacker,
            other => other,
        }
    }
}

/// One observable outcome of a move or switch-in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ResultEvent {
    // Move flow
    MoveReflected {
        target: Target,
        ability: String,
    },
    MoveBlocked {
        target: Target,
        ability: Option<String>,
    },
    MoveMissed {
        target: Target,
        move_name: String,
    },
    MoveAttack {
        target: Target,
        move_name: String,
        damage: u16,
        resulting_hp: u16,
        critical: bool,
        effectiveness: f64,
    },
    MoveDebuff {
        target: Target,
        move_name: String,
        stats: Vec<StatKind>,
    },

    // Status
    StatusApplied {
        target: Target,
        status: StatusCondition,
    },
    StatusBlocked {
        target: Target,
        ability: Option<String>,
    },
    /// A contact ability put a status on the attacker.
    StatusInflicted {
        target: Target,
        status: StatusCondition,
        ability: String,
    },
    StatusSynchronized {
        target: Target,
        status: StatusCondition,
    },
    StatusCured {
        target: Target,
        ability: String,
    },
    Infatuated {
        target: Target,
        ability: String,
    },
    InfatuationBlocked {
        target: Target,
    },
    Flinched {
        target: Target,
    },
    Confused {
        target: Target,
    },
    EarlyBird {
        target: Target,
    },

    // Stats
    StatStageChanged {
        target: Target,
        stat: StatKind,
        change: i8,
        stage: i8,
    },

    // HP changes outside the main hit
    Recoil {
        target: Target,
        damage: u16,
    },
    Drained {
        target: Target,
        amount: u16,
    },
    LiquidOoze {
        target: Target,
        damage: u16,
    },
    ContactDamage {
        target: Target,
        damage: u16,
        ability: String,
    },
    AftermathDamage {
        target: Target,
        damage: u16,
    },
    RecoilBlocked {
        target: Target,
        damage: u16,
    },
    IndirectDamageBlocked {
        target: Target,
        damage: u16,
    },
    Healed {
        target: Target,
        amount: u16,
        ability: String,
    },
    Endured {
        target: Target,
        ability: String,
    },
    PpDrained {
        target: Target,
        move_name: String,
        slot: usize,
    },

    // Abilities
    AbilityActivated {
        target: Target,
        ability: String,
    },
    AbilityCopied {
        target: Target,
        ability: String,
    },
    /// An ability with no battle effect was seen.
    AbilityNoOp {
        target: Target,
        ability: String,
    },
    MoveRevealed {
        target: Target,
        move_name: String,
        power: u16,
    },
}

impl ResultEvent {
    pub fn target(&self) -> Target {
        match self {
            ResultEvent::MoveReflected { target, .. }
            | ResultEvent::MoveBlocked { target, .. }
            | ResultEvent::MoveMissed { target, .. }
            | ResultEvent::MoveAttack { target, .. }
            | ResultEvent::MoveDebuff { target, .. }
            | ResultEvent::StatusApplied { target, .. }
            | ResultEvent::StatusBlocked { target, .. }
            | ResultEvent::StatusInflicted { target, .. }
            | ResultEvent::StatusSynchronized { target, .. }
            | ResultEvent::StatusCured { target, .. }
            | ResultEvent::Infatuated { target, .. }
            | ResultEvent::InfatuationBlocked { target }
            | ResultEvent::Flinched { target }
            | ResultEvent::Confused { target }
            | ResultEvent::EarlyBird { target }
            | ResultEvent::StatStageChanged { target, .. }
            | ResultEvent::Recoil { target, .. }
            | ResultEvent::Drained { target, .. }
            | ResultEvent::LiquidOoze { target, .. }
            | ResultEvent::ContactDamage { target, .. }
            | ResultEvent::AftermathDamage { target, .. }
            | ResultEvent::RecoilBlocked { target, .. }
            | ResultEvent::IndirectDamageBlocked { target, .. }
            | ResultEvent::Healed { target, .. }
            | ResultEvent::Endured { target, .. }
            | ResultEvent::PpDrained { target, .. }
            | ResultEvent::AbilityActivated { target, .. }
            | ResultEvent::AbilityCopied { target, .. }
            | ResultEvent::AbilityNoOp { target, .. }
            | ResultEvent::MoveRevealed { target, .. } => *target,
        }
    }

    fn target_mut(&mut self) -> &mut Target {
        match self {
            ResultEvent::MoveReflected { target, .. }
            | ResultEvent::MoveBlocked { target, .. }
            | ResultEvent::MoveMissed { target, .. }
            | ResultEvent::MoveAttack { target, .. }
            | ResultEvent::MoveDebuff { target, .. }
            | ResultEvent::StatusApplied { target, .. }
            | ResultEvent::StatusBlocked { target, .. }
            | ResultEvent::StatusInflicted { target, .. }
            | ResultEvent::StatusSynchronized { target, .. }
            | ResultEvent::StatusCured { target, .. }
            | ResultEvent::Infatuated { target, .. }
            | ResultEvent::InfatuationBlocked { target }
            | ResultEvent::Flinched { target }
            | ResultEvent::Confused { target }
            | ResultEvent::EarlyBird { target }
            | ResultEvent::StatStageChanged { target, .. }
            | ResultEvent::Recoil { target, .. }
            | ResultEvent::Drained { target, .. }
            | ResultEvent::LiquidOoze { target, .. }
            | ResultEvent::ContactDamage { target, .. }
            | ResultEvent::AftermathDamage { target, .. }
            | ResultEvent::RecoilBlocked { target, .. }
            | ResultEvent::IndirectDamageBlocked { target, .. }
            | ResultEvent::Healed { target, .. }
            | ResultEvent::Endured { target, .. }
            | ResultEvent::PpDrained { target, .. }
            | ResultEvent::AbilityActivated { target, .. }
            | ResultEvent::AbilityCopied { target, .. }
            | ResultEvent::AbilityNoOp { target, .. }
            | ResultEvent::MoveRevealed { target, .. } => target,
        }
    }

    /// Formats the event into a human-readable string. `name_of` maps a
    /// target to a display name. Returns None for silent events.
    pub fn format(&self, name_of: impl Fn(Target) -> String) -> Option<String> {
        let name = name_of(self.target());
        match self {
            ResultEvent::MoveReflected { ability, .. } => Some(format!(
                "{}'s {} bounced the move back!",
                name,
                format_ability(ability)
            )),
            ResultEvent::MoveBlocked { ability, .. } => Some(match ability {
                Some(ability) => format!("{}'s {} blocked the move!", name, format_ability(ability)),
                None => "But it failed!".to_string(),
            }),
            ResultEvent::MoveMissed { .. } => Some(format!("The attack missed {}!", name)),
            ResultEvent::MoveAttack {
                damage,
                critical,
                effectiveness,
                ..
            } => {
                if *damage == 0 {
                    return None;
                }
                let mut text = format!("{} took {} damage!", name, damage);
                if *critical {
                    text.push_str(" A critical hit!");
                }
                if *effectiveness == 0.0 {
                    text.push_str(" It had no effect!");
                } else if *effectiveness > 1.0 {
                    text.push_str(" It's super effective!");
                } else if *effectiveness < 1.0 {
                    text.push_str(" It's not very effective...");
                }
                Some(text)
            }
            ResultEvent::MoveDebuff { move_name, stats, .. } => {
                let stats: Vec<String> = stats.iter().map(|s| s.to_string()).collect();
                Some(format!(
                    "{} targets {}'s {}!",
                    format_move_name(move_name),
                    name,
                    stats.join(", ")
                ))
            }
            ResultEvent::StatusApplied { status, .. }
            | ResultEvent::StatusSynchronized { status, .. } => {
                Some(format!("{} {}", name, format_status_applied(*status)))
            }
            ResultEvent::StatusInflicted { status, ability, .. } => Some(format!(
                "{} {} ({})",
                name,
                format_status_applied(*status),
                format_ability(ability)
            )),
            ResultEvent::StatusBlocked { ability, .. } => Some(match ability {
                Some(ability) => format!("{}'s {} prevents the status!", name, format_ability(ability)),
                None => format!("{} is unaffected!", name),
            }),
            ResultEvent::StatusCured { ability, .. } => Some(format!(
                "{}'s {} cured its status!",
                name,
                format_ability(ability)
            )),
            ResultEvent::Infatuated { .. } => Some(format!("{} fell in love!", name)),
            ResultEvent::InfatuationBlocked { .. } => {
                Some(format!("{} is too oblivious to fall in love!", name))
            }
            ResultEvent::Flinched { .. } => Some(format!("{} flinched!", name)),
            ResultEvent::Confused { .. } => Some(format!("{} became confused!", name)),
            ResultEvent::EarlyBird { .. } => None,
            ResultEvent::StatStageChanged { stat, change, .. } => {
                let verb = match change {
                    c if *c >= 2 => "sharply rose",
                    c if *c > 0 => "rose",
                    c if *c <= -2 => "harshly fell",
                    c if *c < 0 => "fell",
                    _ => "won't go any further",
                };
                Some(format!("{}'s {} {}!", name, stat, verb))
            }
            ResultEvent::Recoil { damage, .. } => {
                Some(format!("{} is hit with {} recoil!", name, damage))
            }
            ResultEvent::Drained { amount, .. } => {
                Some(format!("{} drained {} HP!", name, amount))
            }
            ResultEvent::LiquidOoze { damage, .. } => Some(format!(
                "{} sucked up the liquid ooze and lost {} HP!",
                name, damage
            )),
            ResultEvent::ContactDamage { damage, ability, .. } => Some(format!(
                "{} was hurt by {} for {} HP!",
                name,
                format_ability(ability),
                damage
            )),
            ResultEvent::AftermathDamage { damage, .. } => {
                Some(format!("{} was caught in the aftermath for {} HP!", name, damage))
            }
            ResultEvent::RecoilBlocked { .. } => {
                Some(format!("{}'s Rock Head prevents recoil!", name))
            }
            ResultEvent::IndirectDamageBlocked { .. } => {
                Some(format!("{}'s Magic Guard prevents the damage!", name))
            }
            ResultEvent::Healed { amount, ability, .. } => Some(format!(
                "{} restored {} HP with {}!",
                name,
                amount,
                format_ability(ability)
            )),
            ResultEvent::Endured { .. } => Some(format!("{} endured the hit!", name)),
            ResultEvent::PpDrained { move_name, .. } => Some(format!(
                "{}'s {} lost extra PP to Pressure!",
                name,
                format_move_name(move_name)
            )),
            ResultEvent::AbilityActivated { ability, .. } => {
                Some(format!("{}'s {} activated!", name, format_ability(ability)))
            }
            ResultEvent::AbilityCopied { ability, .. } => {
                Some(format!("{} traced {}!", name, format_ability(ability)))
            }
            ResultEvent::AbilityNoOp { .. } => None,
            ResultEvent::MoveRevealed { move_name, .. } => Some(format!(
                "{} was alerted to {}!",
                name,
                format_move_name(move_name)
            )),
        }
    }
}

// --- Private Helper Functions ---

fn title_case(text: &str) -> String {
    text.split(|c: char| c == ' ' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_move_name(move_name: &str) -> String {
    title_case(move_name)
}

fn format_ability(ability: &str) -> String {
    title_case(&ability.replace('-', " "))
}

fn format_status_applied(status: StatusCondition) -> &'static str {
    match status {
        StatusCondition::Sleep => "fell asleep!",
        StatusCondition::Poison => "was poisoned!",
        StatusCondition::Burn => "was burned!",
        StatusCondition::Freeze => "was frozen solid!",
        StatusCondition::Paralysis => "is paralyzed! It may be unable to move!",
    }
}

/// Ordered log of the events produced by one move invocation or switch-in.
/// Order is significant: after-move abilities scan, remove and rewrite
/// entries that earlier steps recorded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<ResultEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: ResultEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = ResultEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[ResultEvent] {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Vec<ResultEvent> {
        &mut self.events
    }

    pub fn into_events(self) -> Vec<ResultEvent> {
        self.events
    }

    pub fn any(&self, predicate: impl Fn(&ResultEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }

    /// Re-express every event from the opposite side, used when a reflected
    /// move's inner log is folded back into the outer one.
    pub fn swap_sides(&mut self) {
        for event in &mut self.events {
            let target = event.target_mut();
            *target = target.swapped();
        }
    }

    /// Serialize for the network layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events)
    }

    /// Human-readable lines for every non-silent event.
    pub fn describe(&self, name_of: impl Fn(Target) -> String) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(&name_of))
            .collect()
    }

    /// Return true if the log contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl From<Vec<ResultEvent>> for EventLog {
    fn from(events: Vec<ResultEvent>) -> Self {
        Self { events }
    }
}

impl std::fmt::Display for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum RngSource {
    /// Fixed outcomes handed out in order; used by tests.
    Scripted { outcomes: Vec<f64>, index: usize },
    Seeded(StdRng),
}

/// The single random source for a battle. Every random decision (accuracy,
/// critical hits, damage spread, secondary effects, ability procs, wild
/// generation) draws from here, so a seed or a script reproduces a battle
/// exactly.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
    consumed: usize,
}

/// Returned by a scripted source once its outcomes run out.
pub const NEUTRAL_ROLL: f64 = 0.5;

impl TurnRng {
    /// Scripted outcomes in `[0, 1)`, consumed in order.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
            consumed: 0,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
            consumed: 0,
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: RngSource::Seeded(StdRng::from_os_rng()),
            consumed: 0,
        }
    }

    /// Seeded when a seed is given, otherwise from OS entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new_random(),
        }
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_f64(&mut self, reason: &str) -> f64 {
        let value = match &mut self.source {
            RngSource::Scripted { outcomes, index } => match outcomes.get(*index) {
                Some(&value) => {
                    *index += 1;
                    value
                }
                None => {
                    trace!(reason, "scripted rng exhausted, using neutral roll");
                    NEUTRAL_ROLL
                }
            },
            RngSource::Seeded(rng) => rng.random::<f64>(),
        };
        self.consumed += 1;
        trace!(reason, value, "rng draw");
        value
    }

    /// True with probability `probability`.
    pub fn chance(&mut self, probability: f64, reason: &str) -> bool {
        self.next_f64(reason) < probability
    }

    /// Uniform integer in `[min, max]`.
    pub fn range_inclusive(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        if max <= min {
            self.next_f64(reason);
            return min;
        }
        let span = (max - min + 1) as f64;
        let offset = (span * self.next_f64(reason)).floor() as u32;
        (min + offset).min(max)
    }

    /// Uniformly pick one element.
    pub fn pick<'a, T>(&mut self, items: &'a [T], reason: &str) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range_inclusive(0, (items.len() - 1) as u32, reason);
        items.get(index as usize)
    }

    /// Number of values drawn so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}
