//! Ability hooks and registry.
//!
//! Abilities intercept a move at three points: before it is applied (block,
//! reflect or rewrite the move), after it is applied (react to the result
//! log), and when the holder switches in. Each ability registers plain
//! function pointers in [`ABILITY_REGISTRY`]; [`dispatch`] runs them with
//! rollback on failure.

use std::str::FromStr;
use strum::{AsRefStr, EnumCount, EnumIter, EnumString};

pub mod dispatch;
pub mod hooks;
pub mod implementations;
pub mod registry;

pub use dispatch::{after_move_apply, before_move_apply, on_switch_in};
pub use hooks::{AbilityHooks, AfterMoveContext, HookOutcome, MoveContext, SwitchInContext};
pub use registry::ABILITY_REGISTRY;

/// Every ability the engine implements. Catalog data names abilities in
/// lowercase with no separators ("waterabsorb"); hyphens, underscores,
/// spaces and case are ignored when parsing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumCount, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Ability {
    // Hard immunities
    Insomnia,
    VitalSpirit,
    Limber,
    Immunity,
    WaterVeil,
    LeafGuard,
    OwnTempo,
    ClearBody,
    HyperCutter,
    KeenEye,
    Soundproof,
    Levitate,
    Damp,
    StickyHold,
    MagnetPull,
    ArenaTrap,
    SuctionCups,

    // Absorb and reflect
    WaterAbsorb,
    VoltAbsorb,
    DrySkin,
    FlashFire,
    LightningRod,
    MagicBounce,

    // Power, accuracy and chance
    Overgrow,
    Blaze,
    Torrent,
    Swarm,
    IronFist,
    Guts,
    Technician,
    Reckless,
    Rivalry,
    ThickFat,
    CompoundEyes,
    Illuminate,
    NoGuard,
    SereneGrace,
    ShieldDust,
    InnerFocus,
    Stench,
    TintedLens,
    WonderGuard,
    MoldBreaker,
    Sniper,
    Scrappy,

    // Read directly by the damage calculator
    Adaptability,
    #[strum(to_string = "filter", serialize = "filtering")]
    Filter,
    SolidRock,
    ShellArmor,
    BattleArmor,

    // Post-hit
    Static,
    FlameBody,
    PoisonPoint,
    EffectSpore,
    CuteCharm,
    ShedSkin,
    PoisonHeal,
    RoughSkin,
    Aftermath,
    #[strum(to_string = "synchronize", serialize = "sync")]
    Synchronize,
    Pressure,
    Sturdy,
    LiquidOoze,
    TangledFeet,
    EarlyBird,
    RockHead,
    PoisonTouch,
    MagicGuard,
    Oblivious,
    Pickup,
    RunAway,

    // Switch-in
    Intimidate,
    SandVeil,
    SwiftSwim,
    #[strum(to_string = "chlorophyll", serialize = "chlo")]
    Chlorophyll,
    Hydration,
    NaturalCure,
    Forewarn,
    Trace,
    Download,
}

impl Ability {
    /// Parse a catalog ability name. Unknown or empty names give `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let compact: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        if compact.is_empty() {
            return None;
        }
        Ability::from_str(&compact).ok()
    }

    /// Canonical lowercase name, as used in events.
    pub fn name(self) -> String {
        self.as_ref().to_string()
    }

    pub fn hooks(self) -> Option<&'static AbilityHooks> {
        ABILITY_REGISTRY[self as usize].as_ref()
    }
}
