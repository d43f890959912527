//! Pokemon Battle Core
//!
//! Turn resolution for Pokemon-style battles: stat generation and leveling,
//! move damage and status resolution, and a table of ability hooks that
//! intercept moves before and after they apply and when a Pokemon switches
//! in. Catalog data is loaded once from RON files and shared by reference.

// --- MODULE DECLARATIONS ---
pub mod abilities;
pub mod battle;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod natures;
pub mod pokemon;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    Accuracy, BaseStats, ExperienceCurve, Gender, LearnsetEntry, MoveCategory, MoveData, MoveKind,
    PokemonSpecies, PokemonType, StatKind, StatusCondition, Weather,
};

// --- From this crate's modules (`src/`) ---

// Resolution entry points and the types they produce.
pub use battle::combatant::{Combatant, StatStages, VolatileFlags};
pub use battle::damage::{calculate_damage, DamageOutcome};
pub use battle::descriptor::MoveDescriptor;
pub use battle::resolver::MoveResolver;
pub use battle::state::{EventLog, ResultEvent, Target, TurnRng};

// Ability registry.
pub use abilities::{Ability, AbilityHooks, ABILITY_REGISTRY};

// Data and runtime types.
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use pokemon::{LevelUpOutcome, MoveInstance, PokemonInst, PokemonSave};

// Crate-specific error and result types.
pub use errors::{
    AbilityError, AbilityResult, BattleEngineError, BattleResult, CatalogError, CatalogResult,
    ConfigError, ConfigResult, SpeciesDataError, SpeciesDataResult,
};
