use crate::abilities::Ability;
use crate::catalog::Catalog;
use crate::pokemon::PokemonInst;
use schema::{PokemonType, StatKind, StatusCondition, Weather};
use serde::{Deserialize, Serialize};

pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// Battle-only stat stage modifiers, each kept within -6..=6.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatStages {
    attack: i8,
    defense: i8,
    special_attack: i8,
    special_defense: i8,
    speed: i8,
    accuracy: i8,
    evasion: i8,
}

impl StatStages {
    pub fn get(&self, stat: StatKind) -> i8 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
            StatKind::Accuracy => self.accuracy,
            StatKind::Evasion => self.evasion,
        }
    }

    fn slot(&mut self, stat: StatKind) -> &mut i8 {
        match stat {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
            StatKind::Accuracy => &mut self.accuracy,
            StatKind::Evasion => &mut self.evasion,
        }
    }

    pub fn set(&mut self, stat: StatKind, stage: i8) {
        *self.slot(stat) = stage.clamp(MIN_STAGE, MAX_STAGE);
    }

    /// Shift a stage by `delta`, clamped. Returns the change actually made.
    pub fn change(&mut self, stat: StatKind, delta: i8) -> i8 {
        let slot = self.slot(stat);
        let old = *slot;
        *slot = old.saturating_add(delta).clamp(MIN_STAGE, MAX_STAGE);
        *slot - old
    }

    pub fn reset(&mut self) {
        *self = StatStages::default();
    }
}

/// Transient flags that only live for the current battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolatileFlags {
    pub flash_fire_active: bool,
    pub infatuated: bool,
    pub confused: bool,
    pub flinched: bool,
    pub early_bird: bool,
}

/// A Pokemon in play: the persistent instance plus everything that resets
/// when it leaves the field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Combatant {
    pub pokemon: PokemonInst,
    pub stages: StatStages,
    pub flags: VolatileFlags,
    /// Field weather, mirrored here by the battle layer.
    pub weather: Weather,
    /// Active ability name. Starts as the species ability for the Pokemon's
    /// slot; Trace can overwrite it for the rest of the battle.
    pub ability_name: String,
}

impl Combatant {
    pub fn new(pokemon: PokemonInst, catalog: &Catalog) -> Self {
        let ability_name = pokemon.ability_name(catalog);
        Self::with_ability(pokemon, ability_name)
    }

    pub fn with_ability(pokemon: PokemonInst, ability_name: impl Into<String>) -> Self {
        Combatant {
            pokemon,
            stages: StatStages::default(),
            flags: VolatileFlags::default(),
            weather: Weather::Clear,
            ability_name: ability_name.into(),
        }
    }

    /// The active ability, if it is one the engine knows.
    pub fn ability(&self) -> Option<Ability> {
        Ability::parse(&self.ability_name)
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.ability() == Some(ability)
    }

    pub fn hp(&self) -> u16 {
        self.pokemon.curr_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.pokemon.max_hp()
    }

    pub fn status(&self) -> Option<StatusCondition> {
        self.pokemon.status
    }

    pub fn is_fainted(&self) -> bool {
        self.pokemon.is_fainted()
    }

    /// The species' types, or `None` when the species is missing from the
    /// catalog.
    pub fn species_types<'c>(&self, catalog: &'c Catalog) -> Option<&'c [PokemonType]> {
        catalog
            .species(&self.pokemon.species)
            .map(|species| species.types.as_slice())
    }

    /// Display name for event text.
    pub fn display_name(&self) -> &str {
        &self.pokemon.name
    }

    /// Clear everything battle-only, as when the Pokemon leaves the field.
    pub fn reset_volatile(&mut self, catalog: &Catalog) {
        self.stages.reset();
        self.flags = VolatileFlags::default();
        self.ability_name = self.pokemon.ability_name(catalog);
    }
}
