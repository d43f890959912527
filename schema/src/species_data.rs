use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.as_array().iter().map(|&s| s as u16).sum()
    }

    /// Stats in HP, ATK, DEF, SPA, SPD, SPE order.
    pub fn as_array(&self) -> [u8; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
    }
}

/// When a learnset entry becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnTrigger {
    Level(u8),
    /// Learned on the level the species evolves into this one.
    Evolution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnsetEntry {
    pub at: LearnTrigger,
    pub move_name: String,
}

impl LearnsetEntry {
    /// Entries available to a freshly generated Pokemon at `level`.
    pub fn available_at(&self, level: u8) -> bool {
        match self.at {
            LearnTrigger::Level(required) => required <= level,
            LearnTrigger::Evolution => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionData {
    /// Catalog id of the evolved species.
    pub evolves_into: String,
    pub level: u8,
}

/// Growth rate used to look up experience-to-next-level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceCurve {
    Erratic,
    Fast,
    #[default]
    MediumFast,
    MediumSlow,
    Slow,
    Fluctuating,
}

impl ExperienceCurve {
    /// Column of this curve in the experience table.
    pub fn index(self) -> usize {
        match self {
            ExperienceCurve::Erratic => 0,
            ExperienceCurve::Fast => 1,
            ExperienceCurve::MediumFast => 2,
            ExperienceCurve::MediumSlow => 3,
            ExperienceCurve::Slow => 4,
            ExperienceCurve::Fluctuating => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub pokedex_number: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub ability1: Option<String>,
    #[serde(default)]
    pub ability2: Option<String>,
    #[serde(default)]
    pub learnset: Vec<LearnsetEntry>,
    #[serde(default)]
    pub evolution: Option<EvolutionData>,
    #[serde(default)]
    pub experience_curve: ExperienceCurve,
    /// Probability of a male; `None` for genderless species.
    #[serde(default)]
    pub gender_ratio: Option<f64>,
}

impl PokemonSpecies {
    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    /// Moves scheduled exactly at `level`.
    pub fn moves_at_level(&self, level: u8) -> impl Iterator<Item = &str> {
        self.learnset
            .iter()
            .filter(move |entry| entry.at == LearnTrigger::Level(level))
            .map(|entry| entry.move_name.as_str())
    }

    pub fn evolution_moves(&self) -> impl Iterator<Item = &str> {
        self.learnset
            .iter()
            .filter(|entry| entry.at == LearnTrigger::Evolution)
            .map(|entry| entry.move_name.as_str())
    }
}
