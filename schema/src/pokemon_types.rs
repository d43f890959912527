use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    #[default]
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Biological gender drawn from the species gender ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Genderless,
    Male,
    Female,
}

impl Gender {
    /// Legacy numeric code: 0 genderless, 1 male, 2 female.
    pub fn code(self) -> u8 {
        match self {
            Gender::Genderless => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    /// True when both sides have a gender and it is the same one.
    pub fn same_as(self, other: Gender) -> Option<bool> {
        match (self, other) {
            (Gender::Genderless, _) | (_, Gender::Genderless) => None,
            (a, b) => Some(a == b),
        }
    }
}
