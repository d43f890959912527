use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a move is resolved once it connects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Deals damage and may carry secondary status/debuff effects.
    Damaging,
    /// Applies its status to the target unconditionally.
    Status,
    /// Lowers one or more of the target's stats.
    Debuff,
    /// Raises the user's stats. Not supported by the resolver, which
    /// substitutes the fallback move.
    Buff,
    #[default]
    Other,
}

/// Which attack/defense stat pair the damage formula reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Accuracy {
    /// Bypasses the accuracy roll entirely.
    AlwaysHits,
    /// Hit probability in `[0, 1]`.
    Fraction(f64),
}

impl Default for Accuracy {
    fn default() -> Self {
        Accuracy::AlwaysHits
    }
}

/// Persistent (non-volatile) status. A Pokemon carries at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCondition {
    Sleep,
    Burn,
    Paralysis,
    Poison,
    Freeze,
}

impl StatusCondition {
    /// Numeric code used by saves and clients (0 is reserved for "none").
    pub fn code(self) -> u8 {
        match self {
            StatusCondition::Sleep => 1,
            StatusCondition::Burn => 2,
            StatusCondition::Paralysis => 3,
            StatusCondition::Poison => 4,
            StatusCondition::Freeze => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(StatusCondition::Sleep),
            2 => Some(StatusCondition::Burn),
            3 => Some(StatusCondition::Paralysis),
            4 => Some(StatusCondition::Poison),
            5 => Some(StatusCondition::Freeze),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCondition::Sleep => "sleep",
            StatusCondition::Burn => "burn",
            StatusCondition::Paralysis => "paralysis",
            StatusCondition::Poison => "poison",
            StatusCondition::Freeze => "freeze",
        };
        write!(f, "{}", name)
    }
}

/// Stats that carry a battle stage modifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::SpecialAttack => "Special Attack",
            StatKind::SpecialDefense => "Special Defense",
            StatKind::Speed => "Speed",
            StatKind::Accuracy => "accuracy",
            StatKind::Evasion => "evasiveness",
        };
        write!(f, "{}", name)
    }
}

/// A static move catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveData {
    pub name: String,
    pub kind: MoveKind,
    pub category: MoveCategory,
    pub move_type: PokemonType,
    pub power: u16,
    pub accuracy: Accuracy,
    pub pp: u8,
    pub contact: bool,
    pub high_critical: bool,
    pub apply_status: Option<StatusCondition>,
    pub apply_status_chance: Option<f64>,
    pub debuff_stats: Vec<StatKind>,
    pub debuff_chance: Option<f64>,
    pub debuff_amount: i8,
    pub flinch_chance: Option<f64>,
    pub confusion_chance: Option<f64>,
    pub secondary_chance: Option<f64>,
    /// Fraction of the damage dealt that the user takes back.
    pub recoil: Option<f64>,
    /// Fraction of the damage dealt that the user heals.
    pub drain: Option<f64>,
}

impl Default for MoveData {
    fn default() -> Self {
        MoveData {
            name: String::new(),
            kind: MoveKind::Other,
            category: MoveCategory::Physical,
            move_type: PokemonType::Normal,
            power: 0,
            accuracy: Accuracy::AlwaysHits,
            pp: 0,
            contact: false,
            high_critical: false,
            apply_status: None,
            apply_status_chance: None,
            debuff_stats: Vec::new(),
            debuff_chance: None,
            debuff_amount: 1,
            flinch_chance: None,
            confusion_chance: None,
            secondary_chance: None,
            recoil: None,
            drain: None,
        }
    }
}

impl MoveData {
    /// The move used when a name is unknown or unusable and the catalog has
    /// no fallback entry of its own.
    pub fn builtin_fallback() -> Self {
        MoveData {
            name: "tackle".to_string(),
            kind: MoveKind::Damaging,
            move_type: PokemonType::Normal,
            power: 40,
            accuracy: Accuracy::Fraction(1.0),
            pp: 35,
            contact: true,
            ..MoveData::default()
        }
    }

    /// Whether the move is treated as an attack by type-immunity abilities.
    pub fn is_damaging(&self) -> bool {
        self.kind == MoveKind::Damaging || self.power > 0
    }

    /// Problems that make parts of this entry unusable. Empty when the entry
    /// is well-formed.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Accuracy::Fraction(value) = self.accuracy {
            if !(0.0..=1.0).contains(&value) {
                problems.push(format!("accuracy {} outside [0, 1]", value));
            }
        }
        if self.kind == MoveKind::Damaging && self.power == 0 {
            problems.push("damaging move with zero power".to_string());
        }
        if self.kind == MoveKind::Status && self.apply_status.is_none() {
            problems.push("status move without a status to apply".to_string());
        }
        if self.kind == MoveKind::Debuff && self.debuff_stats.is_empty() {
            problems.push("debuff move without debuff stats".to_string());
        }
        let chances = [
            ("apply_status_chance", self.apply_status_chance),
            ("debuff_chance", self.debuff_chance),
            ("flinch_chance", self.flinch_chance),
            ("confusion_chance", self.confusion_chance),
            ("secondary_chance", self.secondary_chance),
            ("recoil", self.recoil),
            ("drain", self.drain),
        ];
        for (field, value) in chances {
            if let Some(value) = value {
                if !(0.0..=1.0).contains(&value) {
                    problems.push(format!("{} {} outside [0, 1]", field, value));
                }
            }
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for code in 1..=5 {
            let status = StatusCondition::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(StatusCondition::from_code(0), None);
        assert_eq!(StatusCondition::from_code(9), None);
    }

    #[test]
    fn test_validate_flags_bad_entries() {
        let good = MoveData::builtin_fallback();
        assert!(good.validate().is_empty());

        let bad = MoveData {
            kind: MoveKind::Damaging,
            power: 0,
            accuracy: Accuracy::Fraction(90.0),
            flinch_chance: Some(1.5),
            ..MoveData::default()
        };
        assert_eq!(bad.validate().len(), 3);
    }
}
