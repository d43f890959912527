use crate::battle::state::TurnRng;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::errors::{SpeciesDataError, SpeciesDataResult};
use crate::natures::{nature_multiplier, NATURE_COUNT};
use schema::{Gender, MoveData, PokemonSpecies, StatKind, StatusCondition};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const MAX_LEVEL: u8 = 100;
pub const MAX_IV: u8 = 31;
const UNIQUE_ID_LEN: usize = 16;
const UNIQUE_ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub move_name: String,
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveInstance {
    /// Create a new move instance with full PP
    pub fn new(data: &MoveData) -> Self {
        MoveInstance {
            move_name: data.name.clone(),
            pp: data.pp,
            max_pp: data.pp,
        }
    }

    /// Use the move (decrease PP)
    pub fn use_move(&mut self) -> bool {
        if self.pp > 0 {
            self.pp -= 1;
            true
        } else {
            false
        }
    }
}

/// What a single level gained changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelUpOutcome {
    pub level: u8,
    pub moves_learned: Vec<String>,
    /// Moves that were due but found no empty slot.
    pub queued: Vec<String>,
    pub evolved_into: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub name: String,                     // Species name if no nickname
    pub species: String,                  // Catalog id (e.g. "pikachu")
    pub unique: String,                   // 16-character id
    pub level: u8,
    pub gender: Gender,
    pub shiny: bool,
    pub nature: u8,                       // 1..=25
    pub ability_slot: u8,                 // 0 = none, 1 or 2
    pub experience: u32,                  // Progress into the current level
    pub experience_needed: u32,           // To reach the next level, 0 at 100
    pub ivs: [u8; 6],                     // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub evs: [u8; 6],                     // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub curr_stats: [u16; 6],             // Max HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub curr_hp: u16,
    pub moves: [Option<MoveInstance>; 4], // Up to 4 moves
    pub status: Option<StatusCondition>,
    pub learnable_moves: Vec<String>,     // Due moves that found no empty slot
}

/// Position of a stat in the `ivs`/`evs`/`curr_stats` arrays.
pub fn stat_index(stat: StatKind) -> Option<usize> {
    match stat {
        StatKind::Attack => Some(1),
        StatKind::Defense => Some(2),
        StatKind::SpecialAttack => Some(3),
        StatKind::SpecialDefense => Some(4),
        StatKind::Speed => Some(5),
        StatKind::Accuracy | StatKind::Evasion => None,
    }
}

const NON_HP_STATS: [StatKind; 5] = [
    StatKind::Attack,
    StatKind::Defense,
    StatKind::SpecialAttack,
    StatKind::SpecialDefense,
    StatKind::Speed,
];

/// Max HP from base stat, IV, EV and level.
pub fn hp_stat(base: u8, iv: u8, ev: u8, level: u8) -> u16 {
    let total = (iv as u32 + 2 * base as u32 + ev as u32 / 4 + 100) * level as u32;
    (total / 100 + 10) as u16
}

/// A non-HP stat, with the nature multiplier applied before the final floor.
pub fn other_stat(base: u8, iv: u8, ev: u8, level: u8, nature_mult: f64) -> u16 {
    let raw = (iv as u32 + 2 * base as u32 + ev as u32 / 4) * level as u32 / 100 + 5;
    (raw as f64 * nature_mult).floor() as u16
}

fn random_unique(rng: &mut TurnRng) -> String {
    (0..UNIQUE_ID_LEN)
        .map(|_| {
            rng.pick(UNIQUE_ID_CHARS, "unique id")
                .map(|&c| c as char)
                .unwrap_or('0')
        })
        .collect()
}

impl PokemonInst {
    /// Generate a wild Pokemon with default engine settings.
    pub fn create_wild(
        species_id: &str,
        level: u8,
        catalog: &Catalog,
        rng: &mut TurnRng,
    ) -> SpeciesDataResult<Self> {
        Self::create_wild_with_config(species_id, level, catalog, &EngineConfig::default(), rng)
    }

    /// Generate a wild Pokemon. Random draws happen in a fixed order: gender,
    /// nature, ability slot, the six IVs, shininess, then the unique id.
    pub fn create_wild_with_config(
        species_id: &str,
        level: u8,
        catalog: &Catalog,
        config: &EngineConfig,
        rng: &mut TurnRng,
    ) -> SpeciesDataResult<Self> {
        let species = catalog
            .species(species_id)
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(species_id.to_string()))?;
        let level = level.clamp(1, MAX_LEVEL);

        let gender = match species.gender_ratio {
            Some(ratio) => {
                if rng.chance(ratio, "gender") {
                    Gender::Male
                } else {
                    Gender::Female
                }
            }
            None => Gender::Genderless,
        };
        let nature = rng.range_inclusive(1, NATURE_COUNT as u32, "nature") as u8;
        let ability_slot = if species.ability2.is_some() {
            rng.range_inclusive(1, 2, "ability slot") as u8
        } else if species.ability1.is_some() {
            1
        } else {
            0
        };
        let mut ivs = [0u8; 6];
        for iv in ivs.iter_mut() {
            *iv = rng.range_inclusive(0, MAX_IV as u32, "iv") as u8;
        }
        let shiny = rng.chance(config.shiny_chance(), "shiny");
        let unique = random_unique(rng);

        let mut pokemon = PokemonInst {
            name: species.name.clone(),
            species: species_id.to_ascii_lowercase(),
            unique,
            level,
            gender,
            shiny,
            nature,
            ability_slot,
            experience: 0,
            experience_needed: 0,
            ivs,
            evs: [0; 6],
            curr_stats: [0; 6],
            curr_hp: 0,
            moves: [const { None }; 4],
            status: None,
            learnable_moves: Vec::new(),
        };

        // Every available learnset move, cycling through the four slots so
        // the most recent ones win.
        let mut slot = 0;
        for entry in species.learnset.iter().filter(|e| e.available_at(level)) {
            pokemon.learn_move(slot, &entry.move_name, catalog);
            slot = (slot + 1) % 4;
        }
        if pokemon.moves[0].is_none() && !pokemon.learn_move(0, &config.fallback_move, catalog) {
            pokemon.moves[0] = Some(MoveInstance::new(&MoveData::builtin_fallback()));
        }

        pokemon.apply_species_stats(species, catalog);
        pokemon.curr_hp = pokemon.max_hp();
        debug!(
            species = %pokemon.species,
            level,
            nature,
            ability_slot,
            shiny,
            "created wild pokemon"
        );
        Ok(pokemon)
    }

    fn apply_species_stats(&mut self, species: &PokemonSpecies, catalog: &Catalog) {
        let base = species.base_stats.as_array();
        self.curr_stats[0] = hp_stat(base[0], self.ivs[0], self.evs[0], self.level);
        for stat in NON_HP_STATS {
            if let Some(i) = stat_index(stat) {
                self.curr_stats[i] = other_stat(
                    base[i],
                    self.ivs[i],
                    self.evs[i],
                    self.level,
                    nature_multiplier(self.nature, stat),
                );
            }
        }
        self.experience_needed = catalog.experience_to_next(self.level, species.experience_curve);
    }

    /// Recompute derived stats and experience-to-next from species data.
    /// Current HP is left alone apart from clamping it to the new maximum.
    pub fn calculate_stats(&mut self, catalog: &Catalog) -> SpeciesDataResult<()> {
        let species = catalog
            .species(&self.species)
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(self.species.clone()))?;
        self.apply_species_stats(species, catalog);
        self.curr_hp = self.curr_hp.min(self.max_hp());
        Ok(())
    }

    /// Gain one level. Stats are recalculated, a living Pokemon gains exactly
    /// the increase in max HP, the species may evolve, and moves due at the
    /// new level fill empty slots or join `learnable_moves`.
    pub fn level_up(&mut self, catalog: &Catalog) -> SpeciesDataResult<LevelUpOutcome> {
        if self.level >= MAX_LEVEL {
            return Ok(LevelUpOutcome {
                level: self.level,
                ..LevelUpOutcome::default()
            });
        }

        self.level += 1;
        self.recalculate_keeping_damage(catalog)?;

        let mut outcome = LevelUpOutcome {
            level: self.level,
            ..LevelUpOutcome::default()
        };

        let evolution = catalog
            .species(&self.species)
            .and_then(|s| s.evolution.clone())
            .filter(|evo| self.level >= evo.level);
        if let Some(evolution) = evolution {
            if let Some(evolved) = catalog.species(&evolution.evolves_into) {
                let old_name = catalog.species(&self.species).map(|s| s.name.clone());
                if old_name.as_deref() == Some(self.name.as_str()) {
                    self.name = evolved.name.clone();
                }
                self.species = evolution.evolves_into.to_ascii_lowercase();
                self.recalculate_keeping_damage(catalog)?;
                debug!(species = %self.species, level = self.level, "evolved");
                outcome.evolved_into = Some(self.species.clone());
            }
        }

        let species = catalog
            .species(&self.species)
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(self.species.clone()))?;
        let mut due: Vec<&str> = species.moves_at_level(self.level).collect();
        if outcome.evolved_into.is_some() {
            due.extend(species.evolution_moves());
        }

        for move_name in due {
            if !catalog.has_move(move_name) {
                warn!(species = %self.species, "move {} doesn't exist, skipping", move_name);
                continue;
            }
            if self.knows_move(move_name) {
                continue;
            }
            match self.moves.iter().position(Option::is_none) {
                Some(slot) => {
                    self.learn_move(slot, move_name, catalog);
                    outcome.moves_learned.push(move_name.to_string());
                }
                None => {
                    if !self.learnable_moves.iter().any(|m| m.eq_ignore_ascii_case(move_name)) {
                        self.learnable_moves.push(move_name.to_string());
                    }
                    outcome.queued.push(move_name.to_string());
                }
            }
        }

        Ok(outcome)
    }

    fn recalculate_keeping_damage(&mut self, catalog: &Catalog) -> SpeciesDataResult<()> {
        let old_max = self.max_hp();
        let hp = self.curr_hp;
        self.calculate_stats(catalog)?;
        if hp > 0 {
            let delta = self.max_hp() as i32 - old_max as i32;
            self.curr_hp = (hp as i32 + delta).clamp(0, self.max_hp() as i32) as u16;
        }
        Ok(())
    }

    /// Add experience and level up as many times as it pays for.
    pub fn gain_experience(
        &mut self,
        amount: u32,
        catalog: &Catalog,
    ) -> SpeciesDataResult<Vec<LevelUpOutcome>> {
        let mut outcomes = Vec::new();
        if self.level >= MAX_LEVEL {
            return Ok(outcomes);
        }
        self.experience = self.experience.saturating_add(amount);
        while self.level < MAX_LEVEL
            && self.experience_needed > 0
            && self.experience >= self.experience_needed
        {
            self.experience -= self.experience_needed;
            outcomes.push(self.level_up(catalog)?);
        }
        if self.level >= MAX_LEVEL {
            self.experience = 0;
        }
        Ok(outcomes)
    }

    /// Put `move_name` into `slot` with full PP. Returns false (and changes
    /// nothing) for an out-of-range slot or a move the catalog doesn't know.
    pub fn learn_move(&mut self, slot: usize, move_name: &str, catalog: &Catalog) -> bool {
        if slot >= self.moves.len() {
            return false;
        }
        match catalog.move_data(move_name) {
            Some(data) => {
                self.moves[slot] = Some(MoveInstance::new(data));
                true
            }
            None => false,
        }
    }

    pub fn knows_move(&self, move_name: &str) -> bool {
        self.move_slot(move_name).is_some()
    }

    pub fn move_slot(&self, move_name: &str) -> Option<usize> {
        self.moves.iter().position(|m| {
            m.as_ref()
                .is_some_and(|m| m.move_name.eq_ignore_ascii_case(move_name))
        })
    }

    /// The species ability for the current slot, or an empty string.
    pub fn ability_name(&self, catalog: &Catalog) -> String {
        let Some(species) = catalog.species(&self.species) else {
            return String::new();
        };
        let ability = match self.ability_slot {
            1 => species.ability1.as_ref(),
            2 => species.ability2.as_ref(),
            _ => None,
        };
        ability.cloned().unwrap_or_default()
    }

    pub fn max_hp(&self) -> u16 {
        self.curr_stats[0]
    }

    pub fn current_hp(&self) -> u16 {
        self.curr_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.curr_hp == 0
    }

    pub fn set_hp(&mut self, hp: u16) {
        self.curr_hp = hp.min(self.max_hp());
    }

    pub fn set_hp_to_max(&mut self) {
        self.curr_hp = self.max_hp();
    }

    /// Subtract damage, flooring at 0. Returns the HP actually lost.
    pub fn take_damage(&mut self, damage: u16) -> u16 {
        let lost = damage.min(self.curr_hp);
        self.curr_hp -= lost;
        lost
    }

    /// Add HP, capped at max. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let restored = amount.min(self.max_hp().saturating_sub(self.curr_hp));
        self.curr_hp += restored;
        restored
    }

    /// Derived (pre-stage) value of a non-HP stat.
    pub fn stat(&self, stat: StatKind) -> u16 {
        stat_index(stat).map(|i| self.curr_stats[i]).unwrap_or(0)
    }

    pub fn to_save(&self) -> PokemonSave {
        let mut moves: [Option<String>; 4] = [const { None }; 4];
        let mut moves_pp = [0u8; 4];
        let mut moves_max_pp = [0u8; 4];
        for (i, slot) in self.moves.iter().enumerate() {
            if let Some(m) = slot {
                moves[i] = Some(m.move_name.clone());
                moves_pp[i] = m.pp;
                moves_max_pp[i] = m.max_pp;
            }
        }
        PokemonSave {
            species: self.species.clone(),
            nickname: Some(self.name.clone()),
            level: self.level,
            unique: self.unique.clone(),
            gender: self.gender.code(),
            ability: self.ability_slot,
            experience: self.experience,
            nature: self.nature,
            status: self.status.map(StatusCondition::code).unwrap_or(0),
            shiny: self.shiny,
            moves,
            moves_pp,
            moves_max_pp,
            hp: self.curr_hp,
            evs: self.evs,
            ivs: self.ivs,
        }
    }

    /// Rebuild a Pokemon from a save snapshot, recomputing derived stats.
    pub fn from_save(save: &PokemonSave, catalog: &Catalog) -> SpeciesDataResult<Self> {
        let species = catalog
            .species(&save.species)
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(save.species.clone()))?;
        if save.level == 0 || save.level > MAX_LEVEL {
            return Err(SpeciesDataError::MalformedData(format!(
                "level {} out of range",
                save.level
            )));
        }

        let mut moves: [Option<MoveInstance>; 4] = [const { None }; 4];
        for (i, name) in save.moves.iter().enumerate() {
            if let Some(name) = name {
                if catalog.has_move(name) {
                    moves[i] = Some(MoveInstance {
                        move_name: name.clone(),
                        pp: save.moves_pp[i].min(save.moves_max_pp[i]),
                        max_pp: save.moves_max_pp[i],
                    });
                } else {
                    warn!(species = %save.species, "saved move {} no longer exists", name);
                }
            }
        }

        let gender = match save.gender {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Genderless,
        };

        let mut pokemon = PokemonInst {
            name: save.nickname.clone().unwrap_or_else(|| species.name.clone()),
            species: save.species.to_ascii_lowercase(),
            unique: save.unique.clone(),
            level: save.level,
            gender,
            shiny: save.shiny,
            nature: save.nature,
            ability_slot: save.ability.min(2),
            experience: save.experience,
            experience_needed: 0,
            ivs: save.ivs.map(|iv| iv.min(MAX_IV)),
            evs: save.evs,
            curr_stats: [0; 6],
            curr_hp: 0,
            moves,
            status: StatusCondition::from_code(save.status),
            learnable_moves: Vec::new(),
        };
        pokemon.apply_species_stats(species, catalog);
        pokemon.set_hp(save.hp);
        Ok(pokemon)
    }
}

/// Flat persistence snapshot of a Pokemon. Derived stats are not stored;
/// they are recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSave {
    pub species: String,
    pub nickname: Option<String>,
    pub level: u8,
    pub unique: String,
    pub gender: u8,
    pub ability: u8,
    pub experience: u32,
    pub nature: u8,
    pub status: u8,
    pub shiny: bool,
    pub moves: [Option<String>; 4],
    pub moves_pp: [u8; 4],
    pub moves_max_pp: [u8; 4],
    pub hp: u16,
    pub evs: [u8; 6],
    pub ivs: [u8; 6],
}
