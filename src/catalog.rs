//! Read-only game data: species, moves, the type chart and the experience
//! table. Loaded once from RON files and shared by reference for the life of
//! the process.

use crate::errors::{CatalogError, CatalogResult};
use schema::{ExperienceCurve, MoveData, PokemonSpecies, PokemonType};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub type TypeChart = HashMap<PokemonType, HashMap<PokemonType, f64>>;

pub const SPECIES_FILE: &str = "species.ron";
pub const MOVES_FILE: &str = "moves.ron";
pub const TYPES_FILE: &str = "types.ron";
pub const EXPERIENCE_FILE: &str = "experience.ron";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: HashMap<String, PokemonSpecies>,
    moves: HashMap<String, MoveData>,
    types: TypeChart,
    experience: Vec<[u32; 6]>,
}

fn read_ron<T: DeserializeOwned>(data_dir: &Path, file: &str) -> CatalogResult<T> {
    let path = data_dir.join(file);
    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| CatalogError::Parse { path, source })
}

fn normalize_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl Catalog {
    /// Load every catalog file from `data_dir`.
    pub fn load(data_dir: &Path) -> CatalogResult<Self> {
        let species: HashMap<String, PokemonSpecies> = read_ron(data_dir, SPECIES_FILE)?;
        let moves: HashMap<String, MoveData> = read_ron(data_dir, MOVES_FILE)?;
        let types: TypeChart = read_ron(data_dir, TYPES_FILE)?;
        let experience: Vec<[u32; 6]> = read_ron(data_dir, EXPERIENCE_FILE)?;

        if species.is_empty() {
            return Err(CatalogError::Empty { catalog: "species" });
        }
        if moves.is_empty() {
            return Err(CatalogError::Empty { catalog: "moves" });
        }

        let catalog = Self::from_parts(species, moves, types, experience);
        debug!(
            species = catalog.species.len(),
            moves = catalog.moves.len(),
            "catalogs loaded from {}",
            data_dir.display()
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed tables. Keys are normalized and
    /// malformed entries are repaired or reported here, so lookups during a
    /// battle never have to second-guess the data.
    pub fn from_parts(
        species: HashMap<String, PokemonSpecies>,
        moves: HashMap<String, MoveData>,
        types: TypeChart,
        experience: Vec<[u32; 6]>,
    ) -> Self {
        let moves = moves
            .into_iter()
            .map(|(key, mut data)| {
                let key = normalize_key(&key);
                if data.name.is_empty() {
                    data.name = key.clone();
                }
                for problem in data.validate() {
                    warn!(move_name = %key, "malformed move entry: {}", problem);
                }
                sanitize_move(&mut data);
                (key, data)
            })
            .collect::<HashMap<_, _>>();

        let species_keys: Vec<String> = species.keys().map(|k| normalize_key(k)).collect();
        let species = species
            .into_iter()
            .map(|(key, mut data)| {
                let key = normalize_key(&key);
                if let Some(evolution) = &data.evolution {
                    if !species_keys.contains(&normalize_key(&evolution.evolves_into)) {
                        warn!(
                            species = %key,
                            "evolution target {} is not in the catalog; evolution disabled",
                            evolution.evolves_into
                        );
                        data.evolution = None;
                    }
                }
                for entry in &data.learnset {
                    if !moves.contains_key(&normalize_key(&entry.move_name)) {
                        warn!(species = %key, "learnset move {} is not in the catalog", entry.move_name);
                    }
                }
                if data.types.len() > 2 {
                    warn!(species = %key, "species lists more than two types; extra types are ignored");
                }
                (key, data)
            })
            .collect();

        if experience.len() < 100 {
            warn!(
                rows = experience.len(),
                "experience table is short; missing levels need 0 experience"
            );
        }

        Catalog {
            species,
            moves,
            types,
            experience,
        }
    }

    pub fn species(&self, id: &str) -> Option<&PokemonSpecies> {
        self.species.get(&normalize_key(id))
    }

    /// Case-insensitive move lookup.
    pub fn move_data(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(&normalize_key(name))
    }

    pub fn has_move(&self, name: &str) -> bool {
        self.move_data(name).is_some()
    }

    pub fn species_ids(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    /// Multiplier for one attacking/defending type pair. Unlisted pairs are
    /// neutral.
    pub fn effectiveness(&self, attacking: PokemonType, defending: PokemonType) -> f64 {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or(1.0)
    }

    /// Product over the defender's (at most two) types.
    pub fn effectiveness_against(&self, attacking: PokemonType, defending: &[PokemonType]) -> f64 {
        defending
            .iter()
            .take(2)
            .map(|&defending| self.effectiveness(attacking, defending))
            .product()
    }

    /// Experience needed to advance from `level`. Zero at level 100 and for
    /// any level the table does not cover.
    pub fn experience_to_next(&self, level: u8, curve: ExperienceCurve) -> u32 {
        if level >= 100 {
            return 0;
        }
        self.experience
            .get(level as usize)
            .map(|row| row[curve.index()])
            .unwrap_or(0)
    }
}

/// Clamp out-of-range fractions so a bad entry degrades instead of breaking
/// the probability math.
fn sanitize_move(data: &mut MoveData) {
    if let schema::Accuracy::Fraction(value) = data.accuracy {
        data.accuracy = schema::Accuracy::Fraction(value.clamp(0.0, 1.0));
    }
    for chance in [
        &mut data.apply_status_chance,
        &mut data.debuff_chance,
        &mut data.flinch_chance,
        &mut data.confusion_chance,
        &mut data.secondary_chance,
        &mut data.recoil,
        &mut data.drain,
    ] {
        if let Some(value) = chance.as_mut() {
            *value = value.clamp(0.0, 1.0);
        }
    }
}
