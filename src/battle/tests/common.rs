use crate::battle::combatant::Combatant;
use crate::battle::descriptor::MoveDescriptor;
use crate::battle::resolver::MoveResolver;
use crate::battle::state::{EventLog, ResultEvent, Target, TurnRng};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::pokemon::PokemonInst;
use schema::{Gender, StatusCondition, Weather};
use std::path::Path;
use std::sync::OnceLock;

/// Nature 21 has no stat modifiers.
pub const NEUTRAL_NATURE: u8 = 21;

static CATALOG: OnceLock<Catalog> = OnceLock::new();
static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// The catalog under `data/`, loaded once and shared by every test.
pub fn test_catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        match Catalog::load(&data_dir) {
            Ok(catalog) => catalog,
            Err(err) => panic!("Failed to load test catalog from {}: {}", data_dir.display(), err),
        }
    })
}

pub fn test_config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::default)
}

pub fn test_resolver() -> MoveResolver<'static> {
    MoveResolver::new(test_catalog(), test_config())
}

/// A fresh descriptor for a catalog move.
pub fn test_move(name: &str) -> MoveDescriptor {
    match test_catalog().move_data(name) {
        Some(data) => MoveDescriptor::new(data.clone()),
        None => panic!("Move {} missing from test catalog", name),
    }
}

/// A builder for test combatants with fixed, neutral defaults: IVs of 15,
/// no EVs, a neutral nature, the first ability slot and full HP.
///
/// # Example
/// ```ignore
/// let pikachu = TestCombatantBuilder::new("pikachu", 25)
///     .with_moves(&["thunder shock"])
///     .with_status(StatusCondition::Paralysis)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    species: String,
    level: u8,
    moves: Option<Vec<String>>,
    status: Option<StatusCondition>,
    current_hp: Option<u16>,
    max_hp: Option<u16>,
    ability: Option<String>,
    gender: Option<Gender>,
    weather: Weather,
}

impl TestCombatantBuilder {
    pub fn new(species: &str, level: u8) -> Self {
        Self {
            species: species.to_string(),
            level,
            moves: None,
            status: None,
            current_hp: None,
            max_hp: None,
            ability: None,
            gender: None,
            weather: Weather::Clear,
        }
    }

    /// Replaces the learnset moves.
    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = Some(moves.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Overrides the derived max HP, for tests that need round numbers.
    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = Some(max_hp);
        self
    }

    /// Overrides the active ability regardless of species.
    pub fn with_ability(mut self, ability: &str) -> Self {
        self.ability = Some(ability.to_string());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    pub fn build_pokemon(&self) -> PokemonInst {
        let catalog = test_catalog();
        let mut rng = TurnRng::from_seed(7);
        let mut pokemon = match PokemonInst::create_wild(&self.species, self.level, catalog, &mut rng)
        {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to create {}: {}", self.species, err),
        };

        pokemon.ivs = [15; 6];
        pokemon.evs = [0; 6];
        pokemon.nature = NEUTRAL_NATURE;
        pokemon.ability_slot = pokemon.ability_slot.min(1);
        if let Some(gender) = self.gender {
            pokemon.gender = gender;
        }
        if let Err(err) = pokemon.calculate_stats(catalog) {
            panic!("Failed to calculate stats for {}: {}", self.species, err);
        }
        if let Some(max_hp) = self.max_hp {
            pokemon.curr_stats[0] = max_hp;
        }
        pokemon.set_hp_to_max();

        if let Some(moves) = &self.moves {
            pokemon.moves = [const { None }; 4];
            for (slot, name) in moves.iter().take(4).enumerate() {
                assert!(
                    pokemon.learn_move(slot, name, catalog),
                    "Move {} missing from test catalog",
                    name
                );
            }
        }

        pokemon.status = self.status;
        if let Some(hp) = self.current_hp {
            pokemon.set_hp(hp);
        }
        pokemon
    }

    pub fn build(self) -> Combatant {
        let pokemon = self.build_pokemon();
        let mut combatant = match &self.ability {
            Some(ability) => Combatant::with_ability(pokemon, ability.clone()),
            None => Combatant::new(pokemon, test_catalog()),
        };
        combatant.weather = self.weather;
        combatant
    }
}

/// A scripted RNG that returns `rolls` in order, then the neutral 0.5.
pub fn scripted(rolls: &[f64]) -> TurnRng {
    TurnRng::new_for_test(rolls.to_vec())
}

/// Creates a `TurnRng` with a long run of neutral rolls. Useful for tests
/// where the specific outcome is not important.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![0.5; 100])
}

/// Number of events in `log` matching `predicate`.
pub fn count_events(log: &EventLog, predicate: impl Fn(&ResultEvent) -> bool) -> usize {
    log.events().iter().filter(|event| predicate(event)).count()
}

/// Display names for event text in tests.
pub fn names<'a>(attacker: &'a Combatant, defender: &'a Combatant) -> impl Fn(Target) -> String + 'a {
    move |target| match target {
        Target::Attacker => attacker.display_name().to_string(),
        _ => defender.display_name().to_string(),
    }
}

/// Print all events, for debugging failing scenarios.
pub fn print_events(label: &str, log: &EventLog) {
    println!("{} events:", label);
    for event in log.events() {
        println!("  {:?}", event);
    }
}
