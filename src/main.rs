//! Demo driver: loads the catalogs, puts two wild Pokemon on the field and
//! trades a few moves, printing every event.
//!
//! Usage: `battle-sim [config.ron]`

use pokemon_battle_core::{
    BattleResult, Catalog, Combatant, EngineConfig, EventLog, MoveResolver, PokemonInst, Target,
    TurnRng,
};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const ROUNDS: usize = 4;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error loading config: {}", err);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "battle demo failed");
            ExitCode::FAILURE
        }
    }
}

/// The name of the move in the first non-empty slot at or after `round`.
fn pick_move(combatant: &Combatant, round: usize) -> Option<String> {
    let known: Vec<&str> = combatant
        .pokemon
        .moves
        .iter()
        .flatten()
        .map(|m| m.move_name.as_str())
        .collect();
    if known.is_empty() {
        return None;
    }
    Some(known[round % known.len()].to_string())
}

fn print_log(log: &EventLog, attacker: &Combatant, defender: &Combatant) {
    let name_of = |target: Target| match target {
        Target::Attacker | Target::Holder => attacker.display_name().to_string(),
        Target::Defender | Target::Opponent(_) => defender.display_name().to_string(),
    };
    for line in log.describe(name_of) {
        println!("  {}", line);
    }
}

fn run(config: &EngineConfig) -> BattleResult<()> {
    let catalog = Catalog::load(&config.data_dir)?;
    let mut rng = TurnRng::from_optional_seed(config.seed);
    let resolver = MoveResolver::new(&catalog, config);

    let first = PokemonInst::create_wild_with_config("pikachu", 25, &catalog, config, &mut rng)?;
    let second = PokemonInst::create_wild_with_config("geodude", 22, &catalog, config, &mut rng)?;
    let mut sides = [Combatant::new(first, &catalog), Combatant::new(second, &catalog)];
    info!(
        first = %sides[0].display_name(),
        second = %sides[1].display_name(),
        "battle start"
    );

    for index in 0..sides.len() {
        let (holder, opponents) = if index == 0 {
            let (a, b) = sides.split_at_mut(1);
            (&mut a[0], b)
        } else {
            let (a, b) = sides.split_at_mut(1);
            (&mut b[0], a)
        };
        let events = resolver.switch_in(holder, opponents);
        println!(
            "{} (Lv. {}, {}) enters the field",
            holder.display_name(),
            holder.pokemon.level,
            holder.ability_name
        );
        let log = EventLog::from(events);
        print_log(&log, holder, &opponents[0]);
    }

    let mut battle_log = EventLog::new();
    'rounds: for round in 0..ROUNDS {
        for turn in 0..2 {
            let (attacker, defender) = {
                let (a, b) = sides.split_at_mut(1);
                if turn == 0 {
                    (&mut a[0], &mut b[0])
                } else {
                    (&mut b[0], &mut a[0])
                }
            };
            let Some(move_name) = pick_move(attacker, round) else {
                continue;
            };
            println!("{} uses {}!", attacker.display_name(), move_name);
            let log = resolver.process_move(attacker, defender, &move_name, &mut rng);
            print_log(&log, attacker, defender);
            println!(
                "  [{} {}/{} | {} {}/{}]",
                attacker.display_name(),
                attacker.hp(),
                attacker.max_hp(),
                defender.display_name(),
                defender.hp(),
                defender.max_hp()
            );
            let fainted = attacker.is_fainted() || defender.is_fainted();
            battle_log.extend(log.into_events());
            if fainted {
                break 'rounds;
            }
        }
    }

    match battle_log.to_json() {
        Ok(json) => println!("{}", json),
        Err(err) => error!(%err, "could not serialize battle log"),
    }
    Ok(())
}
