use crate::abilities::Ability;
use crate::battle::combatant::Combatant;
use crate::battle::descriptor::MoveDescriptor;
use crate::battle::state::TurnRng;
use crate::battle::stats::{effective_attack, effective_defense};
use crate::catalog::Catalog;
use schema::PokemonType;
use tracing::{debug, warn};

/// Critical hit chance by critical stage (0 is unused).
const CRITICAL_CHANCE: [f64; 6] = [0.0, 0.065, 0.125, 0.25, 0.333, 0.5];
const MAX_CRITICAL_STAGE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub damage: u16,
    pub critical: bool,
    pub effectiveness: f64,
}

fn types_or_warn<'c>(combatant: &Combatant, catalog: &'c Catalog, role: &str) -> &'c [PokemonType] {
    match combatant.species_types(catalog) {
        Some(types) => types,
        None => {
            warn!(
                species = %combatant.pokemon.species,
                role,
                "species missing from catalog, treating as typeless"
            );
            &[]
        }
    }
}

/// Damage for one hit of `descriptor` from `attacker` to `defender`.
///
/// Draws two numbers from `rng`: the critical roll, then the random factor.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    descriptor: &MoveDescriptor,
    catalog: &Catalog,
    rng: &mut TurnRng,
) -> DamageOutcome {
    let data = &descriptor.data;
    let attack = effective_attack(attacker, data.category);
    let defense = effective_defense(defender, data.category);
    let level = attacker.pokemon.level as f64;

    let base = ((2.0 * level + 10.0) / 250.0) * (attack / defense) * data.power as f64 + 2.0;

    let mut modifier = 1.0;

    let attacker_types = types_or_warn(attacker, catalog, "attacker");
    if attacker_types.contains(&data.move_type) {
        modifier *= if attacker.has_ability(Ability::Adaptability) {
            2.0
        } else {
            1.5
        };
    }

    if data.move_type == PokemonType::Fire
        && attacker.flags.flash_fire_active
        && attacker.has_ability(Ability::FlashFire)
    {
        modifier *= 1.5;
    }

    let defender_types = types_or_warn(defender, catalog, "defender");
    let effectiveness = if descriptor.scrappy {
        defender_types
            .iter()
            .take(2)
            .map(|&defending| match catalog.effectiveness(data.move_type, defending) {
                immune if immune == 0.0 && defending == PokemonType::Ghost => 1.0,
                value => value,
            })
            .product::<f64>()
    } else {
        catalog.effectiveness_against(data.move_type, defender_types)
    };
    modifier *= effectiveness;

    if effectiveness > 1.0
        && (defender.has_ability(Ability::Filter) || defender.has_ability(Ability::SolidRock))
    {
        modifier *= 0.75;
    }

    let mut stage = 1;
    if data.high_critical {
        stage += 2;
    }
    let stage = stage.min(MAX_CRITICAL_STAGE);
    let critical_roll = rng.next_f64("critical hit");
    let crit_immune =
        defender.has_ability(Ability::ShellArmor) || defender.has_ability(Ability::BattleArmor);
    let critical = !crit_immune && critical_roll < CRITICAL_CHANCE[stage];
    if critical {
        modifier *= if descriptor.sniper { 3.0 } else { 2.0 };
    }

    let random_factor = 0.85 + rng.next_f64("damage random factor") * 0.15;
    modifier *= random_factor;

    let damage = (base * modifier).ceil().clamp(0.0, u16::MAX as f64) as u16;
    debug!(
        move_name = descriptor.name(),
        damage,
        critical,
        effectiveness,
        "damage calculated"
    );

    DamageOutcome {
        damage,
        critical,
        effectiveness,
    }
}
