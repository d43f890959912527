use super::hooks::AbilityHooks;
use super::implementations::{absorb, after_move, guards, immunity, modifiers, switch_in};
use super::Ability;
use strum::EnumCount;

/// Hook table indexed by `Ability as usize`. Abilities that only matter to
/// the damage calculator (Adaptability, Filter, Solid Rock, Shell Armor,
/// Battle Armor) have no entry.
pub static ABILITY_REGISTRY: [Option<AbilityHooks>; Ability::COUNT] = {
    let mut registry = [None; Ability::COUNT];

    macro_rules! defender {
        ($ability:ident, $hook:path) => {
            registry[Ability::$ability as usize] = Some(AbilityHooks {
                on_before_move_defender: Some($hook),
                ..AbilityHooks::NONE
            });
        };
    }
    macro_rules! attacker {
        ($ability:ident, $hook:path) => {
            registry[Ability::$ability as usize] = Some(AbilityHooks {
                on_before_move_attacker: Some($hook),
                ..AbilityHooks::NONE
            });
        };
    }
    macro_rules! after_defender {
        ($ability:ident, $hook:path) => {
            registry[Ability::$ability as usize] = Some(AbilityHooks {
                on_after_move_defender: Some($hook),
                ..AbilityHooks::NONE
            });
        };
    }
    macro_rules! switch_in {
        ($ability:ident, $hook:path) => {
            registry[Ability::$ability as usize] = Some(AbilityHooks {
                on_switch_in: Some($hook),
                ..AbilityHooks::NONE
            });
        };
    }

    // Immunities
    defender!(Insomnia, immunity::insomnia);
    defender!(VitalSpirit, immunity::vital_spirit);
    defender!(Limber, immunity::limber);
    defender!(Immunity, immunity::immunity);
    defender!(WaterVeil, immunity::water_veil);
    defender!(LeafGuard, immunity::leaf_guard);
    defender!(OwnTempo, immunity::own_tempo);
    defender!(ClearBody, immunity::clear_body);
    defender!(HyperCutter, immunity::hyper_cutter);
    defender!(KeenEye, immunity::keen_eye);
    defender!(Soundproof, immunity::soundproof);
    defender!(Levitate, immunity::levitate);
    defender!(Damp, immunity::damp);
    defender!(StickyHold, immunity::sticky_hold);
    defender!(MagnetPull, immunity::magnet_pull);
    defender!(ArenaTrap, immunity::arena_trap);
    defender!(SuctionCups, immunity::suction_cups);

    // Absorb and reflect
    defender!(WaterAbsorb, absorb::water_absorb);
    defender!(VoltAbsorb, absorb::volt_absorb);
    defender!(DrySkin, absorb::dry_skin);
    defender!(FlashFire, absorb::flash_fire);
    defender!(LightningRod, absorb::lightning_rod);
    defender!(MagicBounce, absorb::magic_bounce);

    // Descriptor rewrites, attacker side
    attacker!(Overgrow, modifiers::overgrow);
    attacker!(Blaze, modifiers::blaze);
    attacker!(Torrent, modifiers::torrent);
    attacker!(Swarm, modifiers::swarm);
    attacker!(IronFist, modifiers::iron_fist);
    attacker!(Guts, modifiers::guts);
    attacker!(Technician, modifiers::technician);
    attacker!(Reckless, modifiers::reckless);
    attacker!(Rivalry, modifiers::rivalry);
    attacker!(CompoundEyes, modifiers::compound_eyes);
    attacker!(Illuminate, modifiers::illuminate);
    attacker!(SereneGrace, modifiers::serene_grace);
    attacker!(Stench, modifiers::stench);
    attacker!(TintedLens, modifiers::tinted_lens);
    attacker!(MoldBreaker, modifiers::mold_breaker);
    attacker!(Sniper, modifiers::sniper);
    attacker!(Scrappy, modifiers::scrappy);

    // Descriptor rewrites, defender side
    defender!(ThickFat, modifiers::thick_fat);
    defender!(ShieldDust, modifiers::shield_dust);
    defender!(InnerFocus, modifiers::inner_focus);
    defender!(WonderGuard, modifiers::wonder_guard);

    registry[Ability::NoGuard as usize] = Some(AbilityHooks {
        on_before_move_attacker: Some(modifiers::no_guard),
        on_before_move_defender: Some(modifiers::no_guard),
        ..AbilityHooks::NONE
    });

    // Post-hit reactions
    after_defender!(Static, after_move::static_body);
    after_defender!(FlameBody, after_move::flame_body);
    after_defender!(PoisonPoint, after_move::poison_point);
    after_defender!(PoisonTouch, after_move::poison_touch);
    after_defender!(EffectSpore, after_move::effect_spore);
    after_defender!(CuteCharm, after_move::cute_charm);
    after_defender!(ShedSkin, after_move::shed_skin);
    after_defender!(PoisonHeal, after_move::poison_heal);
    after_defender!(RoughSkin, after_move::rough_skin);
    after_defender!(Aftermath, after_move::aftermath);
    after_defender!(Synchronize, after_move::synchronize);
    after_defender!(Pressure, after_move::pressure);
    after_defender!(Sturdy, after_move::sturdy);
    after_defender!(LiquidOoze, after_move::liquid_ooze);
    after_defender!(TangledFeet, after_move::tangled_feet);
    after_defender!(EarlyBird, after_move::early_bird);
    after_defender!(Pickup, after_move::pickup);
    after_defender!(RunAway, after_move::run_away);

    registry[Ability::RockHead as usize] = Some(AbilityHooks {
        on_after_move_attacker: Some(guards::rock_head),
        ..AbilityHooks::NONE
    });
    registry[Ability::MagicGuard as usize] = Some(AbilityHooks {
        on_after_move_attacker: Some(guards::magic_guard_attacker),
        on_after_move_defender: Some(guards::magic_guard_defender),
        ..AbilityHooks::NONE
    });
    registry[Ability::Oblivious as usize] = Some(AbilityHooks {
        on_after_move_attacker: Some(guards::oblivious_attacker),
        on_after_move_defender: Some(guards::oblivious_defender),
        ..AbilityHooks::NONE
    });

    // Switch-in
    switch_in!(Intimidate, switch_in::intimidate);
    switch_in!(SandVeil, switch_in::sand_veil);
    switch_in!(SwiftSwim, switch_in::swift_swim);
    switch_in!(Chlorophyll, switch_in::chlorophyll);
    switch_in!(Hydration, switch_in::hydration);
    switch_in!(NaturalCure, switch_in::natural_cure);
    switch_in!(Forewarn, switch_in::forewarn);
    switch_in!(Trace, switch_in::trace);
    switch_in!(Download, switch_in::download);

    registry
};
