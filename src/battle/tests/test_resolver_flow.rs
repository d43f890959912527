#[cfg(test)]
mod tests {
    use crate::battle::state::{ResultEvent, Target};
    use crate::battle::tests::common::{
        count_events, names, predictable_rng, print_events, scripted, test_resolver,
        TestCombatantBuilder,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{StatKind, StatusCondition};

    #[test]
    fn test_forced_miss_is_a_single_event() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        let hp_before = defender.hp();
        // Thunder Wave is 90% accurate; 0.95 misses.
        let mut rng = scripted(&[0.95]);

        let log = resolver.process_move(&mut attacker, &mut defender, "thunder wave", &mut rng);

        assert_eq!(
            log.events(),
            &[ResultEvent::MoveMissed {
                target: Target::Defender,
                move_name: "thunder wave".to_string(),
            }]
        );
        assert_eq!(defender.hp(), hp_before);
        assert_eq!(defender.status(), None);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_evasion_stage_can_force_a_miss() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("machop", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        defender.stages.set(StatKind::Evasion, 6);
        // Hit chance drops to 1/3; a neutral roll misses.
        let log = resolver.process_move(&mut attacker, &mut defender, "tackle", &mut predictable_rng());

        assert_eq!(log.len(), 1);
        assert!(matches!(log.events()[0], ResultEvent::MoveMissed { .. }));
    }

    #[test]
    fn test_no_guard_attacker_ignores_evasion() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("machop", 20)
            .with_ability("noguard")
            .build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        defender.stages.set(StatKind::Evasion, 6);
        // Without No Guard the first roll would miss at 1/3 hit chance.
        let mut rng = scripted(&[0.8, 0.99, 0.5]);

        let log = resolver.process_move(&mut attacker, &mut defender, "tackle", &mut rng);

        print_events("no guard tackle", &log);
        assert_eq!(count_events(&log, |e| matches!(e, ResultEvent::MoveMissed { .. })), 0);
        assert!(matches!(log.events()[0], ResultEvent::MoveAttack { .. }));
        // Critical roll, random factor, status roll; no accuracy draw.
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_no_guard_defender_ignores_accuracy_drop() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 20).build();
        attacker.stages.set(StatKind::Accuracy, -6);
        let mut defender = TestCombatantBuilder::new("machop", 20)
            .with_ability("noguard")
            .build();
        let mut rng = predictable_rng();

        let log = resolver.process_move(&mut attacker, &mut defender, "thunder wave", &mut rng);

        assert_eq!(count_events(&log, |e| matches!(e, ResultEvent::MoveMissed { .. })), 0);
        assert_eq!(defender.status(), Some(StatusCondition::Paralysis));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_always_hits_skips_accuracy_roll() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 10).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        let mut rng = scripted(&[0.99, 0.5, 0.5]);

        let log = resolver.process_move(&mut attacker, &mut defender, "swift", &mut rng);

        print_events("swift", &log);
        assert!(matches!(
            log.events()[0],
            ResultEvent::MoveAttack { critical: false, .. }
        ));
        // Critical roll, random factor, status roll.
        assert_eq!(rng.consumed(), 3);
    }

    #[rstest]
    #[case("unknown move", "not-a-move")]
    #[case("self-targeting buff", "swords dance")]
    #[case("mixed case known move", "TACKLE")]
    fn test_fallback_uses_tackle(#[case] _desc: &str, #[case] move_name: &str) {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("machop", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();

        let log = resolver.process_move(&mut attacker, &mut defender, move_name, &mut predictable_rng());

        let used: Vec<&str> = log
            .events()
            .iter()
            .filter_map(|event| match event {
                ResultEvent::MoveAttack { move_name, .. } => Some(move_name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(used, vec!["tackle"]);
    }

    #[test]
    fn test_status_move_applies_status() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        let hp_before = defender.hp();

        let log = resolver.process_move(&mut attacker, &mut defender, "thunder wave", &mut scripted(&[0.0]));

        assert_eq!(
            log.events(),
            &[
                ResultEvent::MoveAttack {
                    target: Target::Defender,
                    move_name: "thunder wave".to_string(),
                    damage: 0,
                    resulting_hp: hp_before,
                    critical: false,
                    effectiveness: 1.0,
                },
                ResultEvent::StatusApplied {
                    target: Target::Defender,
                    status: StatusCondition::Paralysis,
                },
            ]
        );
        assert_eq!(defender.status(), Some(StatusCondition::Paralysis));
    }

    #[test]
    fn test_debuff_move_only_describes_the_debuff() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();

        let log = resolver.process_move(&mut attacker, &mut defender, "growl", &mut predictable_rng());

        assert_eq!(
            log.events(),
            &[ResultEvent::MoveDebuff {
                target: Target::Defender,
                move_name: "growl".to_string(),
                stats: vec![StatKind::Attack],
            }]
        );
        assert_eq!(defender.stages.get(StatKind::Attack), 0);
    }

    #[test]
    fn test_other_move_is_a_neutral_hit() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();

        let log = resolver.process_move(&mut attacker, &mut defender, "splash", &mut predictable_rng());

        assert_eq!(log.len(), 1);
        assert!(matches!(
            log.events()[0],
            ResultEvent::MoveAttack { damage: 0, .. }
        ));
    }

    #[test]
    fn test_knockout_skips_secondary_rolls() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("machop", 50).build();
        let mut defender = TestCombatantBuilder::new("pikachu", 10).with_hp(1).build();
        let mut rng = predictable_rng();

        let log = resolver.process_move(&mut attacker, &mut defender, "tackle", &mut rng);

        assert!(defender.is_fainted());
        assert!(matches!(
            log.events()[0],
            ResultEvent::MoveAttack { damage: 1, resulting_hp: 0, .. }
        ));
        // Accuracy, critical, random factor. Static on the fainted defender
        // still rolls after the hit.
        assert_eq!(rng.consumed(), 4);
    }

    #[rstest]
    #[case("physical contact", "tackle", "machop", "snorlax")]
    #[case("recoil", "double-edge", "snorlax", "machop")]
    #[case("drain", "giga drain", "bulbasaur", "squirtle")]
    #[case("status chance", "ember", "charmander", "bulbasaur")]
    #[case("super effective", "earthquake", "geodude", "pikachu")]
    #[case("self destruct", "self-destruct", "geodude", "abra")]
    #[case("status move", "thunder wave", "pikachu", "abra")]
    #[case("absorbed", "water gun", "squirtle", "vaporeon")]
    fn test_hp_stays_in_bounds(
        #[case] _desc: &str,
        #[case] move_name: &str,
        #[case] attacker_species: &str,
        #[case] defender_species: &str,
    ) {
        let resolver = test_resolver();
        for level in [5, 50, 100] {
            let mut attacker = TestCombatantBuilder::new(attacker_species, level).build();
            let mut defender = TestCombatantBuilder::new(defender_species, 30).with_hp(7).build();

            let log = resolver.process_move(&mut attacker, &mut defender, move_name, &mut predictable_rng());

            assert!(attacker.hp() <= attacker.max_hp(), "{:?}", log);
            assert!(defender.hp() <= defender.max_hp(), "{:?}", log);
            assert!(
                count_events(&log, |e| matches!(e, ResultEvent::StatusApplied { .. })) <= 1,
                "{:?}",
                log
            );
        }
    }

    #[test]
    fn test_log_serializes_and_describes() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("pikachu", 20).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();

        let log = resolver.process_move(&mut attacker, &mut defender, "thunder wave", &mut scripted(&[0.95]));

        let json = log.to_json().expect("event log serializes");
        assert_eq!(
            json,
            r#"[{"type":"moveMissed","target":"defender","moveName":"thunder wave"}]"#
        );
        assert_eq!(log.describe(names(&attacker, &defender)).len(), 1);
    }
}
