#[cfg(test)]
mod tests {
    use crate::battle::state::{ResultEvent, Target};
    use crate::battle::tests::common::{
        count_events, print_events, scripted, test_resolver, TestCombatantBuilder,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{StatKind, StatusCondition};

    /// Accuracy hit, no critical, mid random factor.
    const HIT: [f64; 3] = [0.0, 0.99, 0.5];

    fn rolls_after_hit(extra: &[f64]) -> Vec<f64> {
        let mut rolls = HIT.to_vec();
        rolls.extend_from_slice(extra);
        rolls
    }

    #[rstest]
    #[case("roll under chance burns", 0.05, Some(StatusCondition::Burn))]
    #[case("roll over chance does nothing", 0.5, None)]
    fn test_secondary_status_roll(
        #[case] _desc: &str,
        #[case] status_roll: f64,
        #[case] expected: Option<StatusCondition>,
    ) {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("charmander", 5).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        let mut rng = scripted(&rolls_after_hit(&[status_roll]));

        let log = resolver.process_move(&mut attacker, &mut defender, "ember", &mut rng);

        print_events("ember", &log);
        assert_eq!(defender.status(), expected);
        assert_eq!(
            count_events(&log, |e| matches!(e, ResultEvent::StatusApplied { .. })),
            usize::from(expected.is_some())
        );
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_secondary_roll_replaces_existing_status() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("charmander", 5).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40)
            .with_status(StatusCondition::Sleep)
            .build();

        let log = resolver.process_move(
            &mut attacker,
            &mut defender,
            "ember",
            &mut scripted(&rolls_after_hit(&[0.0])),
        );

        assert_eq!(defender.status(), Some(StatusCondition::Burn));
        assert!(log.events().contains(&ResultEvent::StatusApplied {
            target: Target::Defender,
            status: StatusCondition::Burn,
        }));
    }

    /// Stench adds 0.1 flinch chance on each before-move pass. A landed
    /// status roll triggers the second pass, so the flinch roll then checks
    /// against 0.2 instead of 0.1.
    #[rstest]
    #[case("status lands, second pass stacks stench", None, 0.05, true)]
    #[case("status misses, single pass", None, 0.5, false)]
    #[case("statused defender still gets second pass", Some(StatusCondition::Sleep), 0.05, true)]
    fn test_status_roll_reapplies_before_move_hooks(
        #[case] _desc: &str,
        #[case] existing: Option<StatusCondition>,
        #[case] status_roll: f64,
        #[case] flinches: bool,
    ) {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("machop", 5)
            .with_ability("stench")
            .build();
        let mut builder = TestCombatantBuilder::new("snorlax", 40);
        if let Some(status) = existing {
            builder = builder.with_status(status);
        }
        let mut defender = builder.build();
        let mut rng = scripted(&rolls_after_hit(&[status_roll, 0.15]));

        let log = resolver.process_move(&mut attacker, &mut defender, "fire punch", &mut rng);

        print_events("stench fire punch", &log);
        assert_eq!(defender.flags.flinched, flinches);
        assert_eq!(
            count_events(&log, |e| matches!(e, ResultEvent::Flinched { .. })),
            usize::from(flinches)
        );
        assert_eq!(rng.consumed(), 5);
    }

    #[test]
    fn test_debuff_lowers_stage() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("geodude", 5).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();
        let mut rng = scripted(&rolls_after_hit(&[0.5, 0.5]));

        let log = resolver.process_move(&mut attacker, &mut defender, "mud-slap", &mut rng);

        assert!(log.events().contains(&ResultEvent::StatStageChanged {
            target: Target::Defender,
            stat: StatKind::Accuracy,
            change: -1,
            stage: -1,
        }));
        assert_eq!(defender.stages.get(StatKind::Accuracy), -1);
        assert_eq!(rng.consumed(), 5);
    }

    #[test]
    fn test_flinch_roll() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("snorlax", 10).build();
        let mut defender = TestCombatantBuilder::new("machop", 40).build();

        let log = resolver.process_move(
            &mut attacker,
            &mut defender,
            "headbutt",
            &mut scripted(&rolls_after_hit(&[0.5, 0.1])),
        );

        assert!(log.events().contains(&ResultEvent::Flinched {
            target: Target::Defender
        }));
        assert!(defender.flags.flinched);
    }

    #[test]
    fn test_inner_focus_skips_flinch_roll() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("snorlax", 10).build();
        let mut defender = TestCombatantBuilder::new("abra", 40)
            .with_ability("innerfocus")
            .build();
        let mut rng = scripted(&rolls_after_hit(&[0.5, 0.0]));

        let log = resolver.process_move(&mut attacker, &mut defender, "headbutt", &mut rng);

        assert_eq!(count_events(&log, |e| matches!(e, ResultEvent::Flinched { .. })), 0);
        assert!(!defender.flags.flinched);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_confusion_roll() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("abra", 10).build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();

        let log = resolver.process_move(
            &mut attacker,
            &mut defender,
            "confusion",
            &mut scripted(&rolls_after_hit(&[0.5, 0.05])),
        );

        assert!(log.events().contains(&ResultEvent::Confused {
            target: Target::Defender
        }));
        assert!(defender.flags.confused);
    }

    #[test]
    fn test_recoil_is_a_share_of_damage_dealt() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("snorlax", 50).build();
        let mut defender = TestCombatantBuilder::new("machop", 50).build();
        let attacker_max = attacker.max_hp();

        let log = resolver.process_move(
            &mut attacker,
            &mut defender,
            "double-edge",
            &mut scripted(&rolls_after_hit(&[0.5])),
        );

        let dealt = log
            .events()
            .iter()
            .find_map(|e| match e {
                ResultEvent::MoveAttack { damage, .. } => Some(*damage),
                _ => None,
            })
            .expect("double-edge hits");
        let expected = ((dealt as f64 * 0.33).floor() as u16).max(1);
        assert!(log.events().contains(&ResultEvent::Recoil {
            target: Target::Attacker,
            damage: expected,
        }));
        assert_eq!(attacker.hp(), attacker_max - expected);
    }

    #[test]
    fn test_drain_heals_attacker() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("bulbasaur", 30).with_hp(10).build();
        let mut defender = TestCombatantBuilder::new("squirtle", 30).build();

        let log = resolver.process_move(
            &mut attacker,
            &mut defender,
            "giga drain",
            &mut scripted(&rolls_after_hit(&[0.5])),
        );

        let drained = log
            .events()
            .iter()
            .find_map(|e| match e {
                ResultEvent::Drained { amount, .. } => Some(*amount),
                _ => None,
            })
            .expect("giga drain heals");
        assert!(drained >= 1);
        assert_eq!(attacker.hp(), 10 + drained);
    }

    #[rstest]
    #[case("without serene grace", None, None)]
    #[case("with serene grace", Some("serenegrace"), Some(StatusCondition::Burn))]
    fn test_serene_grace_doubles_status_chance(
        #[case] _desc: &str,
        #[case] ability: Option<&str>,
        #[case] expected: Option<StatusCondition>,
    ) {
        let resolver = test_resolver();
        let mut builder = TestCombatantBuilder::new("charmander", 5);
        if let Some(ability) = ability {
            builder = builder.with_ability(ability);
        }
        let mut attacker = builder.build();
        let mut defender = TestCombatantBuilder::new("snorlax", 40).build();

        resolver.process_move(
            &mut attacker,
            &mut defender,
            "ember",
            &mut scripted(&rolls_after_hit(&[0.15])),
        );

        assert_eq!(defender.status(), expected);
    }

    #[test]
    fn test_shield_dust_blocks_secondary_status() {
        let resolver = test_resolver();
        let mut attacker = TestCombatantBuilder::new("charmander", 5).build();
        let mut defender = TestCombatantBuilder::new("butterfree", 40)
            .with_ability("shielddust")
            .build();

        let log = resolver.process_move(
            &mut attacker,
            &mut defender,
            "ember",
            &mut scripted(&rolls_after_hit(&[0.0])),
        );

        assert!(matches!(log.events()[0], ResultEvent::MoveAttack { .. }));
        assert_eq!(defender.status(), None);
    }
}
