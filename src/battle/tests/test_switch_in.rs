#[cfg(test)]
mod tests {
    use crate::battle::combatant::StatStages;
    use crate::battle::state::{ResultEvent, Target};
    use crate::battle::tests::common::{test_resolver, TestCombatantBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{StatKind, StatusCondition, Weather};

    #[test]
    fn test_intimidate_hits_every_opponent() {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("snorlax", 30)
            .with_ability("intimidate")
            .build();
        let mut opponents = vec![
            TestCombatantBuilder::new("machop", 30).build(),
            TestCombatantBuilder::new("pikachu", 30).build(),
        ];

        let events = resolver.switch_in(&mut holder, &mut opponents);

        assert_eq!(
            events,
            vec![
                ResultEvent::AbilityActivated {
                    target: Target::Holder,
                    ability: "intimidate".to_string(),
                },
                ResultEvent::StatStageChanged {
                    target: Target::Opponent(0),
                    stat: StatKind::Attack,
                    change: -1,
                    stage: -1,
                },
                ResultEvent::StatStageChanged {
                    target: Target::Opponent(1),
                    stat: StatKind::Attack,
                    change: -1,
                    stage: -1,
                },
            ]
        );
        assert!(opponents.iter().all(|o| o.stages.get(StatKind::Attack) == -1));
    }

    #[test]
    fn test_trace_copies_first_opponent_ability() {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("porygon", 30)
            .with_ability("trace")
            .build();
        let mut opponents = vec![TestCombatantBuilder::new("pikachu", 30).build()];

        let events = resolver.switch_in(&mut holder, &mut opponents);

        assert_eq!(holder.ability_name, "static");
        assert_eq!(
            events,
            vec![ResultEvent::AbilityCopied {
                target: Target::Holder,
                ability: "static".to_string(),
            }]
        );
    }

    #[rstest]
    #[case("higher special defense", "snorlax", StatKind::SpecialAttack)]
    #[case("higher defense", "geodude", StatKind::Attack)]
    fn test_download_picks_weaker_defense(
        #[case] _desc: &str,
        #[case] opponent_species: &str,
        #[case] raised: StatKind,
    ) {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("porygon", 30)
            .with_ability("download")
            .build();
        let mut opponents = vec![TestCombatantBuilder::new(opponent_species, 30).build()];

        resolver.switch_in(&mut holder, &mut opponents);

        assert_eq!(holder.stages.get(raised), 1);
    }

    #[test]
    fn test_failing_switch_in_leaves_state_untouched() {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("porygon", 30)
            .with_ability("download")
            .build();
        let mut opponent = TestCombatantBuilder::new("snorlax", 30).build();
        opponent.pokemon.curr_stats = [0; 6];
        let mut opponents = vec![opponent];

        let events = resolver.switch_in(&mut holder, &mut opponents);

        assert!(events.is_empty());
        assert_eq!(holder.stages, StatStages::default());
    }

    #[test]
    fn test_forewarn_reveals_strongest_move() {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("abra", 30)
            .with_ability("forewarn")
            .build();
        let mut opponents = vec![TestCombatantBuilder::new("pikachu", 30)
            .with_moves(&["growl", "thunder shock", "thunderbolt", "quick attack"])
            .build()];

        let events = resolver.switch_in(&mut holder, &mut opponents);

        assert_eq!(
            events,
            vec![ResultEvent::MoveRevealed {
                target: Target::Opponent(0),
                move_name: "thunderbolt".to_string(),
                power: 90,
            }]
        );
    }

    #[rstest]
    #[case("swift swim in rain", "swiftswim", Weather::Rain, Some(StatKind::Speed))]
    #[case("swift swim in sun", "swiftswim", Weather::Sun, None)]
    #[case("chlorophyll in sun", "chlorophyll", Weather::Sun, Some(StatKind::Speed))]
    #[case("sand veil", "sandveil", Weather::Clear, Some(StatKind::Evasion))]
    fn test_self_boosts(
        #[case] _desc: &str,
        #[case] ability: &str,
        #[case] weather: Weather,
        #[case] boosted: Option<StatKind>,
    ) {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("squirtle", 30)
            .with_ability(ability)
            .with_weather(weather)
            .build();
        let mut opponents = vec![TestCombatantBuilder::new("pikachu", 30).build()];

        let events = resolver.switch_in(&mut holder, &mut opponents);

        match boosted {
            Some(stat) => {
                assert_eq!(holder.stages.get(stat), 1);
                assert_eq!(events.len(), 1);
            }
            None => assert!(events.is_empty()),
        }
    }

    #[rstest]
    #[case("natural cure", "naturalcure", Weather::Clear, None)]
    #[case("hydration in rain", "hydration", Weather::Rain, None)]
    #[case("hydration without rain", "hydration", Weather::Clear, Some(StatusCondition::Burn))]
    fn test_status_cures(
        #[case] _desc: &str,
        #[case] ability: &str,
        #[case] weather: Weather,
        #[case] expected: Option<StatusCondition>,
    ) {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("vaporeon", 30)
            .with_ability(ability)
            .with_status(StatusCondition::Burn)
            .with_weather(weather)
            .build();

        resolver.switch_in(&mut holder, &mut []);

        assert_eq!(holder.status(), expected);
    }

    #[test]
    fn test_no_switch_in_ability_is_silent() {
        let resolver = test_resolver();
        let mut holder = TestCombatantBuilder::new("machop", 30).build();
        let mut opponents = vec![TestCombatantBuilder::new("pikachu", 30).build()];

        assert!(resolver.switch_in(&mut holder, &mut opponents).is_empty());
    }
}
