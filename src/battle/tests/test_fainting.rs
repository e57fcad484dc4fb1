#[cfg(test)]
mod tests {
    use crate::battle::engine::{check_win_conditions, resolve_turn, start_battle};
    use crate::battle::rng::TurnRng;
    use crate::battle::state::BattleStatus;
    use crate::battle::tests::common::{
        start_test_battle, TestCombatantBuilder, AI_ATTACK, AI_DEFEND, NEUTRAL_HIT,
    };
    use crate::config::BattleConfig;
    use crate::errors::BattleEngineError;
    use pretty_assertions::assert_eq;
    use schema::ActionKind;

    #[test]
    fn test_lethal_player_hit_skips_opponent_action() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().with_hp(15).build(),
        );
        // Only the player's rolls: an opponent action would exhaust the script
        let mut rng = TurnRng::new_for_test(NEUTRAL_HIT.to_vec());

        let resolution = resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap();

        assert_eq!(resolution.status, BattleStatus::PlayerWon);
        assert_eq!(resolution.opponent, None);
        assert_eq!(resolution.player.target_hp_after, 0);
        assert_eq!(battle.status(), BattleStatus::PlayerWon);
        assert!(!battle.is_active());
        assert_eq!(battle.turn_number(), 1);
        assert_eq!(
            battle.log(),
            &[
                "Your pet attacks for 15 damage!".to_string(),
                "Victory! Your pet won the battle!".to_string(),
            ]
        );
    }

    #[test]
    fn test_overkill_floors_hp_at_zero() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().with_hp(3).build(),
        );
        let mut rng = TurnRng::new_for_test(NEUTRAL_HIT.to_vec());

        resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap();

        assert_eq!(battle.opponent().current_hp, 0);
        assert_eq!(battle.opponent_hp_percent(), 0.0);
    }

    #[test]
    fn test_lethal_opponent_hit_ends_in_defeat() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().with_hp(10).build(),
            TestCombatantBuilder::new().build(),
        );
        let mut rng = TurnRng::new_for_test(
            [&NEUTRAL_HIT[..], &[AI_ATTACK][..], &NEUTRAL_HIT[..]].concat(),
        );

        let resolution = resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap();

        assert_eq!(resolution.status, BattleStatus::OpponentWon);
        assert_eq!(battle.player().current_hp, 0);
        assert_eq!(battle.opponent().current_hp, 85);
        assert_eq!(
            battle.log().last(),
            Some(&"Defeat! Your pet lost the battle.".to_string())
        );
    }

    #[test]
    fn test_finished_battle_rejects_further_turns() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().with_hp(10).build(),
        );
        let mut rng = TurnRng::new_for_test(NEUTRAL_HIT.to_vec());
        resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap();

        let log_before = battle.log().to_vec();
        let player_before = battle.player().clone();
        let opponent_before = battle.opponent().clone();

        let err = resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap_err();

        assert!(matches!(
            err,
            BattleEngineError::InvalidState(BattleStatus::PlayerWon)
        ));
        assert_eq!(battle.log(), log_before.as_slice());
        assert_eq!(battle.player(), &player_before);
        assert_eq!(battle.opponent(), &opponent_before);
        assert_eq!(battle.turn_number(), 1);
    }

    #[test]
    fn test_both_fainted_is_a_draw() {
        let (mut battle, _config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().build(),
        );
        battle.player.current_hp = 0;
        battle.opponent.current_hp = 0;

        assert_eq!(check_win_conditions(&battle), BattleStatus::Draw);
    }

    #[test]
    fn test_turn_limit_ends_in_draw() {
        let config = BattleConfig {
            turn_limit: Some(2),
            ..BattleConfig::default()
        };
        let player = TestCombatantBuilder::new().build();
        let opponent = TestCombatantBuilder::new().build();
        let mut battle = start_battle(&config, &player, &opponent).unwrap();
        let mut rng = TurnRng::new_for_test(vec![AI_DEFEND, AI_DEFEND]);

        let first = resolve_turn(&mut battle, &config, ActionKind::Defend, &mut rng).unwrap();
        assert_eq!(first.status, BattleStatus::Ongoing);

        let second = resolve_turn(&mut battle, &config, ActionKind::Defend, &mut rng).unwrap();
        assert_eq!(second.status, BattleStatus::Draw);
        assert!(!battle.is_active());
        assert_eq!(battle.player().current_hp, 100);
        assert_eq!(battle.opponent().current_hp, 100);
        assert_eq!(
            battle.log().last(),
            Some(&"The battle ended in a draw!".to_string())
        );
    }

    #[test]
    fn test_cannot_start_with_fainted_combatant() {
        let config = BattleConfig::default();
        let player = TestCombatantBuilder::new().with_hp(0).build();
        let opponent = TestCombatantBuilder::new().build();

        let err = start_battle(&config, &player, &opponent).unwrap_err();
        assert!(matches!(err, BattleEngineError::InvalidStats(_)));
    }
}
