#[cfg(test)]
mod tests {
    use crate::battle::engine::{forfeit, resolve_turn};
    use crate::battle::rng::TurnRng;
    use crate::battle::state::BattleStatus;
    use crate::battle::tests::common::{
        start_test_battle, TestCombatantBuilder, AI_ATTACK, NEUTRAL_HIT,
    };
    use crate::errors::BattleEngineError;
    use pretty_assertions::assert_eq;
    use schema::ActionKind;

    #[test]
    fn test_forfeit_mid_battle_is_a_loss() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().build(),
        );
        let mut rng = TurnRng::new_for_test(
            [&NEUTRAL_HIT[..], &[AI_ATTACK][..], &NEUTRAL_HIT[..]].concat(),
        );
        resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap();

        forfeit(&mut battle, &config).unwrap();

        assert!(!battle.is_active());
        assert_eq!(battle.status(), BattleStatus::OpponentWon);
        assert_eq!(battle.player().current_hp, 85);
        assert_eq!(battle.opponent().current_hp, 85);
        assert_eq!(battle.turn_number(), 1);
        assert_eq!(
            battle.log().last(),
            Some(&"Your pet withdrew from the battle.".to_string())
        );
    }

    #[test]
    fn test_second_forfeit_fails_without_side_effects() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().build(),
        );
        forfeit(&mut battle, &config).unwrap();
        let log_len = battle.log().len();

        let err = forfeit(&mut battle, &config).unwrap_err();

        assert!(matches!(
            err,
            BattleEngineError::InvalidState(BattleStatus::OpponentWon)
        ));
        assert_eq!(battle.status(), BattleStatus::OpponentWon);
        assert_eq!(battle.log().len(), log_len);
    }

    #[test]
    fn test_forfeit_after_victory_is_rejected() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().with_hp(5).build(),
        );
        let mut rng = TurnRng::new_for_test(NEUTRAL_HIT.to_vec());
        resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap();

        let err = forfeit(&mut battle, &config).unwrap_err();

        assert!(matches!(
            err,
            BattleEngineError::InvalidState(BattleStatus::PlayerWon)
        ));
        assert_eq!(battle.status(), BattleStatus::PlayerWon);
    }

    #[test]
    fn test_no_turns_after_forfeit() {
        let (mut battle, config) = start_test_battle(
            TestCombatantBuilder::new().build(),
            TestCombatantBuilder::new().build(),
        );
        forfeit(&mut battle, &config).unwrap();
        let mut rng = TurnRng::new_for_test(vec![]);

        let err = resolve_turn(&mut battle, &config, ActionKind::Attack, &mut rng).unwrap_err();

        assert!(matches!(err, BattleEngineError::InvalidState(_)));
        assert_eq!(battle.turn_number(), 0);
    }
}
