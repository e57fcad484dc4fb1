use crate::battle::ai::{Behavior, StrategyAI};
use crate::battle::calculators::compute_damage;
use crate::battle::rng::RandomSource;
use crate::battle::state::{Battle, BattleStatus, CombatantStats, TurnOutcome, TurnResolution};
use crate::config::BattleConfig;
use crate::errors::{BattleEngineError, BattleResult};
use schema::{ActionKind, Actor, Strategy};

/// Starts a battle with the opponent on the configured default strategy.
pub fn start_battle(
    config: &BattleConfig,
    player: &CombatantStats,
    opponent: &CombatantStats,
) -> BattleResult<Battle> {
    start_battle_with_strategy(config, player, opponent, config.ai.default_strategy)
}

/// Starts a battle with the opponent following `strategy` while healthy.
///
/// Fails if the config breaks its invariants or either side's stats are out of
/// range. Both combatants must still be standing.
pub fn start_battle_with_strategy(
    config: &BattleConfig,
    player: &CombatantStats,
    opponent: &CombatantStats,
    strategy: Strategy,
) -> BattleResult<Battle> {
    config.validate()?;
    for (actor, stats) in [(Actor::Player, player), (Actor::Opponent, opponent)] {
        stats.validate()?;
        if stats.is_fainted() {
            return Err(BattleEngineError::InvalidStats(format!(
                "{} cannot enter a battle with 0 HP",
                actor
            )));
        }
    }

    let battle = Battle::new(player, opponent, strategy);
    tracing::info!(
        player_hp = player.max_hp,
        opponent_hp = opponent.max_hp,
        %strategy,
        "battle started"
    );
    Ok(battle)
}

/// Parses player input into an action, rejecting anything unknown.
pub fn parse_action(input: &str) -> BattleResult<ActionKind> {
    input
        .trim()
        .parse::<ActionKind>()
        .map_err(|_| BattleEngineError::InvalidAction(input.to_string()))
}

/// Resolves one full turn: the player acts, then the opponent unless the
/// player's action ended the battle.
pub fn resolve_turn(
    battle: &mut Battle,
    config: &BattleConfig,
    player_action: ActionKind,
    rng: &mut dyn RandomSource,
) -> BattleResult<TurnResolution> {
    ensure_active(battle)?;

    let player_outcome = execute_action(battle, config, Actor::Player, player_action, rng);

    // A knocked-out opponent does not get to retaliate
    let opponent_outcome = if battle.opponent.is_fainted() {
        None
    } else {
        let ai = StrategyAI::new(&config.ai, battle.opponent_strategy);
        let opponent_action = ai.decide_action(&battle.opponent, rng);
        Some(execute_action(battle, config, Actor::Opponent, opponent_action, rng))
    };

    battle.turn_number += 1;

    let mut status = check_win_conditions(battle);
    if status == BattleStatus::Ongoing && turn_limit_reached(battle, config) {
        status = BattleStatus::Draw;
    }
    if status.is_terminal() {
        end_battle(battle, config, status);
    }

    Ok(TurnResolution {
        player: player_outcome,
        opponent: opponent_outcome,
        status,
    })
}

/// Text-input variant of [`resolve_turn`]. Invalid input leaves the battle untouched.
pub fn resolve_turn_input(
    battle: &mut Battle,
    config: &BattleConfig,
    input: &str,
    rng: &mut dyn RandomSource,
) -> BattleResult<TurnResolution> {
    let action = parse_action(input)?;
    resolve_turn(battle, config, action, rng)
}

/// Ends an ongoing battle as a loss for the player. HP is left as it is.
pub fn forfeit(battle: &mut Battle, config: &BattleConfig) -> BattleResult<()> {
    ensure_active(battle)?;

    battle.finish(BattleStatus::OpponentWon);
    battle.log.push(config.messages.forfeit.clone());
    tracing::info!(turn = battle.turn_number, "player forfeited the battle");
    Ok(())
}

fn ensure_active(battle: &Battle) -> BattleResult<()> {
    if battle.is_active && !battle.status.is_terminal() {
        Ok(())
    } else {
        Err(BattleEngineError::InvalidState(battle.status))
    }
}

/// Resolves a single combatant's action against the other side and logs it.
fn execute_action(
    battle: &mut Battle,
    config: &BattleConfig,
    actor: Actor,
    action: ActionKind,
    rng: &mut dyn RandomSource,
) -> TurnOutcome {
    let (acting, target) = battle.sides_mut(actor);

    // A stance lasts until the combatant's next action
    acting.is_defending = action == ActionKind::Defend;

    let roll = compute_damage(acting, target, action, &config.damage, rng);
    target.take_damage(roll.amount);

    let outcome = TurnOutcome {
        actor,
        action,
        damage_dealt: roll.amount,
        is_critical: roll.is_critical,
        target_hp_after: target.current_hp,
    };

    tracing::debug!(
        %actor,
        %action,
        damage = roll.amount,
        critical = roll.is_critical,
        target_hp = outcome.target_hp_after,
        "action resolved"
    );

    battle
        .log
        .push(config.messages.render(actor, action, roll.is_critical, roll.amount));
    outcome
}

/// Decides the battle status from the current HP totals.
pub(crate) fn check_win_conditions(battle: &Battle) -> BattleStatus {
    match (battle.player.is_fainted(), battle.opponent.is_fainted()) {
        (true, true) => BattleStatus::Draw,
        (false, true) => BattleStatus::PlayerWon,
        (true, false) => BattleStatus::OpponentWon,
        (false, false) => BattleStatus::Ongoing,
    }
}

fn turn_limit_reached(battle: &Battle, config: &BattleConfig) -> bool {
    config
        .turn_limit
        .is_some_and(|limit| battle.turn_number >= limit)
}

fn end_battle(battle: &mut Battle, config: &BattleConfig, status: BattleStatus) {
    battle.finish(status);

    let message = match status {
        BattleStatus::PlayerWon => &config.messages.victory,
        BattleStatus::OpponentWon => &config.messages.defeat,
        BattleStatus::Draw => &config.messages.draw,
        BattleStatus::Ongoing => return,
    };
    battle.log.push(message.clone());

    tracing::info!(
        ?status,
        turns = battle.turn_number,
        player_hp = battle.player.current_hp,
        opponent_hp = battle.opponent.current_hp,
        "battle ended"
    );
}
