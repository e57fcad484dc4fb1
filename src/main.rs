use pet_battle::{
    battle_stats_for, forfeit, generate_opponent, resolve_turn, start_battle_with_strategy,
    ActionKind, Battle, BattleConfig, BattleResult, BattleStatus, PetCondition, RandomSource,
    Strategy, TurnRng,
};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// The demo gives up on battles that drag on past this many turns.
const DEMO_TURN_CAP: u32 = 200;

#[derive(Serialize)]
struct BattleSummary<'a> {
    seed: u64,
    opponent_name: &'a str,
    opponent_level: u32,
    opponent_strategy: Strategy,
    status: BattleStatus,
    turns: u32,
    player_hp: u32,
    opponent_hp: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    // Usage: pet-battle [seed] [player-level] [strategy] [config.ron]
    let args: Vec<String> = std::env::args().collect();
    let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);
    let level = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5);
    let strategy = match args.get(3).map(|s| s.parse::<Strategy>()).transpose() {
        Ok(strategy) => strategy,
        Err(e) => {
            tracing::error!(error = %e, "unknown opponent strategy");
            return ExitCode::FAILURE;
        }
    };
    let config_path = args.get(4).map(Path::new);

    match run_demo(seed, level, strategy, config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demo battle failed");
            ExitCode::FAILURE
        }
    }
}

fn run_demo(
    seed: u64,
    level: u32,
    strategy: Option<Strategy>,
    config_path: Option<&Path>,
) -> BattleResult<()> {
    let config = match config_path {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::bundled()?,
    };
    let strategy = strategy.unwrap_or(config.ai.default_strategy);
    let mut rng = TurnRng::new_seeded(seed);

    let condition = PetCondition::PERFECT;
    condition.check_battle_ready(&config.pet)?;
    let player = battle_stats_for(level, &condition);
    let opponent = generate_opponent(level, &config.opponent, &mut rng)?;
    println!(
        "A level {} {} ({}) appears! HP {} / ATK {} / DEF {}",
        opponent.level,
        opponent.name,
        opponent.stage,
        opponent.stats.max_hp,
        opponent.stats.attack,
        opponent.stats.defense
    );

    let mut battle = start_battle_with_strategy(&config, &player, &opponent.stats, strategy)?;
    while battle.is_active() {
        if battle.turn_number() >= DEMO_TURN_CAP {
            forfeit(&mut battle, &config)?;
            break;
        }

        let action = choose_player_action(&battle, &mut rng);
        let resolution = resolve_turn(&mut battle, &config, action, &mut rng)?;
        println!(
            "Turn {:>3}: {} | pet {:>5.1}% | opponent {:>5.1}%",
            battle.turn_number(),
            resolution.player.action,
            battle.player_hp_percent(),
            battle.opponent_hp_percent()
        );
    }

    println!();
    println!("Battle log:");
    for entry in battle.log() {
        println!("  {}", entry);
    }

    let summary = BattleSummary {
        seed,
        opponent_name: &opponent.name,
        opponent_level: opponent.level,
        opponent_strategy: battle.opponent_strategy(),
        status: battle.status(),
        turns: battle.turn_number(),
        player_hp: battle.player().current_hp,
        opponent_hp: battle.opponent().current_hp,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::warn!(error = %e, "could not serialize battle summary"),
    }
    Ok(())
}

/// Stand-in for a human: mostly attacks, braces when hurt, sometimes goes big.
fn choose_player_action(battle: &Battle, rng: &mut dyn RandomSource) -> ActionKind {
    let roll = rng.next_unit("demo player action");
    if battle.player_hp_percent() < 30.0 && roll < 0.4 {
        ActionKind::Defend
    } else if roll < 0.25 {
        ActionKind::Special
    } else {
        ActionKind::Attack
    }
}
