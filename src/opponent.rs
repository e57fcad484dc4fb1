use crate::battle::rng::RandomSource;
use crate::battle::state::CombatantStats;
use crate::errors::{BattleEngineError, BattleResult};
use crate::pet::{battle_stats_for, LifeStage, PetCondition};
use schema::OpponentTuning;
use serde::{Deserialize, Serialize};

/// A generated wild opponent, ready to be passed to `start_battle`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Opponent {
    pub name: String,
    pub level: u32,
    pub stage: LifeStage,
    pub stats: CombatantStats,
}

/// Rolls an opponent near the player's level.
///
/// The name is drawn uniformly from the pool and the level lands within
/// `±level_variance` of the player's, never below 1. Opponents always fight at
/// full condition; the stage label follows the player's level.
pub fn generate_opponent(
    player_level: u32,
    tuning: &OpponentTuning,
    rng: &mut dyn RandomSource,
) -> BattleResult<Opponent> {
    if tuning.names.is_empty() {
        return Err(BattleEngineError::ConfigInvariantViolation(
            "opponent name pool is empty".to_string(),
        ));
    }

    let name_index = scaled_index(rng.next_unit("opponent name"), tuning.names.len());
    let name = tuning.names[name_index].clone();

    let variance = i64::from(tuning.level_variance);
    let spread = (2 * variance + 1) as usize;
    let offset = scaled_index(rng.next_unit("opponent level"), spread) as i64 - variance;
    let level = u32::try_from((i64::from(player_level) + offset).max(1)).unwrap_or(u32::MAX);

    let opponent = Opponent {
        name,
        level,
        stage: LifeStage::for_level(player_level),
        stats: battle_stats_for(level, &PetCondition::PERFECT),
    };

    tracing::debug!(name = %opponent.name, level, player_level, "opponent generated");
    Ok(opponent)
}

/// Maps a `[0, 1)` sample onto `0..len`.
fn scaled_index(roll: f64, len: usize) -> usize {
    ((roll * len as f64).floor() as usize).min(len - 1)
}
