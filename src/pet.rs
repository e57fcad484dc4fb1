//! Pet-side stat derivation: how a pet's level and care condition turn into
//! the numbers it brings into a battle.

use crate::battle::state::CombatantStats;
use crate::errors::{BattleEngineError, BattleResult};
use schema::PetTuning;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of each care need.
pub const MAX_NEED: u32 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    Baby,
    Child,
    Teen,
    Adult,
}

impl LifeStage {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=4 => LifeStage::Baby,
            5..=9 => LifeStage::Child,
            10..=14 => LifeStage::Teen,
            _ => LifeStage::Adult,
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            LifeStage::Baby => "baby",
            LifeStage::Child => "child",
            LifeStage::Teen => "teen",
            LifeStage::Adult => "adult",
        };
        write!(f, "{}", display_name)
    }
}

/// A pet's care needs, each on a 0-100 scale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetCondition {
    pub health: u32,
    pub hunger: u32,
    pub happiness: u32,
    pub energy: u32,
    #[serde(default)]
    pub is_sleeping: bool,
}

impl PetCondition {
    pub const PERFECT: PetCondition = PetCondition {
        health: MAX_NEED,
        hunger: MAX_NEED,
        happiness: MAX_NEED,
        energy: MAX_NEED,
        is_sleeping: false,
    };

    /// Average of the needs as a fraction in `[0, 1]`.
    pub fn multiplier(&self) -> f64 {
        let total: u32 = [self.health, self.hunger, self.happiness, self.energy]
            .iter()
            .map(|need| (*need).min(MAX_NEED))
            .sum();
        total as f64 / (4 * MAX_NEED) as f64
    }

    /// Refuses sleeping pets and pets below the configured energy floor.
    pub fn check_battle_ready(&self, tuning: &PetTuning) -> BattleResult<()> {
        if self.is_sleeping {
            return Err(BattleEngineError::NotReady("pet is sleeping".to_string()));
        }
        if self.energy < tuning.min_battle_energy {
            return Err(BattleEngineError::NotReady(format!(
                "pet is too tired to battle (energy {} < {})",
                self.energy, tuning.min_battle_energy
            )));
        }
        Ok(())
    }

    pub fn can_battle(&self, tuning: &PetTuning) -> bool {
        self.check_battle_ready(tuning).is_ok()
    }
}

impl Default for PetCondition {
    fn default() -> Self {
        Self::PERFECT
    }
}

/// Battle stats for a pet at `level` (treated as at least 1), scaled by how
/// well it has been cared for. HP is not affected by condition. Each stat
/// saturates at `u32::MAX` for absurdly high levels.
pub fn battle_stats_for(level: u32, condition: &PetCondition) -> CombatantStats {
    let level = level.max(1);
    let multiplier = condition.multiplier();

    let max_hp = level.saturating_mul(10).saturating_add(50);
    let base_attack = level.saturating_mul(5).saturating_add(10);
    let base_defense = level.saturating_mul(3).saturating_add(5);

    CombatantStats {
        max_hp,
        current_hp: max_hp,
        attack: ((base_attack as f64 * multiplier).floor() as u32).max(1),
        defense: (base_defense as f64 * multiplier).floor() as u32,
        is_defending: false,
    }
}
