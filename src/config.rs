//! Battle tuning: damage multipliers, AI strategy profiles, opponent
//! generation, pacing hints and log templates.
//!
//! Every way of obtaining a [`BattleConfig`] other than `Default` runs
//! [`BattleConfig::validate`], and battles refuse to start on a config that
//! fails it.

use crate::errors::{BattleEngineError, BattleResult};
use crate::pet::MAX_NEED;
use schema::{
    ActionKind, Actor, AiTuning, DamageTuning, MessageTemplates, OpponentTuning, PetTuning,
    StrategyProfile, TimingTuning, DAMAGE_PLACEHOLDER,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

/// Allowed drift when checking that a profile's chances sum to 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

const BUNDLED_CONFIG: &str = include_str!("../data/battle_config.ron");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BattleConfig {
    pub damage: DamageTuning,
    pub ai: AiTuning,
    pub opponent: OpponentTuning,
    pub pet: PetTuning,
    pub timing: TimingTuning,
    pub messages: MessageTemplates,
    /// Battles still standing after this many turns end in a draw.
    pub turn_limit: Option<u32>,
}

impl BattleConfig {
    /// The config shipped in `data/battle_config.ron`.
    pub fn bundled() -> BattleResult<Self> {
        Self::from_ron_str(BUNDLED_CONFIG)
    }

    pub fn from_ron_str(content: &str) -> BattleResult<Self> {
        let config: BattleConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> BattleResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!(path = %path.display(), "loaded battle config");
        Ok(config)
    }

    /// Checks every load-time invariant of the tuning data.
    pub fn validate(&self) -> BattleResult<()> {
        self.validate_damage()?;
        self.validate_ai()?;
        self.validate_opponent()?;
        self.validate_messages()?;

        if self.pet.min_battle_energy > MAX_NEED {
            return Err(violation(format!(
                "min_battle_energy {} is above the {} energy cap",
                self.pet.min_battle_energy, MAX_NEED
            )));
        }
        if self.turn_limit == Some(0) {
            return Err(violation("turn_limit must be at least 1"));
        }
        Ok(())
    }

    fn validate_damage(&self) -> BattleResult<()> {
        let damage = &self.damage;
        let multipliers = [
            ("base_multiplier", damage.base_multiplier),
            ("critical_multiplier", damage.critical_multiplier),
            ("defend_multiplier", damage.defend_multiplier),
            ("special_multiplier", damage.special_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(violation(format!("{} must be a non-negative number, got {}", name, value)));
            }
        }

        check_unit_interval("random_variance", damage.random_variance)?;
        check_unit_interval("critical_chance", damage.critical_chance)
    }

    fn validate_ai(&self) -> BattleResult<()> {
        let missing = self.ai.missing_profiles();
        if !missing.is_empty() {
            return Err(violation(format!("missing strategy profiles: {:?}", missing)));
        }

        for (strategy, profile) in &self.ai.strategies {
            validate_profile(&strategy.to_string(), profile)?;
        }

        check_unit_interval("low_hp_threshold", self.ai.low_hp_threshold)
    }

    fn validate_opponent(&self) -> BattleResult<()> {
        if self.opponent.names.is_empty() {
            return Err(violation("opponent name pool is empty"));
        }
        if self.opponent.names.iter().any(|name| name.trim().is_empty()) {
            return Err(violation("opponent name pool contains a blank name"));
        }
        Ok(())
    }

    fn validate_messages(&self) -> BattleResult<()> {
        for actor in Actor::iter() {
            for action in ActionKind::iter() {
                for is_critical in [false, true] {
                    let template = self.messages.template(actor, action, is_critical);
                    if template.trim().is_empty() {
                        return Err(violation(format!(
                            "empty message template for {} {} (critical: {})",
                            actor, action, is_critical
                        )));
                    }
                    if action.deals_damage() && !template.contains(DAMAGE_PLACEHOLDER) {
                        return Err(violation(format!(
                            "message template for {} {} (critical: {}) lacks {}",
                            actor, action, is_critical, DAMAGE_PLACEHOLDER
                        )));
                    }
                }
            }
        }

        let outcomes = [
            ("victory", &self.messages.victory),
            ("defeat", &self.messages.defeat),
            ("draw", &self.messages.draw),
            ("forfeit", &self.messages.forfeit),
        ];
        for (name, message) in outcomes {
            if message.trim().is_empty() {
                return Err(violation(format!("empty {} message", name)));
            }
        }
        Ok(())
    }
}

fn validate_profile(name: &str, profile: &StrategyProfile) -> BattleResult<()> {
    for chance in profile.chances() {
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(violation(format!(
                "strategy '{}' has a chance outside [0, 1]: {}",
                name, chance
            )));
        }
    }

    let total = profile.total();
    if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(violation(format!(
            "strategy '{}' chances sum to {} instead of 1",
            name, total
        )));
    }
    Ok(())
}

fn check_unit_interval(name: &str, value: f64) -> BattleResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(violation(format!("{} must be within [0, 1], got {}", name, value)));
    }
    Ok(())
}

fn violation(details: impl Into<String>) -> BattleEngineError {
    BattleEngineError::ConfigInvariantViolation(details.into())
}
