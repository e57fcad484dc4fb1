use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Named opponent behaviours. Every variant must have a profile in [`AiTuning`].
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    Aggressive,
    Balanced,
    Defensive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Strategy::Aggressive => "aggressive",
            Strategy::Balanced => "balanced",
            Strategy::Defensive => "defensive",
        };
        write!(f, "{}", display_name)
    }
}

/// Action weights for one strategy. The three chances must sum to 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StrategyProfile {
    pub attack_chance: f64,
    pub defend_chance: f64,
    pub special_chance: f64,
}

impl StrategyProfile {
    pub const fn new(attack_chance: f64, defend_chance: f64, special_chance: f64) -> Self {
        Self {
            attack_chance,
            defend_chance,
            special_chance,
        }
    }

    pub fn total(&self) -> f64 {
        self.attack_chance + self.defend_chance + self.special_chance
    }

    pub fn chances(&self) -> [f64; 3] {
        [self.attack_chance, self.defend_chance, self.special_chance]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DamageTuning {
    pub base_multiplier: f64,
    /// Half-width of the uniform variance band, e.g. 0.2 for ±20%.
    pub random_variance: f64,
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    /// Applied after defense subtraction when the defender is in a defensive stance.
    pub defend_multiplier: f64,
    pub special_multiplier: f64,
}

impl Default for DamageTuning {
    fn default() -> Self {
        Self {
            base_multiplier: 1.0,
            random_variance: 0.2,
            critical_chance: 0.1,
            critical_multiplier: 1.5,
            defend_multiplier: 0.5,
            special_multiplier: 1.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AiTuning {
    pub strategies: BTreeMap<Strategy, StrategyProfile>,
    pub default_strategy: Strategy,
    /// HP fraction below which the AI falls back to `low_hp_strategy`.
    pub low_hp_threshold: f64,
    pub low_hp_strategy: Strategy,
}

impl AiTuning {
    pub fn profile(&self, strategy: Strategy) -> Option<&StrategyProfile> {
        self.strategies.get(&strategy)
    }

    /// Strategies with no profile configured.
    pub fn missing_profiles(&self) -> Vec<Strategy> {
        Strategy::iter()
            .filter(|strategy| !self.strategies.contains_key(strategy))
            .collect()
    }
}

impl Default for AiTuning {
    fn default() -> Self {
        let strategies = BTreeMap::from([
            (Strategy::Aggressive, StrategyProfile::new(0.7, 0.1, 0.2)),
            (Strategy::Balanced, StrategyProfile::new(0.5, 0.3, 0.2)),
            (Strategy::Defensive, StrategyProfile::new(0.3, 0.5, 0.2)),
        ]);

        Self {
            strategies,
            default_strategy: Strategy::Balanced,
            low_hp_threshold: 0.3,
            low_hp_strategy: Strategy::Defensive,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OpponentTuning {
    /// Opponents land within ±`level_variance` of the player's level.
    pub level_variance: u32,
    pub names: Vec<String>,
}

impl Default for OpponentTuning {
    fn default() -> Self {
        let names = [
            "Wild Digimon",
            "Rival Pet",
            "Shadow Beast",
            "Digital Monster",
            "Pixel Creature",
            "Cyber Pet",
            "Tech Beast",
            "Byte Buddy",
            "Data Dragon",
            "Code Companion",
        ];

        Self {
            level_variance: 1,
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// When a pet is fit to enter a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PetTuning {
    /// Pets with less energy than this are too tired to fight.
    pub min_battle_energy: u32,
}

impl Default for PetTuning {
    fn default() -> Self {
        Self {
            min_battle_energy: 30,
        }
    }
}

/// Presentation pacing hints. The engine never waits on these; callers do.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimingTuning {
    pub turn_delay_ms: u64,
    pub action_delay_ms: u64,
    pub battle_end_delay_ms: u64,
}

impl Default for TimingTuning {
    fn default() -> Self {
        Self {
            turn_delay_ms: 1000,
            action_delay_ms: 500,
            battle_end_delay_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parses_case_insensitively() {
        assert_eq!("aggressive".parse::<Strategy>(), Ok(Strategy::Aggressive));
        assert_eq!("DEFENSIVE".parse::<Strategy>(), Ok(Strategy::Defensive));
        assert!("reckless".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_display_round_trips_through_parse() {
        for strategy in Strategy::iter() {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}
