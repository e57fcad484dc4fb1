use crate::battle::engine::start_battle_with_strategy;
use crate::battle::state::{Battle, CombatantStats};
use crate::config::BattleConfig;
use schema::Strategy;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let weakened = TestCombatantBuilder::new().with_hp(10).build();
/// ```
pub struct TestCombatantBuilder {
    max_hp: u32,
    current_hp: Option<u32>,
    attack: u32,
    defense: u32,
}

impl TestCombatantBuilder {
    /// 100 HP, 20 attack, 5 defense: a neutral attack deals exactly 15.
    pub fn new() -> Self {
        Self {
            max_hp: 100,
            current_hp: None,
            attack: 20,
            defense: 5,
        }
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    pub fn build(self) -> CombatantStats {
        let stats = match CombatantStats::new(self.max_hp, self.attack, self.defense) {
            Ok(stats) => stats,
            Err(err) => panic!("Invalid test combatant: {}", err),
        };
        match self.current_hp {
            Some(hp) => stats
                .with_current_hp(hp)
                .unwrap_or_else(|err| panic!("Invalid test HP {}: {}", hp, err)),
            None => stats,
        }
    }
}

/// Starts a battle against a balanced opponent with the default config.
pub fn start_test_battle(player: CombatantStats, opponent: CombatantStats) -> (Battle, BattleConfig) {
    let config = BattleConfig::default();
    let battle = start_battle_with_strategy(&config, &player, &opponent, Strategy::Balanced)
        .expect("test battle should start");
    (battle, config)
}

/// Rolls for one neutral damaging action: no variance, no crit.
pub const NEUTRAL_HIT: [f64; 2] = [0.5, 0.99];

/// AI rolls under the balanced profile (0.5 / 0.3 / 0.2).
pub const AI_ATTACK: f64 = 0.1;
pub const AI_DEFEND: f64 = 0.6;
pub const AI_SPECIAL: f64 = 0.9;
