// In: src/lib.rs

//! Pet Battle Engine
//!
//! The turn-based combat core of a virtual-pet game: damage calculation,
//! opponent AI, and the battle state machine that ties them together.
//! Presentation, persistence and pacing belong to the caller.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod opponent;
pub mod pet;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    ActionKind, Actor, AiTuning, DamageTuning, MessageTemplates, OpponentTuning, PetTuning,
    Strategy, StrategyProfile, TimingTuning,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{
    forfeit, parse_action, resolve_turn, resolve_turn_input, start_battle,
    start_battle_with_strategy,
};
pub use battle::state::{Battle, BattleStatus, CombatantStats, TurnOutcome, TurnResolution};

// Randomness and opponent decision-making.
pub use battle::ai::{Behavior, StrategyAI};
pub use battle::calculators::{compute_damage, DamageRoll};
pub use battle::rng::{RandomSource, TurnRng};

// Tuning data and supporting generators.
pub use config::BattleConfig;
pub use opponent::{generate_opponent, Opponent};
pub use pet::{battle_stats_for, LifeStage, PetCondition};

// Crate-specific error and result types.
pub use errors::{BattleEngineError, BattleResult};
