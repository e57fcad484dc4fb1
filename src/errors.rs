use crate::battle::state::BattleStatus;

/// Main error type for the pet battle engine
#[derive(Debug, thiserror::Error)]
pub enum BattleEngineError {
    /// A turn or forfeit was attempted on a battle that has already ended
    #[error("battle is no longer ongoing (status: {0:?})")]
    InvalidState(BattleStatus),

    /// The supplied action is not one of attack, defend or special
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Tuning data breaks one of its load-time invariants
    #[error("config invariant violated: {0}")]
    ConfigInvariantViolation(String),

    /// Combatant stats are outside their valid ranges
    #[error("invalid combatant stats: {0}")]
    InvalidStats(String),

    /// The pet is asleep or too tired to fight
    #[error("pet is not ready to battle: {0}")]
    NotReady(String),

    /// The config file could not be read
    #[error("failed to read battle config: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The config file is not valid RON
    #[error("failed to parse battle config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;
