// Pet Battle Schema - Shared type definitions
// This crate holds the action enums and tuning-data types shared between the
// battle engine and anything that reads or writes its config files.

// Re-export the main types
pub use action_types::*;
pub use battle_data::*;
pub use messages::*;

pub mod action_types;
pub mod battle_data;
pub mod messages;
