//! Core game state and logic.

pub mod arena;
pub mod commands;
pub mod config;
pub mod logic;
pub mod types;

pub use arena::{ObstacleArena, ObstacleId, ObstaclePair};
pub use commands::EngineCommand;
pub use config::GameConfig;
pub use logic::{process_contact, process_tap, process_tick, restart};
pub use types::{AvatarState, ContactKind, GamePhase, SkywardGame};
