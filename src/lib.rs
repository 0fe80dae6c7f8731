//! Skyward - Engine-Agnostic Tap-Glide Arcade Core
//!
//! Pure game logic for a single-screen "tap to flap" arcade game. The host
//! engine owns rendering, physics integration, and input devices; this crate
//! owns the game phase, the score, obstacle bookkeeping, and the command
//! protocol between the two.

pub mod boundary;
pub mod core;

pub use crate::boundary::categories::{
    avatar_collision_mask, avatar_contact_mask, classify_contact, CollisionCategory,
};
pub use crate::core::arena::{ObstacleArena, ObstacleId, ObstaclePair};
pub use crate::core::commands::EngineCommand;
pub use crate::core::config::GameConfig;
pub use crate::core::logic::{process_contact, process_tap, process_tick, restart};
pub use crate::core::types::{AvatarState, ContactKind, GamePhase, SkywardGame};
