//! Game state data structures.

use crate::core::arena::{ObstacleArena, ObstacleId};
use crate::core::config::GameConfig;

/// Top-level game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// World scrolling, avatar under player control, score live.
    Playing,
    /// A fatal contact happened; world frozen until a tap restarts.
    Stopped,
}

/// Contact classification delivered by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Avatar crossed a scoring region.
    ScoreGate,
    /// Avatar hit a barrier or the ground.
    Obstacle,
}

/// Host-observed avatar kinematics.
///
/// The engine owns the avatar's motion; the core only mirrors the latest
/// values it was told about. `y` feeds the death-roll angle, `speed` gates
/// the restart tap.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarState {
    pub y: f64,
    pub speed: f64,
}

impl AvatarState {
    /// The host settled the avatar (reports a clean zero speed).
    pub fn at_rest(&self) -> bool {
        self.speed.abs() < f64::EPSILON
    }
}

/// Main game state.
///
/// Mutated only through the handlers in [`crate::core::logic`] and the
/// `observe_*` setters the host feeds each tick.
#[derive(Debug, Clone)]
pub struct SkywardGame {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Score gates passed this life.
    pub score: u32,
    pub avatar: AvatarState,
    pub obstacles: ObstacleArena,
    /// Time accumulated toward the next spawn.
    pub(crate) spawn_clock: f64,
}

impl SkywardGame {
    /// A fresh game: the state a restart produces, before any command has
    /// been emitted. Hosts that want the restart command sequence for the
    /// first life call [`crate::core::logic::restart`] once after setup.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Playing,
            score: 0,
            avatar: AvatarState::default(),
            obstacles: ObstacleArena::new(),
            spawn_clock: 0.0,
        }
    }

    /// Mirror the host-reported avatar position and speed.
    pub fn observe_avatar(&mut self, y: f64, speed: f64) {
        self.avatar = AvatarState { y, speed };
    }

    /// Mirror the host-reported x position of one obstacle pair.
    pub fn observe_obstacle(&mut self, id: ObstacleId, x: f64) {
        self.obstacles.observe(id, x);
    }
}
