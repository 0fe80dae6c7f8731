//! Tuning values for the game world.
//!
//! Everything the scene used to derive from its frame size lives here, so the
//! core and the host engine read from a single source. Two of the fields
//! (gravity, scroll duration) are host-facing hints the core itself never
//! consumes.

use serde::{Deserialize, Serialize};

/// Default playfield size in points (small-watch screen).
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 156.0;
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 170.0;

// Vertical proportions of the playfield. The gap spans H / 2.5 and the
// randomized band the gap offset is drawn from spans H / 4.
const GAP_HEIGHT_DIVISOR: f64 = 2.5;
const RANDOM_RANGE_DIVISOR: f64 = 4.0;

/// World tuning. Built with [`GameConfig::for_playfield`] so the
/// size-derived fields keep their proportions on any screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in points.
    pub playfield_width: f64,
    /// Playfield height in points.
    pub playfield_height: f64,

    /// Avatar sprite size (square side), points.
    pub avatar_size: f64,
    /// Barrier width, points.
    pub barrier_width: f64,
    /// Height of each barrier in an obstacle pair, points.
    pub barrier_height: f64,
    /// Vertical clearance between the lower and upper barrier, points.
    pub gap_height: f64,
    /// Width of the band the randomized gap offset is drawn from, points.
    pub random_range: f64,

    /// Time-units between obstacle spawns.
    pub spawn_interval: f64,
    /// Upward velocity magnitude a tap sets on the avatar.
    pub impulse: f64,

    /// Avatar spawn point as fractions of playfield width / height.
    pub spawn_x_frac: f64,
    pub spawn_y_frac: f64,

    /// Death-roll scale: roll angle = pi * avatar_y * this.
    pub death_roll_factor: f64,

    /// Host hint: vertical gravity the engine runs the world at.
    pub gravity_dy: f64,
    /// Host hint: time-units a barrier takes to cross the playfield.
    pub scroll_duration: f64,
}

impl GameConfig {
    /// Tuning for a playfield of the given size, with the gap height and
    /// random band derived from the height.
    pub fn for_playfield(width: f64, height: f64) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            avatar_size: 15.0,
            barrier_width: 15.0,
            barrier_height: 100.0,
            gap_height: height / GAP_HEIGHT_DIVISOR,
            random_range: height / RANDOM_RANGE_DIVISOR,
            spawn_interval: 2.0,
            impulse: 1.3,
            spawn_x_frac: 0.2,
            spawn_y_frac: 0.7,
            death_roll_factor: 0.01,
            gravity_dy: -2.0,
            scroll_duration: 4.0,
        }
    }

    /// Avatar spawn point in playfield coordinates.
    pub fn spawn_point(&self) -> (f64, f64) {
        (
            self.playfield_width * self.spawn_x_frac,
            self.playfield_height * self.spawn_y_frac,
        )
    }

    /// X position new obstacle pairs appear at (just past the right edge).
    pub fn obstacle_spawn_x(&self) -> f64 {
        self.playfield_width + self.barrier_width / 2.0
    }

    /// X position past which a pair has fully left the playfield.
    pub fn cull_x(&self) -> f64 {
        -self.barrier_width / 2.0
    }

    /// Inclusive bounds the randomized gap offset is drawn from:
    /// `H/2 - gap/2 - R/2 ..= H/2 - gap/2 + R/2`.
    pub fn gap_offset_bounds(&self) -> (f64, f64) {
        let center = self.playfield_height / 2.0 - self.gap_height / 2.0;
        (
            center - self.random_range / 2.0,
            center + self.random_range / 2.0,
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_playfield(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT)
    }
}
