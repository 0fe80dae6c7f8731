//! Game-loop logic: tick, tap, and contact handling.
//!
//! Every handler is a total function over `{Playing, Stopped} x event`:
//! combinations with no defined effect return an empty command list, never
//! an error. Randomness is injected, so callers pick the RNG.

use crate::core::commands::EngineCommand;
use crate::core::types::{ContactKind, GamePhase, SkywardGame};
use rand::Rng;
use std::f64::consts::PI;

/// Start a new life: score to 0, phase to Playing, arena cleared, spawn
/// clock re-armed. Safe to call in any phase; calling it again while
/// Stopped re-emits the same sequence.
pub fn restart(game: &mut SkywardGame) -> Vec<EngineCommand> {
    game.score = 0;
    game.phase = GamePhase::Playing;
    game.spawn_clock = 0.0;
    game.obstacles.clear();

    let (x, y) = game.config.spawn_point();
    vec![
        EngineCommand::ClearObstacles,
        EngineCommand::ResetAvatar { x, y },
        EngineCommand::ScoreChanged { score: 0 },
        EngineCommand::UnfreezeWorld,
    ]
}

/// Advance the spawn clock by `dt` time-units and cull exited obstacles.
///
/// Negative `dt` clamps to zero. While Playing, each whole spawn interval
/// the clock crosses emits one `SpawnObstaclePair` with a gap offset drawn
/// uniformly from [`crate::core::config::GameConfig::gap_offset_bounds`];
/// leftover time carries into the next tick. While Stopped only the cull
/// runs (a frozen world reports no movement, so it is normally a no-op).
pub fn process_tick<R: Rng>(game: &mut SkywardGame, dt: f64, rng: &mut R) -> Vec<EngineCommand> {
    let dt = dt.max(0.0);
    let mut commands = Vec::new();

    for id in game.obstacles.retire_past(game.config.cull_x()) {
        commands.push(EngineCommand::DespawnObstaclePair { id });
    }

    if game.phase != GamePhase::Playing {
        return commands;
    }

    game.spawn_clock += dt;
    if game.config.spawn_interval > 0.0 {
        while game.spawn_clock >= game.config.spawn_interval {
            game.spawn_clock -= game.config.spawn_interval;

            let (lo, hi) = game.config.gap_offset_bounds();
            let gap_offset = rng.gen_range(lo..=hi);
            let id = game
                .obstacles
                .spawn(game.config.obstacle_spawn_x(), gap_offset);
            commands.push(EngineCommand::SpawnObstaclePair { id, gap_offset });
        }
    }

    commands
}

/// Handle a tap.
///
/// Playing: set the avatar's velocity straight up (the host discards the
/// prior velocity). Stopped with the avatar at rest: restart. Stopped with
/// the avatar still settling: no-op.
pub fn process_tap(game: &mut SkywardGame) -> Vec<EngineCommand> {
    match game.phase {
        GamePhase::Playing => vec![EngineCommand::Impulse {
            magnitude: game.config.impulse,
        }],
        GamePhase::Stopped if game.avatar.at_rest() => restart(game),
        GamePhase::Stopped => Vec::new(),
    }
}

/// Handle a classified contact from the boundary layer.
///
/// Score gates count only while Playing. A fatal contact while Playing
/// freezes the world and rolls the avatar by an angle proportional to its
/// height at impact. Contacts while Stopped are ignored, so at most one
/// stop transition happens per life.
pub fn process_contact(game: &mut SkywardGame, kind: ContactKind) -> Vec<EngineCommand> {
    if game.phase != GamePhase::Playing {
        return Vec::new();
    }

    match kind {
        ContactKind::ScoreGate => {
            game.score += 1;
            vec![EngineCommand::ScoreChanged { score: game.score }]
        }
        ContactKind::Obstacle => {
            game.phase = GamePhase::Stopped;
            let angle = PI * game.avatar.y * game.config.death_roll_factor;
            vec![
                EngineCommand::FreezeWorld,
                EngineCommand::PlayDeathAnimation { angle },
            ]
        }
    }
}
