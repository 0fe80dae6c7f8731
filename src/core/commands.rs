//! Commands emitted toward the host engine.

use crate::core::arena::ObstacleId;

/// A fire-and-forget instruction for the host engine.
///
/// The core returns these from its event handlers and the host executes them
/// in the same call stack; nothing is queued. The host maps each command to
/// its own scene/physics primitives, the core never touches those directly.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    // ── Obstacles ───────────────────────────────────────────────
    /// Create a barrier pair just past the right edge, with the lower
    /// barrier's top edge at `gap_offset`, and start it scrolling left.
    SpawnObstaclePair { id: ObstacleId, gap_offset: f64 },

    /// Tear down a pair that has fully left the playfield.
    DespawnObstaclePair { id: ObstacleId },

    /// Tear down every live pair (restart).
    ClearObstacles,

    // ── Avatar ──────────────────────────────────────────────────
    /// Move the avatar to its spawn point with zero velocity and zero
    /// rotation (restart).
    ResetAvatar { x: f64, y: f64 },

    /// Set the avatar's velocity to `magnitude`, straight up. This replaces
    /// the current velocity; the host must discard it, not add to it.
    Impulse { magnitude: f64 },

    // ── World & presentation ────────────────────────────────────
    /// Stop obstacle motion and avatar control after a fatal contact.
    FreezeWorld,

    /// Resume world motion (restart).
    UnfreezeWorld,

    /// Roll the avatar by `angle` radians while the frozen world settles.
    PlayDeathAnimation { angle: f64 },

    /// The score changed; update the score display.
    ScoreChanged { score: u32 },
}
