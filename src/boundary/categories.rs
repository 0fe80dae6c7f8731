//! Collision-category bitmasks for the host physics layer.
//!
//! The scene convention tags every hitbox with one category bit. The physics
//! layer resolves a contact's two masks to a [`ContactKind`] here before
//! calling into the core; the core itself never sees raw bits.

use crate::core::types::{ContactKind, GamePhase};

/// Hitbox category tags. Bit values follow the existing scene convention
/// and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CollisionCategory {
    Avatar = 0b0001,
    Ground = 0b0010,
    Barrier = 0b0100,
    Score = 0b1000,
}

impl CollisionCategory {
    pub const ALL: [CollisionCategory; 4] = [
        CollisionCategory::Avatar,
        CollisionCategory::Ground,
        CollisionCategory::Barrier,
        CollisionCategory::Score,
    ];

    pub fn bits(self) -> u32 {
        self as u32
    }

    /// The category for a single-bit mask, if it names one.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.bits() == bits)
    }
}

/// Resolve the category masks of a contact's two bodies to the core's event
/// kind. A scoring region on either body wins; otherwise ground or barrier
/// means a fatal contact. Anything else (sensor noise, avatar-only pairs)
/// resolves to `None` and is dropped before reaching the core.
pub fn classify_contact(mask_a: u32, mask_b: u32) -> Option<ContactKind> {
    let combined = mask_a | mask_b;
    if combined & CollisionCategory::Score.bits() != 0 {
        Some(ContactKind::ScoreGate)
    } else if combined & (CollisionCategory::Ground.bits() | CollisionCategory::Barrier.bits()) != 0
    {
        Some(ContactKind::Obstacle)
    } else {
        None
    }
}

/// What the avatar's body collides with in each phase. After a fatal
/// contact it keeps colliding with the ground only, so it drops through
/// barriers while the death roll plays.
pub fn avatar_collision_mask(phase: GamePhase) -> u32 {
    match phase {
        GamePhase::Playing => {
            CollisionCategory::Ground.bits() | CollisionCategory::Barrier.bits()
        }
        GamePhase::Stopped => CollisionCategory::Ground.bits(),
    }
}

/// What the avatar's body reports contacts for. Scoring regions carry the
/// reverse test against the avatar, so they are not listed here.
pub fn avatar_contact_mask() -> u32 {
    CollisionCategory::Ground.bits() | CollisionCategory::Barrier.bits()
}
