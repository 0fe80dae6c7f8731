//! Glue between the host physics layer and the core.

pub mod categories;

pub use categories::{
    avatar_collision_mask, avatar_contact_mask, classify_contact, CollisionCategory,
};
