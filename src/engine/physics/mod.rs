// Physics system using rapier2d

pub mod body;
mod collision;
mod probe;
mod world;

pub use body::{presets, BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use collision::CollisionGroups;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{QueryFilter, Real, Vector};
