// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::{presets, BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use collision::{
    CollisionEvent, CollisionEventQueue, CollisionGroups, ContactEvent, ContactPhase, SurfaceTag,
};
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{Real, Vector};
