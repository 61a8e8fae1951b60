// Character system
//
// This module contains everything related to the playable character:
// - Character states and facing
// - Movement tunables
// - Contact flags and the contact queue
// - Ordered state rules and the per-tick controller
// - Animation selection and playback

pub mod animation;
pub mod character;
pub mod controller;
pub mod effects;
pub mod environment;
pub mod rules;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationCommand, AnimationPlayer};
pub use character::{Character, CharacterBody};
pub use controller::CharacterController;
pub use effects::{apply_effects, Animator, Effect, PhysicsBody};
pub use environment::{
    ContactQueue, EnvironmentFlags, RELEASE_GRAVITY_SCALE, WALL_GRAVITY_SCALE,
};
pub use state::{CharacterState, Facing};
pub use stats::{MovementStats, StatsError, BASE_STATS};
