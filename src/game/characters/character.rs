// Character entity: controller, rigid body and animation player together

use glam::Vec2;

use crate::engine::input::InputProvider;
use crate::engine::physics::{body::presets, ColliderHandle, PhysicsWorld, RigidBodyHandle, Vector};

use super::animation::AnimationPlayer;
use super::controller::CharacterController;
use super::effects::{apply_effects, PhysicsBody};
use super::environment::RELEASE_GRAVITY_SCALE;
use super::state::CharacterState;
use super::stats::{MovementStats, StatsError};

/// Collider width of the character
pub const CHARACTER_WIDTH: f32 = 1.0;
/// Collider height of the character
pub const CHARACTER_HEIGHT: f32 = 2.0;

/// The playable character
#[derive(Debug)]
pub struct Character {
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's collider
    pub collider_handle: ColliderHandle,
    /// Animation player driven by the controller
    pub animation: AnimationPlayer,
    controller: CharacterController,
}

impl Character {
    /// Create the character and add its body to the physics world
    pub fn new(
        stats: MovementStats,
        physics: &mut PhysicsWorld,
        spawn_x: f32,
        spawn_y: f32,
    ) -> Result<Self, StatsError> {
        let controller = CharacterController::new(stats)?;

        let body = presets::character_body(spawn_x, spawn_y, RELEASE_GRAVITY_SCALE);
        let body_handle = physics.add_rigid_body(body);

        let collider = presets::character_collider(CHARACTER_WIDTH, CHARACTER_HEIGHT);
        let collider_handle = physics.add_collider(collider, body_handle);

        log::info!("Character spawned at ({}, {})", spawn_x, spawn_y);

        Ok(Self {
            body_handle,
            collider_handle,
            animation: AnimationPlayer::with_character_clips(),
            controller,
        })
    }

    /// Run one controller tick and apply its effects to the body and animation
    pub fn fixed_update<I: InputProvider + ?Sized>(
        &mut self,
        input: &I,
        physics: &mut PhysicsWorld,
        dt: f32,
    ) {
        let effects = self.controller.tick(input, dt);

        let mut body = CharacterBody::new(physics, self.body_handle);
        apply_effects(&effects, &mut body, &mut self.animation);
    }

    /// Queue the contact events of the last physics step for the next tick
    pub fn route_contacts(&self, physics: &PhysicsWorld) {
        for event in physics.contact_events_for(self.collider_handle) {
            self.controller.queue_contact(event);
        }
    }

    /// Advance the animation clock (called every frame)
    pub fn update_animation(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Teleport the character and stop it
    pub fn set_position(&self, physics: &mut PhysicsWorld, x: f32, y: f32) {
        if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
            body.set_translation(Vector::new(x, y), true);
            body.set_linvel(Vector::new(0.0, 0.0), true);
        }
    }

    pub fn state(&self) -> CharacterState {
        self.controller.state()
    }

    pub fn controller(&self) -> &CharacterController {
        &self.controller
    }
}

/// A rigid body in the physics world seen through the controller's
/// [`PhysicsBody`] interface
pub struct CharacterBody<'a> {
    world: &'a mut PhysicsWorld,
    handle: RigidBodyHandle,
}

impl<'a> CharacterBody<'a> {
    pub fn new(world: &'a mut PhysicsWorld, handle: RigidBodyHandle) -> Self {
        Self { world, handle }
    }
}

impl PhysicsBody for CharacterBody<'_> {
    fn add_displacement(&mut self, delta: Vec2) {
        let Some(body) = self.world.get_rigid_body_mut(self.handle) else {
            log::warn!("displacement for missing body {:?}", self.handle);
            return;
        };

        let target = body.translation() + Vector::new(delta.x, delta.y);
        body.set_translation(target, true);
    }

    fn add_impulse(&mut self, impulse: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.apply_impulse(Vector::new(impulse.x, impulse.y), true);
        }
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_gravity_scale(scale, true);
        }
    }

    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or(Vec2::ZERO)
    }
}
