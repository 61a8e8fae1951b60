// Per-tick character controller

use crate::engine::input::InputProvider;
use crate::engine::physics::ContactEvent;

use super::animation;
use super::effects::Effect;
use super::environment::{ContactQueue, EnvironmentFlags};
use super::rules::{self, TickContext};
use super::state::{CharacterState, Facing};
use super::stats::{MovementStats, StatsError};

/// Owns the state, the contact flags and the tunables of one character.
///
/// Each [`tick`](Self::tick) first applies queued contact events, then runs
/// the state rules, then picks the animation. Nothing is applied to a body
/// directly; the caller gets back the list of effects to execute.
#[derive(Debug)]
pub struct CharacterController {
    state: CharacterState,
    env: EnvironmentFlags,
    facing: Facing,
    stats: MovementStats,
    contacts: ContactQueue,
    ticks: u64,
}

impl CharacterController {
    /// Create a controller in `Idle`, validating the tunables
    pub fn new(stats: MovementStats) -> Result<Self, StatsError> {
        stats.validate()?;

        Ok(Self {
            state: CharacterState::Idle,
            env: EnvironmentFlags::new(),
            facing: Facing::default(),
            stats,
            contacts: ContactQueue::new(),
            ticks: 0,
        })
    }

    /// Run one fixed tick
    pub fn tick<I: InputProvider + ?Sized>(&mut self, input: &I, dt: f32) -> Vec<Effect> {
        let mut effects = Vec::new();

        for event in self.contacts.drain() {
            effects.extend(self.apply_contact(event));
        }

        debug_assert!(
            self.env.is_consistent(),
            "grounded and climbing at once: {:?}",
            self.env
        );

        let snapshot = input.snapshot();
        let ctx = TickContext {
            input: &snapshot,
            env: self.env,
            stats: &self.stats,
            dt,
        };
        let evaluation = rules::evaluate(self.state, &ctx);
        self.transition(evaluation.state, "rules");
        effects.extend(evaluation.effects);

        let command = animation::drive(self.state, snapshot.horizontal());
        if let Some(facing) = command.facing {
            self.facing = facing;
            effects.push(Effect::Face(facing));
        }
        effects.push(Effect::Play(command.clip));

        self.ticks += 1;
        effects
    }

    /// Apply a contact event right away (between ticks only)
    pub fn apply_contact(&mut self, event: ContactEvent) -> Vec<Effect> {
        let response = self.env.apply(event);
        let mut effects = Vec::new();

        if let Some(scale) = response.gravity_scale {
            effects.push(Effect::SetGravityScale(scale));
        }
        if let Some(state) = response.state {
            self.transition(state, "contact");
        }

        effects
    }

    /// Queue a contact event for the start of the next tick
    pub fn queue_contact(&self, event: ContactEvent) {
        self.contacts.push(event);
    }

    /// Handle to the contact queue for code that reports collisions
    pub fn contact_queue(&self) -> ContactQueue {
        self.contacts.clone()
    }

    fn transition(&mut self, next: CharacterState, cause: &str) {
        if self.state != next {
            log::debug!("state {:?} -> {:?} ({})", self.state, next, cause);
            self.state = next;
        }
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.env.grounded
    }

    pub fn is_climbing(&self) -> bool {
        self.env.climbing
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn stats(&self) -> &MovementStats {
        &self.stats
    }

    /// Number of ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}
