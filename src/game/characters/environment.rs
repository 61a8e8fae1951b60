// Environment tracking: grounded/climbing flags driven by contact events

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::engine::physics::{ContactEvent, ContactPhase, SurfaceTag};

use super::state::CharacterState;

/// Gravity scale while holding onto a wall
pub const WALL_GRAVITY_SCALE: f32 = 0.0;

/// Gravity scale restored when letting go of a wall (also the spawn value)
pub const RELEASE_GRAVITY_SCALE: f32 = 10.0;

/// Contact flags. Grounded and climbing are never both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentFlags {
    pub grounded: bool,
    pub climbing: bool,
}

/// What the controller must do in response to a contact event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactResponse {
    /// State to force, if any
    pub state: Option<CharacterState>,
    /// Gravity scale to push to the body, if any
    pub gravity_scale: Option<f32>,
}

impl EnvironmentFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grounded and climbing at the same time is a logic error
    pub fn is_consistent(&self) -> bool {
        !(self.grounded && self.climbing)
    }

    /// Apply one contact event and report the required overrides
    pub fn apply(&mut self, event: ContactEvent) -> ContactResponse {
        let mut response = ContactResponse::default();

        match (event.phase, event.tag) {
            (ContactPhase::Enter, SurfaceTag::Ground) => {
                // The wall wins: still holding on, so stay ungrounded
                if self.climbing {
                    log::debug!("touched ground while on a wall, keeping the wall");
                } else {
                    self.grounded = true;
                }
                response.state = Some(CharacterState::Idle);
            }
            (ContactPhase::Enter, SurfaceTag::Wall) => {
                self.climbing = true;
                self.grounded = false;
                response.gravity_scale = Some(WALL_GRAVITY_SCALE);
            }
            (ContactPhase::Exit, SurfaceTag::Ground) => {
                self.grounded = false;
            }
            (ContactPhase::Exit, SurfaceTag::Wall) => {
                self.climbing = false;
                response.gravity_scale = Some(RELEASE_GRAVITY_SCALE);
                response.state = Some(CharacterState::Idle);
            }
            (_, SurfaceTag::Other) => {
                log::trace!("ignoring {:?} contact with untagged surface", event.phase);
                return response;
            }
        }

        log::debug!(
            "contact {:?} {:?} -> grounded={} climbing={}",
            event.phase,
            event.tag,
            self.grounded,
            self.climbing
        );

        response
    }
}

/// Contact events waiting for the next tick boundary.
///
/// Cloning shares the same buffer, so a physics callback context can hold a
/// handle and push while the controller drains at tick start.
#[derive(Debug, Clone, Default)]
pub struct ContactQueue {
    events: Arc<Mutex<VecDeque<ContactEvent>>>,
}

impl ContactQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next tick
    pub fn push(&self, event: ContactEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push_back(event);
        }
    }

    /// Take every queued event, oldest first
    pub fn drain(&self) -> Vec<ContactEvent> {
        self.events
            .lock()
            .map(|mut events| events.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of events waiting
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_enter_lands() {
        let mut env = EnvironmentFlags::new();
        let response = env.apply(ContactEvent::enter(SurfaceTag::Ground));

        assert!(env.grounded);
        assert!(!env.climbing);
        assert_eq!(response.state, Some(CharacterState::Idle));
        assert_eq!(response.gravity_scale, None);
    }

    #[test]
    fn test_wall_enter() {
        let mut env = EnvironmentFlags {
            grounded: true,
            climbing: false,
        };
        let response = env.apply(ContactEvent::enter(SurfaceTag::Wall));

        assert!(env.climbing);
        assert!(!env.grounded);
        assert_eq!(response.gravity_scale, Some(WALL_GRAVITY_SCALE));
        assert_eq!(response.state, None);
    }

    #[test]
    fn test_wall_exit() {
        let mut env = EnvironmentFlags {
            grounded: false,
            climbing: true,
        };
        let response = env.apply(ContactEvent::exit(SurfaceTag::Wall));

        assert!(!env.climbing);
        assert_eq!(response.gravity_scale, Some(RELEASE_GRAVITY_SCALE));
        assert_eq!(response.state, Some(CharacterState::Idle));
    }

    #[test]
    fn test_ground_exit_keeps_state() {
        let mut env = EnvironmentFlags {
            grounded: true,
            climbing: false,
        };
        let response = env.apply(ContactEvent::exit(SurfaceTag::Ground));

        assert!(!env.grounded);
        assert_eq!(response, ContactResponse::default());
    }

    #[test]
    fn test_ground_under_wall_keeps_climbing() {
        let mut env = EnvironmentFlags::new();
        env.apply(ContactEvent::enter(SurfaceTag::Wall));
        let response = env.apply(ContactEvent::enter(SurfaceTag::Ground));

        assert!(env.climbing);
        assert!(!env.grounded);
        assert!(env.is_consistent());
        assert_eq!(response.gravity_scale, None);
        assert_eq!(response.state, Some(CharacterState::Idle));
    }

    #[test]
    fn test_other_surfaces_ignored() {
        let mut env = EnvironmentFlags {
            grounded: true,
            climbing: false,
        };
        let before = env;

        let response = env.apply(ContactEvent::enter(SurfaceTag::Other));
        assert_eq!(env, before);
        assert_eq!(response, ContactResponse::default());

        env.apply(ContactEvent::exit(SurfaceTag::Other));
        assert_eq!(env, before);
    }

    #[test]
    fn test_queue_is_fifo_and_shared() {
        let queue = ContactQueue::new();
        let sender = queue.clone();

        sender.push(ContactEvent::enter(SurfaceTag::Wall));
        sender.push(ContactEvent::exit(SurfaceTag::Wall));
        assert_eq!(queue.len(), 2);

        let events = queue.drain();
        assert_eq!(
            events,
            vec![
                ContactEvent::enter(SurfaceTag::Wall),
                ContactEvent::exit(SurfaceTag::Wall),
            ]
        );
        assert!(queue.is_empty());
        assert!(sender.is_empty());
    }

    #[test]
    fn test_queue_across_threads() {
        let queue = ContactQueue::new();
        let sender = queue.clone();

        std::thread::spawn(move || {
            sender.push(ContactEvent::enter(SurfaceTag::Ground));
        })
        .join()
        .unwrap();

        assert_eq!(queue.drain(), vec![ContactEvent::enter(SurfaceTag::Ground)]);
    }
}
