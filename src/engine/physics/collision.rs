use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The controlled character
    Character = 0b0000_0010,

    /// Walkable floors and platforms
    Ground = 0b0000_0100,

    /// Climbable walls
    Wall = 0b0000_1000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The character touches level geometry only
            CollisionGroups::Character => Group::from_bits_truncate(
                CollisionGroups::Ground as u32
                    | CollisionGroups::Wall as u32
                    | CollisionGroups::Default as u32,
            ),

            // Level geometry touches the character and loose props
            CollisionGroups::Ground | CollisionGroups::Wall => Group::from_bits_truncate(
                CollisionGroups::Character as u32 | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// What kind of surface a collider is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceTag {
    Ground,
    Wall,
    /// Anything the controller does not react to
    #[default]
    Other,
}

/// Whether a contact began or ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Enter,
    Exit,
}

/// A contact notification for one character, tagged by surface kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub phase: ContactPhase,
    pub tag: SurfaceTag,
}

impl ContactEvent {
    pub fn enter(tag: SurfaceTag) -> Self {
        Self {
            phase: ContactPhase::Enter,
            tag,
        }
    }

    pub fn exit(tag: SurfaceTag) -> Self {
        Self {
            phase: ContactPhase::Exit,
            tag,
        }
    }
}

/// Raw collision event between two colliders
#[derive(Debug, Clone, Copy)]
pub enum CollisionEvent {
    /// Two colliders started touching
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },

    /// Two colliders stopped touching
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },
}

impl CollisionEvent {
    /// If `collider` is involved, return the phase and the other collider
    pub fn involving(&self, collider: ColliderHandle) -> Option<(ContactPhase, ColliderHandle)> {
        let (phase, a, b) = match *self {
            CollisionEvent::Started {
                collider1,
                collider2,
            } => (ContactPhase::Enter, collider1, collider2),
            CollisionEvent::Stopped {
                collider1,
                collider2,
            } => (ContactPhase::Exit, collider1, collider2),
        };

        if a == collider {
            Some((phase, b))
        } else if b == collider {
            Some((phase, a))
        } else {
            None
        }
    }
}

/// Queue for storing collision events during physics step
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(32))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get all collision events from this step
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_groups_bits() {
        let groups = [
            CollisionGroups::Default,
            CollisionGroups::Character,
            CollisionGroups::Ground,
            CollisionGroups::Wall,
        ];

        for (i, group1) in groups.iter().enumerate() {
            for (j, group2) in groups.iter().enumerate() {
                if i != j {
                    assert_ne!(
                        *group1 as u32, *group2 as u32,
                        "Groups must have unique bits"
                    );
                }
            }
        }
    }

    #[test]
    fn test_character_touches_ground_and_wall() {
        let character = CollisionGroups::Character.to_interaction_groups();
        let ground = Group::from_bits_truncate(CollisionGroups::Ground as u32);
        let wall = Group::from_bits_truncate(CollisionGroups::Wall as u32);

        assert!(character.filter.contains(ground));
        assert!(character.filter.contains(wall));
        assert!(!character.filter.contains(character.memberships));
    }

    #[test]
    fn test_event_involving() {
        let mut colliders = ColliderSet::new();
        let a = colliders.insert(ColliderBuilder::ball(1.0).build());
        let b = colliders.insert(ColliderBuilder::ball(1.0).build());
        let c = colliders.insert(ColliderBuilder::ball(1.0).build());

        let started = CollisionEvent::Started {
            collider1: b,
            collider2: a,
        };
        assert_eq!(started.involving(a), Some((ContactPhase::Enter, b)));
        assert_eq!(started.involving(c), None);

        let stopped = CollisionEvent::Stopped {
            collider1: a,
            collider2: c,
        };
        assert_eq!(stopped.involving(a), Some((ContactPhase::Exit, c)));
    }

    #[test]
    fn test_queue_clear() {
        let queue = CollisionEventQueue::new();
        assert!(queue.events().is_empty());
        queue.clear();
        assert!(queue.events().is_empty());
    }
}
