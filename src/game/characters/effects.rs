// Side-effect commands emitted by a tick, and the services that execute them

use glam::Vec2;

use super::state::Facing;

/// One command for the host to carry out, in emission order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Move the body directly by this offset
    Displace(Vec2),
    /// Apply an instantaneous impulse to the body
    Impulse(Vec2),
    /// Change the body's gravity scale
    SetGravityScale(f32),
    /// Turn the character
    Face(Facing),
    /// Play an animation clip (repeats are expected every tick)
    Play(&'static str),
}

/// The rigid body the controller drives
pub trait PhysicsBody {
    fn add_displacement(&mut self, delta: Vec2);
    fn add_impulse(&mut self, impulse: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
    fn position(&self) -> Vec2;
}

/// The animation player the controller drives
pub trait Animator {
    /// Play a clip; calling again with the current clip must not restart it
    fn play(&mut self, clip: &str);
    fn set_facing(&mut self, facing: Facing);
}

/// Execute effects in order against the body and animator
pub fn apply_effects<B, A>(effects: &[Effect], body: &mut B, animator: &mut A)
where
    B: PhysicsBody + ?Sized,
    A: Animator + ?Sized,
{
    for effect in effects {
        match *effect {
            Effect::Displace(delta) => body.add_displacement(delta),
            Effect::Impulse(impulse) => body.add_impulse(impulse),
            Effect::SetGravityScale(scale) => body.set_gravity_scale(scale),
            Effect::Face(facing) => animator.set_facing(facing),
            Effect::Play(clip) => animator.play(clip),
        }
    }
}

/// Sum of every displacement in a batch
pub fn total_displacement(effects: &[Effect]) -> Vec2 {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Displace(delta) => Some(*delta),
            _ => None,
        })
        .sum()
}

/// The clip requested by a batch, if any
pub fn played_clip(effects: &[Effect]) -> Option<&'static str> {
    effects.iter().rev().find_map(|effect| match effect {
        Effect::Play(clip) => Some(*clip),
        _ => None,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Body double that integrates displacements and records everything else
    #[derive(Debug, Default)]
    pub struct RecordingBody {
        pub position: Vec2,
        pub impulses: Vec<Vec2>,
        pub gravity_scales: Vec<f32>,
    }

    impl PhysicsBody for RecordingBody {
        fn add_displacement(&mut self, delta: Vec2) {
            self.position += delta;
        }

        fn add_impulse(&mut self, impulse: Vec2) {
            self.impulses.push(impulse);
        }

        fn set_gravity_scale(&mut self, scale: f32) {
            self.gravity_scales.push(scale);
        }

        fn position(&self) -> Vec2 {
            self.position
        }
    }

    /// Animator double that records every call
    #[derive(Debug, Default)]
    pub struct RecordingAnimator {
        pub played: Vec<String>,
        pub facing: Option<Facing>,
    }

    impl Animator for RecordingAnimator {
        fn play(&mut self, clip: &str) {
            self.played.push(clip.to_string());
        }

        fn set_facing(&mut self, facing: Facing) {
            self.facing = Some(facing);
        }
    }
}
