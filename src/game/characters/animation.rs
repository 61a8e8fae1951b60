// Character animation: clip selection per tick and a simple clip player

use std::collections::HashMap;

use super::effects::Animator;
use super::state::{CharacterState, Facing};

/// What the animation side should do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCommand {
    /// Clip to play (sent every tick)
    pub clip: &'static str,
    /// New facing, or `None` to keep the current one
    pub facing: Option<Facing>,
}

/// Map the tick's final state and horizontal input to an animation command
pub fn drive(state: CharacterState, horizontal: f32) -> AnimationCommand {
    let facing = if horizontal != 0.0 {
        Some(Facing::from_horizontal(horizontal, Facing::default()))
    } else {
        None
    };

    AnimationCommand {
        clip: state.clip_name(),
        facing,
    }
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Plays once and holds the last frame
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }
}

/// Frame-stepping clip player used as the character's animator
#[derive(Debug)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    facing: Facing,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            facing: Facing::default(),
        }
    }

    /// Player with one clip per character state, starting on "Idle"
    pub fn with_character_clips() -> Self {
        let mut player = Self::new();

        for state in CharacterState::ALL {
            let name = state.clip_name();
            let clip = match state {
                CharacterState::Jumping
                | CharacterState::Rolling
                | CharacterState::AttackSide
                | CharacterState::AttackUp
                | CharacterState::AttackDown => AnimationClip::one_shot(name, 6, 12.0),
                CharacterState::Running | CharacterState::QuadrupedRunning => {
                    AnimationClip::looping(name, 8, 14.0)
                }
                _ => AnimationClip::looping(name, 8, 10.0),
            };
            player.add_animation(clip);
        }

        player.play(CharacterState::Idle.clip_name());
        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Switch clips; the same clip again is a no-op
    pub fn play(&mut self, name: &str) {
        if self.current_animation == name {
            return;
        }

        if !self.animations.contains_key(name) {
            log::warn!("playing unknown clip {:?}", name);
        }

        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Advance the current clip
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Animator for AnimationPlayer {
    fn play(&mut self, clip: &str) {
        AnimationPlayer::play(self, clip);
    }

    fn set_facing(&mut self, facing: Facing) {
        AnimationPlayer::set_facing(self, facing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_picks_clip() {
        for state in CharacterState::ALL {
            assert_eq!(drive(state, 0.0).clip, state.clip_name());
        }
    }

    #[test]
    fn test_drive_facing() {
        assert_eq!(
            drive(CharacterState::Walking, -1.0).facing,
            Some(Facing::Unrotated)
        );
        assert_eq!(
            drive(CharacterState::Walking, 1.0).facing,
            Some(Facing::Mirrored)
        );
        assert_eq!(drive(CharacterState::Idle, 0.0).facing, None);
    }

    #[test]
    fn test_clip_frame_timing() {
        let clip = AnimationClip::looping("Walking", 6, 10.0);
        assert_eq!(clip.frame_count, 6);
        assert!((clip.frame_duration - 0.1).abs() < 0.0001);
    }

    #[test]
    fn test_character_clips_registered() {
        let player = AnimationPlayer::with_character_clips();
        assert_eq!(player.current_animation(), "Idle");
        for state in CharacterState::ALL {
            assert!(player.animations.contains_key(state.clip_name()));
        }
    }

    #[test]
    fn test_repeat_play_does_not_restart() {
        let mut player = AnimationPlayer::with_character_clips();
        player.play("Walking");
        player.update(0.25);
        let frame = player.current_frame();
        assert!(frame > 0);

        player.play("Walking");
        assert_eq!(player.current_frame(), frame);

        player.play("Running");
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_looping() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("Idle", 3, 10.0));
        player.play("Idle");

        player.update(0.35);
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_one_shot_holds_last_frame() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("Roll", 3, 10.0));
        player.play("Roll");

        player.update(0.5);
        assert_eq!(player.current_frame(), 2);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_facing_through_animator_trait() {
        let mut player = AnimationPlayer::new();
        Animator::set_facing(&mut player, Facing::Mirrored);
        assert_eq!(player.facing(), Facing::Mirrored);
    }
}
