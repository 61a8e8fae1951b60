// Input manager - turns keyboard events into controller input

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::snapshot::{Axis, InputProvider};
use crate::core::math::raw_axis;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which physical keys are down and resolves them through the bindings
#[derive(Debug, Default)]
pub struct InputManager {
    /// Key bindings
    config: InputConfig,

    /// Every physical key currently down, bound or not
    held_keys: HashSet<KeyCode>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create an input manager with custom bindings
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            held_keys: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => self.press_key(key_code),
            ElementState::Released => self.release_key(key_code),
        }
    }

    /// Register a key going down (repeats are harmless)
    pub fn press_key(&mut self, key_code: KeyCode) {
        if self.held_keys.insert(key_code) {
            log::trace!("key down: {:?}", key_code);
        }
    }

    /// Register a key going up
    pub fn release_key(&mut self, key_code: KeyCode) {
        if self.held_keys.remove(&key_code) {
            log::trace!("key up: {:?}", key_code);
        }
    }

    /// Forget every held key (window lost focus, etc.)
    pub fn reset(&mut self) {
        self.held_keys.clear();
    }

    /// Get the bindings
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get mutable bindings
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

impl InputProvider for InputManager {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => raw_axis(
                self.is_held(Action::MoveLeft),
                self.is_held(Action::MoveRight),
            ),
            Axis::Vertical => raw_axis(
                self.is_held(Action::MoveDown),
                self.is_held(Action::MoveUp),
            ),
        }
    }

    fn is_held(&self, action: Action) -> bool {
        self.config
            .get_sources(action)
            .iter()
            .any(|source| match source {
                InputSource::Keyboard(code) => self.held_keys.contains(code),
            })
    }

    fn any_key_held(&self) -> bool {
        !self.held_keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new();
        assert!(!manager.any_key_held());
        assert_eq!(manager.axis(Axis::Horizontal), 0.0);
        assert!(manager.config().has_binding(Action::Attack));
    }

    #[test]
    fn test_horizontal_axis() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyD);
        assert_eq!(manager.axis(Axis::Horizontal), 1.0);

        manager.press_key(KeyCode::ArrowLeft);
        assert_eq!(manager.axis(Axis::Horizontal), 0.0);

        manager.release_key(KeyCode::KeyD);
        assert_eq!(manager.axis(Axis::Horizontal), -1.0);
    }

    #[test]
    fn test_s_is_down_and_slide() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyS);

        assert_eq!(manager.axis(Axis::Vertical), -1.0);
        assert!(manager.is_held(Action::Slide));
    }

    #[test]
    fn test_movement_key_counts_as_any_key() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::ArrowRight);

        let snapshot = manager.snapshot();
        assert!(snapshot.any_key_held());
        assert!(Action::KEYS.iter().all(|action| !snapshot.is_held(*action)));
    }

    #[test]
    fn test_unbound_key_counts_as_any_key() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyZ);
        assert!(manager.any_key_held());
    }

    #[test]
    fn test_either_shift_runs() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::ShiftRight);
        assert!(manager.is_held(Action::Run));

        manager.release_key(KeyCode::ShiftRight);
        manager.press_key(KeyCode::ShiftLeft);
        assert!(manager.is_held(Action::Run));
    }

    #[test]
    fn test_snapshot_collects_keys() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyJ);
        manager.press_key(KeyCode::KeyW);

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.vertical(), 1.0);
        assert!(snapshot.is_held(Action::Attack));
        assert!(!snapshot.is_held(Action::Sneak));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyK);
        manager.reset();

        assert!(!manager.is_held(Action::Sneak));
        assert!(!manager.any_key_held());
    }

    #[test]
    fn test_rebinding() {
        let mut manager = InputManager::new();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::KeyF), Action::Attack);
        manager.press_key(KeyCode::KeyF);

        assert!(manager.is_held(Action::Attack));
    }
}
