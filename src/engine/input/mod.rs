// Input handling system
//
// Keyboard input for the character controller.
//
// ## Architecture
//
// - `action`: controller actions and default key bindings
// - `config`: binding/remapping (one key may drive several actions)
// - `snapshot`: the per-tick `InputSnapshot` and the `InputProvider` trait
// - `manager`: tracks winit key events and answers `InputProvider` queries
//
// ## Usage Example
//
// ```rust
// use platformer_controller::engine::input::{InputManager, InputProvider};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick, freeze the state
// let snapshot = input.snapshot();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use snapshot::{Axis, InputProvider, InputSnapshot};
