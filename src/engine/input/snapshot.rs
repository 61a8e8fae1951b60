// Per-tick input snapshot and the provider trait the controller reads from

use super::action::Action;
use crate::core::math::clamp_axis;
use std::collections::HashSet;

/// Which axis to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Anything that can answer the controller's input queries
pub trait InputProvider {
    /// Raw axis value in [-1, 1]
    fn axis(&self, axis: Axis) -> f32;

    /// Whether an action is currently held
    fn is_held(&self, action: Action) -> bool;

    /// Whether any key at all is held, bound or not
    fn any_key_held(&self) -> bool;

    /// Freeze the current input into a snapshot for one tick
    fn snapshot(&self) -> InputSnapshot {
        let held = Action::KEYS
            .into_iter()
            .filter(|action| self.is_held(*action))
            .collect();

        InputSnapshot {
            horizontal: clamp_axis(self.axis(Axis::Horizontal)),
            vertical: clamp_axis(self.axis(Axis::Vertical)),
            held,
            any_key: self.any_key_held(),
        }
    }
}

/// Input state frozen for the duration of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    horizontal: f32,
    vertical: f32,
    held: HashSet<Action>,
    any_key: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both axes (clamped to [-1, 1])
    pub fn with_axes(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal = clamp_axis(horizontal);
        self.vertical = clamp_axis(vertical);
        self
    }

    /// Mark a discrete action as held
    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self.any_key = true;
        self
    }

    /// Override the "any key" flag (e.g. an axis key or an unbound key is down)
    pub fn with_any_key(mut self, any_key: bool) -> Self {
        self.any_key = any_key;
        self
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }
}

impl InputProvider for InputSnapshot {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    fn any_key_held(&self) -> bool {
        self.any_key
    }

    fn snapshot(&self) -> InputSnapshot {
        self.clone()
    }
}
