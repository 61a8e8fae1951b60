// Input configuration and remapping system

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to controller actions.
///
/// A single source may drive several actions.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Vec<Action>>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action (keeps any other actions on that source)
    pub fn bind(&mut self, source: InputSource, action: Action) {
        let actions = self.bindings.entry(source).or_default();
        if actions.contains(&action) {
            return;
        }
        actions.push(action);

        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Remove every action bound to an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        let Some(actions) = self.bindings.remove(&source) else {
            return;
        };

        for action in actions {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        let Some(sources) = self.action_to_sources.remove(&action) else {
            return;
        };

        for source in sources {
            if let Some(actions) = self.bindings.get_mut(&source) {
                actions.retain(|a| *a != action);
                if actions.is_empty() {
                    self.bindings.remove(&source);
                }
            }
        }
    }

    /// Get the actions bound to an input source
    pub fn get_actions(&self, source: InputSource) -> &[Action] {
        self.bindings
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> &[InputSource] {
        self.action_to_sources
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Replace all bindings with the defaults
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in default_bindings() {
            self.bind(source, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
