// Controller action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents every input the controller reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Axes (digital halves)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Held modifiers
    Run,
    Roll,
    Slide,
    Quadruped,
    Attack,
    Sneak,
}

impl Action {
    /// The discrete action keys (everything except the axis halves)
    pub const KEYS: [Action; 6] = [
        Action::Run,
        Action::Roll,
        Action::Slide,
        Action::Quadruped,
        Action::Attack,
        Action::Sneak,
    ];
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings.
///
/// `S` appears twice on purpose: it is both the down half of the vertical
/// axis and the slide key.
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Horizontal axis
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        // Vertical axis
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        // Modifiers
        (InputSource::key(KeyCode::ShiftLeft), Action::Run),
        (InputSource::key(KeyCode::ShiftRight), Action::Run),
        (InputSource::key(KeyCode::KeyR), Action::Roll),
        (InputSource::key(KeyCode::KeyS), Action::Slide),
        (InputSource::key(KeyCode::ControlLeft), Action::Quadruped),
        (InputSource::key(KeyCode::ControlRight), Action::Quadruped),
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        (InputSource::key(KeyCode::KeyK), Action::Sneak),
    ]
}
