// Character behavioral state and facing

/// The behavior the character is currently in. Exactly one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing still, or nothing held
    #[default]
    Idle,
    /// Moving horizontally on ground
    Walking,
    /// Moving horizontally on ground with run held
    Running,
    /// Sliding along the floor
    Sliding,
    /// Running on all fours
    QuadrupedRunning,
    /// Rolling along the floor
    Rolling,
    /// Left the ground with a jump impulse
    Jumping,
    AttackSide,
    AttackUp,
    AttackDown,
    /// Sneak held without horizontal input
    Crouch,
    /// Sneak held while moving
    Sneak,
    /// Attached to a wall without vertical input
    ClimbIdle,
    /// Moving up a wall
    Climbing,
    /// Sliding down a wall with run held
    ClimbSlide,
}

impl CharacterState {
    /// Every state, in declaration order
    pub const ALL: [CharacterState; 15] = [
        Self::Idle,
        Self::Walking,
        Self::Running,
        Self::Sliding,
        Self::QuadrupedRunning,
        Self::Rolling,
        Self::Jumping,
        Self::AttackSide,
        Self::AttackUp,
        Self::AttackDown,
        Self::Crouch,
        Self::Sneak,
        Self::ClimbIdle,
        Self::Climbing,
        Self::ClimbSlide,
    ];

    /// Get the animation clip name for this state
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walking => "Walking",
            Self::Running => "Running",
            Self::Sliding => "Slide on floor",
            Self::QuadrupedRunning => "Running On 4",
            Self::Rolling => "Roll",
            Self::Jumping => "Jump",
            Self::AttackSide => "Attack Side",
            Self::AttackUp => "Attack Up",
            Self::AttackDown => "Attack Down",
            Self::Crouch => "Crounch Idle",
            Self::Sneak => "Sneak",
            Self::ClimbIdle => "Climb Idle",
            Self::Climbing => "Climb",
            Self::ClimbSlide => "Wall Slider",
        }
    }
}

/// Which way the character sprite faces.
///
/// The art faces left, so moving right is drawn with a 180° yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// No rotation (facing left)
    #[default]
    Unrotated,
    /// Rotated 180° around the vertical axis (facing right)
    Mirrored,
}

impl Facing {
    /// Resolve facing from horizontal input; zero input keeps `previous`
    pub fn from_horizontal(horizontal: f32, previous: Facing) -> Facing {
        if horizontal < 0.0 {
            Facing::Unrotated
        } else if horizontal > 0.0 {
            Facing::Mirrored
        } else {
            previous
        }
    }

    /// Yaw rotation in degrees
    pub fn yaw_degrees(&self) -> f32 {
        match self {
            Facing::Unrotated => 0.0,
            Facing::Mirrored => 180.0,
        }
    }
}
