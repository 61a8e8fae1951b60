// Movement tunables - fixed at configuration time

/// Errors raised when validating movement tunables
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Speeds and forces used by the movement rules
#[derive(Debug, Clone, PartialEq)]
pub struct MovementStats {
    /// Walking speed (units/second)
    pub move_speed: f32,
    /// Extra speed added on top of walking while running
    pub run_speed: f32,
    /// Extra speed while rolling
    pub roll_speed: f32,
    /// Extra speed while sliding
    pub slide_speed: f32,
    /// Upward impulse applied on jump
    pub jump_force: f32,
    /// Extra speed while running on all fours
    pub quadruped_speed: f32,
    /// Vertical speed on walls (units/second)
    pub climb_force: f32,
}

/// Default tuning
pub const BASE_STATS: MovementStats = MovementStats {
    move_speed: 4.0,
    run_speed: 3.0,
    roll_speed: 5.0,
    slide_speed: 4.0,
    jump_force: 12.0,
    quadruped_speed: 6.0,
    climb_force: 3.0,
};

impl Default for MovementStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl MovementStats {
    /// Get the standard tuning
    pub fn standard() -> Self {
        BASE_STATS
    }

    pub fn with_move_speed(mut self, value: f32) -> Self {
        self.move_speed = value;
        self
    }

    pub fn with_run_speed(mut self, value: f32) -> Self {
        self.run_speed = value;
        self
    }

    pub fn with_roll_speed(mut self, value: f32) -> Self {
        self.roll_speed = value;
        self
    }

    pub fn with_slide_speed(mut self, value: f32) -> Self {
        self.slide_speed = value;
        self
    }

    pub fn with_jump_force(mut self, value: f32) -> Self {
        self.jump_force = value;
        self
    }

    pub fn with_quadruped_speed(mut self, value: f32) -> Self {
        self.quadruped_speed = value;
        self
    }

    pub fn with_climb_force(mut self, value: f32) -> Self {
        self.climb_force = value;
        self
    }

    /// Check that every magnitude is finite and non-negative
    pub fn validate(&self) -> Result<(), StatsError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("run_speed", self.run_speed),
            ("roll_speed", self.roll_speed),
            ("slide_speed", self.slide_speed),
            ("jump_force", self.jump_force),
            ("quadruped_speed", self.quadruped_speed),
            ("climb_force", self.climb_force),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(StatsError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(StatsError::Negative { name, value });
            }
        }

        Ok(())
    }
}
