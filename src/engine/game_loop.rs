//! Fixed timestep tick driver
//!
//! Accumulates real frame time and tells the caller how many fixed
//! controller/physics ticks to run this frame.

use std::time::{Duration, Instant};

/// Fixed simulation step (50 ticks per second)
pub const FIXED_TIMESTEP: f32 = 0.02;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_millis(20);

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_PHYSICS_STEPS: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    update_count: u64,

    /// Delta time for presentation (time since last frame)
    render_delta_time: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            update_count: 0,
            render_delta_time: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.render_delta_time = frame_time.as_secs_f32();

        if self.paused {
            return 0;
        }

        self.accumulate(frame_time)
    }

    /// Feed elapsed time into the accumulator and drain whole ticks
    fn accumulate(&mut self, frame_time: Duration) -> u32 {
        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop the backlog we refused to simulate
        if updates == MAX_PHYSICS_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!(
                "dropping {:?} of simulation backlog",
                self.accumulator - FIXED_TIMESTEP_DURATION
            );
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get the fixed timestep for ticks (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get the delta time since last frame (in seconds)
    pub fn render_delta_time(&self) -> f32 {
        self.render_delta_time
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
