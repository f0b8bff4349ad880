//! Spring filter used to smooth the page progress indicator.
//!
//! The state is advanced explicitly with [`Spring::step`], one call per
//! animation frame, so it can be simulated frame by frame in tests.

/// Physical parameters of the spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Settings of the page progress bar.
    pub const PROGRESS_BAR: SpringConfig = SpringConfig {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::PROGRESS_BAR
    }
}

/// Spring state: position and velocity chasing a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
    at_rest: bool,
}

impl Spring {
    /// Integration sub-step, in seconds.
    const SUBSTEP: f64 = 0.001;
    /// Longest frame gap integrated in one call, in seconds.
    const MAX_FRAME: f64 = 0.064;

    /// A spring resting at `position`.
    pub fn new(position: f64, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            config,
            at_rest: true,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring. Position and velocity carry over.
    pub fn set_target(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Advance by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.at_rest || !(dt > 0.0) {
            return !self.at_rest;
        }

        let mut remaining = dt.min(Self::MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(Self::SUBSTEP);
            let SpringConfig {
                stiffness,
                damping,
                mass,
                ..
            } = self.config;
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        !self.at_rest
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0, SpringConfig::PROGRESS_BAR)
    }
}

/// A [`Spring`] driven by animation-frame timestamps.
///
/// Frame gaps are measured between consecutive ticks while the spring moves.
/// Once it rests the clock is dropped, so the first tick after a retarget
/// integrates [`SpringAnimation::FIRST_FRAME`] rather than the idle time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAnimation {
    spring: Spring,
    last_timestamp: Option<f64>,
}

impl SpringAnimation {
    /// Assumed length of the first frame after the animation wakes up, in seconds.
    pub const FIRST_FRAME: f64 = 1.0 / 60.0;

    pub fn new(spring: Spring) -> Self {
        Self {
            spring,
            last_timestamp: None,
        }
    }

    pub fn spring(&self) -> &Spring {
        &self.spring
    }

    /// Retarget the spring. Returns true when frames are needed.
    pub fn retarget(&mut self, target: f64) -> bool {
        self.spring.set_target(target);
        !self.spring.is_at_rest()
    }

    /// Advance to `timestamp` (milliseconds). Returns true while still moving.
    pub fn tick(&mut self, timestamp: f64) -> bool {
        let dt = self
            .last_timestamp
            .map_or(Self::FIRST_FRAME, |last| (timestamp - last) / 1000.0);
        let moving = self.spring.step(dt);
        self.last_timestamp = moving.then_some(timestamp);
        moving
    }
}
