//! Unbounded rotation used by loading spinners

use crate::scheduler::Tick;

/// Slowest allowed spin in degrees per second
pub const MIN_VELOCITY: f32 = 30.0;
/// Fastest allowed spin in degrees per second
pub const MAX_VELOCITY: f32 = 720.0;

/// Angle that keeps rotating at a fixed velocity until stopped
#[derive(Clone, Debug, PartialEq)]
pub struct SpinAnimation {
    angle: f32,
    velocity: f32,
    running: bool,
    last_seq: Option<u64>,
}

impl SpinAnimation {
    /// A running spin at angle 0; velocity is clamped to `[30, 720]` deg/s
    pub fn new(velocity_deg_per_sec: f32) -> Self {
        Self {
            angle: 0.0,
            velocity: clamp_velocity(velocity_deg_per_sec),
            running: true,
            last_seq: None,
        }
    }

    pub fn set_velocity(&mut self, velocity_deg_per_sec: f32) {
        self.velocity = clamp_velocity(velocity_deg_per_sec);
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Rotate by `velocity * interval`; repeating a sequence number is a no-op
    pub fn advance(&mut self, tick: Tick) -> f32 {
        if !self.running || self.last_seq == Some(tick.seq) {
            return self.angle;
        }
        self.last_seq = Some(tick.seq);
        self.angle = (self.angle + self.velocity * tick.interval_ms / 1000.0).rem_euclid(360.0);
        self.angle
    }

    /// Current angle in `[0, 360)`
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

fn clamp_velocity(velocity: f32) -> f32 {
    if velocity.is_finite() {
        velocity.clamp(MIN_VELOCITY, MAX_VELOCITY)
    } else {
        MIN_VELOCITY
    }
}
