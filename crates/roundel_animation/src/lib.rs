//! Roundel Animation System
//!
//! Tick-stepped animations for custom-painted controls.
//!
//! # Features
//!
//! - **Slides**: finite `from -> to` transitions over a fixed tick count, with
//!   continuous reversal when restarted mid-flight
//! - **Spins**: unbounded rotation for loading indicators
//! - **Single scheduler**: one tick drives every subscribed animation and
//!   reports whether another tick is needed
//! - **Idempotent ticks**: each tick carries a sequence number, so delivering
//!   it twice never double-steps an animation

pub mod easing;
pub mod scheduler;
pub mod slide;
pub mod spin;

pub use easing::Easing;
pub use scheduler::{
    AnimatedSlide, AnimatedSpin, AnimationId, AnimationScheduler, SchedulerHandle, Tick,
    DEFAULT_INTERVAL_MS,
};
pub use slide::SlideAnimation;
pub use spin::{SpinAnimation, MAX_VELOCITY, MIN_VELOCITY};
