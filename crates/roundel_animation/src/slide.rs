//! Finite tick-stepped animation between two values
//!
//! A slide runs for a fixed number of ticks. Restarting mid-flight samples the
//! current value as the new start, so reversals are continuous.

use crate::easing::Easing;
use crate::scheduler::Tick;

/// Interpolates `from -> to` over `ticks_total` ticks
#[derive(Clone, Debug, PartialEq)]
pub struct SlideAnimation {
    from: f32,
    to: f32,
    easing: Easing,
    ticks_elapsed: u32,
    ticks_total: u32,
    value: f32,
    last_seq: Option<u64>,
}

impl SlideAnimation {
    /// A finished slide resting at `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            from: initial,
            to: initial,
            easing: Easing::default(),
            ticks_elapsed: 1,
            ticks_total: 1,
            value: initial,
            last_seq: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Begin a new transition; `total_ticks` is clamped to at least 1
    pub fn start(&mut self, from: f32, to: f32, total_ticks: u32) {
        self.from = from;
        self.to = to;
        self.ticks_total = total_ticks.max(1);
        self.ticks_elapsed = 0;
        self.value = from;
    }

    /// Restart toward `to` from wherever the slide currently is
    pub fn retarget(&mut self, to: f32, total_ticks: u32) {
        self.start(self.value, to, total_ticks);
    }

    /// Advance by one tick; repeating a sequence number is a no-op
    pub fn advance(&mut self, tick: Tick) -> f32 {
        if !self.is_running() || self.last_seq == Some(tick.seq) {
            return self.value;
        }
        self.last_seq = Some(tick.seq);
        self.ticks_elapsed += 1;

        self.value = if self.ticks_elapsed >= self.ticks_total {
            self.to
        } else {
            let t = self.easing.apply(self.progress());
            self.from + (self.to - self.from) * t
        };
        self.value
    }

    /// Jump to `value` and finish
    pub fn snap_to(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.value = value;
        self.ticks_elapsed = self.ticks_total;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        self.ticks_elapsed as f32 / self.ticks_total as f32
    }

    pub fn is_running(&self) -> bool {
        self.ticks_elapsed < self.ticks_total
    }
}
