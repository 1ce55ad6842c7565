//! Animation scheduler
//!
//! One scheduler drives every animation of a window from a single tick.
//! Animations are implicitly registered when created through wrapper types:
//! - `AnimatedSlide` - finite tick-stepped transitions (toggle thumbs, fades)
//! - `AnimatedSpin` - unbounded rotation (loading spinners)
//!
//! Everything runs on the UI thread, so the shared state lives in an
//! `Rc<RefCell<..>>` and components hold a `Weak` handle to it.
//!
//! # Example
//!
//! ```ignore
//! let scheduler = AnimationScheduler::new();
//! let mut thumb = AnimatedSlide::new(scheduler.handle(), 0.0);
//! thumb.start(0.0, 1.0, 10);
//!
//! // Host timer callback
//! while scheduler.tick() {
//!     repaint(thumb.value());
//! }
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;
use crate::slide::SlideAnimation;
use crate::spin::SpinAnimation;

/// Default tick interval in milliseconds
pub const DEFAULT_INTERVAL_MS: f32 = 16.0;

// ============================================================================
// Tick
// ============================================================================

/// One scheduler step
///
/// The sequence number makes advancing idempotent: an animation that has
/// already seen `seq` ignores it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub seq: u64,
    pub interval_ms: f32,
}

impl Tick {
    pub fn new(seq: u64, interval_ms: f32) -> Self {
        Self { seq, interval_ms }
    }
}

new_key_type! {
    /// Handle to a registered animation
    pub struct AnimationId;
}

/// A registered animation record
#[derive(Clone, Debug)]
enum Animation {
    Slide(SlideAnimation),
    Spin(SpinAnimation),
}

impl Animation {
    fn advance(&mut self, tick: Tick) {
        match self {
            Animation::Slide(slide) => {
                slide.advance(tick);
            }
            Animation::Spin(spin) => {
                spin.advance(tick);
            }
        }
    }

    fn is_running(&self) -> bool {
        match self {
            Animation::Slide(slide) => slide.is_running(),
            Animation::Spin(spin) => spin.is_running(),
        }
    }
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    animations: SlotMap<AnimationId, Animation>,
    /// Animations advanced by `tick`, in subscription order
    subscribed: Vec<AnimationId>,
    seq: u64,
    interval_ms: f32,
}

impl SchedulerInner {
    fn subscribe(&mut self, id: AnimationId) {
        if self.animations.contains_key(id) && !self.subscribed.contains(&id) {
            self.subscribed.push(id);
            tracing::debug!(?id, "animation subscribed");
        }
    }

    fn unsubscribe(&mut self, id: AnimationId) {
        let before = self.subscribed.len();
        self.subscribed.retain(|s| *s != id);
        if self.subscribed.len() != before {
            tracing::debug!(?id, "animation unsubscribed");
        }
    }
}

/// The animation scheduler that ticks all subscribed animations
///
/// Typically held by the window or host form and shared via `SchedulerHandle`.
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_INTERVAL_MS)
    }

    /// Scheduler whose ticks report `interval_ms` of elapsed time
    pub fn with_interval(interval_ms: f32) -> Self {
        let interval_ms = if interval_ms.is_finite() && interval_ms > 0.0 {
            interval_ms
        } else {
            DEFAULT_INTERVAL_MS
        };
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                animations: SlotMap::with_key(),
                subscribed: Vec::new(),
                seq: 0,
                interval_ms,
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn interval_ms(&self) -> f32 {
        self.inner.borrow().interval_ms
    }

    /// Tick all subscribed animations
    ///
    /// Finished or stopped animations lose their subscription but stay
    /// registered until their wrapper drops. Returns true if anything still
    /// needs another tick.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.seq += 1;
        let tick = Tick::new(inner.seq, inner.interval_ms);

        let SchedulerInner {
            animations,
            subscribed,
            ..
        } = &mut *inner;

        subscribed.retain(|id| match animations.get_mut(*id) {
            Some(animation) => {
                animation.advance(tick);
                let running = animation.is_running();
                if !running {
                    tracing::debug!(?id, "animation finished");
                }
                running
            }
            None => false,
        });

        !subscribed.is_empty()
    }

    /// Check if any animations are still subscribed
    pub fn has_active_animations(&self) -> bool {
        !self.inner.borrow().subscribed.is_empty()
    }

    /// Number of registered animations, subscribed or not
    pub fn animation_count(&self) -> usize {
        self.inner.borrow().animations.len()
    }

    /// Number of animations advanced by the next tick
    pub fn subscription_count(&self) -> usize {
        self.inner.borrow().subscribed.len()
    }

    /// Sequence number of the last tick
    pub fn current_seq(&self) -> u64 {
        self.inner.borrow().seq
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Scheduler Handle
// ============================================================================

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register animations.
/// It won't prevent the scheduler from being dropped; every operation on a
/// dead handle is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    fn with_inner<R>(&self, f: impl FnOnce(&mut SchedulerInner) -> R) -> Option<R> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.borrow_mut();
            f(&mut guard)
        })
    }

    /// True while the scheduler is alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    // =========================================================================
    // Slide Operations
    // =========================================================================

    /// Register a slide; running slides are subscribed immediately
    pub fn register_slide(&self, slide: SlideAnimation) -> Option<AnimationId> {
        self.with_inner(|inner| {
            let running = slide.is_running();
            let id = inner.animations.insert(Animation::Slide(slide));
            if running {
                inner.subscribe(id);
            }
            id
        })
    }

    /// Mutate a registered slide, resubscribing it if it is running afterwards
    pub fn update_slide<R>(
        &self,
        id: AnimationId,
        f: impl FnOnce(&mut SlideAnimation) -> R,
    ) -> Option<R> {
        self.with_inner(|inner| {
            let (result, running) = match inner.animations.get_mut(id) {
                Some(Animation::Slide(slide)) => {
                    let result = f(slide);
                    (result, slide.is_running())
                }
                _ => return None,
            };
            if running {
                inner.subscribe(id);
            } else {
                inner.unsubscribe(id);
            }
            Some(result)
        })
        .flatten()
    }

    /// Read a registered slide
    pub fn slide(&self, id: AnimationId) -> Option<SlideAnimation> {
        self.with_inner(|inner| match inner.animations.get(id) {
            Some(Animation::Slide(slide)) => Some(slide.clone()),
            _ => None,
        })
        .flatten()
    }

    // =========================================================================
    // Spin Operations
    // =========================================================================

    /// Register a spin; running spins are subscribed immediately
    pub fn register_spin(&self, spin: SpinAnimation) -> Option<AnimationId> {
        self.with_inner(|inner| {
            let running = spin.is_running();
            let id = inner.animations.insert(Animation::Spin(spin));
            if running {
                inner.subscribe(id);
            }
            id
        })
    }

    /// Current angle of a registered spin
    pub fn spin_angle(&self, id: AnimationId) -> Option<f32> {
        self.with_inner(|inner| match inner.animations.get(id) {
            Some(Animation::Spin(spin)) => Some(spin.angle()),
            _ => None,
        })
        .flatten()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    pub fn is_subscribed(&self, id: AnimationId) -> bool {
        self.with_inner(|inner| inner.subscribed.contains(&id))
            .unwrap_or(false)
    }

    pub fn unsubscribe(&self, id: AnimationId) {
        self.with_inner(|inner| inner.unsubscribe(id));
    }

    /// Unsubscribe and forget an animation
    pub fn remove(&self, id: AnimationId) {
        self.with_inner(|inner| {
            inner.unsubscribe(id);
            inner.animations.remove(id);
        });
    }
}

// ============================================================================
// Animated Slide
// ============================================================================

/// A finite animation that automatically registers with the scheduler
///
/// Nothing is registered until the first `start`; dropping the wrapper
/// removes the animation.
///
/// # Example
///
/// ```ignore
/// let mut travel = AnimatedSlide::new(handle, 0.0);
/// travel.start(0.0, 1.0, 10);
/// // later, mid-flight
/// travel.retarget(0.0, 10); // reverses from the current value
/// ```
pub struct AnimatedSlide {
    handle: SchedulerHandle,
    id: Option<AnimationId>,
    easing: Easing,
    /// Value used while unregistered
    resting: f32,
}

impl AnimatedSlide {
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        Self {
            handle,
            id: None,
            easing: Easing::default(),
            resting: initial,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn ensure_registered(&mut self) -> Option<AnimationId> {
        if self.id.is_none() {
            let slide = SlideAnimation::new(self.resting).with_easing(self.easing);
            self.id = self.handle.register_slide(slide);
        }
        self.id
    }

    /// Start a transition from `from` to `to`
    pub fn start(&mut self, from: f32, to: f32, total_ticks: u32) {
        match self.ensure_registered() {
            Some(id) => {
                self.handle
                    .update_slide(id, |slide| slide.start(from, to, total_ticks));
            }
            None => {
                tracing::debug!("scheduler gone, slide jumps to target");
                self.resting = to;
            }
        }
    }

    /// Restart toward `to` from the current value
    pub fn retarget(&mut self, to: f32, total_ticks: u32) {
        let current = self.value();
        self.start(current, to, total_ticks);
    }

    /// Set value immediately without animation
    pub fn snap_to(&mut self, value: f32) {
        if let Some(id) = self.id.take() {
            self.handle.remove(id);
        }
        self.resting = value;
    }

    /// Get the current animated value
    pub fn value(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.slide(id))
            .map(|slide| slide.value())
            .unwrap_or(self.resting)
    }

    /// Target of the current or last transition
    pub fn target(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.slide(id))
            .map(|slide| slide.target())
            .unwrap_or(self.resting)
    }

    /// Linear progress of the current transition
    pub fn progress(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.slide(id))
            .map(|slide| slide.progress())
            .unwrap_or(1.0)
    }

    /// Check if the scheduler is still advancing this slide
    pub fn is_animating(&self) -> bool {
        self.id
            .map(|id| self.handle.is_subscribed(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedSlide {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove(id);
        }
    }
}

// ============================================================================
// Animated Spin
// ============================================================================

/// An unbounded rotation that registers with the scheduler while spinning
///
/// `stop` unsubscribes and forgets the animation immediately; the last angle
/// is kept so a restart resumes from it.
pub struct AnimatedSpin {
    handle: SchedulerHandle,
    id: Option<AnimationId>,
    velocity: f32,
    angle: f32,
}

impl AnimatedSpin {
    pub fn new(handle: SchedulerHandle, velocity_deg_per_sec: f32) -> Self {
        Self {
            handle,
            id: None,
            velocity: velocity_deg_per_sec,
            angle: 0.0,
        }
    }

    pub fn start(&mut self) {
        if self.id.is_some() {
            return;
        }
        let mut spin = SpinAnimation::new(self.velocity);
        // Resume from the last angle
        if self.angle > 0.0 {
            let offset_ms = self.angle / spin.velocity() * 1000.0;
            spin.advance(Tick::new(0, offset_ms));
        }
        self.id = self.handle.register_spin(spin);
        if self.id.is_none() {
            tracing::debug!("scheduler gone, spinner stays idle");
        }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            self.angle = self.handle.spin_angle(id).unwrap_or(self.angle);
            self.handle.remove(id);
        }
    }

    /// Current angle in degrees
    pub fn angle(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.spin_angle(id))
            .unwrap_or(self.angle)
    }

    pub fn is_spinning(&self) -> bool {
        self.id
            .map(|id| self.handle.is_subscribed(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedSpin {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove(id);
        }
    }
}
