//! Generic tween driver and interpolation traits.

use glam::{Quat, Vec2, Vec3};

use crate::easing::EaseType;

/// A cooperatively scheduled animation, advanced once per host frame.
///
/// One `tick` call replaces one coroutine resume: the host calls `tick`
/// with the current frame delta until it returns `false`.
pub trait Animation {
    /// Advance the animation by `dt` seconds.
    ///
    /// Returns `true` while the animation is still running, `false` once it
    /// has reached its end state. Ticking a finished animation is a no-op.
    fn tick(&mut self, dt: f32) -> bool;

    /// Whether the animation has reached its end state.
    fn is_finished(&self) -> bool;
}

/// Trait for types that can be interpolated (tweened).
pub trait Tweenable: Copy {
    /// Interpolation between two values.
    /// `t` should be 0.0 to 1.0, where 0.0 returns `a` and 1.0 returns `b`.
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Tweenable for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Tweenable for Vec2 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

impl Tweenable for Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

impl Tweenable for Quat {
    /// Spherical interpolation, constant angular velocity.
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.slerp(b, t)
    }
}

/// The generic tween driver.
///
/// Steps a normalized progress value from 0 to 1 (or back) over `duration`
/// seconds, passing each eased sample to the apply callback. The callback
/// owns the target mutation; the driver owns no target state.
///
/// When a tick overshoots past 0 or 1 (frame deltas are unpredictable), the
/// callback is invoked exactly once with the eased value at the exact
/// boundary, so the final sample is always clean regardless of overshoot.
pub struct Tween {
    t: f32,
    direction: f32,
    duration: f32,
    easing: EaseType,
    apply: Box<dyn FnMut(f32)>,
    finished: bool,
}

impl Tween {
    /// Create a tween over `duration` seconds with a linear curve, starting
    /// at progress 0 and running forward.
    ///
    /// A non-positive `duration` is degenerate but defined: the first tick
    /// already leaves [0,1], collapsing to a single boundary invocation.
    pub fn new(duration: f32, apply: impl FnMut(f32) + 'static) -> Self {
        Self {
            t: 0.0,
            direction: 1.0,
            duration,
            easing: EaseType::default(),
            apply: Box::new(apply),
            finished: false,
        }
    }

    /// Replace the easing curve (default is `EaseType::Linear`).
    pub fn with_easing(mut self, easing: EaseType) -> Self {
        self.easing = easing;
        self
    }

    /// Start from an arbitrary progress value instead of 0.
    ///
    /// Starting at or past a boundary yields exactly one callback
    /// invocation, at that eased boundary.
    pub fn starting_at(mut self, t: f32) -> Self {
        self.t = t;
        self
    }

    /// Run progress from 1 toward 0. Pair with `starting_at(1.0)`.
    pub fn backwards(mut self) -> Self {
        self.direction = -1.0;
        self
    }

    /// Current normalized progress (may sit slightly outside [0,1] after
    /// the final overshooting tick).
    pub fn progress(&self) -> f32 {
        self.t
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        self.t += (dt / self.duration) * self.direction;
        if (0.0..=1.0).contains(&self.t) {
            (self.apply)(self.easing.apply(self.t));
            true
        } else {
            // Overshot: snap the final sample to the exact boundary.
            let boundary = if self.t < 0.0 { 0.0 } else { 1.0 };
            (self.apply)(self.easing.apply(boundary));
            self.finished = true;
            false
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
