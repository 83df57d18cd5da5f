//! Time-based interpolation between property values.
//!
//! This module provides the generic "animate a value from A to B over a
//! duration" building block the UI uses to sweep the clock hands between
//! ticks, plus the angle helper that picks the short way around the dial.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Easing curves available for tweened transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation; gives a continuous sweep look.
    Linear,
    /// Smooth acceleration and deceleration; gives a ticking look.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in [0, 1] onto the eased curve.
    ///
    /// # Arguments
    ///
    /// * `t` - Linear progress through the transition, clamped by the caller
    ///
    /// # Returns
    ///
    /// Eased progress, also in [0, 1], with `f(0) = 0` and `f(1) = 1`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            // Cubic smoothstep
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Human-readable name for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Easing::Linear => "Sweep",
            Easing::EaseInOut => "Eased",
        }
    }
}

/// A single in-flight transition of one `f32` value.
///
/// A tween is a pure description: it holds the endpoints, duration, and
/// easing curve, and is sampled with the elapsed time since it started.
/// Keeping the wall clock out of the struct makes tweens trivially testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Creates a transition from `start` to `end` taking `duration`.
    ///
    /// # Arguments
    ///
    /// * `start` - Value at elapsed time zero
    /// * `end` - Value once `duration` has elapsed
    /// * `duration` - How long the transition takes
    /// * `easing` - Curve shaping the interpolation
    pub fn new(start: f32, end: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            easing,
        }
    }

    /// Creates an already-finished tween holding `value` at every sample.
    ///
    /// Used for initial state before the first real transition begins.
    pub fn fixed(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear)
    }

    /// Samples the tween at the given elapsed time.
    ///
    /// Samples are clamped: negative-progress samples return `start`, and
    /// samples at or past `duration` return `end`.
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Time since the transition started
    ///
    /// # Returns
    ///
    /// The interpolated value.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.end;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t.clamp(0.0, 1.0));
        self.start + (self.end - self.start) * eased
    }

    /// Returns whether the transition has run its full duration.
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The value this tween settles on.
    pub fn end(&self) -> f32 {
        self.end
    }

    /// The value this tween started from.
    pub fn start(&self) -> f32 {
        self.start
    }
}

/// Signed shortest rotation taking the normalized angle `from` to `to`.
///
/// The result lies in (-π, π]. Animating `from` to `from + shortest_arc(..)`
/// crosses the 0/2π boundary as a small step instead of unwinding a nearly
/// full turn, which is what makes the midnight wraparound look right.
///
/// # Arguments
///
/// * `from` - Starting angle in radians
/// * `to` - Target angle in radians
///
/// # Returns
///
/// The signed delta, positive for clockwise travel on the dial.
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}
