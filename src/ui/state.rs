//! Application state for the clock window.
//!
//! This module contains the main `ClockApp` struct: the live configuration,
//! the injected time source, and the per-hand transitions currently in
//! flight. Behavior (tick scheduling, toolbar, painting) lives in the
//! sibling modules.

use crate::angles::{Clock, ClockAngleComputer};
use crate::animation::Tween;
use crate::types::{ClockConfig, Hand};
use std::time::Instant;

/// The analog clock application.
///
/// All state is owned by this single instance and written only from the
/// frame callback, so no synchronization is needed.
pub struct ClockApp {
    /// Live configuration: colors, tick period, hand layout, easing.
    pub config: ClockConfig,
    /// Converts sampled wall-clock time into hand angles.
    pub computer: ClockAngleComputer,
    /// When the current tick started; `None` before the first tick.
    pub last_tick: Option<Instant>,
    /// In-flight transition per hand, indexed by [`Hand`] discriminant.
    pub tweens: [Tween; 3],
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::with_computer(ClockAngleComputer::default())
    }
}

impl ClockApp {
    /// Creates an app with the given configuration, reading the system clock.
    ///
    /// # Arguments
    ///
    /// * `config` - Construction-time configuration; see [`ClockConfig`]
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates an app reading time from the given source.
    ///
    /// Used by tests to pin the displayed time.
    ///
    /// # Arguments
    ///
    /// * `clock` - The time source to sample on each tick
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::with_computer(ClockAngleComputer::new(clock))
    }

    fn with_computer(computer: ClockAngleComputer) -> Self {
        Self {
            config: ClockConfig::default(),
            computer,
            last_tick: None,
            tweens: [Tween::fixed(0.0); 3],
        }
    }

    /// Shared access to one hand's in-flight transition.
    pub fn tween(&self, hand: Hand) -> &Tween {
        &self.tweens[hand as usize]
    }
}
