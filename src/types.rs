//! Core data types and configuration for the analog clock.
//!
//! This module defines the hand descriptions and the configuration structs
//! the application is constructed with: colors, tick period, hand layout,
//! and easing. Everything carries sensible defaults so the clock can be
//! shown without any configuration at all.

use crate::animation::Easing;
use crate::constants;
use egui::Color32;
use std::time::Duration;

/// The three hands of the clock face.
///
/// Each hand has its own width, length multiplier, and revolution period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    /// The hour hand; one revolution per 12 hours.
    Hour,
    /// The minute hand; one revolution per 60 minutes.
    Minute,
    /// The second hand; one revolution per 60 seconds.
    Second,
}

impl Hand {
    /// All hands in back-to-front draw order (hour is drawn last, on top).
    pub const ALL: [Hand; 3] = [Hand::Second, Hand::Minute, Hand::Hour];

    /// Stroke width of this hand in screen pixels.
    pub fn width(self) -> f32 {
        match self {
            Hand::Hour => constants::HOUR_HAND_WIDTH,
            Hand::Minute => constants::MINUTE_HAND_WIDTH,
            Hand::Second => constants::SECOND_HAND_WIDTH,
        }
    }

    /// Length of this hand as a fraction of the dial radius.
    pub fn length_multiplier(self) -> f32 {
        match self {
            Hand::Hour => constants::HOUR_HAND_LENGTH,
            Hand::Minute => constants::MINUTE_HAND_LENGTH,
            Hand::Second => constants::SECOND_HAND_LENGTH,
        }
    }
}

/// How long one tick lasts before the hands retarget.
///
/// Both observed variants are supported; neither is canonical, so the
/// period is plain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickPeriod {
    /// Recompute angles once per second.
    #[default]
    OneSecond,
    /// Recompute angles twice per second.
    HalfSecond,
}

impl TickPeriod {
    /// The tick period as a `Duration`.
    pub fn duration(self) -> Duration {
        match self {
            TickPeriod::OneSecond => Duration::from_secs(1),
            TickPeriod::HalfSecond => Duration::from_millis(500),
        }
    }

    /// Human-readable name for UI display.
    pub fn label(self) -> &'static str {
        match self {
            TickPeriod::OneSecond => "1 s tick",
            TickPeriod::HalfSecond => "0.5 s tick",
        }
    }
}

/// Where a hand's body sits relative to the dial center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandPivot {
    /// The tail of the hand rests on the dial center and the body extends
    /// outward toward the rim.
    #[default]
    Offset,
    /// The body is centered on the dial center, sweeping through it like a
    /// bar; half the hand points away from the indicated time.
    Centered,
}

impl HandPivot {
    /// Human-readable name for UI display.
    pub fn label(self) -> &'static str {
        match self {
            HandPivot::Offset => "Pivot at tail",
            HandPivot::Centered => "Centered bar",
        }
    }
}

/// Colors for the clock face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockStyle {
    /// Primary color applied to all hands and the boundary ring.
    pub primary: Color32,
    /// Optional override color for the second hand only.
    pub second_hand: Option<Color32>,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            primary: constants::DEFAULT_HAND_COLOR,
            second_hand: None,
        }
    }
}

impl ClockStyle {
    /// Resolves the color to draw the given hand with.
    ///
    /// # Arguments
    ///
    /// * `hand` - The hand being drawn
    ///
    /// # Returns
    ///
    /// The override color for the second hand when one is set; the primary
    /// color otherwise.
    pub fn hand_color(&self, hand: Hand) -> Color32 {
        match hand {
            Hand::Second => self.second_hand.unwrap_or(self.primary),
            Hand::Hour | Hand::Minute => self.primary,
        }
    }
}

/// Full construction-time configuration for the clock.
///
/// All fields can also be adjusted live from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockConfig {
    /// Hand and boundary colors.
    pub style: ClockStyle,
    /// How often the hands retarget.
    pub tick_period: TickPeriod,
    /// Hand layout convention.
    pub pivot: HandPivot,
    /// Easing used for the per-tick hand transition.
    pub easing: Easing,
}
