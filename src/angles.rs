//! Clock-angle computation: wall-clock time in, three hand angles out.
//!
//! This module holds the one piece of real logic in the application. A
//! [`ClockReading`] carries fractional hours/minutes/seconds where each
//! coarser unit includes the progress of the finer one, so the hands sweep
//! smoothly instead of jumping unit to unit. [`HandAngles`] turns a reading
//! into one normalized rotation per hand. The time source is injected
//! through the [`Clock`] trait so tests can pin the time of day.

use crate::types::Hand;
use chrono::{NaiveTime, Timelike};
use std::f32::consts::TAU;

/// A source of the current local time of day.
pub trait Clock {
    /// Returns the current time of day.
    fn now(&self) -> NaiveTime;
}

/// System clock implementation reading local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A clock pinned to a single time of day.
///
/// Useful in tests and previews where the hands should hold still.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

// Largest f32 values strictly below the exclusive bounds of the reading
// fields. The float conversion can round a component up to the bound itself
// (999_999_999 ns alone rounds to 1.0e9 as f32), so each field is clamped
// after conversion, not before.
const JUST_UNDER_SIXTY: f32 = 59.999996;
const JUST_UNDER_TWENTY_FOUR: f32 = 23.999998;

/// A wall-clock timestamp decomposed into fractional calendar components.
///
/// Each field incorporates the fractional carry of the next finer unit:
/// seconds contribute to minutes, minutes contribute to hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    /// Hours of the day in [0, 24), including fractional minutes.
    pub hours: f32,
    /// Minutes of the hour in [0, 60), including fractional seconds.
    pub minutes: f32,
    /// Seconds of the minute in [0, 60), including sub-second precision.
    pub seconds: f32,
}

impl ClockReading {
    /// Decomposes a time of day into fractional components.
    ///
    /// # Arguments
    ///
    /// * `time` - The time of day to decompose
    ///
    /// # Returns
    ///
    /// A reading whose fields all lie inside their natural ranges.
    pub fn from_time(time: NaiveTime) -> Self {
        // chrono surfaces a leap second as nanosecond overflow. The fold
        // back into range happens on the f32 side: each field is clamped
        // just below its bound after the conversion, which also catches
        // sub-second values that round up to a whole unit.
        let seconds =
            (time.second() as f32 + time.nanosecond() as f32 / 1e9).min(JUST_UNDER_SIXTY);
        let minutes = (time.minute() as f32 + seconds / 60.0).min(JUST_UNDER_SIXTY);
        let hours = (time.hour() as f32 + minutes / 60.0).min(JUST_UNDER_TWENTY_FOUR);
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

/// The three hand rotations for one instant, in radians.
///
/// Recomputed on every tick and discarded on the next; there is no
/// persistent identity. Each angle is `2π × progress` where progress is the
/// hand's fraction of its full revolution (12 h, 60 min, 60 s), normalized
/// to [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    /// Rotation of the hour hand.
    pub hour: f32,
    /// Rotation of the minute hand.
    pub minute: f32,
    /// Rotation of the second hand.
    pub second: f32,
}

impl HandAngles {
    /// Computes the three angles from a reading.
    ///
    /// The hour hand folds the 24-hour reading onto the 12-hour dial, so
    /// 06:00 and 18:00 both point straight down.
    ///
    /// # Arguments
    ///
    /// * `reading` - Fractional calendar components for the instant
    ///
    /// # Returns
    ///
    /// One normalized angle per hand.
    pub fn from_reading(reading: &ClockReading) -> Self {
        let seconds_progress = reading.seconds / 60.0;
        let minutes_progress = reading.minutes / 60.0;
        let hours_progress = (reading.hours % 12.0) / 12.0;
        // Progress stays below 1 for any in-range reading, but normalize
        // anyway so the [0, 2π) invariant survives rounding at the bound.
        Self {
            hour: normalize_angle(TAU * hours_progress),
            minute: normalize_angle(TAU * minutes_progress),
            second: normalize_angle(TAU * seconds_progress),
        }
    }

    /// Returns the angle of the given hand.
    pub fn get(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// Normalizes an angle into [0, 2π).
///
/// # Arguments
///
/// * `angle` - Any angle in radians, including negative values
///
/// # Returns
///
/// The equivalent angle in [0, 2π).
pub fn normalize_angle(angle: f32) -> f32 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid of a value just below a multiple of TAU can round to TAU
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Converts a timestamp into the three hand rotations.
///
/// The computer owns its time source; `current_angles` reads the clock and
/// runs the pure computation in [`angles_at`](Self::angles_at).
pub struct ClockAngleComputer {
    clock: Box<dyn Clock>,
}

impl Default for ClockAngleComputer {
    fn default() -> Self {
        Self::new(Box::new(SystemClock::new()))
    }
}

impl ClockAngleComputer {
    /// Creates a computer reading from the given time source.
    ///
    /// # Arguments
    ///
    /// * `clock` - The time source to sample on each tick
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Samples the time source.
    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    /// Samples the time source and computes the hand angles for it.
    pub fn current_angles(&self) -> HandAngles {
        Self::angles_at(self.clock.now())
    }

    /// Pure angle computation for an arbitrary time of day.
    ///
    /// # Arguments
    ///
    /// * `time` - The time of day to compute hand rotations for
    ///
    /// # Returns
    ///
    /// One normalized angle per hand.
    pub fn angles_at(time: NaiveTime) -> HandAngles {
        HandAngles::from_reading(&ClockReading::from_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-4;

    fn at(hour: u32, min: u32, sec: u32) -> HandAngles {
        ClockAngleComputer::angles_at(NaiveTime::from_hms_opt(hour, min, sec).unwrap())
    }

    #[test]
    fn midnight_zeroes_all_hands() {
        let angles = at(0, 0, 0);
        assert_eq!(angles.hour, 0.0);
        assert_eq!(angles.minute, 0.0);
        assert_eq!(angles.second, 0.0);
    }

    #[test]
    fn half_minute_puts_second_hand_at_six() {
        let angles = at(0, 0, 30);
        assert!((angles.second - PI).abs() < EPSILON);
    }

    #[test]
    fn half_hour_puts_minute_hand_at_six() {
        let angles = at(0, 30, 0);
        assert!((angles.minute - PI).abs() < EPSILON);
        assert_eq!(angles.second, 0.0);
    }

    #[test]
    fn hour_hand_folds_onto_twelve_hour_dial() {
        assert!((at(6, 0, 0).hour - PI).abs() < EPSILON);
        assert!((at(18, 0, 0).hour - PI).abs() < EPSILON);
    }

    #[test]
    fn all_angles_stay_in_range() {
        for hour in 0..24 {
            for min in (0..60).step_by(7) {
                for sec in (0..60).step_by(11) {
                    let angles = at(hour, min, sec);
                    for angle in [angles.hour, angles.minute, angles.second] {
                        assert!(
                            (0.0..TAU).contains(&angle),
                            "{angle} out of range at {hour:02}:{min:02}:{sec:02}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn coarser_hands_carry_finer_progress() {
        // At hh:mm:30 the minute hand sits halfway between minute marks.
        let reading =
            ClockReading::from_time(NaiveTime::from_hms_opt(3, 15, 30).unwrap());
        assert!((reading.minutes - 15.5).abs() < EPSILON);
        assert!((reading.hours - (3.0 + 15.5 / 60.0)).abs() < EPSILON);
    }

    #[test]
    fn angles_are_monotonic_within_a_revolution() {
        // Second hand over one minute
        let mut previous = -1.0;
        for sec in 0..60 {
            let angle = at(10, 15, sec).second;
            assert!(angle > previous, "second hand regressed at :{sec:02}");
            previous = angle;
        }
        // Hour hand over one 12-hour window
        let mut previous = -1.0;
        for hour in 0..12 {
            let angle = at(hour, 0, 0).hour;
            assert!(angle > previous, "hour hand regressed at {hour:02}:00");
            previous = angle;
        }
    }

    #[test]
    fn wraparound_is_a_discontinuity_at_the_boundary() {
        let late = ClockAngleComputer::angles_at(
            NaiveTime::from_hms_milli_opt(23, 59, 59, 900).unwrap(),
        );
        let midnight = at(0, 0, 0);
        // Just before midnight every hand is close to a full turn...
        assert!(late.second > TAU - 0.05);
        assert!(late.minute > TAU - 0.05);
        assert!(late.hour > TAU - 0.05);
        // ...and at midnight each snaps back across the 0/2π boundary.
        assert_eq!(midnight.second, 0.0);
        assert_eq!(midnight.minute, 0.0);
        assert_eq!(midnight.hour, 0.0);
    }

    #[test]
    fn leap_second_overflow_folds_back_into_range() {
        // chrono encodes 23:59:60.5 as second 59 with 1.5e9 nanoseconds
        let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        let reading = ClockReading::from_time(leap);
        assert!(reading.seconds < 60.0);
        assert!(reading.minutes < 60.0);
        assert!(reading.hours < 24.0);
        let angles = HandAngles::from_reading(&reading);
        for angle in [angles.hour, angles.minute, angles.second] {
            assert!((0.0..TAU).contains(&angle), "{angle} out of range");
        }
    }

    #[test]
    fn nanoseconds_near_a_whole_second_stay_in_range() {
        // 999_999_999 ns rounds up to a full second as f32; the reading
        // must still sit strictly inside its documented field ranges.
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
        let reading = ClockReading::from_time(time);
        assert!(reading.seconds < 60.0, "seconds was {}", reading.seconds);
        assert!(reading.minutes < 60.0, "minutes was {}", reading.minutes);
        assert!(reading.hours < 24.0, "hours was {}", reading.hours);
        let angles = HandAngles::from_reading(&reading);
        for angle in [angles.hour, angles.minute, angles.second] {
            assert!((0.0..TAU).contains(&angle), "{angle} out of range");
        }
    }

    #[test]
    fn normalize_angle_covers_negative_input() {
        assert!((normalize_angle(-PI) - PI).abs() < EPSILON);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!(normalize_angle(TAU) < EPSILON);
        assert!((normalize_angle(2.5 * TAU) - 0.5 * TAU).abs() < EPSILON);
    }

    #[test]
    fn fixed_clock_reports_its_pinned_time() {
        let time = NaiveTime::from_hms_opt(9, 41, 0).unwrap();
        let computer = ClockAngleComputer::new(Box::new(FixedClock(time)));
        assert_eq!(computer.current_time(), time);
        assert_eq!(computer.current_angles(), ClockAngleComputer::angles_at(time));
    }

    #[test]
    fn system_clock_returns_a_valid_time() {
        let now = SystemClock::new().now();
        // Just verify it produces in-range angles
        let angles = ClockAngleComputer::angles_at(now);
        assert!((0.0..TAU).contains(&angles.second));
    }
}
