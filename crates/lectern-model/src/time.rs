// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Clock values and time ranges.
//!
//! `Time` is a minute-granularity time of day. `TimeRange` is a non-empty
//! closed-open range `[start, end)` of such times, backed by a
//! `ClosedOpenInterval<u16>` of minutes since midnight. The overlap predicate
//! on `TimeRange` is the only feasibility test the combination search uses.

use crate::error::ModelError;
use lectern_core::math::interval::ClosedOpenInterval;

/// Number of hours in a day.
pub const HOURS_PER_DAY: u8 = 24;
/// Number of minutes in an hour.
pub const MINUTES_PER_HOUR: u8 = 60;
/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = HOURS_PER_DAY as u16 * MINUTES_PER_HOUR as u16;

/// A validated time of day with minute granularity.
///
/// The derived order compares `(hour, minute)` lexicographically, which is the
/// same order as minutes since midnight.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: Time = Time { hour: 0, minute: 0 };

    /// Creates a new `Time`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidTimeValue` if `hour >= 24` or `minute >= 60`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_model::time::Time;
    ///
    /// let t = Time::new(6, 30).unwrap();
    /// assert_eq!(t.to_minutes(), 390);
    /// assert!(Time::new(24, 0).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> Result<Self, ModelError> {
        if hour >= HOURS_PER_DAY {
            return Err(ModelError::InvalidTimeValue {
                unit: "hour",
                value: hour.into(),
            });
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(ModelError::InvalidTimeValue {
                unit: "minute",
                value: minute.into(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Creates a `Time` from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidTimeValue` if `minutes >= 1440`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_model::time::Time;
    ///
    /// let t = Time::from_minutes(500).unwrap();
    /// assert_eq!((t.hour(), t.minute()), (8, 20));
    /// ```
    pub fn from_minutes(minutes: u16) -> Result<Self, ModelError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ModelError::InvalidTimeValue {
                unit: "minutes",
                value: minutes.into(),
            });
        }
        let per_hour = u16::from(MINUTES_PER_HOUR);
        Ok(Self {
            hour: (minutes / per_hour) as u8,
            minute: (minutes % per_hour) as u8,
        })
    }

    /// Returns the hour component, in `0..24`.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component, in `0..60`.
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes since midnight.
    #[inline]
    pub const fn to_minutes(&self) -> u16 {
        self.hour as u16 * MINUTES_PER_HOUR as u16 + self.minute as u16
    }

    /// Returns `true` if `self` occurs strictly before `other`.
    #[inline]
    pub fn is_before(&self, other: Time) -> bool {
        self.to_minutes() < other.to_minutes()
    }

    /// Returns `true` if `self` occurs strictly after `other`.
    #[inline]
    pub fn is_after(&self, other: Time) -> bool {
        self.to_minutes() > other.to_minutes()
    }

    /// Returns `true` if both times denote the same minute.
    #[inline]
    pub fn is_equal_to(&self, other: Time) -> bool {
        self.to_minutes() == other.to_minutes()
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A non-empty range of times `[start, end)`.
///
/// # Invariants
///
/// `start.is_before(end)` holds; zero-length ranges are rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimeRange {
    start: Time,
    end: Time,
}

impl TimeRange {
    /// Creates a new `TimeRange`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidTimeRange` unless `start` is strictly before `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_model::time::{Time, TimeRange};
    ///
    /// let nine = Time::new(9, 0).unwrap();
    /// let ten = Time::new(10, 0).unwrap();
    /// assert!(TimeRange::new(nine, ten).is_ok());
    /// assert!(TimeRange::new(nine, nine).is_err());
    /// ```
    pub fn new(start: Time, end: Time) -> Result<Self, ModelError> {
        if !start.is_before(end) {
            return Err(ModelError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start.
    #[inline]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the exclusive end.
    #[inline]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Returns the length of the range in minutes. Always positive.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.to_minutes() - self.start.to_minutes()
    }

    /// Returns the range as an interval of minutes since midnight.
    #[inline]
    pub fn as_interval(&self) -> ClosedOpenInterval<u16> {
        ClosedOpenInterval::new_unchecked(self.start.to_minutes(), self.end.to_minutes())
    }

    /// Returns `true` if `time` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, time: Time) -> bool {
        self.as_interval().contains_point(time.to_minutes())
    }

    /// Returns `true` if the two ranges share at least one minute.
    ///
    /// Ranges that only touch at a boundary (`[06:00, 12:00)` and
    /// `[12:00, 18:00)`) do not overlap. Nested, partially overlapping and
    /// identical ranges do. The predicate is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_model::time::{Time, TimeRange};
    ///
    /// let t = |h| Time::new(h, 0).unwrap();
    /// let morning = TimeRange::new(t(6), t(12)).unwrap();
    /// let afternoon = TimeRange::new(t(12), t(18)).unwrap();
    /// let midday = TimeRange::new(t(0), t(13)).unwrap();
    /// assert!(!morning.overlaps(&afternoon));
    /// assert!(midday.overlaps(&afternoon));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        let overlaps = self.start.is_before(other.end) && self.end.is_after(other.start);
        debug_assert_eq!(
            overlaps,
            self.as_interval().intersects(other.as_interval()),
            "called `TimeRange::overlaps` with ranges whose interval view disagrees"
        );
        overlaps
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(hour: u8, minute: u8) -> Time {
        Time::new(hour, minute).unwrap()
    }

    fn range(start: Time, end: Time) -> TimeRange {
        TimeRange::new(start, end).unwrap()
    }

    #[test]
    fn test_time_valid_values() {
        let base = t(6, 30);
        assert_eq!(base.hour(), 6);
        assert_eq!(base.minute(), 30);
        assert!(Time::new(23, 59).is_ok());
        assert!(Time::new(0, 0).is_ok());
    }

    #[test]
    fn test_time_rejects_out_of_range_components() {
        assert_eq!(
            Time::new(24, 0),
            Err(ModelError::InvalidTimeValue {
                unit: "hour",
                value: 24.0
            })
        );
        assert_eq!(
            Time::new(0, 60),
            Err(ModelError::InvalidTimeValue {
                unit: "minute",
                value: 60.0
            })
        );
    }

    #[test]
    fn test_time_ordering_predicates() {
        let base = t(6, 30);
        let earlier_hour = t(0, 30);
        let earlier_minute = t(6, 15);
        let later_hour = t(12, 30);
        let later_minute = t(6, 45);

        assert!(base.is_before(later_hour));
        assert!(base.is_before(later_minute));
        assert!(!base.is_before(earlier_hour));
        assert!(!base.is_before(earlier_minute));
        assert!(!base.is_before(base));

        assert!(base.is_after(earlier_hour));
        assert!(base.is_after(earlier_minute));
        assert!(!base.is_after(later_hour));
        assert!(!base.is_after(base));

        assert!(base.is_equal_to(base));
        assert!(!base.is_equal_to(later_minute));
        assert!(earlier_hour < base && base < later_hour);
    }

    #[test]
    fn test_time_minutes_conversion() {
        assert_eq!(t(5, 5).to_minutes(), 5 * 60 + 5);
        assert_eq!(Time::from_minutes(500), Ok(t(8, 20)));
        assert_eq!(Time::from_minutes(0), Ok(Time::MIDNIGHT));
        assert_eq!(Time::from_minutes(1439), Ok(t(23, 59)));
        assert!(matches!(
            Time::from_minutes(MINUTES_PER_DAY),
            Err(ModelError::InvalidTimeValue { unit: "minutes", .. })
        ));
    }

    #[test]
    fn test_time_display_is_zero_padded() {
        let expected = [
            (t(0, 0), "00:00"),
            (t(11, 11), "11:11"),
            (t(11, 0), "11:00"),
            (t(1, 0), "01:00"),
            (t(10, 0), "10:00"),
            (t(0, 11), "00:11"),
            (t(0, 1), "00:01"),
            (t(0, 10), "00:10"),
        ];
        for (time, text) in expected {
            assert_eq!(time.to_string(), text);
        }
    }

    #[test]
    fn test_range_construction() {
        let r = range(t(6, 15), t(18, 45));
        assert_eq!(r.start(), t(6, 15));
        assert_eq!(r.end(), t(18, 45));
        assert_eq!(r.duration_minutes(), 750);
        assert!(TimeRange::new(t(1, 0), t(2, 0)).is_ok());
        assert!(TimeRange::new(t(0, 1), t(0, 2)).is_ok());
    }

    #[test]
    fn test_range_rejects_reversed_and_zero_length() {
        assert!(matches!(
            TimeRange::new(t(2, 0), t(1, 0)),
            Err(ModelError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            TimeRange::new(t(0, 2), t(0, 1)),
            Err(ModelError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            TimeRange::new(t(6, 15), t(6, 15)),
            Err(ModelError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn test_range_overlaps() {
        let midnight_to_morning = range(t(0, 0), t(6, 0));
        let midnight_to_noon = range(t(0, 0), t(12, 0));
        let midnight_to_evening = range(t(0, 0), t(18, 0));
        let morning_to_noon = range(t(6, 0), t(12, 0));
        let morning_to_evening = range(t(6, 0), t(18, 0));
        let noon_to_evening = range(t(12, 0), t(18, 0));

        // Partial overlap
        assert!(midnight_to_noon.overlaps(&morning_to_evening));
        assert!(morning_to_evening.overlaps(&midnight_to_noon));

        // Nested, including shared boundaries
        for inner in [&morning_to_noon, &midnight_to_morning, &noon_to_evening] {
            assert!(midnight_to_evening.overlaps(inner));
            assert!(inner.overlaps(&midnight_to_evening));
        }

        // Identical
        for r in [
            &midnight_to_morning,
            &midnight_to_noon,
            &midnight_to_evening,
            &morning_to_noon,
            &morning_to_evening,
            &noon_to_evening,
        ] {
            assert!(r.overlaps(r));
        }

        // Adjacent
        assert!(!midnight_to_morning.overlaps(&morning_to_noon));
        assert!(!morning_to_noon.overlaps(&noon_to_evening));

        // Separated
        assert!(!midnight_to_morning.overlaps(&noon_to_evening));
    }

    #[test]
    fn test_range_contains_and_display() {
        let r = range(t(9, 0), t(10, 30));
        assert!(r.contains(t(9, 0)));
        assert!(r.contains(t(10, 29)));
        assert!(!r.contains(t(10, 30)));
        assert_eq!(r.to_string(), "09:00-10:30");
        assert_eq!(r.as_interval(), ClosedOpenInterval::new(540, 630));
    }

    fn arb_range() -> impl Strategy<Value = TimeRange> {
        (0u16..MINUTES_PER_DAY - 1)
            .prop_flat_map(|start| (Just(start), start + 1..MINUTES_PER_DAY))
            .prop_map(|(start, end)| {
                TimeRange::new(
                    Time::from_minutes(start).unwrap(),
                    Time::from_minutes(end).unwrap(),
                )
                .unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_overlaps_is_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_overlaps_matches_interval_intersection(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.overlaps(&b), a.as_interval().intersects(b.as_interval()));
        }
    }
}
