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

//! Weekly meeting occurrences.

use crate::{error::ModelError, time::TimeRange};

/// A day of the week, numbered from Sunday (`0`) to Saturday (`6`).
///
/// All seven days are representable so that weekend values coming from
/// upstream data survive parsing and are rejected by `Session::new`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Day {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Day {
    /// The five days on which sessions may take place.
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Returns `true` for Monday through Friday.
    #[inline]
    pub fn is_weekday(self) -> bool {
        !matches!(self, Day::Saturday | Day::Sunday)
    }

    /// Returns the numeric value of the day (`0` = Sunday).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English name of the day.
    pub const fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Day::Sunday,
            1 => Day::Monday,
            2 => Day::Tuesday,
            3 => Day::Wednesday,
            4 => Day::Thursday,
            5 => Day::Friday,
            6 => Day::Saturday,
            _ => {
                return Err(ModelError::InvalidTimeValue {
                    unit: "day",
                    value: value.into(),
                });
            }
        })
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a session takes place. Opaque to the overlap logic.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Location {
    pub building: String,
    pub room: String,
}

impl Location {
    #[inline]
    pub fn new(building: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            building: building.into(),
            room: room.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.building, self.room)
    }
}

/// A single weekly meeting: a weekday, a location and a time range.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Session {
    day: Day,
    location: Location,
    time: TimeRange,
}

impl Session {
    /// Creates a new `Session`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidTimeValue` if `day` is Saturday or Sunday.
    pub fn new(day: Day, location: Location, time: TimeRange) -> Result<Self, ModelError> {
        if !day.is_weekday() {
            return Err(ModelError::InvalidTimeValue {
                unit: "day",
                value: day.number().into(),
            });
        }
        Ok(Self {
            day,
            location,
            time,
        })
    }

    #[inline]
    pub fn day(&self) -> Day {
        self.day
    }

    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn time(&self) -> &TimeRange {
        &self.time
    }

    /// Returns `true` if both sessions fall on the same day and their time
    /// ranges overlap.
    #[inline]
    pub fn overlaps(&self, other: &Session) -> bool {
        self.day == other.day && self.time.overlaps(&other.time)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @ {}", self.day, self.time, self.location)
    }
}
