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

use crate::time::Time;

/// Domain-invariant violations raised while constructing model values.
///
/// Each variant is produced exactly once, by the constructor of the offending
/// value. A value that exists is internally consistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A clock component (hour, minute, minutes-since-midnight) or a day value
    /// is out of range.
    #[error("Cannot create a valid time with provided {unit} value: {value}")]
    InvalidTimeValue {
        /// The unit that was rejected (`"hour"`, `"minute"`, `"minutes"`, `"day"`).
        unit: &'static str,
        /// The rejected raw value; fractional values are kept as given.
        value: f64,
    },
    /// A time range whose start is not strictly before its end.
    #[error("Provided time range is invalid. Start time ({start}) must be before end time ({end}).")]
    InvalidTimeRange {
        /// The requested start.
        start: Time,
        /// The requested end.
        end: Time,
    },
    /// A composite value violates its consistency rule, e.g. a section whose
    /// sessions overlap each other.
    #[error("Illegal value: {0}")]
    IllegalValue(String),
}
