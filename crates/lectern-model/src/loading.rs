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

//! Course catalog loader and writer.
//!
//! This module turns untrusted JSON into validated `Course` values and writes
//! courses back out in the same shape. It is the only place where structural
//! problems (missing fields, wrong types, unknown day numbers) are detected;
//! temporal invariant violations are reported by the model constructors and
//! surface here as `LoadError::Model`.
//!
//! The accepted document is an array of courses:
//!
//! ```json
//! [{"code": "CS101", "sections": [{"identifier": "A1", "sessions": [
//!   {"day": 1, "location": {"building": "SCI", "room": "100"},
//!    "start": {"hour": 9, "minute": 0}, "end": {"hour": 10, "minute": 0}}]}]}]
//! ```
//!
//! Days are numbered 1 (Monday) through 5 (Friday). Rooms may be given as
//! strings or integers. Hours and minutes are JSON numbers; an integral float
//! such as `9.0` is read as `9`, while a fractional one such as `9.5` is
//! rejected as `ModelError::InvalidTimeValue`. Every parsed section becomes its own `Arc<Section>`,
//! so sections are never shared between courses by the loader.

use crate::{
    course::Course,
    error::ModelError,
    section::Section,
    session::{Day, Location, Session},
    time::{Time, TimeRange},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
    sync::Arc,
};

/// The error type for loading and writing course catalogs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O error occurred while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input is not valid JSON or does not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The input is well-formed JSON but carries a value the format forbids.
    #[error("Bad format: {0}")]
    BadFormat(String),
    /// A value violated a temporal invariant of the model.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Serialized form of a `Time`.
///
/// Components are kept as JSON numbers so that integral floats are accepted
/// and fractional ones can be reported by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTime {
    pub hour: Number,
    pub minute: Number,
}

/// Serialized form of a `Location`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLocation {
    pub building: String,
    #[serde(deserialize_with = "string_or_integer")]
    pub room: String,
}

/// Serialized form of a `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSession {
    pub day: i64,
    pub location: RawLocation,
    pub start: RawTime,
    pub end: RawTime,
}

/// Serialized form of a `Section`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    pub identifier: String,
    pub sessions: Vec<RawSession>,
}

/// Serialized form of a `Course`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCourse {
    pub code: String,
    pub sections: Vec<RawSection>,
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Room {
        Text(String),
        Number(i64),
    }

    Ok(match Room::deserialize(deserializer)? {
        Room::Text(text) => text,
        Room::Number(number) => number.to_string(),
    })
}

/// Loader for JSON course catalogs.
///
/// # Examples
///
/// ```rust
/// # use lectern_model::loading::CourseLoader;
///
/// let json = r#"[{"code": "CS101", "sections": [{"identifier": "A1", "sessions": [
///     {"day": 1, "location": {"building": "SCI", "room": 100},
///      "start": {"hour": 9, "minute": 0}, "end": {"hour": 10, "minute": 0}}]}]}]"#;
/// let courses = CourseLoader::new().from_str(json).unwrap();
/// assert_eq!(courses[0].code(), "CS101");
/// assert_eq!(courses[0].sections()[0].sessions()[0].location().room, "100");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CourseLoader {
    reject_empty_courses: bool,
}

impl CourseLoader {
    /// Creates a loader with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, a course without sections is a `BadFormat` error instead
    /// of a course that no complete combination can cover.
    #[inline]
    pub fn reject_empty_courses(mut self, reject: bool) -> Self {
        self.reject_empty_courses = reject;
        self
    }

    /// Parses a catalog from a string slice.
    pub fn from_str(&self, input: &str) -> Result<Vec<Course>, LoadError> {
        let raw: Vec<RawCourse> = serde_json::from_str(input)?;
        self.build(raw)
    }

    /// Parses a catalog from any reader.
    pub fn from_reader<R>(&self, reader: R) -> Result<Vec<Course>, LoadError>
    where
        R: Read,
    {
        let raw: Vec<RawCourse> = serde_json::from_reader(reader)?;
        self.build(raw)
    }

    /// Parses a catalog from a file.
    pub fn from_path<P>(&self, path: P) -> Result<Vec<Course>, LoadError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }

    /// Validates already deserialized raw courses.
    pub fn build(&self, raw: Vec<RawCourse>) -> Result<Vec<Course>, LoadError> {
        raw.into_iter().map(|course| self.build_course(course)).collect()
    }

    fn build_course(&self, raw: RawCourse) -> Result<Course, LoadError> {
        if self.reject_empty_courses && raw.sections.is_empty() {
            return Err(LoadError::BadFormat(format!(
                "course '{}' has no sections",
                raw.code
            )));
        }

        let sections = raw
            .sections
            .into_iter()
            .map(|section| build_section(section).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Course::new(raw.code, sections))
    }
}

fn build_section(raw: RawSection) -> Result<Section, LoadError> {
    let sessions = raw
        .sessions
        .into_iter()
        .map(build_session)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Section::new(raw.identifier, sessions)?)
}

fn build_session(raw: RawSession) -> Result<Session, LoadError> {
    let day = parse_day(raw.day)?;
    let time = TimeRange::new(build_time(raw.start)?, build_time(raw.end)?)?;
    let location = Location::new(raw.location.building, raw.location.room);
    Ok(Session::new(day, location, time)?)
}

fn parse_day(day: i64) -> Result<Day, LoadError> {
    match day {
        1 => Ok(Day::Monday),
        2 => Ok(Day::Tuesday),
        3 => Ok(Day::Wednesday),
        4 => Ok(Day::Thursday),
        5 => Ok(Day::Friday),
        _ => Err(LoadError::BadFormat(format!(
            "Day {} does not represent a day of the week (1 = Monday, 5 = Friday)",
            day
        ))),
    }
}

fn build_time(raw: RawTime) -> Result<Time, LoadError> {
    let hour = time_component("hour", &raw.hour)?;
    let minute = time_component("minute", &raw.minute)?;
    Ok(Time::new(hour, minute)?)
}

/// Reads a whole, non-negative clock component that fits a `u8`.
///
/// Range checks against the clock are left to `Time::new`.
fn time_component(unit: &'static str, number: &Number) -> Result<u8, ModelError> {
    let invalid = || ModelError::InvalidTimeValue {
        unit,
        value: number.as_f64().unwrap_or(f64::NAN),
    };

    if let Some(value) = number.as_i64() {
        return u8::try_from(value).map_err(|_| invalid());
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) => {
            Ok(value as u8)
        }
        _ => Err(invalid()),
    }
}

impl From<Time> for RawTime {
    fn from(time: Time) -> Self {
        Self {
            hour: time.hour().into(),
            minute: time.minute().into(),
        }
    }
}

impl From<&Session> for RawSession {
    fn from(session: &Session) -> Self {
        Self {
            day: session.day().number().into(),
            location: RawLocation {
                building: session.location().building.clone(),
                room: session.location().room.clone(),
            },
            start: session.time().start().into(),
            end: session.time().end().into(),
        }
    }
}

impl From<&Section> for RawSection {
    fn from(section: &Section) -> Self {
        Self {
            identifier: section.identifier().to_string(),
            sessions: section.sessions().iter().map(RawSession::from).collect(),
        }
    }
}

impl From<&Course> for RawCourse {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().to_string(),
            sections: course
                .sections()
                .iter()
                .map(|section| RawSection::from(section.as_ref()))
                .collect(),
        }
    }
}

/// Converts courses into their serialized form.
pub fn to_raw(courses: &[Course]) -> Vec<RawCourse> {
    courses.iter().map(RawCourse::from).collect()
}

/// Serializes courses to a pretty-printed JSON string.
pub fn to_json_string(courses: &[Course]) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(&to_raw(courses))?)
}

/// Writes courses as pretty-printed JSON to `writer` and flushes it.
///
/// # Errors
///
/// Returns `LoadError::Io` if flushing fails, so buffered writers cannot lose
/// output silently.
pub fn write_courses<W>(mut writer: W, courses: &[Course]) -> Result<(), LoadError>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, &to_raw(courses))?;
    writer.flush()?;
    Ok(())
}
