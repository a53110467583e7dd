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

//! Random course catalogs.
//!
//! `CourseGenerator` produces synthetic catalogs for tests, benchmarks and the
//! command-line demo. Sessions are placed on a fixed grid (30 minutes by
//! default) on a uniformly random weekday. A drawn session that overlaps an
//! earlier session of the same section is redrawn, so every generated section
//! satisfies the section invariant; if the redraw budget runs out the section
//! simply ends up with fewer sessions.

use crate::{
    course::Course,
    error::ModelError,
    section::Section,
    session::{Day, Location, Session},
    time::{MINUTES_PER_DAY, Time, TimeRange},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;

/// Shape of the generated catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid step in minutes. Must divide a day evenly.
    pub minutes_per_interval: u16,
    pub sections_per_course: usize,
    pub sessions_per_section: usize,
    /// Length of the random codes, identifiers, buildings and rooms.
    pub random_string_length: usize,
    /// How often a session overlapping its section is redrawn before giving up.
    pub max_session_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            minutes_per_interval: 30,
            sections_per_course: 3,
            sessions_per_section: 5,
            random_string_length: 5,
            max_session_attempts: 32,
        }
    }
}

/// Generator of random but valid courses.
///
/// # Examples
///
/// ```rust
/// # use lectern_model::generator::CourseGenerator;
///
/// let mut generator = CourseGenerator::with_seed(7);
/// let courses = generator.generate_courses(4).unwrap();
/// assert_eq!(courses.len(), 4);
/// assert!(courses.iter().all(|c| c.num_sections() == 3));
/// ```
#[derive(Debug, Clone)]
pub struct CourseGenerator<R> {
    rng: R,
    config: GeneratorConfig,
}

impl CourseGenerator<StdRng> {
    /// Creates a reproducible generator from a seed.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R> CourseGenerator<R>
where
    R: Rng,
{
    /// Creates a generator with the default configuration.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `minutes_per_interval` is zero, a whole day, or does not divide a day.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        assert!(
            config.minutes_per_interval > 0
                && config.minutes_per_interval < MINUTES_PER_DAY
                && MINUTES_PER_DAY % config.minutes_per_interval == 0,
            "called `CourseGenerator::with_config` with a grid step that does not divide a day: {}",
            config.minutes_per_interval
        );
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `count` courses.
    pub fn generate_courses(&mut self, count: usize) -> Result<Vec<Course>, ModelError> {
        (0..count).map(|_| self.generate_course()).collect()
    }

    /// Generates a single course with `sections_per_course` fresh sections.
    pub fn generate_course(&mut self) -> Result<Course, ModelError> {
        let code = self.random_string();
        let sections = (0..self.config.sections_per_course)
            .map(|_| self.generate_section().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Course::new(code, sections))
    }

    /// Generates a section whose sessions never overlap each other.
    pub fn generate_section(&mut self) -> Result<Section, ModelError> {
        let identifier = self.random_string();
        let mut sessions: Vec<Session> = Vec::with_capacity(self.config.sessions_per_section);

        for _ in 0..self.config.sessions_per_section {
            for _ in 0..self.config.max_session_attempts {
                let candidate = self.generate_session()?;
                if !sessions.iter().any(|s| s.overlaps(&candidate)) {
                    sessions.push(candidate);
                    break;
                }
            }
        }

        Section::new(identifier, sessions)
    }

    /// Generates a session on a random weekday, aligned to the grid.
    pub fn generate_session(&mut self) -> Result<Session, ModelError> {
        let step = self.config.minutes_per_interval;
        let num_intervals = MINUTES_PER_DAY / step;

        // The last grid point (24:00) is not a valid `Time`, so both bounds
        // stay strictly below it.
        let start = self.rng.random_range(0..num_intervals - 1);
        let end = self.rng.random_range(start + 1..num_intervals);

        let time = TimeRange::new(
            Time::from_minutes(start * step)?,
            Time::from_minutes(end * step)?,
        )?;
        let day = Day::WEEKDAYS[self.rng.random_range(0..Day::WEEKDAYS.len())];
        let location = Location::new(self.random_string(), self.random_string());

        Session::new(day, location, time)
    }

    fn random_string(&mut self) -> String {
        (0..self.config.random_string_length)
            .map(|_| char::from(b'A' + self.rng.random_range(0..26u8)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::to_raw;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_shape() {
        let mut generator = CourseGenerator::with_seed(1);
        let course = generator.generate_course().unwrap();

        assert_eq!(course.code().len(), 5);
        assert!(course.code().chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(course.num_sections(), 3);
        for section in course.sections() {
            assert!(section.num_sessions() >= 1 && section.num_sessions() <= 5);
        }
    }

    #[test]
    fn test_sections_are_self_consistent_and_on_weekdays() {
        let mut generator = CourseGenerator::new(ChaCha8Rng::seed_from_u64(42));
        for course in generator.generate_courses(25).unwrap() {
            for section in course.sections() {
                let sessions = section.sessions();
                for (i, a) in sessions.iter().enumerate() {
                    assert!(a.day().is_weekday());
                    assert_eq!(a.time().start().to_minutes() % 30, 0);
                    assert_eq!(a.time().end().to_minutes() % 30, 0);
                    for b in &sessions[i + 1..] {
                        assert!(!a.overlaps(b));
                    }
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = CourseGenerator::with_seed(99).generate_courses(5).unwrap();
        let b = CourseGenerator::with_seed(99).generate_courses(5).unwrap();
        let c = CourseGenerator::with_seed(100).generate_courses(5).unwrap();
        assert_eq!(to_raw(&a), to_raw(&b));
        assert_ne!(to_raw(&a), to_raw(&c));
    }

    #[test]
    fn test_custom_config() {
        let config = GeneratorConfig {
            minutes_per_interval: 60,
            sections_per_course: 2,
            sessions_per_section: 1,
            random_string_length: 3,
            max_session_attempts: 1,
        };
        let mut generator = CourseGenerator::with_seed(5).with_config(config);
        let course = generator.generate_course().unwrap();
        assert_eq!(course.num_sections(), 2);
        assert_eq!(course.code().len(), 3);
        for section in course.sections() {
            assert_eq!(section.num_sessions(), 1);
            assert_eq!(section.sessions()[0].time().start().minute(), 0);
        }
    }

    #[test]
    #[should_panic(expected = "does not divide a day")]
    fn test_config_rejects_uneven_grid() {
        let config = GeneratorConfig {
            minutes_per_interval: 7,
            ..GeneratorConfig::default()
        };
        let _ = CourseGenerator::with_seed(0).with_config(config);
    }
}
