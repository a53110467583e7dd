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

//! Sections: named, self-consistent sets of sessions.

use crate::{error::ModelError, session::Session};
use smallvec::SmallVec;

/// Most sections meet a handful of times per week; keep them inline.
type SessionList = SmallVec<[Session; 4]>;

/// One offering of a course, comprising a fixed set of weekly sessions.
///
/// # Invariants
///
/// No two sessions of the same section overlap. This is checked once by
/// `Section::new` and never again.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Section {
    identifier: String,
    sessions: SessionList,
}

impl Section {
    /// Creates a new `Section`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::IllegalValue` if any two of the given sessions overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_model::section::Section;
    /// # use lectern_model::session::{Day, Location, Session};
    /// # use lectern_model::time::{Time, TimeRange};
    ///
    /// let at = |day, h| {
    ///     let time = TimeRange::new(Time::new(h, 0).unwrap(), Time::new(h + 1, 0).unwrap()).unwrap();
    ///     Session::new(day, Location::default(), time).unwrap()
    /// };
    /// assert!(Section::new("A1", [at(Day::Monday, 9), at(Day::Wednesday, 9)]).is_ok());
    /// assert!(Section::new("A2", [at(Day::Monday, 9), at(Day::Monday, 9)]).is_err());
    /// ```
    pub fn new<I>(identifier: impl Into<String>, sessions: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = Session>,
    {
        let identifier = identifier.into();
        let sessions: SessionList = sessions.into_iter().collect();

        for (i, a) in sessions.iter().enumerate() {
            for b in &sessions[i + 1..] {
                if a.overlaps(b) {
                    return Err(ModelError::IllegalValue(format!(
                        "section '{}' has overlapping sessions ({} and {})",
                        identifier, a, b
                    )));
                }
            }
        }

        Ok(Self {
            identifier,
            sessions,
        })
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[inline]
    pub fn num_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if any session of `self` overlaps any session of `other`.
    ///
    /// Runs in `O(|self.sessions| * |other.sessions|)`.
    pub fn overlaps(&self, other: &Section) -> bool {
        self.sessions
            .iter()
            .any(|a| other.sessions.iter().any(|b| a.overlaps(b)))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Section({}, sessions: {})", self.identifier, self.sessions.len())
    }
}
