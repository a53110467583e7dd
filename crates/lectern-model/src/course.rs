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

//! Courses: a code plus the candidate sections a student may pick from.

use crate::section::Section;
use std::sync::Arc;

/// An enrollment unit with one or more candidate sections, of which exactly
/// one is chosen in a combination.
///
/// Sections are held as `Arc<Section>` and form a set by identity: passing the
/// same `Arc` twice keeps one entry, while two separately built sections with
/// identical content are kept as distinct candidates. Sections may overlap
/// each other freely.
#[derive(Clone, Debug)]
pub struct Course {
    code: String,
    sections: Vec<Arc<Section>>,
}

impl Course {
    /// Creates a new `Course`, dropping repeated `Arc`s of the same section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_model::course::Course;
    /// # use lectern_model::section::Section;
    /// # use std::sync::Arc;
    ///
    /// let a = Arc::new(Section::new("A", []).unwrap());
    /// let b = Arc::new(Section::new("A", []).unwrap());
    /// let course = Course::new("CS101", [a.clone(), a, b]);
    /// assert_eq!(course.num_sections(), 2);
    /// ```
    pub fn new<I>(code: impl Into<String>, sections: I) -> Self
    where
        I: IntoIterator<Item = Arc<Section>>,
    {
        let mut unique: Vec<Arc<Section>> = Vec::new();
        for section in sections {
            if !unique.iter().any(|s| Arc::ptr_eq(s, &section)) {
                unique.push(section);
            }
        }
        Self {
            code: code.into(),
            sections: unique,
        }
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }

    #[inline]
    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if this exact section instance is a candidate of the course.
    #[inline]
    pub fn contains_section(&self, section: &Arc<Section>) -> bool {
        self.sections.iter().any(|s| Arc::ptr_eq(s, section))
    }

    /// Returns the first section with the given identifier.
    pub fn find_section(&self, identifier: &str) -> Option<&Arc<Section>> {
        self.sections.iter().find(|s| s.identifier() == identifier)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Course({}, sections: {})", self.code, self.sections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(identifier: &str) -> Arc<Section> {
        Arc::new(Section::new(identifier, []).unwrap())
    }

    #[test]
    fn test_course_deduplicates_by_identity_only() {
        let shared = section("S1");
        let twin = section("S1");
        let course = Course::new("MATH", [shared.clone(), twin.clone(), shared.clone()]);

        assert_eq!(course.code(), "MATH");
        assert_eq!(course.num_sections(), 2);
        assert!(course.contains_section(&shared));
        assert!(course.contains_section(&twin));
        assert!(!course.contains_section(&section("S1")));
    }

    #[test]
    fn test_find_section() {
        let course = Course::new("PHYS", [section("L1"), section("L2")]);
        assert_eq!(course.find_section("L2").map(|s| s.identifier()), Some("L2"));
        assert!(course.find_section("L3").is_none());
    }

    #[test]
    fn test_course_without_sections() {
        let course = Course::new("EMPTY", []);
        assert_eq!(course.num_sections(), 0);
        assert_eq!(course.to_string(), "Course(EMPTY, sections: 0)");
    }
}
