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

//! Partial course-to-section assignments.
//!
//! A `CourseCombination` maps some of the input courses to one of their
//! sections. Combinations are never mutated once built: extending one by a
//! course yields new combinations, one per feasible candidate section, and
//! leaves the original untouched so it can still be recorded as a snapshot.
//!
//! Keys are compared by identity. A course is identified by its address in the
//! caller's catalog and a section by its `Arc` allocation, so two sections with
//! identical content are two different choices.

use lectern_model::{course::Course, section::Section};
use smallvec::SmallVec;
use std::sync::Arc;

/// Contract violations when assigning a section to a course.
///
/// Inside the search driver these are programmer errors; `CourseSet` checks
/// its catalog up front so a correctly driven search never produces them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    /// The course already has a section in this combination.
    #[error("course '{code}' has already been added")]
    DuplicateCourse { code: String },
    /// The section is not one of the course's candidates.
    #[error("course '{code}' does not contain section '{section}'")]
    SectionNotOwned { code: String, section: String },
    /// The same section instance is already assigned to another course.
    #[error("section '{section}' is already used by course '{used_by}'")]
    SectionAlreadyUsed { section: String, used_by: String },
}

/// How a candidate extension is checked for conflicts.
///
/// Both strategies accept exactly the same candidates as long as the
/// combination being extended is itself feasible, which the search guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeasibilityCheck {
    /// Compare only the new section against the `k - 1` already assigned ones.
    #[default]
    Incremental,
    /// Re-check every pair of assigned sections, `O(k^2)` section comparisons.
    Exhaustive,
}

impl std::fmt::Display for FeasibilityCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeasibilityCheck::Incremental => write!(f, "Incremental"),
            FeasibilityCheck::Exhaustive => write!(f, "Exhaustive"),
        }
    }
}

/// A single `course -> section` entry of a combination.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    course: &'a Course,
    section: &'a Arc<Section>,
}

impl<'a> Assignment<'a> {
    #[inline]
    pub fn course(&self) -> &'a Course {
        self.course
    }

    #[inline]
    pub fn section(&self) -> &'a Arc<Section> {
        self.section
    }
}

/// Identity of a mapping, independent of insertion order.
pub(crate) type MappingKey = SmallVec<[(usize, usize); 8]>;

/// A partial or complete assignment of courses to sections.
///
/// # Invariants
///
/// - each course appears at most once;
/// - each section instance is used by at most one course;
/// - every section is a candidate of the course it is assigned to.
///
/// Combinations produced by `add_course` are additionally pairwise
/// non-overlapping. Combinations built with `assign` are not checked for
/// overlaps; use `is_feasible` for that.
#[derive(Debug, Clone, Default)]
pub struct CourseCombination<'a> {
    entries: SmallVec<[Assignment<'a>; 8]>,
}

impl<'a> CourseCombination<'a> {
    /// Creates the empty combination.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of courses assigned.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in the order they were added.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Assignment<'a>> + '_ {
        self.entries.iter()
    }

    /// Returns `true` if this exact course instance is assigned.
    #[inline]
    pub fn contains_course(&self, course: &Course) -> bool {
        self.entries.iter().any(|e| std::ptr::eq(e.course, course))
    }

    /// Returns the section assigned to this exact course instance.
    #[inline]
    pub fn section_for(&self, course: &Course) -> Option<&'a Arc<Section>> {
        self.entries
            .iter()
            .find(|e| std::ptr::eq(e.course, course))
            .map(|e| e.section)
    }

    /// Returns a copy of this combination with `course -> section` added.
    ///
    /// No overlap check is performed; this is the contract-checked building
    /// block used by `add_course`.
    ///
    /// # Errors
    ///
    /// - `DuplicateCourse` if `course` is already assigned;
    /// - `SectionNotOwned` if `section` is not a candidate of `course`;
    /// - `SectionAlreadyUsed` if `section` is assigned to another course.
    pub fn assign(
        &self,
        course: &'a Course,
        section: &'a Arc<Section>,
    ) -> Result<Self, CombinationError> {
        if self.contains_course(course) {
            return Err(CombinationError::DuplicateCourse {
                code: course.code().to_string(),
            });
        }
        if !course.contains_section(section) {
            return Err(CombinationError::SectionNotOwned {
                code: course.code().to_string(),
                section: section.identifier().to_string(),
            });
        }
        if let Some(user) = self
            .entries
            .iter()
            .find(|e| Arc::ptr_eq(e.section, section))
        {
            return Err(CombinationError::SectionAlreadyUsed {
                section: section.identifier().to_string(),
                used_by: user.course.code().to_string(),
            });
        }

        let mut entries = self.entries.clone();
        entries.push(Assignment { course, section });
        Ok(Self { entries })
    }

    /// Returns the feasible one-course extensions of this combination, one per
    /// candidate section of `course` that conflicts with nothing already assigned.
    ///
    /// The returned iterator is lazy and finite; cloning it before iteration
    /// restarts the enumeration.
    ///
    /// # Panics
    ///
    /// Panics if `course` is already assigned, or when a candidate section of
    /// `course` is already used by another course of this combination. Both
    /// indicate a catalog the driver should have rejected.
    pub fn add_course<'b>(
        &'b self,
        course: &'a Course,
        check: FeasibilityCheck,
    ) -> Extensions<'a, 'b> {
        assert!(
            !self.contains_course(course),
            "called `CourseCombination::add_course` with already assigned course '{}'",
            course.code()
        );
        Extensions {
            base: self,
            course,
            sections: course.sections().iter(),
            check,
            generated: 0,
            rejected: 0,
        }
    }

    /// Returns `true` if `section` overlaps none of the assigned sections.
    #[inline]
    pub fn admits(&self, section: &Section) -> bool {
        !self.entries.iter().any(|e| e.section.overlaps(section))
    }

    /// Returns `true` if no two assigned sections overlap, checking all pairs.
    pub fn is_feasible(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, a)| {
            self.entries[i + 1..]
                .iter()
                .all(|b| !a.section.overlaps(b.section))
        })
    }

    /// Returns `true` if both combinations assign the same section instances to
    /// the same course instances, regardless of insertion order.
    pub fn same_mapping(&self, other: &CourseCombination<'_>) -> bool {
        self.mapping_key() == other.mapping_key()
    }

    pub(crate) fn mapping_key(&self) -> MappingKey {
        let mut key: MappingKey = self
            .entries
            .iter()
            .map(|e| {
                (
                    std::ptr::from_ref(e.course) as usize,
                    Arc::as_ptr(e.section) as usize,
                )
            })
            .collect();
        key.sort_unstable();
        key
    }
}

impl std::fmt::Display for CourseCombination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{} -> {}",
                entry.course.code(),
                entry.section.identifier()
            )?;
        }
        write!(f, "}}")
    }
}

/// Lazy enumeration of the feasible extensions of a combination by one course.
///
/// Counts the candidates it has looked at and the ones it pruned, so the
/// driver can report them after the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Extensions<'a, 'b> {
    base: &'b CourseCombination<'a>,
    course: &'a Course,
    sections: std::slice::Iter<'a, Arc<Section>>,
    check: FeasibilityCheck,
    generated: u64,
    rejected: u64,
}

impl Extensions<'_, '_> {
    /// Number of candidate sections examined so far.
    #[inline]
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Number of candidates dropped because they conflict.
    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

impl<'a> Iterator for Extensions<'a, '_> {
    type Item = CourseCombination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for section in self.sections.by_ref() {
            self.generated += 1;

            let candidate = match self.base.assign(self.course, section) {
                Ok(candidate) => candidate,
                Err(err) => panic!(
                    "called `CourseCombination::add_course` on an inconsistent catalog: {err}"
                ),
            };

            let feasible = match self.check {
                FeasibilityCheck::Incremental => self.base.admits(section),
                FeasibilityCheck::Exhaustive => candidate.is_feasible(),
            };

            if feasible {
                return Some(candidate);
            }
            self.rejected += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.sections.len()))
    }
}

impl std::iter::FusedIterator for Extensions<'_, '_> {}
