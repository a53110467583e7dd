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

use crate::{combination::CourseCombination, stats::SearchStatistics};

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every course was processed.
    Exhausted,
    /// A monitor requested termination before all courses were processed.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a search after termination.
///
/// When the search was aborted, `combinations` holds what was found up to that
/// point: the recorded snapshots plus the working combinations of the last
/// completed course round that meet the minimum size.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    combinations: Vec<CourseCombination<'a>>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<'a> SearchOutcome<'a> {
    #[inline]
    pub fn exhausted(
        combinations: Vec<CourseCombination<'a>>,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            combinations,
            termination_reason: TerminationReason::Exhausted,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(
        combinations: Vec<CourseCombination<'a>>,
        reason: R,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            combinations,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the combinations found, in discovery order.
    #[inline]
    pub fn combinations(&self) -> &[CourseCombination<'a>] {
        &self.combinations
    }

    /// Consumes the outcome, returning the combinations.
    #[inline]
    pub fn into_combinations(self) -> Vec<CourseCombination<'a>> {
        self.combinations
    }

    /// Returns why the search stopped.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Exhausted)
    }

    /// Iterates over the combinations that assign exactly `num_courses`
    /// courses, i.e. every course of a catalog of that size.
    pub fn complete_combinations(
        &self,
        num_courses: usize,
    ) -> impl Iterator<Item = &CourseCombination<'a>> + '_ {
        self.combinations
            .iter()
            .filter(move |c| c.len() == num_courses)
    }

    /// Size of the largest combination found, if any.
    pub fn largest_size(&self) -> Option<usize> {
        self.combinations.iter().map(CourseCombination::len).max()
    }
}

impl std::fmt::Display for SearchOutcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchOutcome(combinations: {}, reason: {})",
            self.combinations.len(),
            self.termination_reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_outcome() {
        let outcome = SearchOutcome::exhausted(
            vec![CourseCombination::new()],
            SearchStatistics::default(),
        );
        assert!(outcome.is_exhausted());
        assert_eq!(outcome.largest_size(), Some(0));
        assert_eq!(outcome.complete_combinations(0).count(), 1);
        assert_eq!(
            outcome.to_string(),
            "SearchOutcome(combinations: 1, reason: Exhausted)"
        );
    }

    #[test]
    fn test_aborted_outcome_keeps_reason() {
        let outcome = SearchOutcome::aborted(Vec::new(), "stop", SearchStatistics::default());
        assert!(!outcome.is_exhausted());
        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("stop".to_string())
        );
        assert_eq!(outcome.largest_size(), None);
        assert!(outcome.into_combinations().is_empty());
    }
}
