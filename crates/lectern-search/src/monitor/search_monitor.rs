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
use lectern_model::course::Course;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Lifecycle hooks of a combination search.
///
/// `depth` in `on_course_expanded` is the number of courses processed so far,
/// starting at 1 for the first course.
pub trait SearchMonitor {
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, courses: &[Course]);
    fn on_course_expanded(&mut self, course: &Course, depth: usize, statistics: &SearchStatistics);
    fn on_snapshot(&mut self, combination: &CourseCombination<'_>);
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    fn search_command(&self) -> SearchCommand;
}

impl<M> SearchMonitor for &mut M
where
    M: SearchMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self, courses: &[Course]) {
        (**self).on_enter_search(courses)
    }

    fn on_course_expanded(&mut self, course: &Course, depth: usize, statistics: &SearchStatistics) {
        (**self).on_course_expanded(course, depth, statistics)
    }

    fn on_snapshot(&mut self, combination: &CourseCombination<'_>) {
        (**self).on_snapshot(combination)
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        (**self).on_exit_search(statistics)
    }

    fn search_command(&self) -> SearchCommand {
        (**self).search_command()
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that ignores every event and never terminates the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl SearchMonitor for NoOperationMonitor {
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    fn on_enter_search(&mut self, _courses: &[Course]) {}
    fn on_course_expanded(&mut self, _course: &Course, _depth: usize, _statistics: &SearchStatistics) {}
    fn on_snapshot(&mut self, _combination: &CourseCombination<'_>) {}
    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
