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

//! # Log Monitor
//!
//! Reports search progress through `tracing`: one `info` event when the
//! search starts, a `debug` event per course round and an `info` summary when
//! it ends. Snapshots are reported at `trace`.

use crate::{
    combination::CourseCombination,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use lectern_model::course::Course;
use tracing::{debug, info, trace};

/// A monitor that never interferes with the search and only emits events.
#[derive(Debug, Clone, Default)]
pub struct LogMonitor {
    total_courses: usize,
}

impl LogMonitor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, courses: &[Course]) {
        self.total_courses = courses.len();
        let candidates: usize = courses.iter().map(Course::num_sections).sum();
        info!(
            courses = courses.len(),
            sections = candidates,
            "starting combination search"
        );
    }

    fn on_course_expanded(&mut self, course: &Course, depth: usize, statistics: &SearchStatistics) {
        debug!(
            course = course.code(),
            depth,
            of = self.total_courses,
            working_set = statistics.working_set,
            pruned = statistics.candidates_pruned,
            "expanded course"
        );
    }

    fn on_snapshot(&mut self, combination: &CourseCombination<'_>) {
        trace!(size = combination.len(), "snapshot {}", combination);
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        info!(
            courses = statistics.courses_processed,
            generated = statistics.candidates_generated,
            pruned = statistics.candidates_pruned,
            snapshots = statistics.snapshots_taken,
            peak_working_set = statistics.peak_working_set,
            elapsed = ?statistics.time_total,
            "combination search finished"
        );
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
