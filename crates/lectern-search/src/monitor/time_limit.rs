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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget on the search. The clock is read whenever the
//! driver polls `search_command`, which happens once per course round, so the
//! search may overrun the budget by at most one round.

use crate::{
    combination::CourseCombination,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use lectern_model::course::Course;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Instant,
}

impl TimeLimitMonitor {
    /// Creates a monitor whose budget starts counting when the search starts.
    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            start_time: Instant::now(),
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _courses: &[Course]) {
        self.start_time = Instant::now();
    }

    fn on_course_expanded(&mut self, _course: &Course, _depth: usize, _statistics: &SearchStatistics) {}
    fn on_snapshot(&mut self, _combination: &CourseCombination<'_>) {}
    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline]
    fn search_command(&self) -> SearchCommand {
        if self.start_time.elapsed() >= self.time_limit {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}
