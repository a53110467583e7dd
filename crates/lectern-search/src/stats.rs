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

use std::time::Duration;

/// Counters collected while combining courses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Courses whose extension round completed.
    pub courses_processed: u64,
    /// Candidate sections examined across all extension attempts.
    pub candidates_generated: u64,
    /// Candidates dropped because they overlap an assigned section.
    pub candidates_pruned: u64,
    /// Combinations carried forward unchanged because they reached the size cap.
    pub combinations_frozen: u64,
    /// Working combinations that had no feasible extension for a course.
    pub branches_dropped: u64,
    /// Intermediate combinations recorded before extension.
    pub snapshots_taken: u64,
    /// Working combinations after the most recent course round.
    pub working_set: u64,
    /// Largest working list observed after a course round.
    pub peak_working_set: u64,
    /// Results discarded because an identical mapping was already present.
    pub duplicates_removed: u64,
    /// Wall-clock time of the whole search.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_course_processed(&mut self, working_set: usize) {
        self.courses_processed = self.courses_processed.saturating_add(1);
        self.working_set = working_set as u64;
        self.peak_working_set = self.peak_working_set.max(self.working_set);
    }

    #[inline]
    pub fn on_candidates(&mut self, generated: u64, pruned: u64) {
        self.candidates_generated = self.candidates_generated.saturating_add(generated);
        self.candidates_pruned = self.candidates_pruned.saturating_add(pruned);
    }

    #[inline]
    pub fn on_frozen(&mut self) {
        self.combinations_frozen = self.combinations_frozen.saturating_add(1);
    }

    #[inline]
    pub fn on_branch_dropped(&mut self) {
        self.branches_dropped = self.branches_dropped.saturating_add(1);
    }

    #[inline]
    pub fn on_snapshot(&mut self) {
        self.snapshots_taken = self.snapshots_taken.saturating_add(1);
    }

    #[inline]
    pub fn on_duplicates_removed(&mut self, count: usize) {
        self.duplicates_removed = self.duplicates_removed.saturating_add(count as u64);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lectern Search Statistics:")?;
        writeln!(f, "  Courses processed:    {}", self.courses_processed)?;
        writeln!(f, "  Candidates generated: {}", self.candidates_generated)?;
        writeln!(f, "  Candidates pruned:    {}", self.candidates_pruned)?;
        writeln!(f, "  Frozen at size cap:   {}", self.combinations_frozen)?;
        writeln!(f, "  Branches dropped:     {}", self.branches_dropped)?;
        writeln!(f, "  Snapshots taken:      {}", self.snapshots_taken)?;
        writeln!(f, "  Peak working set:     {}", self.peak_working_set)?;
        writeln!(f, "  Duplicates removed:   {}", self.duplicates_removed)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
