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

//! # Course Set
//!
//! The search driver. Courses are processed one at a time, in input order;
//! every working combination is replaced by its feasible one-course
//! extensions, so conflicting branches are cut as soon as they appear instead
//! of being filtered after a full enumeration.
//!
//! Combinations that already satisfy the minimum size are recorded as
//! snapshots before they are extended. A course none of whose sections fit
//! therefore only discards the branches through it, not the smaller
//! combinations found on the way there.

use crate::{
    combination::{CombinationError, CourseCombination, FeasibilityCheck},
    monitor::search_monitor::{NoOperationMonitor, SearchCommand, SearchMonitor},
    result::{SearchOutcome, TerminationReason},
    stats::SearchStatistics,
};
use lectern_model::{course::Course, section::Section};
use rustc_hash::{FxHashMap, FxHashSet};

/// Configuration of a combination search.
///
/// # Examples
///
/// ```rust
/// # use lectern_search::course_set::CourseSet;
/// let set = CourseSet::new().with_min_courses(1).with_max_courses(3);
/// assert_eq!(set.min_courses(), 1);
/// assert_eq!(set.max_courses(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseSet {
    min_courses: usize,
    max_courses: Option<usize>,
    feasibility_check: FeasibilityCheck,
}

impl CourseSet {
    /// Creates a configuration with no lower and no upper bound.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Results must assign at least `min_courses` courses.
    #[inline]
    pub fn with_min_courses(mut self, min_courses: usize) -> Self {
        self.min_courses = min_courses;
        self
    }

    /// Results assign at most `max_courses` courses; `None` means unbounded.
    #[inline]
    pub fn with_max_courses(mut self, max_courses: impl Into<Option<usize>>) -> Self {
        self.max_courses = max_courses.into();
        self
    }

    #[inline]
    pub fn with_feasibility_check(mut self, check: FeasibilityCheck) -> Self {
        self.feasibility_check = check;
        self
    }

    #[inline]
    pub fn min_courses(&self) -> usize {
        self.min_courses
    }

    #[inline]
    pub fn max_courses(&self) -> Option<usize> {
        self.max_courses
    }

    #[inline]
    pub fn feasibility_check(&self) -> FeasibilityCheck {
        self.feasibility_check
    }

    /// Returns every feasible combination of `courses` within the size bounds.
    ///
    /// The list holds the combinations that went through all courses first,
    /// followed by the snapshots in the order they were taken.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadyUsed` if one section instance is a candidate of
    /// two different courses.
    pub fn find_combinations<'a>(
        &self,
        courses: &'a [Course],
    ) -> Result<Vec<CourseCombination<'a>>, CombinationError> {
        self.search(courses, NoOperationMonitor::new())
            .map(SearchOutcome::into_combinations)
    }

    /// Runs the search under the control of `monitor`.
    ///
    /// The monitor is polled before every course round; a termination request
    /// stops the search with the combinations found so far.
    ///
    /// # Errors
    ///
    /// Returns `SectionAlreadyUsed` if one section instance is a candidate of
    /// two different courses.
    pub fn search<'a, M>(
        &self,
        courses: &'a [Course],
        mut monitor: M,
    ) -> Result<SearchOutcome<'a>, CombinationError>
    where
        M: SearchMonitor,
    {
        validate_catalog(courses)?;
        Ok(CourseSetSearchSession::new(self, courses, &mut monitor).run())
    }

    #[inline]
    fn is_full(&self, combination: &CourseCombination<'_>) -> bool {
        self.max_courses
            .is_some_and(|max_courses| combination.len() >= max_courses)
    }
}

impl std::fmt::Display for CourseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_courses {
            Some(max_courses) => write!(
                f,
                "CourseSet(min: {}, max: {}, check: {})",
                self.min_courses, max_courses, self.feasibility_check
            ),
            None => write!(
                f,
                "CourseSet(min: {}, max: unbounded, check: {})",
                self.min_courses, self.feasibility_check
            ),
        }
    }
}

/// Rejects catalogs in which two courses share a section instance.
fn validate_catalog(courses: &[Course]) -> Result<(), CombinationError> {
    let mut owners: FxHashMap<*const Section, &Course> = FxHashMap::default();
    for course in courses {
        for section in course.sections() {
            if let Some(owner) = owners.insert(std::sync::Arc::as_ptr(section), course) {
                return Err(CombinationError::SectionAlreadyUsed {
                    section: section.identifier().to_string(),
                    used_by: owner.code().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// State of a single search run.
struct CourseSetSearchSession<'c, 'a, 'm, M> {
    config: &'c CourseSet,
    courses: &'a [Course],
    monitor: &'m mut M,
    working: Vec<CourseCombination<'a>>,
    snapshots: Vec<CourseCombination<'a>>,
    stats: SearchStatistics,
    start_time: std::time::Instant,
}

impl<M> std::fmt::Debug for CourseSetSearchSession<'_, '_, '_, M>
where
    M: SearchMonitor,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseSetSearchSession")
            .field("config", &self.config)
            .field("courses", &self.courses.len())
            .field("monitor", &self.monitor.name())
            .field("working", &self.working.len())
            .field("snapshots", &self.snapshots.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'c, 'a, 'm, M> CourseSetSearchSession<'c, 'a, 'm, M>
where
    M: SearchMonitor,
{
    #[inline]
    fn new(config: &'c CourseSet, courses: &'a [Course], monitor: &'m mut M) -> Self {
        Self {
            config,
            courses,
            monitor,
            working: vec![CourseCombination::new()],
            snapshots: Vec::new(),
            stats: SearchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> SearchOutcome<'a> {
        self.monitor.on_enter_search(self.courses);

        let courses = self.courses;
        let mut termination_reason = TerminationReason::Exhausted;
        for (index, course) in courses.iter().enumerate() {
            if let SearchCommand::Terminate(msg) = self.monitor.search_command() {
                termination_reason = TerminationReason::Aborted(msg);
                break;
            }

            self.expand(course);
            self.stats.on_course_processed(self.working.len());
            self.monitor
                .on_course_expanded(course, index + 1, &self.stats);
        }

        self.finalize_result(termination_reason)
    }

    /// Replaces the working list by its extensions with `course`.
    fn expand(&mut self, course: &'a Course) {
        let check = self.config.feasibility_check;
        let mut next = Vec::with_capacity(self.working.len());

        for combination in std::mem::take(&mut self.working) {
            if self.config.is_full(&combination) {
                self.stats.on_frozen();
                next.push(combination);
                continue;
            }

            if combination.len() >= self.config.min_courses {
                self.stats.on_snapshot();
                self.monitor.on_snapshot(&combination);
                self.snapshots.push(combination.clone());
            }

            let before = next.len();
            let mut extensions = combination.add_course(course, check);
            next.extend(extensions.by_ref());
            self.stats
                .on_candidates(extensions.generated(), extensions.rejected());
            if next.len() == before {
                self.stats.on_branch_dropped();
            }
        }

        self.working = next;
    }

    /// Assembles the result list and closes the session.
    ///
    /// The working list is filtered to the minimum size and followed by the
    /// snapshots; repeated mappings keep their first occurrence.
    fn finalize_result(mut self, reason: TerminationReason) -> SearchOutcome<'a> {
        let min_courses = self.config.min_courses;
        let mut combinations: Vec<CourseCombination<'a>> = self
            .working
            .into_iter()
            .filter(|c| c.len() >= min_courses)
            .collect();
        combinations.append(&mut self.snapshots);

        let total = combinations.len();
        let mut seen = FxHashSet::default();
        combinations.retain(|c| seen.insert(c.mapping_key()));
        self.stats
            .on_duplicates_removed(total - combinations.len());

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        match reason {
            TerminationReason::Exhausted => SearchOutcome::exhausted(combinations, self.stats),
            TerminationReason::Aborted(msg) => {
                SearchOutcome::aborted(combinations, msg, self.stats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{
        interrupt::InterruptMonitor, log::LogMonitor, time_limit::TimeLimitMonitor,
    };
    use lectern_model::session::{Day, Location, Session};
    use lectern_model::time::{Time, TimeRange};
    use proptest::prelude::*;
    use std::sync::{Arc, atomic::AtomicBool};

    fn session(day: Day, from: (u8, u8), to: (u8, u8)) -> Session {
        let time = TimeRange::new(
            Time::new(from.0, from.1).unwrap(),
            Time::new(to.0, to.1).unwrap(),
        )
        .unwrap();
        Session::new(day, Location::new("SCI", "100"), time).unwrap()
    }

    fn section(identifier: &str, sessions: Vec<Session>) -> Arc<Section> {
        Arc::new(Section::new(identifier, sessions).unwrap())
    }

    /// `(code, identifier)` pairs of each combination, sorted.
    fn describe(combinations: &[CourseCombination<'_>]) -> Vec<Vec<(String, String)>> {
        combinations
            .iter()
            .map(|c| {
                let mut pairs: Vec<_> = c
                    .iter()
                    .map(|a| {
                        (
                            a.course().code().to_string(),
                            a.section().identifier().to_string(),
                        )
                    })
                    .collect();
                pairs.sort();
                pairs
            })
            .collect()
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|&(c, s)| (c.to_string(), s.to_string()))
            .collect()
    }

    /// Two courses where every section of `A` collides with `B1`.
    fn two_course_catalog() -> Vec<Course> {
        let a = Course::new(
            "A",
            [
                section("A1", vec![session(Day::Monday, (9, 0), (10, 0))]),
                section("A2", vec![session(Day::Monday, (9, 0), (10, 0))]),
            ],
        );
        let b = Course::new(
            "B",
            [
                section("B1", vec![session(Day::Monday, (9, 30), (10, 30))]),
                section("B2", vec![session(Day::Tuesday, (9, 0), (10, 0))]),
            ],
        );
        vec![a, b]
    }

    /// Three courses competing for two slots: every pair fits, no triple does.
    fn pigeonhole_catalog() -> Vec<Course> {
        ["A", "B", "C"]
            .into_iter()
            .map(|code| {
                Course::new(
                    code,
                    [
                        section(
                            &format!("{code}1"),
                            vec![session(Day::Monday, (9, 0), (10, 0))],
                        ),
                        section(
                            &format!("{code}2"),
                            vec![session(Day::Tuesday, (9, 0), (10, 0))],
                        ),
                    ],
                )
            })
            .collect()
    }

    /// Courses on distinct days with a single section each.
    fn disjoint_catalog(codes: &[&str]) -> Vec<Course> {
        codes
            .iter()
            .zip(Day::WEEKDAYS)
            .map(|(code, day)| {
                Course::new(
                    *code,
                    [section(
                        &format!("{code}1"),
                        vec![session(day, (8, 0), (12, 0))],
                    )],
                )
            })
            .collect()
    }

    #[test]
    fn test_two_course_scenario() {
        let courses = two_course_catalog();
        let outcome = CourseSet::new().search(&courses, NoOperationMonitor::new()).unwrap();

        assert!(outcome.is_exhausted());
        assert_eq!(
            describe(outcome.combinations()),
            vec![
                pairs(&[("A", "A1"), ("B", "B2")]),
                pairs(&[("A", "A2"), ("B", "B2")]),
                pairs(&[]),
                pairs(&[("A", "A1")]),
                pairs(&[("A", "A2")]),
            ]
        );

        let complete: Vec<_> = outcome.complete_combinations(2).cloned().collect();
        assert_eq!(complete.len(), 2);
        assert!(complete.iter().all(|c| {
            c.section_for(&courses[1]).map(|s| s.identifier()) == Some("B2")
        }));

        let stats = outcome.statistics();
        assert_eq!(stats.courses_processed, 2);
        assert_eq!(stats.candidates_generated, 6);
        assert_eq!(stats.candidates_pruned, 2);
        assert_eq!(stats.snapshots_taken, 3);
        assert_eq!(stats.peak_working_set, 2);
        assert_eq!(stats.branches_dropped, 0);
        assert_eq!(stats.duplicates_removed, 0);
    }

    #[test]
    fn test_min_courses_keeps_partial_combinations() {
        let courses = pigeonhole_catalog();
        let combinations = CourseSet::new()
            .with_min_courses(1)
            .find_combinations(&courses)
            .unwrap();

        assert!(combinations.iter().all(|c| c.len() >= 1 && c.len() <= 2));
        assert!(combinations.iter().any(|c| c.len() == 2));
        assert_eq!(
            describe(&combinations),
            vec![
                pairs(&[("A", "A1")]),
                pairs(&[("A", "A2")]),
                pairs(&[("A", "A1"), ("B", "B2")]),
                pairs(&[("A", "A2"), ("B", "B1")]),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let courses: Vec<Course> = Vec::new();
        let unbounded = CourseSet::new().find_combinations(&courses).unwrap();
        assert_eq!(unbounded.len(), 1);
        assert!(unbounded[0].is_empty());

        let at_least_one = CourseSet::new()
            .with_min_courses(1)
            .find_combinations(&courses)
            .unwrap();
        assert!(at_least_one.is_empty());
    }

    #[test]
    fn test_course_without_sections_drops_branches_but_keeps_snapshots() {
        let mut courses = disjoint_catalog(&["A", "B"]);
        courses.insert(1, Course::new("EMPTY", []));

        let outcome = CourseSet::new().search(&courses, NoOperationMonitor::new()).unwrap();
        assert_eq!(
            describe(outcome.combinations()),
            vec![pairs(&[]), pairs(&[("A", "A1")])]
        );
        assert_eq!(outcome.statistics().branches_dropped, 1);

        let strict = CourseSet::new()
            .with_min_courses(2)
            .find_combinations(&courses)
            .unwrap();
        assert!(strict.is_empty());
    }

    #[test]
    fn test_max_courses_freezes_combinations() {
        let courses = disjoint_catalog(&["A", "B", "C"]);
        let outcome = CourseSet::new()
            .with_max_courses(2)
            .search(&courses, NoOperationMonitor::new())
            .unwrap();

        assert_eq!(
            describe(outcome.combinations()),
            vec![
                pairs(&[("A", "A1"), ("B", "B1")]),
                pairs(&[]),
                pairs(&[("A", "A1")]),
            ]
        );
        assert_eq!(outcome.statistics().combinations_frozen, 1);

        let exact = CourseSet::new()
            .with_min_courses(2)
            .with_max_courses(2)
            .find_combinations(&courses)
            .unwrap();
        assert_eq!(describe(&exact), vec![pairs(&[("A", "A1"), ("B", "B1")])]);
    }

    #[test]
    fn test_max_courses_zero_and_inverted_bounds() {
        let courses = disjoint_catalog(&["A", "B"]);

        let none_allowed = CourseSet::new()
            .with_max_courses(0)
            .find_combinations(&courses)
            .unwrap();
        assert_eq!(describe(&none_allowed), vec![pairs(&[])]);

        let inverted = CourseSet::new()
            .with_min_courses(2)
            .with_max_courses(1)
            .find_combinations(&courses)
            .unwrap();
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_unbounded_resets_max() {
        let set = CourseSet::new().with_max_courses(2).with_max_courses(None);
        assert_eq!(set.max_courses(), None);
        assert_eq!(
            set.to_string(),
            "CourseSet(min: 0, max: unbounded, check: Incremental)"
        );
    }

    #[test]
    fn test_shared_section_instance_is_rejected() {
        let shared = section("S", vec![session(Day::Friday, (9, 0), (10, 0))]);
        let courses = vec![
            Course::new("A", [shared.clone()]),
            Course::new("B", [shared]),
        ];
        let err = CourseSet::new().find_combinations(&courses).unwrap_err();
        assert_eq!(
            err,
            CombinationError::SectionAlreadyUsed {
                section: "S".to_string(),
                used_by: "A".to_string()
            }
        );
    }

    #[test]
    fn test_identical_sections_are_distinct_results() {
        let courses = vec![Course::new(
            "A",
            [
                section("T", vec![session(Day::Monday, (9, 0), (10, 0))]),
                section("T", vec![session(Day::Monday, (9, 0), (10, 0))]),
            ],
        )];
        let outcome = CourseSet::new().search(&courses, NoOperationMonitor::new()).unwrap();
        let complete: Vec<_> = outcome.complete_combinations(1).collect();
        assert_eq!(complete.len(), 2);
        assert!(!complete[0].same_mapping(complete[1]));
        assert_eq!(outcome.statistics().duplicates_removed, 0);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let courses = pigeonhole_catalog();
        let set = CourseSet::new();
        let first = set.find_combinations(&courses).unwrap();
        let second = set.find_combinations(&courses).unwrap();
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).all(|(a, b)| a.same_mapping(b)));
    }

    #[test]
    fn test_interrupt_before_start_returns_empty_combination() {
        let courses = two_course_catalog();
        let flag = AtomicBool::new(true);
        let outcome = CourseSet::new()
            .search(&courses, InterruptMonitor::new(&flag))
            .unwrap();

        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("Interrupt signal received".to_string())
        );
        assert_eq!(describe(outcome.combinations()), vec![pairs(&[])]);
        assert_eq!(outcome.statistics().courses_processed, 0);
    }

    #[test]
    fn test_zero_time_limit_aborts() {
        let courses = two_course_catalog();
        let outcome = CourseSet::new()
            .with_min_courses(1)
            .search(&courses, TimeLimitMonitor::new(std::time::Duration::ZERO))
            .unwrap();
        assert!(!outcome.is_exhausted());
        assert!(outcome.combinations().is_empty());
    }

    /// Stops once `stop_after` courses have been expanded and records events.
    #[derive(Default)]
    struct StopAfterMonitor {
        stop_after: usize,
        entered: usize,
        expanded: Vec<(String, usize)>,
        snapshots: usize,
        exited: Option<SearchStatistics>,
    }

    impl SearchMonitor for StopAfterMonitor {
        fn name(&self) -> &str {
            "StopAfterMonitor"
        }

        fn on_enter_search(&mut self, _courses: &[Course]) {
            self.entered += 1;
        }

        fn on_course_expanded(&mut self, course: &Course, depth: usize, _statistics: &SearchStatistics) {
            self.expanded.push((course.code().to_string(), depth));
        }

        fn on_snapshot(&mut self, _combination: &CourseCombination<'_>) {
            self.snapshots += 1;
        }

        fn on_exit_search(&mut self, statistics: &SearchStatistics) {
            self.exited = Some(statistics.clone());
        }

        fn search_command(&self) -> SearchCommand {
            if self.expanded.len() >= self.stop_after {
                SearchCommand::Terminate("enough".to_string())
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_abort_mid_search_keeps_valid_partial_results() {
        let courses = pigeonhole_catalog();
        let mut monitor = StopAfterMonitor {
            stop_after: 2,
            ..Default::default()
        };
        let outcome = CourseSet::new()
            .with_min_courses(1)
            .search(&courses, &mut monitor)
            .unwrap();

        assert_eq!(outcome.reason(), &TerminationReason::Aborted("enough".to_string()));
        assert_eq!(
            describe(outcome.combinations()),
            vec![
                pairs(&[("A", "A1"), ("B", "B2")]),
                pairs(&[("A", "A2"), ("B", "B1")]),
                pairs(&[("A", "A1")]),
                pairs(&[("A", "A2")]),
            ]
        );
        assert!(outcome.combinations().iter().all(CourseCombination::is_feasible));
        assert_eq!(monitor.entered, 1);
        assert_eq!(
            monitor.expanded,
            vec![("A".to_string(), 1), ("B".to_string(), 2)]
        );
        assert_eq!(monitor.snapshots, 2);
        assert_eq!(monitor.exited.as_ref(), Some(outcome.statistics()));
    }

    #[test]
    fn test_log_monitor_does_not_change_results() {
        let courses = two_course_catalog();
        let plain = CourseSet::new().find_combinations(&courses).unwrap();
        let logged = CourseSet::new()
            .search(&courses, LogMonitor::new())
            .unwrap()
            .into_combinations();
        assert_eq!(describe(&plain), describe(&logged));
    }

    // Property tests over small random catalogs, checked against a
    // brute-force enumeration of every section choice.

    type Meeting = (u8, u8, u8);

    fn arb_catalog() -> impl Strategy<Value = Vec<Vec<Vec<Meeting>>>> {
        let meeting = (1u8..=2, 0u8..6, 1u8..=2);
        let section = prop::collection::vec(meeting, 1..=2);
        let course = prop::collection::vec(section, 0..=3);
        prop::collection::vec(course, 0..=4)
    }

    fn build_catalog(raw: &[Vec<Vec<Meeting>>]) -> Vec<Course> {
        raw.iter()
            .enumerate()
            .map(|(ci, sections)| {
                let sections = sections.iter().enumerate().map(|(si, meetings)| {
                    let mut sessions: Vec<Session> = Vec::new();
                    for &(day, slot, length) in meetings {
                        let candidate = session(
                            Day::try_from(day).unwrap(),
                            (8 + slot, 0),
                            (8 + slot + length, 0),
                        );
                        if sessions.iter().all(|s| !s.overlaps(&candidate)) {
                            sessions.push(candidate);
                        }
                    }
                    section(&format!("S{ci}.{si}"), sessions)
                });
                Course::new(format!("C{ci}"), sections)
            })
            .collect()
    }

    fn indices(courses: &[Course], combination: &CourseCombination<'_>) -> Vec<(usize, usize)> {
        let mut choice: Vec<_> = combination
            .iter()
            .map(|a| {
                let ci = courses
                    .iter()
                    .position(|c| std::ptr::eq(c, a.course()))
                    .unwrap();
                let si = courses[ci]
                    .sections()
                    .iter()
                    .position(|s| Arc::ptr_eq(s, a.section()))
                    .unwrap();
                (ci, si)
            })
            .collect();
        choice.sort();
        choice
    }

    fn brute_force(courses: &[Course]) -> Vec<Vec<(usize, usize)>> {
        let mut choices: Vec<Vec<(usize, usize)>> = vec![Vec::new()];
        for (ci, course) in courses.iter().enumerate() {
            choices = choices
                .iter()
                .flat_map(|choice| {
                    (0..course.num_sections()).map(move |si| {
                        let mut next = choice.clone();
                        next.push((ci, si));
                        next
                    })
                })
                .collect();
        }
        let section_of = |&(ci, si): &(usize, usize)| &courses[ci].sections()[si];
        choices.retain(|choice| {
            choice.iter().enumerate().all(|(i, a)| {
                choice[i + 1..]
                    .iter()
                    .all(|b| !section_of(a).overlaps(section_of(b)))
            })
        });
        choices.sort();
        choices
    }

    proptest! {
        #[test]
        fn prop_complete_combinations_match_brute_force(raw in arb_catalog()) {
            let courses = build_catalog(&raw);
            let outcome = CourseSet::new().search(&courses, NoOperationMonitor::new()).unwrap();

            let mut found: Vec<_> = outcome
                .complete_combinations(courses.len())
                .map(|c| indices(&courses, c))
                .collect();
            found.sort();
            prop_assert_eq!(found, brute_force(&courses));
        }

        #[test]
        fn prop_results_respect_contract(
            raw in arb_catalog(),
            min_courses in 0usize..=4,
            max_courses in prop::option::of(0usize..=4),
        ) {
            let courses = build_catalog(&raw);
            let outcome = CourseSet::new()
                .with_min_courses(min_courses)
                .with_max_courses(max_courses)
                .search(&courses, NoOperationMonitor::new())
                .unwrap();

            let upper = max_courses.unwrap_or(usize::MAX).min(courses.len());
            let mut keys = FxHashSet::default();
            for combination in outcome.combinations() {
                prop_assert!(combination.len() >= min_courses);
                prop_assert!(combination.len() <= upper);
                prop_assert!(combination.is_feasible());
                prop_assert!(keys.insert(indices(&courses, combination)));
            }
            prop_assert_eq!(outcome.statistics().duplicates_removed, 0);
        }

        #[test]
        fn prop_feasibility_checks_agree(
            raw in arb_catalog(),
            min_courses in 0usize..=2,
        ) {
            let courses = build_catalog(&raw);
            let set = CourseSet::new().with_min_courses(min_courses);
            let incremental = set
                .clone()
                .with_feasibility_check(FeasibilityCheck::Incremental)
                .find_combinations(&courses)
                .unwrap();
            let exhaustive = set
                .with_feasibility_check(FeasibilityCheck::Exhaustive)
                .find_combinations(&courses)
                .unwrap();

            prop_assert_eq!(incremental.len(), exhaustive.len());
            for (a, b) in incremental.iter().zip(&exhaustive) {
                prop_assert!(a.same_mapping(b));
            }
        }

        #[test]
        fn prop_complete_combinations_ignore_input_order(raw in arb_catalog()) {
            let courses = build_catalog(&raw);
            let reversed: Vec<Course> = courses.iter().rev().cloned().collect();

            let forward = CourseSet::new().find_combinations(&courses).unwrap();
            let backward = CourseSet::new().find_combinations(&reversed).unwrap();

            let complete = |combinations: &[CourseCombination<'_>]| {
                let mut described = describe(combinations);
                described.retain(|c| c.len() == courses.len());
                described.sort();
                described
            };
            prop_assert_eq!(complete(&forward), complete(&backward));
        }
    }
}
