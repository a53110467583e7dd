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

//! # Lectern Search
//!
//! Enumerates the conflict-free ways of picking one section per course.
//!
//! The search extends partial combinations one course at a time and prunes a
//! branch as soon as a candidate section overlaps one already chosen. It can
//! be bounded in size, observed and stopped through `SearchMonitor`s, and
//! reports `SearchStatistics` with every outcome.
//!
//! ```rust
//! use lectern_model::loading::CourseLoader;
//! use lectern_search::course_set::CourseSet;
//!
//! let json = r#"[
//!   {"code": "CS101", "sections": [
//!     {"identifier": "A1", "sessions": [{"day": 1,
//!       "location": {"building": "SCI", "room": "100"},
//!       "start": {"hour": 9, "minute": 0}, "end": {"hour": 10, "minute": 0}}]}]},
//!   {"code": "MA201", "sections": [
//!     {"identifier": "B1", "sessions": [{"day": 1,
//!       "location": {"building": "SCI", "room": "200"},
//!       "start": {"hour": 9, "minute": 30}, "end": {"hour": 10, "minute": 30}}]},
//!     {"identifier": "B2", "sessions": [{"day": 2,
//!       "location": {"building": "SCI", "room": "200"},
//!       "start": {"hour": 9, "minute": 0}, "end": {"hour": 10, "minute": 0}}]}]}
//! ]"#;
//!
//! let courses = CourseLoader::new().from_str(json).unwrap();
//! let combinations = CourseSet::new()
//!     .with_min_courses(2)
//!     .find_combinations(&courses)
//!     .unwrap();
//! assert_eq!(combinations.len(), 1);
//! assert_eq!(combinations[0].to_string(), "{CS101 -> A1, MA201 -> B2}");
//! ```

pub mod combination;
pub mod course_set;
pub mod monitor;
pub mod result;
pub mod stats;
