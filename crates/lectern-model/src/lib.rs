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

//! # Lectern Model
//!
//! **The validated temporal model consumed by the section-combination search.**
//!
//! The crate is layered from leaves upward, and every layer validates its own
//! invariant exactly once, at construction. Once a value exists the search may
//! read it without re-checking anything.
//!
//! * **`time`**: `Time` (minute-granularity clock value) and `TimeRange`
//!   (non-empty closed-open range with the overlap predicate).
//! * **`session`**: `Day`, `Location` and `Session`, a single weekly meeting.
//! * **`section`**: `Section`, a named set of sessions that never overlap each other.
//! * **`course`**: `Course`, a code plus its candidate sections, shared as `Arc<Section>`.
//! * **`error`**: `ModelError`, the domain-invariant error taxonomy.
//! * **`loading`**: JSON loader and writer for course catalogs.
//! * **`generator`**: seeded random catalog generator for tests, benches and demos.
//!
//! ## Identity
//!
//! Sections are compared by allocation (`Arc::ptr_eq`), never by content. Two
//! sections built separately from the same data are different offerings.

pub mod course;
pub mod error;
pub mod generator;
pub mod loading;
pub mod section;
pub mod session;
pub mod time;
