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

use num_traits::PrimInt;
use std::cmp::{max, min};

/// A half-open interval `[start, end)` over a primitive integer domain.
///
/// The start is inclusive and the end is exclusive, so two intervals that only
/// share a boundary value do not intersect. This is the exact semantics needed
/// for back-to-back meetings: `[540, 600)` (09:00-10:00) and `[600, 660)`
/// (10:00-11:00) can both be attended.
///
/// # Invariants
///
/// `start_inclusive <= end_exclusive` always holds. Empty intervals
/// (`start == end`) are representable; callers that forbid them (such as
/// `TimeRange` in the model crate) must reject them before construction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedOpenInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> ClosedOpenInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_core::math::interval::ClosedOpenInterval;
    ///
    /// let morning = ClosedOpenInterval::new(540u16, 600u16);
    /// assert_eq!(morning.len(), 60);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "called `ClosedOpenInterval::new` with start_inclusive greater than end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates a new `ClosedOpenInterval` if `start_inclusive <= end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::try_new(0u16, 30).is_some());
    /// assert!(ClosedOpenInterval::try_new(30u16, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T) -> Option<Self> {
        (start_inclusive <= end_exclusive).then_some(Self {
            start_inclusive,
            end_exclusive,
        })
    }

    /// Creates a new `ClosedOpenInterval` without checking the bounds in release builds.
    ///
    /// The caller must ensure `start_inclusive <= end_exclusive`.
    #[inline]
    pub fn new_unchecked(start_inclusive: T, end_exclusive: T) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "called `ClosedOpenInterval::new_unchecked` with start_inclusive greater than end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns the number of integer points covered (`end - start`).
    #[inline]
    pub fn len(&self) -> T {
        self.end_exclusive - self.start_inclusive
    }

    /// Returns `true` if the interval covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// The predicate is symmetric: `a.intersects(b) == b.intersects(a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0u16, 720);
    /// assert!(a.intersects(ClosedOpenInterval::new(360, 1080)));
    /// assert!(!a.intersects(ClosedOpenInterval::new(720, 1080))); // adjacent
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }

    /// Returns `true` if the intervals touch at a boundary without overlapping.
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.end_exclusive == other.start_inclusive || other.end_exclusive == self.start_inclusive
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start_inclusive <= other.start_inclusive && other.end_exclusive <= self.end_exclusive
    }

    /// Returns the overlapping part of both intervals, or `None` if they do
    /// not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lectern_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0u16, 720);
    /// let b = ClosedOpenInterval::new(360u16, 1080);
    /// assert_eq!(a.intersection(b), Some(ClosedOpenInterval::new(360, 720)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = max(self.start_inclusive, other.start_inclusive);
        let end = min(self.end_exclusive, other.end_exclusive);
        (start < end).then(|| Self::new_unchecked(start, end))
    }
}

impl<T> Default for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new_unchecked(T::zero(), T::zero())
    }
}

impl<T> std::fmt::Debug for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> std::fmt::Display for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> From<ClosedOpenInterval<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(interval: ClosedOpenInterval<T>) -> Self {
        interval.start_inclusive..interval.end_exclusive
    }
}
