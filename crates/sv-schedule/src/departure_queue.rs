//! `DepartureQueue` — sparse per-second eviction queue.
//!
//! When a student is admitted to the viewing set their departure second is
//! pushed here.  The day engine then jumps straight to the next second at
//! which somebody leaves instead of checking every viewer every second.
//!
//! `BTreeMap` gives O(log D) insert and pop where D = number of distinct
//! departure seconds currently enqueued.  Students sharing a departure second
//! are kept in push order.

use std::collections::BTreeMap;

use sv_core::{Second, StudentId};

/// A priority queue mapping seconds → students that leave at that second.
#[derive(Default)]
pub struct DepartureQueue {
    inner: BTreeMap<Second, Vec<StudentId>>,
    /// Cached total student count for O(1) `len()`.
    total: usize,
}

impl DepartureQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `student` to leave at `second`.
    pub fn push(&mut self, second: Second, student: StudentId) {
        self.inner.entry(second).or_default().push(student);
        self.total += 1;
    }

    /// Remove and return all students leaving at exactly `second`.
    ///
    /// Returns `None` if nobody leaves then.
    pub fn drain_second(&mut self, second: Second) -> Option<Vec<StudentId>> {
        let students = self.inner.remove(&second)?;
        self.total -= students.len();
        Some(students)
    }

    /// The earliest second with at least one pending departure.
    pub fn next_second(&self) -> Option<Second> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending departures.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Drop everything (used between days).
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }
}
