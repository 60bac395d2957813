//! `ScheduleIndex` — which students attend on which weekday.
//!
//! Built once after the population, so a simulated day only touches the
//! students who attend it instead of scanning the whole population.

use std::collections::BTreeMap;

use sv_core::{StudentId, Weekday};
use sv_student::StudentStore;

use crate::{ScheduleError, ScheduleResult};

/// A day's working list of students.  Owned by whoever asked for it.
pub type Roster = Vec<StudentId>;

/// Read-only mapping from weekday to the students attending it, in creation
/// order.
#[derive(Clone, Debug, Default)]
pub struct ScheduleIndex {
    weekdays: BTreeMap<Weekday, Vec<StudentId>>,
}

impl ScheduleIndex {
    /// Index every student's attendance days.
    ///
    /// Every configured weekday gets an entry, even if nobody attends it.
    /// A student assigned a weekday outside `weekdays` is an error.
    pub fn build(store: &StudentStore, weekdays: &[Weekday]) -> ScheduleResult<Self> {
        let mut index: BTreeMap<Weekday, Vec<StudentId>> =
            weekdays.iter().map(|&d| (d, Vec::new())).collect();

        for student in store.student_ids() {
            for &day in &store.attendance[student.index()] {
                index
                    .get_mut(&day)
                    .ok_or(ScheduleError::UnknownWeekday { student, day })?
                    .push(student);
            }
        }
        Ok(Self { weekdays: index })
    }

    /// A fresh copy of the roster for `day`.
    ///
    /// The caller may drain or reorder it freely; the index is unaffected.
    /// A weekday nobody attends, or one that is not configured, yields an
    /// empty roster.
    pub fn get(&self, day: Weekday) -> Roster {
        self.weekdays.get(&day).cloned().unwrap_or_default()
    }

    /// Number of students attending on `day`.
    pub fn count(&self, day: Weekday) -> usize {
        self.weekdays.get(&day).map_or(0, Vec::len)
    }
}
