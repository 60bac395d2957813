//! Unit tests for sv-schedule.

use sv_core::{Second, StudentId, Weekday};
use sv_student::{PopulationBuilder, StudentSeed, StudentStore};

use crate::{DepartureQueue, ScheduleError, ScheduleIndex};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn weekdays() -> Vec<Weekday> {
    (1..=5).map(Weekday).collect()
}

/// Three students: 0 on Mon/Wed, 1 on Wed, 2 on Mon/Wed/Fri.
fn store() -> StudentStore {
    PopulationBuilder::explicit(
        0,
        vec![
            StudentSeed::new(10, [Weekday(1), Weekday(3)]),
            StudentSeed::new(20, [Weekday(3)]),
            StudentSeed::new(30, [Weekday(1), Weekday(3), Weekday(5)]),
        ],
    )
    .build()
    .unwrap()
    .0
}

// ── ScheduleIndex ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_index {
    use super::*;

    #[test]
    fn rosters_keep_creation_order() {
        let index = ScheduleIndex::build(&store(), &weekdays()).unwrap();
        assert_eq!(index.get(Weekday(1)), vec![StudentId(0), StudentId(2)]);
        assert_eq!(index.get(Weekday(3)), vec![StudentId(0), StudentId(1), StudentId(2)]);
        assert_eq!(index.get(Weekday(5)), vec![StudentId(2)]);
    }

    #[test]
    fn unattended_and_unknown_days_are_empty() {
        let index = ScheduleIndex::build(&store(), &weekdays()).unwrap();
        assert!(index.get(Weekday(2)).is_empty());
        assert_eq!(index.count(Weekday(2)), 0);
        assert!(index.get(Weekday(9)).is_empty());
    }

    #[test]
    fn draining_a_roster_does_not_touch_the_index() {
        let index = ScheduleIndex::build(&store(), &weekdays()).unwrap();
        let mut roster = index.get(Weekday(3));
        roster.drain(..);
        assert!(roster.is_empty());
        assert_eq!(index.count(Weekday(3)), 3);
        assert_eq!(index.get(Weekday(3)).len(), 3);
    }

    #[test]
    fn unconfigured_attendance_day_is_an_error() {
        let result = ScheduleIndex::build(&store(), &[Weekday(1), Weekday(3)]);
        assert!(matches!(
            result,
            Err(ScheduleError::UnknownWeekday { student: StudentId(2), day: Weekday(5) })
        ));
    }
}

// ── DepartureQueue ────────────────────────────────────────────────────────────

#[cfg(test)]
mod departure_queue {
    use super::*;

    #[test]
    fn drains_in_push_order_per_second() {
        let mut q = DepartureQueue::new();
        q.push(Second(12), StudentId(4));
        q.push(Second(5), StudentId(1));
        q.push(Second(12), StudentId(2));
        assert_eq!(q.len(), 3);
        assert_eq!(q.next_second(), Some(Second(5)));

        assert_eq!(q.drain_second(Second(5)), Some(vec![StudentId(1)]));
        assert_eq!(q.next_second(), Some(Second(12)));
        assert_eq!(q.drain_second(Second(12)), Some(vec![StudentId(4), StudentId(2)]));
        assert!(q.is_empty());
        assert_eq!(q.next_second(), None);
    }

    #[test]
    fn draining_an_empty_second_is_none() {
        let mut q = DepartureQueue::new();
        q.push(Second(3), StudentId(0));
        assert_eq!(q.drain_second(Second(2)), None);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn clear_resets_count() {
        let mut q = DepartureQueue::new();
        q.push(Second(3), StudentId(0));
        q.push(Second(4), StudentId(1));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.next_second(), None);
    }
}
