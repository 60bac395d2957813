//! Plain data row types written by output backends.

use sv_core::StudentId;
use sv_sim::{DayOutcome, DayReport};
use sv_student::StudentStore;

/// One student's final exposure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentExposureRow {
    pub student_id:       u32,
    /// Baseline arrival, seconds after the start of the day.
    pub expected_arrival: i64,
    /// Attended weekdays joined with `;`, e.g. `1;3;5`.
    pub attendance_days:  String,
    pub slides_seen:      usize,
}

impl StudentExposureRow {
    pub fn from_store(students: &StudentStore, student: StudentId) -> Self {
        let i = student.index();
        let attendance_days = students.attendance[i]
            .iter()
            .map(|d| d.0.to_string())
            .collect::<Vec<_>>()
            .join(";");
        Self {
            student_id:       student.0,
            expected_arrival: students.expected_arrival[i].0,
            attendance_days,
            slides_seen:      students.seen_count(student),
        }
    }
}

/// One row per weekday, simulated or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayReportRow {
    pub week:         u32,
    pub weekday:      u8,
    pub roster:       usize,
    pub admitted:     usize,
    pub rotations:    u64,
    pub final_second: i64,
    pub skipped:      bool,
}

impl From<&DayReport> for DayReportRow {
    fn from(r: &DayReport) -> Self {
        Self {
            week:         r.week,
            weekday:      r.weekday.0,
            roster:       r.roster,
            admitted:     r.admitted,
            rotations:    r.rotations,
            final_second: r.final_second.0,
            skipped:      r.outcome == DayOutcome::Skipped,
        }
    }
}
