//! Per-student report lines.

use std::fmt;

use sv_core::StudentId;
use sv_student::StudentStore;

/// How many distinct slides one student saw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StudentReport {
    pub student:     StudentId,
    pub slides_seen: usize,
}

impl StudentReport {
    /// `None` if `student` is not part of the population.
    pub fn for_student(students: &StudentStore, student: StudentId) -> Option<Self> {
        students
            .contains(student)
            .then(|| Self { student, slides_seen: students.seen_count(student) })
    }
}

impl fmt::Display for StudentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student {} (Signs Viewed: {})", self.student.0, self.slides_seen)
    }
}
