use sv_core::{StudentId, Weekday};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{student} attends {day}, which is not a configured weekday")]
    UnknownWeekday { student: StudentId, day: Weekday },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
