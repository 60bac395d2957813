use sv_behavior::BehaviorError;
use sv_core::{SvError, Weekday};
use sv_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("sampling error: {0}")]
    Sampling(String),

    #[error("week {week}, {weekday}: nobody attends and empty days are configured to fail")]
    DegenerateDay { week: u32, weekday: Weekday },

    #[error("{what} length {got} does not match student count {expected}")]
    StudentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("sampler error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<SvError> for SimError {
    fn from(e: SvError) -> Self {
        match e {
            SvError::Sampling(msg) => SimError::Sampling(msg),
            SvError::Config(msg) | SvError::Parse(msg) => SimError::Config(msg),
            SvError::Io(io) => SimError::Config(io.to_string()),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
