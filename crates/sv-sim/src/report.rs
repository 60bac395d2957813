//! Per-day results.

use sv_core::{Second, Weekday};

/// Whether a weekday was actually simulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DayOutcome {
    Simulated,
    /// Nobody attends this weekday; the sign did not rotate.
    Skipped,
}

/// What happened on one simulated weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayReport {
    pub week:         u32,
    pub weekday:      Weekday,
    /// Students attending this weekday.
    pub roster:       usize,
    /// Students that entered the viewing set (zero-length visits excluded).
    pub admitted:     usize,
    /// Sign rotations over `[0, final_second]`.
    pub rotations:    u64,
    /// The latest departure of the day; the last second simulated.
    pub final_second: Second,
    pub outcome:      DayOutcome,
}

impl DayReport {
    pub(crate) fn skipped(week: u32, weekday: Weekday) -> Self {
        Self {
            week,
            weekday,
            roster:       0,
            admitted:     0,
            rotations:    0,
            final_second: Second::ZERO,
            outcome:      DayOutcome::Skipped,
        }
    }
}
