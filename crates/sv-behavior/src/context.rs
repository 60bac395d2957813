//! Read-only state passed to every sampler call.

use sv_core::Weekday;
use sv_student::StudentStore;

/// What a sampler may look at while drawing one student's day.
pub struct SampleContext<'a> {
    /// Zero-based week of the run.
    pub week: u32,

    /// The weekday being simulated.
    pub weekday: Weekday,

    /// The population (baseline arrivals, attendance, previous days).
    pub students: &'a StudentStore,
}

impl<'a> SampleContext<'a> {
    #[inline]
    pub fn new(week: u32, weekday: Weekday, students: &'a StudentStore) -> Self {
        Self { week, weekday, students }
    }
}
