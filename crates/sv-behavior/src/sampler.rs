//! The `DailySampler` trait — the extension point for per-day behaviour.

use sv_core::{StudentId, StudentRng};
use sv_student::DailyState;

use crate::SampleContext;

/// Draws one student's arrival, view duration, and departure for one day.
///
/// Implementations must only draw from `rng` so runs stay reproducible.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysOnTime;
///
/// impl DailySampler for AlwaysOnTime {
///     fn sample(&self, student: StudentId, ctx: &SampleContext<'_>, _rng: &mut StudentRng) -> DailyState {
///         DailyState::new(ctx.students.expected_arrival[student.index()], 30)
///     }
/// }
/// ```
pub trait DailySampler: Send + Sync + 'static {
    fn sample(
        &self,
        student: StudentId,
        ctx:     &SampleContext<'_>,
        rng:     &mut StudentRng,
    ) -> DailyState;
}
