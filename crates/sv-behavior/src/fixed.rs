//! `FixedSampler` — scripted daily states, for tests and what-if runs.

use rustc_hash::FxHashMap;

use sv_core::{Second, StudentId, StudentRng};
use sv_student::DailyState;

use crate::{DailySampler, SampleContext};

/// Returns the same `(arrival, raw duration)` every day.
///
/// Students without an explicit entry fall back to their baseline arrival and
/// the default duration.  Never touches the RNG.
#[derive(Clone, Debug, Default)]
pub struct FixedSampler {
    default_duration: i64,
    overrides:        FxHashMap<StudentId, (i64, i64)>,
}

impl FixedSampler {
    /// Every student arrives at their baseline and watches for `duration`
    /// seconds.
    pub fn new(default_duration: i64) -> Self {
        Self { default_duration, overrides: FxHashMap::default() }
    }

    /// Pin `student` to arrive at `arrival` and watch for `duration` seconds.
    pub fn with(mut self, student: StudentId, arrival: i64, duration: i64) -> Self {
        self.overrides.insert(student, (arrival, duration));
        self
    }
}

impl DailySampler for FixedSampler {
    fn sample(
        &self,
        student: StudentId,
        ctx:     &SampleContext<'_>,
        _rng:    &mut StudentRng,
    ) -> DailyState {
        match self.overrides.get(&student) {
            Some(&(arrival, duration)) => DailyState::new(Second(arrival), duration),
            None => DailyState::new(
                ctx.students.expected_arrival[student.index()],
                self.default_duration,
            ),
        }
    }
}
