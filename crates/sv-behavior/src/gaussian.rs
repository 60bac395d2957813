//! Normal-distribution sampler driven by the run configuration.

use rand_distr::Normal;

use sv_core::{ModelConfig, StudentId, StudentRng};
use sv_student::DailyState;

use crate::{BehaviorError, BehaviorResult, DailySampler, SampleContext};

/// The production sampler.
///
/// - arrival   = max(0, baseline + trunc(N(duration_timely, sd_timely)))
/// - duration  = trunc(N(duration_visibility, sd_visibility)), kept raw on
///   the [`DailyState`] and clamped to `>= 0` for the departure
/// - departure = arrival + clamped duration
///
/// Draws are truncated toward zero to whole seconds.  Arrival jitter is drawn
/// before the duration.
#[derive(Clone, Debug)]
pub struct GaussianSampler {
    timely:     Normal<f64>,
    visibility: Normal<f64>,
}

impl GaussianSampler {
    pub fn new(
        mean_timely:     f64,
        sd_timely:       f64,
        mean_visibility: f64,
        sd_visibility:   f64,
    ) -> BehaviorResult<Self> {
        let timely = Normal::new(mean_timely, sd_timely).map_err(|e| {
            BehaviorError::Distribution { what: "arrival jitter", reason: e.to_string() }
        })?;
        let visibility = Normal::new(mean_visibility, sd_visibility).map_err(|e| {
            BehaviorError::Distribution { what: "view duration", reason: e.to_string() }
        })?;
        Ok(Self { timely, visibility })
    }

    pub fn from_config(config: &ModelConfig) -> BehaviorResult<Self> {
        Self::new(
            config.duration_timely,
            config.sd_timely,
            config.duration_visibility,
            config.sd_visibility,
        )
    }
}

impl DailySampler for GaussianSampler {
    fn sample(
        &self,
        student: StudentId,
        ctx:     &SampleContext<'_>,
        rng:     &mut StudentRng,
    ) -> DailyState {
        let jitter = rng.sample::<f64, _>(&self.timely) as i64;
        let arrival = ctx.students.expected_arrival[student.index()].offset(jitter).floor_zero();
        let raw_duration = rng.sample::<f64, _>(&self.visibility) as i64;
        DailyState::new(arrival, raw_duration)
    }
}
