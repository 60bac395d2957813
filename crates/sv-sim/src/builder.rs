//! Fluent builder for constructing a [`Model`].

use tracing::debug;

use sv_behavior::{DailySampler, GaussianSampler};
use sv_core::{ModelConfig, StepMode};
use sv_schedule::ScheduleIndex;
use sv_student::{PopulationBuilder, StudentRngs, StudentStore};

use crate::{DaySimulator, Model, SignRing, SimError, SimResult};

/// Fluent builder for [`Model<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                         |
/// |--------------------|-------------------------------------------------|
/// | `.population(s, r)`| Sampled from the config by `PopulationBuilder`  |
/// | `.step_mode(m)`    | `config.step_mode`                              |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(config, GaussianSampler::from_config(&config)?)
///     .build()?;
/// model.run(&mut NoopObserver)?;
/// ```
pub struct ModelBuilder<S: DailySampler> {
    config:     ModelConfig,
    sampler:    S,
    population: Option<(StudentStore, StudentRngs)>,
    step_mode:  Option<StepMode>,
}

impl ModelBuilder<GaussianSampler> {
    /// Builder using the normal-distribution sampler described by `config`.
    pub fn from_config(config: ModelConfig) -> SimResult<Self> {
        let sampler = GaussianSampler::from_config(&config)?;
        Ok(Self::new(config, sampler))
    }
}

impl<S: DailySampler> ModelBuilder<S> {
    pub fn new(config: ModelConfig, sampler: S) -> Self {
        Self { config, sampler, population: None, step_mode: None }
    }

    /// Use a pre-built population instead of sampling one.
    pub fn population(mut self, students: StudentStore, rngs: StudentRngs) -> Self {
        self.population = Some((students, rngs));
        self
    }

    /// Override `config.step_mode`.
    pub fn step_mode(mut self, step_mode: StepMode) -> Self {
        self.step_mode = Some(step_mode);
        self
    }

    /// Validate the configuration, build the population, the schedule, and the
    /// sign, and return a ready-to-run [`Model`].
    pub fn build(self) -> SimResult<Model<S>> {
        let mut config = self.config;
        if let Some(mode) = self.step_mode {
            config.step_mode = mode;
        }
        config.validate()?;

        let (students, rngs) = match self.population {
            Some(p) => p,
            None => PopulationBuilder::from_config(&config)?.build()?,
        };
        if rngs.len() != students.count {
            return Err(SimError::StudentCountMismatch {
                expected: students.count,
                got:      rngs.len(),
                what:     "student RNGs",
            });
        }

        let schedule = ScheduleIndex::build(&students, &config.weekdays)?;
        for &weekday in &config.weekdays {
            debug!(weekday = weekday.0, roster = schedule.count(weekday), "weekday indexed");
        }
        let sign = SignRing::new(config.n_slides)?;
        let day = DaySimulator::new(&config)?;

        Ok(Model {
            config,
            students,
            rngs,
            schedule,
            sign,
            sampler: self.sampler,
            weeks_done: 0,
            day,
        })
    }
}
