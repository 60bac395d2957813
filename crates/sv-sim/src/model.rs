//! The `Model` struct and its week × weekday loop.

use tracing::info;

use sv_behavior::DailySampler;
use sv_core::ModelConfig;
use sv_schedule::ScheduleIndex;
use sv_student::{StudentRngs, StudentStore};

use crate::{DayOutcome, DayReport, DaySimulator, DayWorld, SignRing, SimObserver, SimResult};

/// The run orchestrator.
///
/// Students, the sign, and the schedule live for the whole run; roster and
/// viewing set are scoped to a single day inside [`DaySimulator`].
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model<S: DailySampler> {
    /// The validated configuration the model was built from.
    pub config: ModelConfig,

    /// The population (SoA).  Exposure accumulates here.
    pub students: StudentStore,

    /// Per-student RNGs, separate for the split-borrow pattern.
    pub rngs: StudentRngs,

    /// Weekday → roster, built once.
    pub schedule: ScheduleIndex,

    /// The rotating sign.  Its cursor carries over between days unless
    /// `sign_reset` is set.
    pub sign: SignRing,

    /// Draws each student's daily state.
    pub sampler: S,

    /// Number of weeks already simulated.
    pub weeks_done: u32,

    pub(crate) day: DaySimulator,
}

impl<S: DailySampler> Model<S> {
    /// Simulate `config.weeks` weeks, each weekday in configured order.
    ///
    /// Calling `run` again continues from where the previous call stopped.
    /// Returns one report per weekday.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<DayReport>> {
        info!(
            students = self.students.count,
            weeks = self.config.weeks,
            weekdays = self.config.weekdays.len(),
            slides = self.sign.len(),
            step_mode = ?self.day.step_mode(),
            "run started"
        );

        let mut reports =
            Vec::with_capacity(self.config.weeks as usize * self.config.weekdays.len());
        for _ in 0..self.config.weeks {
            reports.extend(self.run_week(observer)?);
        }
        observer.on_run_end(&self.students);

        let skipped = reports.iter().filter(|r| r.outcome == DayOutcome::Skipped).count();
        info!(
            days = reports.len(),
            skipped,
            rotations = reports.iter().map(|r| r.rotations).sum::<u64>(),
            "run finished"
        );
        Ok(reports)
    }

    /// Simulate one week.
    pub fn run_week<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<DayReport>> {
        let week = self.weeks_done;
        let mut reports = Vec::with_capacity(self.config.weekdays.len());
        for &weekday in &self.config.weekdays {
            let world = DayWorld {
                schedule: &self.schedule,
                sign:     &mut self.sign,
                students: &mut self.students,
                rngs:     &mut self.rngs,
                sampler:  &self.sampler,
            };
            reports.push(self.day.run_day(week, weekday, world, observer)?);
        }
        self.weeks_done += 1;
        Ok(reports)
    }

    /// Distinct slides seen per student, in creation order.
    pub fn seen_counts(&self) -> Vec<usize> {
        self.students.seen_counts()
    }

    /// Number of students in view right now.  Always zero between days.
    pub fn viewing_len(&self) -> usize {
        self.day.viewing_len()
    }
}
