//! Simulation observer trait for progress reporting and data collection.

use sv_core::{Second, StudentId, Weekday};
use sv_student::StudentStore;

use crate::DayReport;

/// Callbacks invoked by the day simulator and [`Model::run`][crate::Model::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called before the sign reset of each simulated weekday.
    fn on_day_start(&mut self, _week: u32, _weekday: Weekday) {}

    /// A student entered the viewing set.  Fired in roster order within a
    /// second, so ties in arrival keep their creation order.
    fn on_admit(&mut self, _second: Second, _student: StudentId) {}

    /// A student left the viewing set.
    fn on_evict(&mut self, _second: Second, _student: StudentId) {}

    /// Called after each weekday, simulated or skipped.
    fn on_day_end(&mut self, _report: &DayReport) {}

    /// Called once after the final week with the population's final state.
    fn on_run_end(&mut self, _students: &StudentStore) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
