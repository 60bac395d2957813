//! Run configuration.
//!
//! # JSON layouts
//!
//! Two layouts are accepted by [`ModelConfig::from_json_str`]:
//!
//! ```json
//! { "n_slides": 10, "weeks": 16, ... }
//! ```
//!
//! and the verbose layout, where every key wraps its value together with
//! free-form metadata that is ignored:
//!
//! ```json
//! { "n_slides": { "value": 10, "description": "slides on the sign" }, ... }
//! ```
//!
//! The model keys are required.  The policy keys (`seed`,
//! `empty_day`, `step_mode`, `histogram`) are optional and fall back to the
//! values of [`ModelConfig::default`].  Unknown keys are rejected.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DailyWindow, SvError, SvResult, Weekday};

// ── Policy enums ──────────────────────────────────────────────────────────────

/// What the day simulator does with a weekday that nobody attends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDayPolicy {
    /// Leave the day out: no rotations, no exposure.
    #[default]
    Skip,
    /// Abort the run with a degenerate-day error.
    Fail,
}

/// Which day engine drives the per-second state machine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Visit only seconds at which something happens.
    #[default]
    Event,
    /// Visit every second from 0 to the last departure.
    PerSecond,
}

/// Bucket range of the exposure histogram.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramRange {
    /// `[0, n_slides)`: a student who saw every slide falls outside every
    /// bucket.  Matches the historical summaries.
    #[default]
    Historic,
    /// `[0, n_slides]`.
    Inclusive,
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Everything a run needs.
///
/// Passed explicitly to the population builder, the daily sampler, and the
/// day simulator; nothing reads it from ambient state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Number of slides on the sign.
    pub n_slides: u32,

    /// Weekdays simulated each week, in simulation order.
    pub weekdays: Vec<Weekday>,

    /// Population size.
    pub n_students: u32,

    /// Campus opening time, `HH:MM`.
    pub daily_start_time: String,

    /// Campus closing time, `HH:MM`.  Arrival slots span the whole window.
    pub daily_end_time: String,

    /// Seconds between sign rotations.
    pub duration_cycle: u32,

    /// Return the sign to its first slide at the start of every day.
    pub sign_reset: bool,

    /// Number of simulated weeks.
    pub weeks: u32,

    /// Attendance days per student per week.
    pub school_days: u32,

    /// Mean of the daily arrival jitter, seconds.
    pub duration_timely: f64,

    /// Standard deviation of the daily arrival jitter, seconds.
    pub sd_timely: f64,

    /// Mean time a student can see the sign, seconds.
    pub duration_visibility: f64,

    /// Standard deviation of the view duration, seconds.
    pub sd_visibility: f64,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub empty_day: EmptyDayPolicy,

    #[serde(default)]
    pub step_mode: StepMode,

    #[serde(default)]
    pub histogram: HistogramRange,
}

fn default_seed() -> u64 {
    42
}

/// Largest accepted magnitude, in seconds, for the means and standard
/// deviations of the arrival jitter and view duration.  One day.
///
/// Keeps every normal draw far inside `i64` and bounds the length of a
/// simulated day.
pub const MAX_DISTRIBUTION_SECS: f64 = 86_400.0;

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_slides:            8,
            weekdays:            (1..=5).map(Weekday).collect(),
            n_students:          1_000,
            daily_start_time:    "07:00".into(),
            daily_end_time:      "17:00".into(),
            duration_cycle:      8,
            sign_reset:          false,
            weeks:               16,
            school_days:         3,
            duration_timely:     0.0,
            sd_timely:           300.0,
            duration_visibility: 15.0,
            sd_visibility:       5.0,
            seed:                default_seed(),
            empty_day:           EmptyDayPolicy::default(),
            step_mode:           StepMode::default(),
            histogram:           HistogramRange::default(),
        }
    }
}

impl ModelConfig {
    // ── Loading ───────────────────────────────────────────────────────────

    /// Load and validate a configuration file.
    pub fn from_json_path(path: &Path) -> SvResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a configuration from JSON text in either layout.
    pub fn from_json_str(text: &str) -> SvResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| SvError::Parse(e.to_string()))?;
        let config: ModelConfig = serde_json::from_value(flatten_verbose(value))
            .map_err(|e| SvError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check every range constraint.  The first violation is returned.
    pub fn validate(&self) -> SvResult<()> {
        fn at_least_one(key: &str, v: u32) -> SvResult<()> {
            if v < 1 {
                return Err(SvError::Config(format!("{key} must be at least 1, got {v}")));
            }
            Ok(())
        }
        fn spread(key: &str, v: f64) -> SvResult<()> {
            if !(0.0..=MAX_DISTRIBUTION_SECS).contains(&v) {
                return Err(SvError::Config(format!(
                    "{key} must be between 0 and {MAX_DISTRIBUTION_SECS} seconds, got {v}"
                )));
            }
            Ok(())
        }
        fn mean(key: &str, v: f64) -> SvResult<()> {
            if !(-MAX_DISTRIBUTION_SECS..=MAX_DISTRIBUTION_SECS).contains(&v) {
                return Err(SvError::Config(format!(
                    "{key} must be within ±{MAX_DISTRIBUTION_SECS} seconds, got {v}"
                )));
            }
            Ok(())
        }

        at_least_one("n_slides", self.n_slides)?;
        at_least_one("n_students", self.n_students)?;
        at_least_one("weeks", self.weeks)?;
        at_least_one("duration_cycle", self.duration_cycle)?;

        if self.weekdays.is_empty() {
            return Err(SvError::Config("weekdays must not be empty".into()));
        }
        let unique: BTreeSet<Weekday> = self.weekdays.iter().copied().collect();
        if unique.len() != self.weekdays.len() {
            return Err(SvError::Config(format!(
                "weekdays must not repeat, got {:?}",
                self.weekdays.iter().map(|d| d.0).collect::<Vec<_>>()
            )));
        }
        if self.school_days as usize > self.weekdays.len() {
            return Err(SvError::Config(format!(
                "school_days ({}) exceeds the number of weekdays ({})",
                self.school_days,
                self.weekdays.len()
            )));
        }

        mean("duration_timely", self.duration_timely)?;
        spread("sd_timely", self.sd_timely)?;
        mean("duration_visibility", self.duration_visibility)?;
        spread("sd_visibility", self.sd_visibility)?;

        self.window().map_err(|e| match e {
            SvError::Parse(msg) => SvError::Config(msg),
            other => other,
        })?;
        Ok(())
    }

    // ── Derived values ────────────────────────────────────────────────────

    /// The parsed opening hours.
    pub fn window(&self) -> SvResult<DailyWindow> {
        DailyWindow::parse(&self.daily_start_time, &self.daily_end_time)
    }

    /// Length of one simulated day in seconds.
    pub fn seconds_per_day(&self) -> SvResult<u32> {
        Ok(self.window()?.seconds())
    }
}

/// Unwrap the verbose `{"key": {"value": v, ...}}` layout.  Objects that are
/// already flat are returned unchanged.
fn flatten_verbose(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };
    let verbose = !map.is_empty()
        && map
            .values()
            .all(|v| v.as_object().is_some_and(|o| o.contains_key("value")));
    if !verbose {
        return Value::Object(map);
    }
    Value::Object(
        map.into_iter()
            .map(|(k, v)| match v {
                Value::Object(mut o) => (k, o.remove("value").unwrap_or(Value::Null)),
                other => (k, other),
            })
            .collect(),
    )
}
