//! `sv-core` — foundational types for the campus sign exposure simulator.
//!
//! This crate is a dependency of every other `sv-*` crate.  It has no `sv-*`
//! dependencies and only a few external ones (`rand`, `thiserror`, `serde`,
//! `serde_json`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `StudentId`, `SlideId`, `Weekday`                        |
//! | [`time`]     | `Second`, `DailyWindow`, `parse_clock`                   |
//! | [`rng`]      | `StudentRng` (per-student), `SimRng` (population-level)  |
//! | [`config`]   | `ModelConfig` and its policy enums, JSON loading         |
//! | [`error`]    | `SvError`, `SvResult`                                    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EmptyDayPolicy, HistogramRange, MAX_DISTRIBUTION_SECS, ModelConfig, StepMode};
pub use error::{SvError, SvResult};
pub use ids::{SlideId, StudentId, Weekday};
pub use rng::{SimRng, StudentRng};
pub use time::{DailyWindow, Second, parse_clock};
