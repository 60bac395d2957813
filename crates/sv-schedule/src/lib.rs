//! `sv-schedule` — who attends when, and who leaves when.
//!
//! # Crate layout
//!
//! | Module              | Contents                                               |
//! |---------------------|--------------------------------------------------------|
//! | [`index`]           | `ScheduleIndex` (weekday → roster, copy-on-read)        |
//! | [`departure_queue`] | `DepartureQueue` (`BTreeMap<Second, Vec<StudentId>>`)   |
//! | [`error`]           | `ScheduleError`, `ScheduleResult<T>`                   |

pub mod departure_queue;
pub mod error;
pub mod index;

#[cfg(test)]
mod tests;

pub use departure_queue::DepartureQueue;
pub use error::{ScheduleError, ScheduleResult};
pub use index::{Roster, ScheduleIndex};
