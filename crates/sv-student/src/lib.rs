//! `sv-student` — Structure-of-Arrays student storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`store`]   | `StudentStore` (SoA arrays), `StudentRngs`, `DailyState`   |
//! | [`seen`]    | `SeenSlides` — a student's deduplicated exposure set       |
//! | [`builder`] | `PopulationBuilder`, `StudentSeed`                         |
//!
//! # Lifecycle
//!
//! Identity, baseline arrival, and attendance days are fixed when the
//! population is built.  `daily` is overwritten at the start of each
//! attendance day.  `seen` only ever grows, for the whole run.

pub mod builder;
pub mod seen;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{PopulationBuilder, StudentSeed};
pub use seen::SeenSlides;
pub use store::{DailyState, StudentRngs, StudentStore};
