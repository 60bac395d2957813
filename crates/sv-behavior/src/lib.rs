//! `sv-behavior` — how a student's day is drawn.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`context`]  | `SampleContext<'a>` — read-only view shared by every draw     |
//! | [`sampler`]  | `DailySampler` trait                                          |
//! | [`gaussian`] | `GaussianSampler` — normal arrival jitter and view duration   |
//! | [`fixed`]    | `FixedSampler` — scripted daily states                        |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! Samplers are stateless: all randomness comes from the per-student
//! `StudentRng` handed to each call, so a student's draws do not depend on
//! which other students attend the same day.

pub mod context;
pub mod error;
pub mod fixed;
pub mod gaussian;
pub mod sampler;


pub use context::SampleContext;
pub use error::{BehaviorError, BehaviorResult};
pub use fixed::FixedSampler;
pub use gaussian::GaussianSampler;
pub use sampler::DailySampler;
