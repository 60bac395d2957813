//! `sv-sim` — the sign, the day simulator, and the run orchestrator.
//!
//! # Run loop
//!
//! ```text
//! for week in 0..config.weeks:
//!   for weekday in config.weekdays:
//!     DaySimulator::run_day
//!       reset sign → roster → sample → sort → evict/admit/rotate/record
//! ```
//!
//! See [`day`] for the per-second semantics and the two engines.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sv_core::ModelConfig;
//! use sv_sim::{ModelBuilder, NoopObserver};
//!
//! let mut model = ModelBuilder::from_config(ModelConfig::default())?.build()?;
//! model.run(&mut NoopObserver)?;
//! println!("{:?}", model.seen_counts());
//! ```

pub mod builder;
pub mod day;
pub mod error;
pub mod model;
pub mod observer;
pub mod report;
pub mod sign;


pub use builder::ModelBuilder;
pub use day::{DaySimulator, DayWorld};
pub use error::{SimError, SimResult};
pub use model::Model;
pub use observer::{NoopObserver, SimObserver};
pub use report::{DayOutcome, DayReport};
pub use sign::SignRing;
