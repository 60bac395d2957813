//! `sv-output` — what a finished run reports.
//!
//! | Item               | Purpose                                                        |
//! |--------------------|----------------------------------------------------------------|
//! | [`Summary`]        | min / max / mean / histogram of distinct slides seen           |
//! | [`StudentReport`]  | one student's line, `Student <id> (Signs Viewed: <n>)`         |
//! | [`CsvWriter`]      | `student_exposure.csv` and `day_reports.csv`                   |
//! | [`OutputObserver`] | drives any [`OutputWriter`] from `sv_sim::SimObserver` hooks   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sv_output::{CsvWriter, OutputObserver, Summary};
//!
//! let mut obs = OutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! model.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! let summary = Summary::from_store(&model.students, model.config.n_slides, model.config.histogram)?;
//! println!("{summary}");
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod summary;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use report::StudentReport;
pub use row::{DayReportRow, StudentExposureRow};
pub use summary::Summary;
pub use writer::OutputWriter;
