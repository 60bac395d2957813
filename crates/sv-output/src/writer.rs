//! The `OutputWriter` trait implemented by backend writers.

use crate::{DayReportRow, OutputResult, StudentExposureRow};

/// Sink for run output.
///
/// Driven by [`OutputObserver`][crate::OutputObserver], which keeps the first
/// error for [`take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one weekday's report.
    fn write_day_report(&mut self, row: &DayReportRow) -> OutputResult<()>;

    /// Write the final exposure of a batch of students.
    fn write_exposure(&mut self, rows: &[StudentExposureRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
