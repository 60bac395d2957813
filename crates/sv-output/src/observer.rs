//! `OutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sv_sim::{DayReport, SimObserver};
use sv_student::StudentStore;

use crate::row::{DayReportRow, StudentExposureRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per weekday as the run progresses and
/// every student's exposure once the run ends.
///
/// `SimObserver` methods cannot fail, so writer errors are stored.  After
/// `model.run()` returns, check with [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_day_end(&mut self, report: &DayReport) {
        let result = self.writer.write_day_report(&DayReportRow::from(report));
        self.store_err(result);
    }

    fn on_run_end(&mut self, students: &StudentStore) {
        let rows: Vec<StudentExposureRow> = students
            .student_ids()
            .map(|id| StudentExposureRow::from_store(students, id))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_exposure(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
