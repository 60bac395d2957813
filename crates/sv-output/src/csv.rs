//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `student_exposure.csv`
//! - `day_reports.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DayReportRow, OutputResult, StudentExposureRow};

pub const EXPOSURE_FILE: &str = "student_exposure.csv";
pub const DAY_REPORTS_FILE: &str = "day_reports.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    exposure: Writer<File>,
    days:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut exposure = Writer::from_path(dir.join(EXPOSURE_FILE))?;
        exposure.write_record(["student_id", "expected_arrival", "attendance_days", "slides_seen"])?;

        let mut days = Writer::from_path(dir.join(DAY_REPORTS_FILE))?;
        days.write_record([
            "week",
            "weekday",
            "roster",
            "admitted",
            "rotations",
            "final_second",
            "skipped",
        ])?;

        Ok(Self { exposure, days, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day_report(&mut self, row: &DayReportRow) -> OutputResult<()> {
        self.days.write_record(&[
            row.week.to_string(),
            row.weekday.to_string(),
            row.roster.to_string(),
            row.admitted.to_string(),
            row.rotations.to_string(),
            row.final_second.to_string(),
            (row.skipped as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_exposure(&mut self, rows: &[StudentExposureRow]) -> OutputResult<()> {
        for row in rows {
            self.exposure.write_record(&[
                row.student_id.to_string(),
                row.expected_arrival.to_string(),
                row.attendance_days.clone(),
                row.slides_seen.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.exposure.flush()?;
        self.days.flush()?;
        Ok(())
    }
}
