//! The summary aggregator: population statistics over distinct slides seen.
//!
//! The only input is one exposure count per student, in any order.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use sv_core::HistogramRange;
use sv_student::StudentStore;

use crate::{OutputError, OutputResult};

/// Population-level exposure statistics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub n_students:        usize,
    pub min_signs_viewed:  usize,
    pub max_signs_viewed:  usize,
    pub avg_signs_viewed:  f64,
    /// Students per distinct-slide count.  Every bucket in range is present,
    /// including empty ones.
    pub dist_signs_viewed: BTreeMap<usize, usize>,
}

impl Summary {
    /// Summarise `counts`.
    ///
    /// [`HistogramRange::Historic`] buckets `[0, n_slides)`, so students who
    /// saw every slide appear in the min/max/mean but in no bucket.
    /// [`HistogramRange::Inclusive`] buckets `[0, n_slides]`.
    pub fn from_counts(
        counts:   &[usize],
        n_slides: u32,
        range:    HistogramRange,
    ) -> OutputResult<Self> {
        let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
            return Err(OutputError::EmptyPopulation);
        };
        let total: usize = counts.iter().sum();

        let buckets = match range {
            HistogramRange::Historic => n_slides as usize,
            HistogramRange::Inclusive => n_slides as usize + 1,
        };
        let mut dist: BTreeMap<usize, usize> = (0..buckets).map(|b| (b, 0)).collect();
        for &n in counts {
            if let Some(slot) = dist.get_mut(&n) {
                *slot += 1;
            }
        }

        let summary = Self {
            n_students:        counts.len(),
            min_signs_viewed:  min,
            max_signs_viewed:  max,
            avg_signs_viewed:  total as f64 / counts.len() as f64,
            dist_signs_viewed: dist,
        };

        let unbucketed = summary.unbucketed();
        if unbucketed > 0 {
            warn!(unbucketed, n_slides, ?range, "students outside the histogram range");
        }
        Ok(summary)
    }

    /// Summarise every student in `students`.
    pub fn from_store(
        students: &StudentStore,
        n_slides: u32,
        range:    HistogramRange,
    ) -> OutputResult<Self> {
        Self::from_counts(&students.seen_counts(), n_slides, range)
    }

    /// Number of students counted in the statistics but in no histogram
    /// bucket.
    pub fn unbucketed(&self) -> usize {
        self.n_students - self.dist_signs_viewed.values().sum::<usize>()
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n_students:       {}", self.n_students)?;
        writeln!(f, "min_signs_viewed: {}", self.min_signs_viewed)?;
        writeln!(f, "max_signs_viewed: {}", self.max_signs_viewed)?;
        writeln!(f, "avg_signs_viewed: {:.3}", self.avg_signs_viewed)?;
        write!(f, "dist_signs_viewed:")?;
        for (seen, students) in &self.dist_signs_viewed {
            write!(f, "\n  {seen:>3}: {students}")?;
        }
        Ok(())
    }
}
