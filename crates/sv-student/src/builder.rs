//! Building the population.
//!
//! # Usage
//!
//! ```rust
//! use sv_core::ModelConfig;
//! use sv_student::PopulationBuilder;
//!
//! let config = ModelConfig { n_students: 100, ..Default::default() };
//! let (store, rngs) = PopulationBuilder::from_config(&config)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 100);
//! assert_eq!(rngs.len(), 100);
//! ```
//!
//! # Sampling
//!
//! Population-level draws happen in this order from one `SimRng` seeded with
//! `config.seed`:
//!
//! 1. `n_students` distinct baseline arrivals from `[1, seconds_per_day]`,
//!    sorted ascending and assigned in creation order (student 0 is the
//!    earliest).
//! 2. For each student in creation order, `school_days` distinct weekdays,
//!    stored ascending.

use sv_core::{ModelConfig, Second, SimRng, SvError, SvResult, Weekday};

use crate::{StudentRngs, StudentStore};

/// Fixed identity of one student, for populations built without sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentSeed {
    pub expected_arrival: Second,
    pub attendance:       Vec<Weekday>,
}

impl StudentSeed {
    pub fn new(expected_arrival: i64, attendance: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            expected_arrival: Second(expected_arrival),
            attendance:       attendance.into_iter().collect(),
        }
    }
}

enum Source {
    Sampled {
        n_students:      usize,
        seconds_per_day: u32,
        weekdays:        Vec<Weekday>,
        school_days:     usize,
    },
    Explicit(Vec<StudentSeed>),
}

/// Builder for [`StudentStore`] + [`StudentRngs`].
pub struct PopulationBuilder {
    seed:   u64,
    source: Source,
}

impl PopulationBuilder {
    /// Sample a population as described by `config`.
    ///
    /// Fails only if the day length cannot be derived from the config.
    pub fn from_config(config: &ModelConfig) -> SvResult<Self> {
        Ok(Self {
            seed:   config.seed,
            source: Source::Sampled {
                n_students:      config.n_students as usize,
                seconds_per_day: config.seconds_per_day()?,
                weekdays:        config.weekdays.clone(),
                school_days:     config.school_days as usize,
            },
        })
    }

    /// Use the given students verbatim.  `seed` still drives the per-student
    /// daily RNGs.
    pub fn explicit(seed: u64, students: Vec<StudentSeed>) -> Self {
        Self { seed, source: Source::Explicit(students) }
    }

    /// Draw (or take) every student and allocate the SoA arrays.
    ///
    /// # Errors
    ///
    /// [`SvError::Sampling`] if more students are requested than there are
    /// arrival seconds in the day, or more school days than weekdays.
    pub fn build(self) -> SvResult<(StudentStore, StudentRngs)> {
        let (arrivals, attendance): (Vec<Second>, Vec<Vec<Weekday>>) = match self.source {
            Source::Explicit(students) => students
                .into_iter()
                .map(|s| {
                    let mut days = s.attendance;
                    days.sort_unstable();
                    days.dedup();
                    (s.expected_arrival, days)
                })
                .unzip(),
            Source::Sampled { n_students, seconds_per_day, weekdays, school_days } => {
                let mut rng = SimRng::new(self.seed);
                let arrivals = sample_arrivals(&mut rng, n_students, seconds_per_day)?;

                let mut attendance = Vec::with_capacity(n_students);
                for _ in 0..n_students {
                    let mut days = rng.choose_distinct(&weekdays, school_days).map_err(|_| {
                        SvError::Sampling(format!(
                            "cannot assign {school_days} school days from {} weekdays",
                            weekdays.len()
                        ))
                    })?;
                    days.sort_unstable();
                    attendance.push(days);
                }
                (arrivals, attendance)
            }
        };

        let store = StudentStore::new(arrivals, attendance);
        let rngs = StudentRngs::new(store.count, self.seed);
        Ok((store, rngs))
    }
}

/// `n` distinct baseline arrivals from `[1, seconds]`, ascending.
fn sample_arrivals(rng: &mut SimRng, n: usize, seconds: u32) -> SvResult<Vec<Second>> {
    let picked = rng.sample_distinct(seconds as usize, n).map_err(|_| {
        SvError::Sampling(format!(
            "cannot draw {n} distinct arrival times from a {seconds}-second day"
        ))
    })?;
    let mut arrivals: Vec<Second> = picked.into_iter().map(|i| Second(i as i64 + 1)).collect();
    arrivals.sort_unstable();
    Ok(arrivals)
}
