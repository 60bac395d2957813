//! Core student storage: `StudentStore` (SoA data) and `StudentRngs`
//! (per-student RNG).
//!
//! # Why two structs?
//!
//! The daily sampler needs `&mut StudentRng` for one student while the day
//! simulator holds `&mut StudentStore` to write that student's daily state.
//! Keeping the RNGs in a separate struct lets both borrows coexist:
//!
//! ```ignore
//! let rng = rngs.get_mut(student);
//! store.daily[student.index()] = Some(sampler.sample(student, &store, rng)?);
//! ```

use sv_core::{Second, StudentId, StudentRng, Weekday};

use crate::SeenSlides;

// ── StudentRngs ───────────────────────────────────────────────────────────────

/// Per-student deterministic RNG state, separated from [`StudentStore`] for
/// the split-borrow pattern above.
pub struct StudentRngs {
    pub inner: Vec<StudentRng>,
}

impl StudentRngs {
    /// Allocate and seed `count` per-student RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| StudentRng::new(global_seed, StudentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one student's RNG.
    #[inline]
    pub fn get_mut(&mut self, student: StudentId) -> &mut StudentRng {
        &mut self.inner[student.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── DailyState ────────────────────────────────────────────────────────────────

/// The per-day fields of one student, recomputed on every attendance day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DailyState {
    /// When the student comes into view of the sign.  Never negative.
    pub arrival: Second,

    /// The view duration exactly as drawn (may be zero or negative).
    pub raw_view_duration: i64,

    /// The view duration used for departure: `raw_view_duration` clamped to
    /// `>= 0`.
    pub view_duration: i64,

    /// `arrival + view_duration`; never earlier than `arrival`.
    pub departure: Second,
}

impl DailyState {
    /// Build a daily state from an arrival and a raw duration draw.
    pub fn new(arrival: Second, raw_view_duration: i64) -> Self {
        let arrival = arrival.floor_zero();
        let view_duration = raw_view_duration.max(0);
        Self {
            arrival,
            raw_view_duration,
            view_duration,
            departure: arrival + view_duration,
        }
    }

    /// `true` if the student is in view for at least one second.  Zero-length
    /// visits are never admitted to the viewing set.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.departure > self.arrival
    }
}

// ── StudentStore ──────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the whole population.
///
/// Every `Vec` field has exactly `count` elements; the `StudentId` value is the
/// index into all of them:
///
/// ```ignore
/// let baseline = store.expected_arrival[student.index()];
/// ```
pub struct StudentStore {
    /// Number of students.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Baseline arrival time, fixed for the run.
    pub expected_arrival: Vec<Second>,

    /// Weekdays this student attends, ascending, fixed for the run.
    pub attendance: Vec<Vec<Weekday>>,

    /// State for the current day.  `None` for students who do not attend
    /// it; after a run, reflects the last simulated weekday.
    pub daily: Vec<Option<DailyState>>,

    /// Every distinct slide the student has seen so far.
    pub seen: Vec<SeenSlides>,
}

impl StudentStore {
    /// `true` if there are no students.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `StudentId`s in creation order.
    pub fn student_ids(&self) -> impl Iterator<Item = StudentId> + '_ {
        (0..self.count as u32).map(StudentId)
    }

    /// `true` if `student` exists in this population.
    #[inline]
    pub fn contains(&self, student: StudentId) -> bool {
        student.index() < self.count
    }

    /// The student's state for the current day, if they attend it.
    #[inline]
    pub fn daily(&self, student: StudentId) -> Option<&DailyState> {
        self.daily[student.index()].as_ref()
    }

    /// Unset every student's daily state.  Called at the start of each day,
    /// before the roster's states are written.
    pub fn clear_daily(&mut self) {
        self.daily.fill(None);
    }

    /// Number of distinct slides `student` has seen.
    #[inline]
    pub fn seen_count(&self, student: StudentId) -> usize {
        self.seen[student.index()].len()
    }

    /// Distinct-slide counts for every student, in creation order.  This is the
    /// input contract of the summary aggregator.
    pub fn seen_counts(&self) -> Vec<usize> {
        self.seen.iter().map(SeenSlides::len).collect()
    }

    // ── Package-private constructor used by PopulationBuilder ─────────────

    pub(crate) fn new(expected_arrival: Vec<Second>, attendance: Vec<Vec<Weekday>>) -> Self {
        let count = expected_arrival.len();
        debug_assert_eq!(count, attendance.len());
        Self {
            count,
            expected_arrival,
            attendance,
            daily: vec![None; count],
            seen: vec![SeenSlides::new(); count],
        }
    }
}
