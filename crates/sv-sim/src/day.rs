//! The day simulator — one weekday's state machine.
//!
//! # Per-second semantics
//!
//! ```text
//! reset sign (if configured); unset every student's daily state
//! roster  = schedule.get(weekday)            (empty → skip or fail)
//! sample arrival / duration / departure for every roster student
//! stable-sort roster by arrival
//! T       = max departure over the roster
//! for s in 0..=T:
//!   ① Evict   — viewers whose departure == s leave
//!   ② Admit   — roster students whose arrival == s enter, in roster order
//!   ③ Rotate  — if s % cadence == 0 the sign advances (always at s = 0)
//!   ④ Record  — every viewer records the current slide
//! ```
//!
//! # Engines
//!
//! [`StepMode::PerSecond`] runs the loop above literally.
//!
//! [`StepMode::Event`] produces the same results while only visiting seconds
//! at which something can change: arrivals, departures (from a
//! [`DepartureQueue`]), and rotation boundaries while somebody is watching.
//! Rotations that happen while nobody is watching are applied in bulk with
//! [`SignRing::advance_by`].  Within a visited second the ①–④ order is the
//! same as above.
//!
//! Zero-length visits (departure == arrival) take part in sorting and in `T`
//! but are never admitted.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use sv_behavior::{DailySampler, SampleContext};
use sv_core::{EmptyDayPolicy, ModelConfig, Second, StepMode, StudentId, Weekday};
use sv_schedule::{DepartureQueue, ScheduleIndex};
use sv_student::{DailyState, StudentRngs, StudentStore};

use crate::{DayOutcome, DayReport, SignRing, SimError, SimObserver, SimResult};

/// Mutable world state a day reads and writes.
pub struct DayWorld<'a, S: DailySampler> {
    pub schedule: &'a ScheduleIndex,
    pub sign:     &'a mut SignRing,
    pub students: &'a mut StudentStore,
    pub rngs:     &'a mut StudentRngs,
    pub sampler:  &'a S,
}

/// Runs single weekdays.  Holds the day-scoped working buffers so they are
/// allocated once per run, not once per day.
pub struct DaySimulator {
    cadence:    u32,
    sign_reset: bool,
    empty_day:  EmptyDayPolicy,
    step_mode:  StepMode,

    /// Students currently in view, in admission order.
    viewing:    Vec<StudentId>,
    /// Pending evictions of the viewers (event engine only).
    departures: DepartureQueue,
    /// Students leaving at the second being processed (event engine only).
    leaving:    FxHashSet<StudentId>,
}

impl DaySimulator {
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        if config.duration_cycle < 1 {
            return Err(SimError::Config("duration_cycle must be at least 1".into()));
        }
        Ok(Self {
            cadence:    config.duration_cycle,
            sign_reset: config.sign_reset,
            empty_day:  config.empty_day,
            step_mode:  config.step_mode,
            viewing:    Vec::new(),
            departures: DepartureQueue::new(),
            leaving:    FxHashSet::default(),
        })
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Number of students in view right now.  Zero between days.
    pub fn viewing_len(&self) -> usize {
        self.viewing.len()
    }

    /// Simulate one weekday.
    pub fn run_day<S: DailySampler, O: SimObserver>(
        &mut self,
        week:      u32,
        weekday:   Weekday,
        mut world: DayWorld<'_, S>,
        observer:  &mut O,
    ) -> SimResult<DayReport> {
        observer.on_day_start(week, weekday);

        if self.sign_reset {
            world.sign.reset();
        }
        world.students.clear_daily();

        let roster = world.schedule.get(weekday);
        if roster.is_empty() {
            return match self.empty_day {
                EmptyDayPolicy::Fail => Err(SimError::DegenerateDay { week, weekday }),
                EmptyDayPolicy::Skip => {
                    warn!(week, weekday = weekday.0, "nobody attends; day skipped");
                    let report = DayReport::skipped(week, weekday);
                    observer.on_day_end(&report);
                    Ok(report)
                }
            };
        }

        // ── Sample and order the day's roster ─────────────────────────────
        let mut day = sample_roster(&roster, week, weekday, &mut world);
        for &(student, state) in &day {
            world.students.daily[student.index()] = Some(state);
        }
        day.sort_by_key(|&(_, state)| state.arrival);

        let final_second = day
            .iter()
            .map(|&(_, state)| state.departure)
            .max()
            .unwrap_or(Second::ZERO);

        // ── Run the engine ────────────────────────────────────────────────
        self.viewing.clear();
        self.departures.clear();

        let (admitted, rotations) = match self.step_mode {
            StepMode::Event => {
                self.step_events(&day, final_second, world.sign, world.students, observer)
            }
            StepMode::PerSecond => {
                self.step_seconds(&day, final_second, world.sign, world.students, observer)
            }
        };

        debug_assert!(self.viewing.is_empty(), "viewers left at end of day");
        debug_assert!(self.departures.is_empty(), "departures left at end of day");

        let report = DayReport {
            week,
            weekday,
            roster: day.len(),
            admitted,
            rotations,
            final_second,
            outcome: DayOutcome::Simulated,
        };
        debug!(
            week,
            weekday = weekday.0,
            roster = report.roster,
            admitted,
            rotations,
            final_second = final_second.0,
            slide = world.sign.position(),
            "day simulated"
        );
        observer.on_day_end(&report);
        Ok(report)
    }

    // ── Engines ───────────────────────────────────────────────────────────

    /// The literal per-second loop.  Returns `(admitted, rotations)`.
    fn step_seconds<O: SimObserver>(
        &mut self,
        day:          &[(StudentId, DailyState)],
        final_second: Second,
        sign:         &mut SignRing,
        students:     &mut StudentStore,
        observer:     &mut O,
    ) -> (usize, u64) {
        let mut next = 0;
        let mut admitted = 0;
        let mut rotations = 0;

        for s in 0..=final_second.0 {
            let now = Second(s);

            // ① Evict
            self.viewing.retain(|&student| {
                let leaving = departure_of(students, student) == now;
                if leaving {
                    observer.on_evict(now, student);
                }
                !leaving
            });

            // ② Admit
            while let Some(&(student, state)) = day.get(next) {
                if state.arrival != now {
                    break;
                }
                next += 1;
                if state.is_visible() {
                    self.viewing.push(student);
                    admitted += 1;
                    observer.on_admit(now, student);
                }
            }

            // ③ Rotate
            if now.is_multiple_of(self.cadence) {
                sign.advance();
                rotations += 1;
            }

            // ④ Record
            let slide = sign.current();
            for &student in &self.viewing {
                students.seen[student.index()].record(slide);
            }
        }
        (admitted, rotations)
    }

    /// Visit only the seconds at which something happens.  Returns
    /// `(admitted, rotations)`.
    fn step_events<O: SimObserver>(
        &mut self,
        day:          &[(StudentId, DailyState)],
        final_second: Second,
        sign:         &mut SignRing,
        students:     &mut StudentStore,
        observer:     &mut O,
    ) -> (usize, u64) {
        let cadence = self.cadence;
        let mut next = 0;
        let mut admitted = 0;
        let mut rotations = 0;
        // Last visited second; −1 so that second 0 counts as a boundary.
        let mut last = Second(-1);

        loop {
            let next_arrival = day.get(next).map(|&(_, state)| state.arrival);
            let next_departure = self.departures.next_second();
            let next_rotation = (!self.viewing.is_empty()).then(|| last.next_boundary(cadence));

            let Some(now) = [next_arrival, next_departure, next_rotation]
                .into_iter()
                .flatten()
                .min()
            else {
                break;
            };
            debug_assert!(now > last && now <= final_second);

            // Rotations in (last, now) happened with an unchanged viewing set.
            // Any viewers were already visited at every boundary, so only the
            // cursor needs catching up.
            let idle = now.offset(-1).boundaries_since(last, cadence);
            sign.advance_by(idle);
            rotations += idle;

            // ① Evict
            if let Some(batch) = self.departures.drain_second(now) {
                self.leaving.clear();
                self.leaving.extend(batch);
                let leaving = &self.leaving;
                self.viewing.retain(|student| {
                    let gone = leaving.contains(student);
                    if gone {
                        observer.on_evict(now, *student);
                    }
                    !gone
                });
            }

            // ② Admit
            while let Some(&(student, state)) = day.get(next) {
                if state.arrival != now {
                    break;
                }
                next += 1;
                if state.is_visible() {
                    self.viewing.push(student);
                    self.departures.push(state.departure, student);
                    admitted += 1;
                    observer.on_admit(now, student);
                }
            }

            // ③ Rotate
            if now.is_multiple_of(cadence) {
                sign.advance();
                rotations += 1;
            }

            // ④ Record
            let slide = sign.current();
            for &student in &self.viewing {
                students.seen[student.index()].record(slide);
            }

            last = now;
        }

        // Rotations after the last event, up to and including the final second.
        let tail = final_second.boundaries_since(last, cadence);
        sign.advance_by(tail);
        rotations += tail;

        (admitted, rotations)
    }
}

/// Draw every roster student's day.  Returned in roster order.
fn sample_roster<S: DailySampler>(
    roster:  &[StudentId],
    week:    u32,
    weekday: Weekday,
    world:   &mut DayWorld<'_, S>,
) -> Vec<(StudentId, DailyState)> {
    let ctx = SampleContext::new(week, weekday, &*world.students);
    let rngs = &mut *world.rngs;
    let sampler = world.sampler;
    roster
        .iter()
        .map(|&student| (student, sampler.sample(student, &ctx, rngs.get_mut(student))))
        .collect()
}

#[inline]
fn departure_of(students: &StudentStore, student: StudentId) -> Second {
    students.daily[student.index()]
        .map(|state| state.departure)
        .unwrap_or(Second::ZERO)
}
