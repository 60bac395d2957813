//! Simulation time model.
//!
//! # Design
//!
//! Every simulated day starts at second 0 (campus opening) and time is
//! counted in whole seconds.  Arrival and departure times are absolute
//! seconds since opening; a student may depart after `daily_end_time`
//! because view durations are not bounded by the day's length.
//!
//! The day length is derived from two `HH:MM` wall-clock strings without a
//! datetime library: only the difference between them matters.

use std::fmt;

use crate::{SvError, SvResult};

// ── Second ────────────────────────────────────────────────────────────────────

/// Seconds since the start of the simulated day.
///
/// Signed because a raw view-duration draw may be negative.  Adding an
/// offset saturates instead of overflowing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Second(pub i64);

impl Second {
    pub const ZERO: Second = Second(0);

    /// Return the second `n` steps after `self` (`n` may be negative),
    /// saturating at the ends of `i64`.
    #[inline]
    pub fn offset(self, n: i64) -> Second {
        Second(self.0.saturating_add(n))
    }

    /// Clamp to second 0: nobody arrives before campus opens.
    #[inline]
    pub fn floor_zero(self) -> Second {
        Second(self.0.max(0))
    }

    /// `true` when `self` is a rotation boundary for a sign rotating every
    /// `cadence` seconds.  Second 0 is always a boundary.
    #[inline]
    pub fn is_multiple_of(self, cadence: u32) -> bool {
        self.0.rem_euclid(cadence as i64) == 0
    }

    /// Number of rotation boundaries (multiples of `cadence`) in the
    /// half-open interval `(after, self]`.
    #[inline]
    pub fn boundaries_since(self, after: Second, cadence: u32) -> u64 {
        if self <= after {
            return 0;
        }
        let c = cadence as i64;
        (self.0.div_euclid(c) - after.0.div_euclid(c)) as u64
    }

    /// The first rotation boundary strictly after `self`.
    #[inline]
    pub fn next_boundary(self, cadence: u32) -> Second {
        let c = cadence as i64;
        Second((self.0.div_euclid(c) + 1) * c)
    }
}

impl std::ops::Add<i64> for Second {
    type Output = Second;
    #[inline]
    fn add(self, rhs: i64) -> Second {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Second {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Second) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Second {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// ── Clock parsing ─────────────────────────────────────────────────────────────

/// Parse an `HH:MM` wall-clock string into seconds after midnight.
///
/// One- or two-digit hours are accepted (`7:30` and `07:30` are the same).
pub fn parse_clock(s: &str) -> SvResult<u32> {
    let bad = || SvError::Parse(format!("invalid clock time {s:?}: expected HH:MM"));

    let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(bad());
    }
    let hours: u32 = h.parse().map_err(|_| bad())?;
    let minutes: u32 = m.parse().map_err(|_| bad())?;
    if hours > 23 || minutes > 59 {
        return Err(bad());
    }
    Ok(hours * 3_600 + minutes * 60)
}

// ── DailyWindow ───────────────────────────────────────────────────────────────

/// The opening hours of one simulated day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DailyWindow {
    /// Seconds after midnight at which the day starts.
    pub start_secs: u32,
    /// Seconds after midnight at which the day ends.
    pub end_secs:   u32,
}

impl DailyWindow {
    /// Parse both ends of the window.  The end must be strictly after the
    /// start; windows that wrap past midnight are rejected.
    pub fn parse(start: &str, end: &str) -> SvResult<Self> {
        let start_secs = parse_clock(start)?;
        let end_secs = parse_clock(end)?;
        if end_secs <= start_secs {
            return Err(SvError::Config(format!(
                "daily_end_time {end:?} must be after daily_start_time {start:?}"
            )));
        }
        Ok(Self { start_secs, end_secs })
    }

    /// Length of the day in seconds.
    #[inline]
    pub fn seconds(&self) -> u32 {
        self.end_secs - self.start_secs
    }
}
