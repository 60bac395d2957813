//! Deterministic per-student and population-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each student gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (student_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive student IDs uniformly across the seed space.
//! This means:
//!
//! - A student's daily draws never depend on how the roster was ordered or
//!   which other students attended that day.
//! - Adding students at the end of the population does not disturb the draws
//!   of existing students.
//!
//! Population-level draws (baseline arrivals, attendance days) use `SimRng`
//! and happen once, in creation order, before the first day.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{StudentId, SvError, SvResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── StudentRng ────────────────────────────────────────────────────────────────

/// Per-student deterministic RNG.
///
/// Created once per student at population build time and stored in a
/// parallel `Vec<StudentRng>` alongside the other SoA arrays.
pub struct StudentRng(SmallRng);

impl StudentRng {
    /// Seed deterministically from the run's global seed and a student ID.
    pub fn new(global_seed: u64, student: StudentId) -> Self {
        let seed = global_seed ^ (student.0 as u64).wrapping_mul(MIXING_CONSTANT);
        StudentRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Population-level RNG for the one-off draws made while building the
/// population.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw `amount` distinct indices from `0..length` without replacement.
    ///
    /// Uses `rand::seq::index::sample`, which picks Floyd's algorithm or a
    /// partial shuffle depending on the ratio, so `0..length` is never
    /// materialised for small samples of a large range.  Order of the result
    /// is unspecified.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> SvResult<Vec<usize>> {
        if amount > length {
            return Err(SvError::Sampling(format!(
                "cannot draw {amount} distinct values from a population of {length}"
            )));
        }
        Ok(rand::seq::index::sample(&mut self.0, length, amount).into_vec())
    }

    /// Choose `amount` distinct elements of `items` without replacement.
    pub fn choose_distinct<T: Copy>(&mut self, items: &[T], amount: usize) -> SvResult<Vec<T>> {
        Ok(self
            .sample_distinct(items.len(), amount)?
            .into_iter()
            .map(|i| items[i])
            .collect())
    }
}
