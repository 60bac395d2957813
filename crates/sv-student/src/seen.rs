//! `SeenSlides` — the set of distinct slides a student has been exposed to.

use rustc_hash::FxHashSet;

use sv_core::SlideId;

/// Deduplicated, grow-only collection of slide identifiers (FxHash-backed).
#[derive(Clone, Debug, Default)]
pub struct SeenSlides {
    inner: FxHashSet<SlideId>,
}

impl SeenSlides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `slide`.  Returns `true` if it had not been seen before.
    #[inline]
    pub fn record(&mut self, slide: SlideId) -> bool {
        self.inner.insert(slide)
    }

    /// Number of distinct slides seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The seen slides in ascending order.
    pub fn sorted(&self) -> Vec<SlideId> {
        let mut v: Vec<SlideId> = self.inner.iter().copied().collect();
        v.sort_unstable();
        v
    }
}
