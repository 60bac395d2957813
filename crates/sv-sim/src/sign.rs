//! `SignRing` — the rotating sign as a fixed array with a modular cursor.

use sv_core::SlideId;

use crate::{SimError, SimResult};

/// A circular sequence of slides.  The cursor is always a valid index.
#[derive(Clone, Debug)]
pub struct SignRing {
    slides: Box<[SlideId]>,
    cursor: usize,
}

impl SignRing {
    /// A sign showing slides `0..slide_count`, cursor on slide 0.
    pub fn new(slide_count: u32) -> SimResult<Self> {
        if slide_count < 1 {
            return Err(SimError::Config("a sign needs at least one slide".into()));
        }
        Ok(Self { slides: (0..slide_count).map(SlideId).collect(), cursor: 0 })
    }

    /// The slide currently on display.
    #[inline]
    pub fn current(&self) -> SlideId {
        self.slides[self.cursor]
    }

    /// Move to the next slide, wrapping past the last back to the first.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.slides.len() {
            self.cursor = 0;
        }
    }

    /// Equivalent to calling [`advance`](Self::advance) `n` times.
    #[inline]
    pub fn advance_by(&mut self, n: u64) {
        let len = self.slides.len() as u64;
        self.cursor = ((self.cursor as u64 + n % len) % len) as usize;
    }

    /// Return to the first slide.
    #[inline]
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Index of the current slide in the ring.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; a sign has at least one slide.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
