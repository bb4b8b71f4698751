use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Index window `[start, start + size)` into every dataset.
///
/// Only consulted when data retention is enabled; without retention the
/// whole dataset is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    start: usize,
    size: usize,
}

impl ViewWindow {
    /// Creates a window at index 0. A zero size is bumped to 1.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            start: 0,
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn size(self) -> usize {
        self.size
    }

    /// Exclusive end index, not clamped to any dataset.
    #[must_use]
    pub fn end(self) -> usize {
        self.start.saturating_add(self.size)
    }

    /// Largest start that still keeps a full window inside `max_len` points.
    #[must_use]
    pub fn max_start(self, max_len: usize) -> usize {
        max_len.saturating_sub(self.size)
    }

    /// Window range clamped to a dataset of `len` points. May be empty.
    #[must_use]
    pub fn visible_range(self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = self.end().min(len);
        start..end
    }

    /// `true` when `position` would show the newest points of `max_len`.
    #[must_use]
    pub fn is_at_end(self, position: i64, max_len: usize) -> bool {
        position >= to_i64(max_len) - to_i64(self.size)
    }

    /// Moves the window when `0 <= position <= max_start(max_len)`.
    ///
    /// Out-of-range requests leave the window untouched and return `false`;
    /// they are not clamped.
    pub fn try_move_to(&mut self, position: i64, max_len: usize) -> bool {
        if position < 0 || position > to_i64(self.max_start(max_len)) {
            return false;
        }
        // Bounded by `max_start` above, so the cast is lossless.
        self.start = position as usize;
        true
    }

    /// Relative form of [`Self::try_move_to`].
    pub fn try_shift(&mut self, steps: i64, max_len: usize) -> bool {
        let target = to_i64(self.start).saturating_add(steps);
        self.try_move_to(target, max_len)
    }

    /// Aligns the window end with the newest of `len` points once the
    /// dataset has grown past one full window.
    pub fn follow_latest(&mut self, len: usize) -> bool {
        if len == 0 || len - 1 < self.size {
            return false;
        }
        self.start = len - self.size;
        true
    }

    /// Pulls the start back after datasets shrank below the window.
    pub fn clamp_to(&mut self, max_len: usize) -> bool {
        let max_start = self.max_start(max_len);
        if self.start <= max_start {
            return false;
        }
        self.start = max_start;
        true
    }

    pub fn jump_to_end(&mut self, max_len: usize) {
        self.start = self.max_start(max_len);
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
