use log::{debug, trace};

use crate::error::{Error, Result};
use crate::tracker::run::{Direction, Polarity, RunList};

/// Frame totals for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCounts {
    pub non_decreasing: i64,
    pub non_increasing: i64,
}

impl FrameCounts {
    pub fn score(&self) -> i64 {
        self.non_decreasing - self.non_increasing
    }
}

/// Incremental scorer over every window of `window` consecutive values.
///
/// The first window is scanned once on construction; every later window is
/// reached by retiring the pair that leaves on the left and admitting the pair
/// that enters on the right, so only the front and back runs of each list are
/// ever touched. Iterating yields one score per window, left to right.
#[derive(Debug, Clone)]
pub struct RunTracker<'a> {
    values: &'a [i64],
    window: usize,
    left: usize,
    started: bool,
    direction: Direction,
    non_decreasing: RunList,
    non_increasing: RunList,
}

impl<'a> RunTracker<'a> {
    pub fn new(values: &'a [i64], window: usize) -> Result<Self> {
        if window == 0 || window > values.len() {
            return Err(Error::InvalidWindow {
                window: window as i64,
                len: values.len(),
            });
        }

        let mut tracker = Self {
            values,
            window,
            left: 0,
            started: false,
            direction: Direction::Equal,
            non_decreasing: RunList::new(Polarity::NonDecreasing),
            non_increasing: RunList::new(Polarity::NonIncreasing),
        };
        tracker.scan_first_window();
        Ok(tracker)
    }

    fn scan_first_window(&mut self) {
        for pair in 0..self.window - 1 {
            let (prev, next) = (self.values[pair], self.values[pair + 1]);
            self.non_decreasing.scan(pair, prev, next, self.direction);
            self.non_increasing.scan(pair, prev, next, self.direction);
            self.direction = Direction::of(prev, next);
        }
        self.non_decreasing.recount();
        self.non_increasing.recount();

        debug!(
            "Initial window: {} non-decreasing runs, {} non-increasing runs, counts={:?}",
            self.non_decreasing.len(),
            self.non_increasing.len(),
            self.counts()
        );
    }

    /// Moves the window one position to the right. Returns `false` when the
    /// window already ends at the last value.
    pub fn slide(&mut self) -> bool {
        if self.left + self.window >= self.values.len() {
            return false;
        }
        self.left += 1;
        if self.window == 1 {
            return true;
        }

        let retiring = self.left - 1;
        self.non_decreasing.retire(retiring);
        self.non_increasing.retire(retiring);

        let entering = self.left + self.window - 2;
        let (prev, next) = (self.values[entering], self.values[entering + 1]);
        self.non_decreasing.admit(entering, prev, next, self.direction);
        self.non_increasing.admit(entering, prev, next, self.direction);
        self.direction = Direction::of(prev, next);

        trace!("Window {}: counts={:?}", self.left, self.counts());
        true
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Left edge of the current window.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Total number of windows over the input.
    pub fn window_count(&self) -> usize {
        self.values.len() - self.window + 1
    }

    pub fn non_decreasing(&self) -> &RunList {
        &self.non_decreasing
    }

    pub fn non_increasing(&self) -> &RunList {
        &self.non_increasing
    }

    pub fn counts(&self) -> FrameCounts {
        FrameCounts {
            non_decreasing: self.non_decreasing.frames(),
            non_increasing: self.non_increasing.frames(),
        }
    }

    pub fn score(&self) -> i64 {
        self.counts().score()
    }

    /// Frame totals summed from scratch over the current runs.
    pub fn recount(&self) -> FrameCounts {
        FrameCounts {
            non_decreasing: self.non_decreasing.count_frames(),
            non_increasing: self.non_increasing.count_frames(),
        }
    }

    /// Checks the incrementally maintained totals against a full recount.
    pub fn verify(&self) -> Result<()> {
        let tracked = self.counts();
        let counted = self.recount();
        if tracked != counted {
            return Err(Error::AggregateMismatch {
                window: self.left,
                tracked_nd: tracked.non_decreasing,
                tracked_ni: tracked.non_increasing,
                counted_nd: counted.non_decreasing,
                counted_ni: counted.non_increasing,
            });
        }
        Ok(())
    }

    /// Scores still to be yielded; the current window counts until `next`
    /// has returned it.
    fn remaining(&self) -> usize {
        self.window_count() - self.left - usize::from(self.started)
    }
}

impl Iterator for RunTracker<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if !self.started {
            self.started = true;
            return Some(self.score());
        }
        if self.slide() {
            Some(self.score())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RunTracker<'_> {}

/// Lazily scores every window of `window` consecutive values.
pub fn scores(values: &[i64], window: usize) -> Result<RunTracker<'_>> {
    RunTracker::new(values, window)
}
