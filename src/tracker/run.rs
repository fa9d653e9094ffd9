use std::collections::VecDeque;

use crate::util::frames;

/// Relation of the most recently compared adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
    Equal,
}

impl Direction {
    pub fn of(prev: i64, next: i64) -> Self {
        if next == prev {
            Direction::Equal
        } else if next < prev {
            Direction::Decreasing
        } else {
            Direction::Increasing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    NonDecreasing,
    NonIncreasing,
}

impl Polarity {
    /// Whether the pair `(prev, next)` belongs to a run of this polarity.
    /// Equal pairs belong to both.
    pub fn accepts(self, prev: i64, next: i64) -> bool {
        match self {
            Polarity::NonDecreasing => next >= prev,
            Polarity::NonIncreasing => next <= prev,
        }
    }

    /// Whether a pair following `direction` must open a fresh run.
    pub fn breaks_on(self, direction: Direction) -> bool {
        match self {
            Polarity::NonDecreasing => direction == Direction::Decreasing,
            Polarity::NonIncreasing => direction == Direction::Increasing,
        }
    }
}

/// Half-open span `[start, end)` of adjacent-pair indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn new(pair: usize) -> Self {
        Self { start: pair, end: pair + 1 }
    }

    pub fn size(&self) -> usize {
        self.end - self.start
    }
}

/// Runs of one polarity inside the current window, ordered by position,
/// together with their running frame count.
#[derive(Debug, Clone)]
pub struct RunList {
    polarity: Polarity,
    runs: VecDeque<Run>,
    frames: i64,
}

impl RunList {
    pub fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            runs: VecDeque::new(),
            frames: 0,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn frames(&self) -> i64 {
        self.frames
    }

    pub fn runs(&self) -> impl Iterator<Item = &Run> + '_ {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Extends the trailing run with `pair`, or opens a new one when the list
    /// is empty or `direction` breaks this polarity. Returns the size of the
    /// run that now holds `pair`. Does not touch the frame count.
    fn extend(&mut self, pair: usize, direction: Direction) -> usize {
        if !self.polarity.breaks_on(direction) {
            if let Some(back) = self.runs.back_mut() {
                debug_assert_eq!(back.end, pair, "extended run must end at the new pair");
                back.end = pair + 1;
                return back.size();
            }
        }
        self.runs.push_back(Run::new(pair));
        1
    }

    /// Initial-scan step: records `pair` without adjusting the frame count.
    /// Call [`RunList::recount`] once the scan is done.
    pub fn scan(&mut self, pair: usize, prev: i64, next: i64, direction: Direction) {
        if self.polarity.accepts(prev, next) {
            self.extend(pair, direction);
        }
    }

    /// Slide step: records the entering `pair` and adds the frames it creates.
    /// Growing a run from `S - 1` to `S` pairs adds exactly `S` frames.
    pub fn admit(&mut self, pair: usize, prev: i64, next: i64, direction: Direction) {
        if self.polarity.accepts(prev, next) {
            let size = self.extend(pair, direction);
            self.frames += size as i64;
        }
    }

    /// Slide step: drops the leaving `pair` from the front run if it holds it.
    /// Shrinking a run of `S` pairs from the front removes exactly `S` frames.
    pub fn retire(&mut self, pair: usize) {
        let Some(front) = self.runs.front_mut() else {
            return;
        };
        if front.start != pair {
            return;
        }
        self.frames -= front.size() as i64;
        front.start += 1;
        if front.size() == 0 {
            self.runs.pop_front();
        }
    }

    /// Frame count summed from scratch over the current runs.
    pub fn count_frames(&self) -> i64 {
        self.runs.iter().map(|run| frames(run.size())).sum()
    }

    /// Replaces the running frame count with a full recount.
    pub fn recount(&mut self) {
        self.frames = self.count_frames();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(list: &mut RunList, values: &[i64]) {
        let mut direction = Direction::Equal;
        for (pair, w) in values.windows(2).enumerate() {
            list.scan(pair, w[0], w[1], direction);
            direction = Direction::of(w[0], w[1]);
        }
        list.recount();
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::of(1, 2), Direction::Increasing);
        assert_eq!(Direction::of(2, 1), Direction::Decreasing);
        assert_eq!(Direction::of(3, 3), Direction::Equal);
    }

    #[test]
    fn test_equal_pairs_belong_to_both() {
        assert!(Polarity::NonDecreasing.accepts(4, 4));
        assert!(Polarity::NonIncreasing.accepts(4, 4));
        assert!(!Polarity::NonDecreasing.accepts(4, 3));
        assert!(!Polarity::NonIncreasing.accepts(3, 4));
    }

    #[test]
    fn test_scan_splits_runs() {
        // {1, 1, 0, 1, 2}: nd runs [0,1) and [2,4), ni run [0,2)
        let values = [1, 1, 0, 1, 2];
        let mut nd = RunList::new(Polarity::NonDecreasing);
        let mut ni = RunList::new(Polarity::NonIncreasing);
        scan_all(&mut nd, &values);
        scan_all(&mut ni, &values);

        assert_eq!(nd.polarity(), Polarity::NonDecreasing);
        let nd_runs: Vec<Run> = nd.runs().copied().collect();
        assert_eq!(nd_runs, vec![Run { start: 0, end: 1 }, Run { start: 2, end: 4 }]);
        assert_eq!(nd.frames(), 1 + 3);

        let ni_runs: Vec<Run> = ni.runs().copied().collect();
        assert_eq!(ni_runs, vec![Run { start: 0, end: 2 }]);
        assert_eq!(ni.frames(), 3);
    }

    #[test]
    fn test_retire_shrinks_then_pops() {
        let mut nd = RunList::new(Polarity::NonDecreasing);
        scan_all(&mut nd, &[1, 2, 3]);
        assert_eq!(nd.frames(), 3);

        nd.retire(0);
        assert_eq!(nd.frames(), 1);
        assert_eq!(nd.runs().next(), Some(&Run { start: 1, end: 2 }));

        nd.retire(1);
        assert_eq!(nd.frames(), 0);
        assert!(nd.is_empty());
    }

    #[test]
    fn test_retire_ignores_other_pairs() {
        let mut ni = RunList::new(Polarity::NonIncreasing);
        scan_all(&mut ni, &[1, 2, 1]);
        assert_eq!(ni.len(), 1);
        ni.retire(0);
        assert_eq!(ni.len(), 1);
        assert_eq!(ni.frames(), 1);
    }

    #[test]
    fn test_admit_matches_recount() {
        let mut nd = RunList::new(Polarity::NonDecreasing);
        let values = [3, 4, 4, 2, 5, 6];
        let mut direction = Direction::Equal;
        for (pair, w) in values.windows(2).enumerate() {
            nd.admit(pair, w[0], w[1], direction);
            direction = Direction::of(w[0], w[1]);
            assert_eq!(nd.frames(), nd.count_frames());
        }
        assert_eq!(nd.frames(), frames(2) + frames(2));
    }
}
