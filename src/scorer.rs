use crate::args::ScoreArgs;
use crate::error::Result;
use crate::input::Upvotes;
use crate::tracker::RunTracker;
use log::{debug, info};

/// Scores every window of `upvotes`, checking the running frame counts
/// against a recount after each step when `args.verify` is set.
pub fn score(args: &ScoreArgs, upvotes: &Upvotes) -> Result<Vec<i64>> {
    let mut tracker = RunTracker::new(&upvotes.values, upvotes.window)?;
    info!(
        "Scoring {} windows of size {} over {} values",
        tracker.window_count(),
        tracker.window(),
        upvotes.values.len()
    );

    if !args.verify {
        return Ok(tracker.collect());
    }

    let mut scores = Vec::with_capacity(tracker.window_count());
    loop {
        tracker.verify()?;
        scores.push(tracker.score());
        if !tracker.slide() {
            break;
        }
    }
    debug!("Verified frame counts for {} windows", scores.len());
    Ok(scores)
}
