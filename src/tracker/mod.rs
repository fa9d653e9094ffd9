pub mod run;
pub mod sliding;

pub use run::{Direction, Polarity, Run, RunList};
pub use sliding::{scores, FrameCounts, RunTracker};
