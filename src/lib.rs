pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod scorer;
pub mod tracker;
pub mod util;

pub use error::{Error, Result};
pub use tracker::{scores, FrameCounts, RunTracker};
