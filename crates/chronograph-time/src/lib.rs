mod stopwatch;
mod time_source;

pub use stopwatch::Stopwatch;
pub use time_source::{get_timestamp, ManualClock, RealtimeClock, TimeSource};
