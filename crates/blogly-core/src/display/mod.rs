//! Derived, display-only computations over records.

mod name;
mod summary;
mod time_ago;

pub use name::compose_full_name;
pub use summary::{SUMMARY_CUTOFF, SUMMARY_THRESHOLD, Summary, prefix, summarize};
pub use time_ago::{friendly_duration, friendly_since};
