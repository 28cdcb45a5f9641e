//! Run records and run-list helpers.

pub mod filter;
pub mod types;

pub use filter::{distance_options, filter_by_distance, sorted_by_date};
pub use types::{Run, RunDuration};
