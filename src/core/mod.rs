pub mod compliance;
pub mod hour_window;
pub mod report;
pub mod rollup;
pub mod week_bucketer;

pub use week_bucketer::{Dated, WeekBucket, bucket};
