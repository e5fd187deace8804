pub mod agent;
pub mod daily;
pub mod hourly;
pub mod period;
