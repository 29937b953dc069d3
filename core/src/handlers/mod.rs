pub mod stats_logger;

pub use stats_logger::StatsLogger;
