pub mod stats_repo;
pub use stats_repo::{PgStatsRepository, StatsStore};

#[cfg(test)]
pub mod memory_store;
