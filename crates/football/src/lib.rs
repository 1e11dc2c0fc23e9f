pub mod ballot;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod hype;
pub mod markers;
pub mod match_id;
pub mod models;
pub mod streak;
#[cfg(test)]
mod test_server;
pub mod traits;

pub use ballot::BallotClient;
pub use cache::CachedMatchSource;
pub use client::FootballDataClient;
pub use config::{CacheConfig, ClientConfig, StreakOptions, TrackedTeam};
pub use error::{FootballError, Result};
pub use hype::HypeConfig;
pub use match_id::generate_match_id;
pub use streak::{StreakData, derive_streak};
pub use traits::MatchSource;
