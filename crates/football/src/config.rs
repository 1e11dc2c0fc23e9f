use std::time::Duration;

use chrono::NaiveDate;

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";
pub const DEFAULT_TEAM_ID: i64 = 66;
pub const DEFAULT_TEAM_CODE: &str = "MUN";
pub const DEFAULT_MATCH_LIMIT: u32 = 30;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// The club whose streak is tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedTeam {
    /// Upstream team id, compared against the home/away team ids.
    pub id: i64,
    /// Three-letter code used as the prefix of match identifiers.
    pub code: String,
}

impl Default for TrackedTeam {
    fn default() -> Self {
        Self {
            id: DEFAULT_TEAM_ID,
            code: DEFAULT_TEAM_CODE.to_string(),
        }
    }
}

/// Options for [`crate::FootballDataClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Sent as `X-Auth-Token`; an empty key is sent as-is and left to the upstream to reject.
    pub api_key: String,
    /// `limit` query parameter of the team matches endpoint.
    pub match_limit: u32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            match_limit: DEFAULT_MATCH_LIMIT,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Options for [`crate::CachedMatchSource`].
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// How long a successful upstream response is served before refetching.
    /// A zero TTL disables caching.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// Options for [`crate::streak::derive_streak`].
#[derive(Debug, Clone, Default)]
pub struct StreakOptions {
    pub team: TrackedTeam,
    /// When set, a full W/D/L record is kept for finished matches from this date on.
    pub era_start: Option<NaiveDate>,
}
