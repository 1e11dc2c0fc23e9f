use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use football::config::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_MATCH_LIMIT, DEFAULT_TEAM_CODE, DEFAULT_TEAM_ID,
};
use football::{CacheConfig, ClientConfig, StreakOptions, TrackedTeam};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Votes are kept in memory when unset.
    pub database_url: Option<String>,
    pub football_api_key: String,
    pub football_base_url: String,
    pub team_id: i64,
    pub team_code: String,
    pub match_limit: u32,
    pub match_cache_ttl: Duration,
    pub era_start: Option<NaiveDate>,
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let era_start = optional_var("ERA_START_DATE")
            .map(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d"))
            .transpose()
            .context("ERA_START_DATE must be formatted as YYYY-MM-DD")?;

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: optional_var("DATABASE_URL"),
            football_api_key: std::env::var("FOOTBALL_DATA_API_KEY").unwrap_or_default(),
            football_base_url: var_or("FOOTBALL_DATA_BASE_URL", DEFAULT_BASE_URL),
            team_id: var_or("TEAM_ID", &DEFAULT_TEAM_ID.to_string())
                .parse()
                .context("TEAM_ID must be a number")?,
            team_code: var_or("TEAM_CODE", DEFAULT_TEAM_CODE),
            match_limit: var_or("MATCH_LIMIT", &DEFAULT_MATCH_LIMIT.to_string())
                .parse()
                .context("MATCH_LIMIT must be a number")?,
            match_cache_ttl: Duration::from_secs(
                var_or(
                    "MATCH_CACHE_TTL_SECS",
                    &DEFAULT_CACHE_TTL.as_secs().to_string(),
                )
                .parse()
                .context("MATCH_CACHE_TTL_SECS must be a number of seconds")?,
            ),
            era_start,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.football_base_url.clone(),
            api_key: self.football_api_key.clone(),
            match_limit: self.match_limit,
            ..ClientConfig::default()
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: self.match_cache_ttl,
        }
    }

    pub fn streak_options(&self) -> StreakOptions {
        StreakOptions {
            team: TrackedTeam {
                id: self.team_id,
                code: self.team_code.clone(),
            },
            era_start: self.era_start,
        }
    }
}
