use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /teams/{id}/matches`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Match {
    pub id: i64,
    #[serde(rename = "utcDate")]
    pub utc_date: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(rename = "homeTeam")]
    pub home_team: Team,
    #[serde(rename = "awayTeam")]
    pub away_team: Team,
    pub score: Score,
    pub competition: Competition,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Finished,
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Postponed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl MatchStatus {
    /// Statuses that make a match a candidate for "next match".
    pub fn is_upcoming(&self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::Timed)
    }
}

/// Every field is null while the opponent of a fixture is still undecided.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "shortName", default, deserialize_with = "null_as_default")]
    pub short_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tla: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Score {
    pub winner: Option<Winner>,
    #[serde(rename = "fullTime")]
    pub full_time: FullTime,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    HomeTeam,
    AwayTeam,
    Draw,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct FullTime {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Competition {
    pub name: String,
    #[serde(default)]
    pub code: String,
}
