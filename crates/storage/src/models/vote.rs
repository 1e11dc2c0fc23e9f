use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

/// The two answers to "will we win the next match?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
}

impl VoteChoice {
    /// Value stored in the `votes.vote` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "yes",
            VoteChoice::No => "no",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteChoice {
    type Err = StorageError;

    /// Only the exact lowercase values are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(VoteChoice::Yes),
            "no" => Ok(VoteChoice::No),
            other => Err(StorageError::InvalidChoice(other.to_string())),
        }
    }
}

impl TryFrom<String> for VoteChoice {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One persisted vote row. Counts are always derived from these rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vote {
    pub vote_id: Uuid,
    pub match_id: String,
    #[sqlx(rename = "vote", try_from = "String")]
    pub choice: VoteChoice,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(match_id: impl Into<String>, choice: VoteChoice) -> Self {
        Self {
            vote_id: Uuid::new_v4(),
            match_id: match_id.into(),
            choice,
            created_at: Utc::now(),
        }
    }
}
