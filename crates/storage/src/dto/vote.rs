use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::models::VoteChoice;

/// Body of `POST /api/vote`.
///
/// Both fields default to empty so that a missing field is reported as a
/// validation failure rather than a deserialization one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "matchId is required"))]
    pub match_id: String,
    #[serde(default)]
    #[schema(example = "yes")]
    #[validate(custom(function = "validate_choice"))]
    pub vote: String,
}

impl CastVoteRequest {
    pub fn choice(&self) -> Result<VoteChoice> {
        self.vote.parse()
    }
}

fn validate_choice(vote: &str) -> std::result::Result<(), ValidationError> {
    match vote.parse::<VoteChoice>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = ValidationError::new("invalid_vote");
            error.message = Some("vote must be \"yes\" or \"no\"".into());
            Err(error)
        }
    }
}

/// Yes/no totals for one match identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VoteCounts {
    pub yes: i64,
    pub no: i64,
}

impl VoteCounts {
    pub fn new(yes: i64, no: i64) -> Self {
        Self { yes, no }
    }

    pub fn total(&self) -> i64 {
        self.yes + self.no
    }

    /// Share of yes votes rounded to the nearest whole percent, 0 when nobody voted.
    pub fn yes_percent(&self) -> u8 {
        let total = self.total();
        if total <= 0 {
            return 0;
        }
        ((self.yes as f64 / total as f64) * 100.0).round() as u8
    }

    /// Complement of [`Self::yes_percent`] so the two always add up to 100.
    pub fn no_percent(&self) -> u8 {
        if self.total() <= 0 {
            return 0;
        }
        100 - self.yes_percent()
    }
}
