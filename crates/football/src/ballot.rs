use serde::Serialize;
use storage::dto::VoteCounts;
use storage::models::VoteChoice;
use tracing::debug;

use crate::error::{FootballError, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CastVoteBody<'a> {
    match_id: &'a str,
    vote: VoteChoice,
}

/// HTTP client for the vote endpoints of the web server.
pub struct BallotClient {
    server_url: String,
    client: reqwest::Client,
}

impl BallotClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self> {
        let server_url: String = server_url.into();
        let server_url = server_url.trim_end_matches('/').to_string();
        if server_url.is_empty() {
            return Err(FootballError::Config("server URL is empty".to_string()));
        }

        Ok(Self {
            server_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    pub async fn cast(&self, match_id: &str, choice: VoteChoice) -> Result<VoteCounts> {
        let url = format!("{}/api/vote", self.server_url);
        debug!("POST {} ({} for {})", url, choice, match_id);

        let response = self
            .client
            .post(&url)
            .json(&CastVoteBody {
                match_id,
                vote: choice,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FootballError::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response.json::<VoteCounts>().await?)
    }

    pub async fn counts(&self, match_id: &str) -> Result<VoteCounts> {
        let url = format!("{}/api/votes/{}", self.server_url, match_id);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FootballError::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response.json::<VoteCounts>().await?)
    }
}
