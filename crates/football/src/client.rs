use tracing::{debug, warn};

use crate::config::{ClientConfig, TrackedTeam};
use crate::error::{FootballError, Result};
use crate::models::{Match, MatchesResponse};
use crate::traits::MatchSource;

pub struct FootballDataClient {
    config: ClientConfig,
    team_id: i64,
    client: reqwest::Client,
}

impl FootballDataClient {
    /// Fetches the matches of `team`, the same team the streak is derived for.
    pub fn new(config: ClientConfig, team: &TrackedTeam) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("unbeaten/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            team_id: team.id,
            client,
        })
    }

    pub fn team_matches_url(&self) -> String {
        format!(
            "{}/teams/{}/matches",
            self.config.base_url.trim_end_matches('/'),
            self.team_id
        )
    }

    /// Fetch the latest matches of the configured team. Any non-2xx status is a failure.
    pub async fn fetch_team_matches(&self) -> Result<Vec<Match>> {
        let url = self.team_matches_url();
        debug!("Fetching {} (limit {})", url, self.config.match_limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.config.match_limit)])
            .header("X-Auth-Token", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Football API error: {}", status);
            return Err(FootballError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let data: MatchesResponse = serde_json::from_str(&body)?;

        debug!("Received {} matches", data.matches.len());
        Ok(data.matches)
    }
}

#[async_trait::async_trait]
impl MatchSource for FootballDataClient {
    async fn team_matches(&self) -> Result<Vec<Match>> {
        self.fetch_team_matches().await
    }

    fn name(&self) -> &'static str {
        "football-data.org"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;

    const MATCHES_BODY: &str = r#"{"matches":[{"id":497410,"utcDate":"2025-03-09T16:30:00Z","status":"FINISHED","homeTeam":{"id":66,"name":"Manchester United FC","shortName":"Man United","tla":"MUN"},"awayTeam":{"id":57,"name":"Arsenal FC","shortName":"Arsenal","tla":"ARS"},"score":{"winner":"DRAW","fullTime":{"home":1,"away":1}},"competition":{"name":"Premier League","code":"PL"}}]}"#;

    fn client_for(base_url: &str) -> FootballDataClient {
        FootballDataClient::new(
            ClientConfig {
                base_url: base_url.to_string(),
                api_key: "secret-key".to_string(),
                ..ClientConfig::default()
            },
            &TrackedTeam::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_team_matches_url() {
        let client = FootballDataClient::new(
            ClientConfig {
                base_url: "https://api.football-data.org/v4/".to_string(),
                ..ClientConfig::default()
            },
            &TrackedTeam {
                id: 66,
                code: "MUN".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            client.team_matches_url(),
            "https://api.football-data.org/v4/teams/66/matches"
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_failure() {
        let (base_url, server) = serve_once("503 Service Unavailable", r#"{"message":"down"}"#).await;

        let result = client_for(&base_url).fetch_team_matches().await;
        assert!(matches!(result, Err(FootballError::UpstreamStatus(503))));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_sends_token_and_limit() {
        let (base_url, server) = serve_once("200 OK", MATCHES_BODY).await;

        let matches = client_for(&base_url).fetch_team_matches().await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].away_team.tla, "ARS");

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /teams/66/matches?limit=30 http/1.1"));
        assert!(head.contains("x-auth-token: secret-key"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let (base_url, server) = serve_once("200 OK", r#"{"matches":"nope"}"#).await;

        let result = client_for(&base_url).fetch_team_matches().await;
        assert!(matches!(result, Err(FootballError::Parse(_))));

        server.await.unwrap();
    }
}
