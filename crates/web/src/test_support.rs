use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use football::{
    FootballError, HypeConfig, MatchSource, StreakOptions,
    models::{Competition, FullTime, Match, MatchStatus, Score, Team, Winner},
};
use serde_json::Value;
use storage::MemoryVoteStore;
use tower::ServiceExt;

use crate::state::AppState;

const TEAM_ID: i64 = 66;

/// Canned upstream: a fixed match list, or `None` to simulate an outage.
struct StaticSource(Option<Vec<Match>>);

#[async_trait::async_trait]
impl MatchSource for StaticSource {
    async fn team_matches(&self) -> football::Result<Vec<Match>> {
        self.0.clone().ok_or(FootballError::UpstreamStatus(503))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

pub struct TestApp {
    pub votes: Arc<MemoryVoteStore>,
    state: AppState,
}

impl TestApp {
    fn build(matches: Option<Vec<Match>>) -> Self {
        let votes = Arc::new(MemoryVoteStore::new());
        let state = AppState::new(
            votes.clone(),
            Arc::new(StaticSource(matches)),
            StreakOptions::default(),
            HypeConfig::default(),
        );
        Self { votes, state }
    }

    pub fn with_matches(matches: Vec<Match>) -> Self {
        Self::build(Some(matches))
    }

    pub fn unavailable() -> Self {
        Self::build(None)
    }

    pub fn router(&self) -> Router {
        crate::routes::router(self.state.clone())
    }
}

fn team(id: i64, short_name: &str, tla: &str) -> Team {
    Team {
        id: Some(id),
        name: short_name.to_string(),
        short_name: short_name.to_string(),
        tla: tla.to_string(),
    }
}

/// Finished match against "OPP"; goals are `(home, away)`.
pub fn finished(id: i64, date: &str, at_home: bool, goals: (u32, u32)) -> Match {
    let winner = match goals.0.cmp(&goals.1) {
        std::cmp::Ordering::Greater => Winner::HomeTeam,
        std::cmp::Ordering::Less => Winner::AwayTeam,
        std::cmp::Ordering::Equal => Winner::Draw,
    };
    let us = team(TEAM_ID, "Man United", "MUN");
    let them = team(1, "Opponent", "OPP");
    let (home_team, away_team) = if at_home { (us, them) } else { (them, us) };

    Match {
        id,
        utc_date: format!("{}T15:00:00Z", date).parse().unwrap(),
        status: MatchStatus::Finished,
        home_team,
        away_team,
        score: Score {
            winner: Some(winner),
            full_time: FullTime {
                home: Some(goals.0),
                away: Some(goals.1),
            },
        },
        competition: Competition {
            name: "Premier League".to_string(),
            code: "PL".to_string(),
        },
    }
}

pub fn upcoming(id: i64, date: &str, at_home: bool) -> Match {
    let mut m = finished(id, date, at_home, (0, 0));
    m.status = MatchStatus::Scheduled;
    m.score = Score {
        winner: None,
        full_time: FullTime::default(),
    };
    m
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}
