use crate::Result;
use crate::models::Match;

/// Anything that can hand over the tracked team's recent and upcoming matches.
#[async_trait::async_trait]
pub trait MatchSource: Send + Sync {
    async fn team_matches(&self) -> Result<Vec<Match>>;

    fn name(&self) -> &'static str;
}
