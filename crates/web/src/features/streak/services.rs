use chrono::Utc;
use football::{MatchSource, Result, StreakData, StreakOptions, derive_streak};
use tracing::warn;

/// Fetch the tracked team's matches and derive the streak.
pub async fn fetch_streak(source: &dyn MatchSource, options: &StreakOptions) -> Result<StreakData> {
    let matches = source.team_matches().await?;
    Ok(derive_streak(options, &matches))
}

/// Like [`fetch_streak`], but an upstream failure yields the empty display.
pub async fn streak_or_default(source: &dyn MatchSource, options: &StreakOptions) -> StreakData {
    match fetch_streak(source, options).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Falling back to empty streak, {} failed: {}", source.name(), e);
            StreakData::empty(Utc::now())
        }
    }
}
