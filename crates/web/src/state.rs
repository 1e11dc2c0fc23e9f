use std::sync::Arc;

use football::{HypeConfig, MatchSource, StreakOptions};
use storage::VoteStore;

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub votes: Arc<dyn VoteStore>,
    pub matches: Arc<dyn MatchSource>,
    pub streak: Arc<StreakOptions>,
    pub hype: Arc<HypeConfig>,
}

impl AppState {
    pub fn new(
        votes: Arc<dyn VoteStore>,
        matches: Arc<dyn MatchSource>,
        streak: StreakOptions,
        hype: HypeConfig,
    ) -> Self {
        Self {
            votes,
            matches,
            streak: Arc::new(streak),
            hype: Arc::new(hype),
        }
    }
}
