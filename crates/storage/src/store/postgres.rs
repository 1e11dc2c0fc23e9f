use tracing::debug;

use super::VoteStore;
use crate::Database;
use crate::error::Result;
use crate::models::VoteChoice;
use crate::repository::vote::VoteRepository;

pub struct PgVoteStore {
    db: Database,
}

impl PgVoteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl VoteStore for PgVoteStore {
    async fn insert_vote(&self, match_id: &str, choice: VoteChoice) -> Result<()> {
        let repo = VoteRepository::new(self.db.pool());
        let vote = repo.insert(match_id, choice).await?;
        debug!("Stored vote {} for {}", vote.vote_id, vote.match_id);
        Ok(())
    }

    async fn count_votes(&self, match_id: &str, choice: VoteChoice) -> Result<i64> {
        VoteRepository::new(self.db.pool())
            .count(match_id, choice)
            .await
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
