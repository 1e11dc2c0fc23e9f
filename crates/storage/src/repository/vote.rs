use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Vote, VoteChoice};

pub struct VoteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VoteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, match_id: &str, choice: VoteChoice) -> Result<Vote> {
        let vote = sqlx::query_as::<_, Vote>(
            r#"
            INSERT INTO votes (match_id, vote)
            VALUES ($1, $2)
            RETURNING vote_id, match_id, vote, created_at
            "#,
        )
        .bind(match_id)
        .bind(choice.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(vote)
    }

    pub async fn count(&self, match_id: &str, choice: VoteChoice) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM votes
            WHERE match_id = $1 AND vote = $2
            "#,
        )
        .bind(match_id)
        .bind(choice.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
