mod memory;
mod postgres;

pub use memory::MemoryVoteStore;
pub use postgres::PgVoteStore;

use crate::error::Result;
use crate::models::VoteChoice;

/// Where vote rows live.
///
/// Counts are always recomputed from the stored rows; implementations must
/// never keep a running total.
#[async_trait::async_trait]
pub trait VoteStore: Send + Sync {
    async fn insert_vote(&self, match_id: &str, choice: VoteChoice) -> Result<()>;

    async fn count_votes(&self, match_id: &str, choice: VoteChoice) -> Result<i64>;

    fn name(&self) -> &'static str;
}
