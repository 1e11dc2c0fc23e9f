use tracing::info;

use crate::dto::VoteCounts;
use crate::error::Result;
use crate::models::VoteChoice;
use crate::store::VoteStore;

/// Store one vote and return the refreshed totals for that match.
///
/// Nothing deduplicates votes here: the same client may vote any number of times.
pub async fn cast_vote(
    store: &dyn VoteStore,
    match_id: &str,
    choice: VoteChoice,
) -> Result<VoteCounts> {
    store.insert_vote(match_id, choice).await?;
    info!("Vote '{}' registered for {} ({})", choice, match_id, store.name());

    get_vote_counts(store, match_id).await
}

/// Count yes and no rows for a match.
///
/// The two counts run concurrently without a shared transaction, so a vote
/// landing in between may show up in only one of them.
pub async fn get_vote_counts(store: &dyn VoteStore, match_id: &str) -> Result<VoteCounts> {
    let (yes, no) = tokio::try_join!(
        store.count_votes(match_id, VoteChoice::Yes),
        store.count_votes(match_id, VoteChoice::No),
    )?;

    Ok(VoteCounts::new(yes, no))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::StorageError;
    use crate::store::MemoryVoteStore;

    const MATCH_ID: &str = "MUN-ARS-2025-03-09";

    #[tokio::test]
    async fn test_counts_follow_cast_votes() {
        let store = MemoryVoteStore::new();
        for _ in 0..3 {
            cast_vote(&store, MATCH_ID, VoteChoice::Yes).await.unwrap();
        }
        for _ in 0..2 {
            cast_vote(&store, MATCH_ID, VoteChoice::No).await.unwrap();
        }

        let counts = get_vote_counts(&store, MATCH_ID).await.unwrap();
        assert_eq!(counts, VoteCounts::new(3, 2));

        let counts = cast_vote(&store, MATCH_ID, VoteChoice::No).await.unwrap();
        assert_eq!(counts, VoteCounts::new(3, 3));
    }

    #[tokio::test]
    async fn test_empty_match_has_zero_counts() {
        let store = MemoryVoteStore::new();
        cast_vote(&store, MATCH_ID, VoteChoice::Yes).await.unwrap();

        let counts = get_vote_counts(&store, "MUN-CHE-2025-05-16").await.unwrap();
        assert_eq!(counts, VoteCounts::default());
    }

    #[derive(Default)]
    struct BrokenStore {
        counts: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl VoteStore for BrokenStore {
        async fn insert_vote(&self, _match_id: &str, _choice: VoteChoice) -> Result<()> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }

        async fn count_votes(&self, _match_id: &str, _choice: VoteChoice) -> Result<i64> {
            self.counts.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_failed_insert_skips_counting() {
        let store = BrokenStore::default();
        let err = cast_vote(&store, MATCH_ID, VoteChoice::Yes).await.unwrap_err();

        assert!(err.is_persistence_failure());
        assert_eq!(store.counts.load(Ordering::SeqCst), 0);
    }
}
