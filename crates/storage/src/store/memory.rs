use std::sync::Mutex;

use super::VoteStore;
use crate::error::{Result, StorageError};
use crate::models::{Vote, VoteChoice};

/// Process-local vote rows, lost on restart.
#[derive(Default)]
pub struct MemoryVoteStore {
    votes: Mutex<Vec<Vote>>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.votes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl VoteStore for MemoryVoteStore {
    async fn insert_vote(&self, match_id: &str, choice: VoteChoice) -> Result<()> {
        let mut votes = self
            .votes
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        votes.push(Vote::new(match_id, choice));
        Ok(())
    }

    async fn count_votes(&self, match_id: &str, choice: VoteChoice) -> Result<i64> {
        let votes = self
            .votes
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let count = votes
            .iter()
            .filter(|v| v.match_id == match_id && v.choice == choice)
            .count();
        Ok(count as i64)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_counts_are_per_match_and_choice() {
        let store = MemoryVoteStore::new();
        store.insert_vote("MUN-ARS-2025-03-09", VoteChoice::Yes).await.unwrap();
        store.insert_vote("MUN-ARS-2025-03-09", VoteChoice::No).await.unwrap();
        store.insert_vote("MUN-LIV-2025-04-06", VoteChoice::Yes).await.unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(
            store.count_votes("MUN-ARS-2025-03-09", VoteChoice::Yes).await.unwrap(),
            1
        );
        assert_eq!(
            store.count_votes("MUN-LIV-2025-04-06", VoteChoice::No).await.unwrap(),
            0
        );
        assert_eq!(
            store.count_votes("unknown", VoteChoice::Yes).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_poisoned_lock() {
        let store = Arc::new(MemoryVoteStore::new());
        store.insert_vote("MUN-ARS-2025-03-09", VoteChoice::Yes).await.unwrap();

        let holder = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = holder.votes.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert_eq!(store.len(), 1);
        assert!(matches!(
            store.insert_vote("MUN-ARS-2025-03-09", VoteChoice::No).await,
            Err(StorageError::Unavailable(_))
        ));
    }
}
