use storage::{
    VoteStore,
    dto::VoteCounts,
    error::Result,
    models::VoteChoice,
    services::vote_tally,
};

/// Register one vote and return fresh totals for the match
pub async fn cast_vote(
    store: &dyn VoteStore,
    match_id: &str,
    choice: VoteChoice,
) -> Result<VoteCounts> {
    vote_tally::cast_vote(store, match_id, choice).await
}

/// Get yes/no totals for a match
pub async fn get_vote_counts(store: &dyn VoteStore, match_id: &str) -> Result<VoteCounts> {
    vote_tally::get_vote_counts(store, match_id).await
}
