pub mod vote;

pub use vote::{CastVoteRequest, VoteCounts};
