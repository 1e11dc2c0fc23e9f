pub mod vote;

pub use vote::{Vote, VoteChoice};
