pub mod vote_tally;
