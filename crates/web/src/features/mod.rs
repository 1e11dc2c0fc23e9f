pub mod home;
pub mod og;
pub mod streak;
pub mod votes;
