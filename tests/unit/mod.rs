//! Unit test modules.

mod leaderboard_test;
mod time_test;
