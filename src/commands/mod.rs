//! Command implementations

pub mod assist;
pub mod self_play;

pub use assist::run_assist;
pub use self_play::{SelfPlayOutcome, SelfPlayStats, collect_stats, run_self_play, solve_secret};
