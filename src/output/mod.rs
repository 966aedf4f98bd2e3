//! Terminal output formatting

mod display;

pub use display::print_self_play_stats;
