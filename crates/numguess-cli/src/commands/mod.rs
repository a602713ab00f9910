//! CLI command implementations.
//!
//! This module contains the implementation of each menu screen.

pub mod credits;
pub mod leaderboard;
pub mod play;
