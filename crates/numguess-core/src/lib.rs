//! # numguess-core
//!
//! Core library for the number-guessing game.
//!
//! This crate provides:
//! - Game data structures (Difficulty, Score, Player)
//! - The guessing round state machine and its driver
//! - Player persistence in a single JSON store file
//! - Leaderboard ranking
//! - Menu navigation as a pure state machine
//!
//! Terminal I/O lives in the CLI crate, which plugs into the round driver
//! through [`GamePrompter`].

pub mod error;
pub mod game;
pub mod menu;
pub mod storage;

pub use error::{Error, Result};
pub use game::{
    Difficulty, Feedback, GamePrompter, GuessRound, Player, RoundState, RoundSummary, Score,
    TIMESTAMP_FORMAT, finish_round, play_round,
};
pub use menu::{Command, Screen, parse_difficulty, transition};
pub use storage::{
    DEFAULT_LEADERBOARD_SIZE, LeaderboardEntry, PlayerStore, format_leaderboard_header,
    format_leaderboard_row, rank_players,
};
