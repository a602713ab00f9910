//! Player persistence and ranking.
//!
//! - **Player store**: the full player collection in one JSON file,
//!   rewritten on every save
//! - **Leaderboard**: best scores ranked highest first
//!
//! ## Store file
//!
//! A JSON array of players in insertion order. Each player's
//! `store_index` is its position in that array.

mod leaderboard;
mod player_store;

pub use leaderboard::*;
pub use player_store::*;
