use crate::game::Player;

/// Default number of rows shown on the leaderboard
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub score: u32,
    pub difficulty: &'static str,
    pub timestamp: String,
}

/// Rank players by best score, highest first, keeping at most `limit`.
///
/// The sort is stable: players with equal scores keep their store order.
pub fn rank_players(players: &[Player], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.best_score().value.cmp(&a.best_score().value));

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, player)| {
            let score = player.best_score();
            LeaderboardEntry {
                rank: i + 1,
                username: player.username.clone(),
                score: score.value,
                difficulty: score.difficulty_name(),
                timestamp: score.formatted_timestamp(),
            }
        })
        .collect()
}

pub fn format_leaderboard_header() -> String {
    format!(
        "| {:<4} | {:<8} | {:<5} | {:<6} | {:^19} |",
        "rank", "username", "score", "diffic", "datetime"
    )
}

pub fn format_leaderboard_row(entry: &LeaderboardEntry) -> String {
    format!(
        "| {:<4} | {:<8} | {:<5} | {:<6} | {:<19} |",
        entry.rank, entry.username, entry.score, entry.difficulty, entry.timestamp
    )
}
