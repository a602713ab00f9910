//! Leaderboard command.

use numguess_core::{
    GamePrompter, PlayerStore, Result, format_leaderboard_header, format_leaderboard_row,
    rank_players,
};

/// Print the top `limit` players and wait for Enter
pub fn run<P>(store: &PlayerStore, prompter: &P, limit: usize) -> Result<()>
where
    P: GamePrompter + ?Sized,
{
    let players = store.load_all()?;
    let entries = rank_players(&players, limit);

    let banner = "*".repeat(format_leaderboard_header().len());
    prompter.display_message(&banner);
    prompter.display_message(&format!("Top {} Leaderboard", limit));
    prompter.display_message(&banner);
    prompter.display_message(&format_leaderboard_header());

    if entries.is_empty() {
        prompter.display_message("No players yet");
    }
    for entry in &entries {
        prompter.display_message(&format_leaderboard_row(entry));
    }

    prompter.prompt_line("press enter to go back to main menu: ")?;
    Ok(())
}
