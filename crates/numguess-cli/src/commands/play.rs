//! Play command: player entrance and guessing rounds.

use numguess_core::{
    Command, Difficulty, GamePrompter, Player, PlayerStore, Result, parse_difficulty, play_round,
};
use rand::Rng;
use tracing::debug;

const ENTRANCE: &str = "\
**************************************
**             Entrance             **
**************************************
write your username: ";

const DIFFICULTY_MENU: &str = "\
**************************************
**        Choose Difficulty         **
**************************************
**            1. Easy               **
**            2. Medium             **
**            3. Hard               **
**************************************
write the number of your choice: ";

/// Ask for a username and difficulty, loading or registering the player
pub fn enter<P>(store: &PlayerStore, prompter: &P) -> Result<(Player, Difficulty)>
where
    P: GamePrompter + ?Sized,
{
    let username = prompter.prompt_line(ENTRANCE)?;
    let player = store.find_or_register(&username)?;

    let difficulty = parse_difficulty(&prompter.prompt_line(DIFFICULTY_MENU)?);
    debug!("{} chose {}", player.username, difficulty);

    Ok((player, difficulty))
}

/// Play one round, report the result and ask whether to go again
pub fn run<P, R>(
    store: &PlayerStore,
    player: &mut Player,
    difficulty: Difficulty,
    prompter: &P,
    rng: &mut R,
) -> Result<Command>
where
    P: GamePrompter + ?Sized,
    R: Rng + ?Sized,
{
    let summary = play_round(store, player, difficulty, prompter, rng)?;

    prompter.display_message(&format!(
        "You win with {} attempts, your score is {}",
        summary.attempts, summary.score.value
    ));
    if summary.new_best {
        prompter.display_message("New personal best!");
    }

    let answer = prompter.prompt_line("Try again? (y/n): ")?;
    Ok(Command::parse_play_again(&answer))
}
