use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::game::{Difficulty, Feedback, GuessRound, Player, Score};
use crate::storage::PlayerStore;

/// Terminal side of a round: reads guesses and shows feedback
pub trait GamePrompter {
    /// Show `prompt` and read one line of input.
    ///
    /// Closed input is reported as `ErrorKind::UnexpectedEof`.
    fn prompt_line(&self, prompt: &str) -> std::io::Result<String>;

    fn display_message(&self, message: &str);

    fn display_feedback(&self, feedback: Feedback);
}

/// Outcome of a won round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub attempts: u32,
    pub score: Score,
    /// Whether the score replaced the player's best
    pub new_best: bool,
}

/// Play one round to completion.
///
/// Prompts until the secret is guessed, then scores the round and offers
/// the score to the player, saving it when it is a new best.
pub fn play_round<P, R>(
    store: &PlayerStore,
    player: &mut Player,
    difficulty: Difficulty,
    prompter: &P,
    rng: &mut R,
) -> Result<RoundSummary>
where
    P: GamePrompter + ?Sized,
    R: Rng + ?Sized,
{
    let round = GuessRound::new(difficulty, rng);
    finish_round(store, player, round, prompter)
}

/// Drive an already started round to completion
pub fn finish_round<P>(
    store: &PlayerStore,
    player: &mut Player,
    mut round: GuessRound,
    prompter: &P,
) -> Result<RoundSummary>
where
    P: GamePrompter + ?Sized,
{
    let prompt = format!(
        "Please write your guess (1-{}): ",
        round.difficulty().bound()
    );

    while !round.is_won() {
        let raw = prompter.prompt_line(&prompt)?;
        let feedback = round.submit(&raw);
        if feedback != Feedback::Correct {
            prompter.display_feedback(feedback);
        }
    }

    let score = Score::compute(round.attempts(), round.difficulty());
    let new_best = store.record_score(player, score.clone())?;
    info!(
        "{} won on {} in {} attempts ({} points)",
        player.username,
        round.difficulty(),
        round.attempts(),
        score.value
    );

    Ok(RoundSummary {
        attempts: round.attempts(),
        score,
        new_best,
    })
}
