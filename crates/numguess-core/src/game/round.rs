use rand::Rng;
use strum::Display;

use crate::game::Difficulty;
use crate::game::input::parse_guess;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Feedback {
    #[strum(serialize = "Too low")]
    TooLow,
    #[strum(serialize = "Too high")]
    TooHigh,
    #[strum(serialize = "Correct")]
    Correct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won,
}

/// One guessing session against a secret number.
///
/// There is no attempt limit; the round stays in
/// [`RoundState::AwaitingGuess`] until a guess matches.
#[derive(Debug, Clone)]
pub struct GuessRound {
    difficulty: Difficulty,
    secret: u32,
    attempts: u32,
    state: RoundState,
}

impl GuessRound {
    /// Start a round with a secret drawn uniformly from `1..=bound`
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let secret = rng.gen_range(1..=difficulty.bound());
        Self::with_secret(difficulty, secret)
    }

    pub fn with_secret(difficulty: Difficulty, secret: u32) -> Self {
        Self {
            difficulty,
            secret,
            attempts: 0,
            state: RoundState::AwaitingGuess,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Submit one raw line of input as a guess.
    ///
    /// Every submission counts as an attempt, including input with no
    /// digits (read as 0, always too low). Submitting after the round is
    /// won changes nothing and reports [`Feedback::Correct`].
    pub fn submit(&mut self, raw: &str) -> Feedback {
        if self.is_won() {
            return Feedback::Correct;
        }

        let guess = parse_guess(raw, self.difficulty.digit_count());
        self.attempts += 1;

        if guess == self.secret {
            self.state = RoundState::Won;
            Feedback::Correct
        } else if guess < self.secret {
            Feedback::TooLow
        } else {
            Feedback::TooHigh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_feedback_sequence() {
        let mut round = GuessRound::with_secret(Difficulty::Easy, 3);
        assert_eq!(round.submit("5"), Feedback::TooHigh);
        assert_eq!(round.submit("1"), Feedback::TooLow);
        assert_eq!(round.state(), RoundState::AwaitingGuess);
        assert_eq!(round.submit("3"), Feedback::Correct);
        assert!(round.is_won());
        assert_eq!(round.attempts(), 3);
    }

    #[test]
    fn test_malformed_input_is_too_low_and_counts() {
        let mut round = GuessRound::with_secret(Difficulty::Medium, 1);
        assert_eq!(round.submit("abc"), Feedback::TooLow);
        assert_eq!(round.submit(""), Feedback::TooLow);
        assert_eq!(round.attempts(), 2);
    }

    #[test]
    fn test_long_input_is_truncated() {
        let mut round = GuessRound::with_secret(Difficulty::Hard, 30);
        assert_eq!(round.submit("300"), Feedback::Correct);
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn test_unicode_digit_guess() {
        let mut round = GuessRound::with_secret(Difficulty::Easy, 3);
        assert_eq!(round.submit("٢"), Feedback::TooLow);
        assert_eq!(round.submit("٣"), Feedback::Correct);
        assert_eq!(round.attempts(), 2);
    }

    #[test]
    fn test_feedback_text() {
        assert_eq!(Feedback::TooLow.to_string(), "Too low");
        assert_eq!(Feedback::TooHigh.to_string(), "Too high");
    }

    #[test]
    fn test_submit_after_win_is_ignored() {
        let mut round = GuessRound::with_secret(Difficulty::Easy, 4);
        round.submit("4");
        assert_eq!(round.submit("9"), Feedback::Correct);
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn test_secret_within_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let round = GuessRound::new(Difficulty::Easy, &mut rng);
            assert!((1..=10).contains(&round.secret));
        }
    }

    #[test]
    fn test_binary_search_always_wins() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut round = GuessRound::new(Difficulty::Hard, &mut rng);
        let (mut low, mut high) = (1, Difficulty::Hard.bound());
        while !round.is_won() {
            let guess = (low + high) / 2;
            match round.submit(&guess.to_string()) {
                Feedback::TooLow => low = guess + 1,
                Feedback::TooHigh => high = guess - 1,
                Feedback::Correct => {}
            }
        }
        assert!(round.attempts() <= 5);
    }
}
