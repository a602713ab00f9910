//! Menu shell driving the game screens.

use numguess_core::{
    Command, Difficulty, GamePrompter, Player, PlayerStore, Result, Screen, transition,
};
use rand::Rng;
use tracing::debug;

use crate::commands::{credits, leaderboard, play};
use crate::screen;

const MAIN_MENU: &str = "\
**************************************
** Welcome To Guess The Number Game **
**************************************
**          1. Play                 **
**          2. Leaderboard          **
**          3. Credits              **
**          4. Exit                 **
**************************************
write the number of your choice: ";

pub struct Shell<'a, P: GamePrompter + ?Sized> {
    store: &'a PlayerStore,
    prompter: &'a P,
    leaderboard_size: usize,
    clear_screen: bool,
    /// Player and difficulty of the current run of rounds
    session: Option<(Player, Difficulty)>,
}

impl<'a, P: GamePrompter + ?Sized> Shell<'a, P> {
    pub fn new(store: &'a PlayerStore, prompter: &'a P) -> Self {
        Self {
            store,
            prompter,
            leaderboard_size: numguess_core::DEFAULT_LEADERBOARD_SIZE,
            clear_screen: true,
            session: None,
        }
    }

    pub fn leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Run until the player picks Exit or input is closed.
    ///
    /// Store failures end the current screen with a message and return to
    /// the main menu; they never end the program.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let mut current = Screen::MainMenu;

        while current != Screen::Exit {
            if self.clear_screen {
                screen::clear();
            }

            let command = match self.show(current, rng) {
                Ok(command) => command,
                Err(e) if e.is_eof() => {
                    debug!("Input closed on {}", current);
                    return Ok(());
                }
                Err(e) => {
                    debug!("{} failed: {}", current, e);
                    self.session = None;
                    if let Err(e) = self.report_failure(&e) {
                        return if e.is_eof() { Ok(()) } else { Err(e) };
                    }
                    Command::Back
                }
            };

            let next = transition(current, command);
            debug!("{:?} on {} -> {}", command, current, next);
            current = next;
        }

        Ok(())
    }

    fn show<R: Rng + ?Sized>(&mut self, current: Screen, rng: &mut R) -> Result<Command> {
        match current {
            Screen::MainMenu => {
                let choice = self.prompter.prompt_line(MAIN_MENU)?;
                Ok(Command::parse_main(&choice))
            }
            Screen::Entrance => {
                self.session = Some(play::enter(self.store, self.prompter)?);
                Ok(Command::Start)
            }
            Screen::Round => {
                let Some((player, difficulty)) = self.session.as_mut() else {
                    return Ok(Command::Back);
                };
                let command = play::run(self.store, player, *difficulty, self.prompter, rng)?;
                if command == Command::Back {
                    self.session = None;
                }
                Ok(command)
            }
            Screen::Leaderboard => {
                leaderboard::run(self.store, self.prompter, self.leaderboard_size)?;
                Ok(Command::Back)
            }
            Screen::Credits => {
                credits::run(self.prompter)?;
                Ok(Command::Back)
            }
            Screen::Exit => Ok(Command::Exit),
        }
    }

    fn report_failure(&self, err: &numguess_core::Error) -> Result<()> {
        let message = if err.is_storage() {
            format!(
                "Could not use the player store at {}: {}",
                self.store.path().display(),
                err
            )
        } else {
            format!("Something went wrong: {}", err)
        };
        self.prompter.display_message(&message);
        self.prompter
            .prompt_line("press enter to go back to main menu: ")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numguess_core::Feedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    struct ScriptedPrompter {
        lines: RefCell<VecDeque<String>>,
        output: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: RefCell::new(lines.iter().map(|s| s.to_string()).collect()),
                output: RefCell::new(Vec::new()),
            }
        }

        fn remaining(&self) -> usize {
            self.lines.borrow().len()
        }

        fn printed(&self, needle: &str) -> bool {
            self.times_printed(needle) > 0
        }

        fn times_printed(&self, needle: &str) -> usize {
            self.output
                .borrow()
                .iter()
                .filter(|line| line.contains(needle))
                .count()
        }
    }

    impl GamePrompter for ScriptedPrompter {
        fn prompt_line(&self, _prompt: &str) -> std::io::Result<String> {
            self.lines.borrow_mut().pop_front().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "script exhausted")
            })
        }

        fn display_message(&self, message: &str) {
            self.output.borrow_mut().push(message.to_string());
        }

        fn display_feedback(&self, feedback: Feedback) {
            self.output.borrow_mut().push(feedback.to_string());
        }
    }

    fn temp_store() -> (TempDir, PlayerStore) {
        let dir = TempDir::new().unwrap();
        let store = PlayerStore::new(dir.path().join("players.json"));
        (dir, store)
    }

    /// Secret the shell will draw first from a generator seeded with `seed`
    fn first_secret(seed: u64, bound: u32) -> String {
        StdRng::seed_from_u64(seed).gen_range(1..=bound).to_string()
    }

    #[test]
    fn test_play_then_exit() {
        let (_dir, store) = temp_store();
        let secret = first_secret(9, 10);
        let prompter = ScriptedPrompter::new(&["1", "ana", "1", secret.as_str(), "n", "4"]);

        Shell::new(&store, &prompter)
            .clear_screen(false)
            .run(&mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(prompter.remaining(), 0);
        assert!(prompter.printed("You win with 1 attempts, your score is 1100"));
        let stored = store.find_by_username("ana").unwrap().unwrap();
        assert_eq!(stored.best_score().value, 1100);
        assert_eq!(stored.best_score().difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn test_retry_keeps_player_and_difficulty() {
        let (_dir, store) = temp_store();
        let mut rng = StdRng::seed_from_u64(3);
        let first = rng.gen_range(1..=30u32).to_string();
        let second = rng.gen_range(1..=30u32).to_string();
        let prompter = ScriptedPrompter::new(&[
            "1",
            "ana",
            "3",
            first.as_str(),
            "y",
            "0",
            second.as_str(),
            "no",
            "4",
        ]);

        Shell::new(&store, &prompter)
            .clear_screen(false)
            .run(&mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(prompter.remaining(), 0);
        let players = store.load_all().unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].best_score().value, 3100);
        assert_eq!(players[0].best_score().difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_unrecognized_input_reprompts() {
        let (_dir, store) = temp_store();
        let prompter = ScriptedPrompter::new(&["9", "hello", "", "4"]);

        Shell::new(&store, &prompter)
            .clear_screen(false)
            .run(&mut StdRng::seed_from_u64(0))
            .unwrap();

        assert_eq!(prompter.remaining(), 0);
        assert!(prompter.output.borrow().is_empty());
    }

    #[test]
    fn test_leaderboard_lists_players() {
        let (_dir, store) = temp_store();
        store.register("ana").unwrap();
        let prompter = ScriptedPrompter::new(&["2", "", "3", "", "4"]);

        Shell::new(&store, &prompter)
            .clear_screen(false)
            .run(&mut StdRng::seed_from_u64(0))
            .unwrap();

        assert!(prompter.printed("Top 10 Leaderboard"));
        assert!(prompter.printed("| 1    | ana      | 0     | -      |"));
        assert!(prompter.printed("Credits"));
    }

    #[test]
    fn test_corrupt_store_returns_to_menu() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ broken").unwrap();
        let prompter = ScriptedPrompter::new(&["2", "", "1", "ana", "", "4"]);

        Shell::new(&store, &prompter)
            .clear_screen(false)
            .run(&mut StdRng::seed_from_u64(0))
            .unwrap();

        assert_eq!(prompter.remaining(), 0);
        // Once for the leaderboard, once for the entrance
        assert_eq!(prompter.times_printed("is corrupt"), 2);
        assert_eq!(prompter.times_printed("Could not use the player store"), 2);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ broken");
    }

    #[test]
    fn test_closed_input_exits_cleanly() {
        let (_dir, store) = temp_store();
        let prompter = ScriptedPrompter::new(&["1", "ana", "2", "5"]);

        let result = Shell::new(&store, &prompter)
            .clear_screen(false)
            .run(&mut StdRng::seed_from_u64(0));

        assert!(result.is_ok());
        assert!(store.find_by_username("ana").unwrap().is_some());
    }
}
