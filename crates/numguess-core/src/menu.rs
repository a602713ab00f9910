//! Menu navigation as a pure state machine.
//!
//! The shell reads a line, turns it into a [`Command`] and asks
//! [`transition`] for the next [`Screen`]. Nothing here touches the
//! terminal or the store.

use strum::Display;

use crate::game::Difficulty;
use crate::game::input::first_choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Screen {
    #[strum(serialize = "main menu")]
    MainMenu,
    /// Username and difficulty prompts
    #[strum(serialize = "entrance")]
    Entrance,
    #[strum(serialize = "round")]
    Round,
    #[strum(serialize = "leaderboard")]
    Leaderboard,
    #[strum(serialize = "credits")]
    Credits,
    #[strum(serialize = "exit")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Leaderboard,
    Credits,
    Exit,
    /// Username and difficulty chosen
    Start,
    /// Play another round with the same player and difficulty
    Retry,
    /// Return to the main menu
    Back,
    /// Input that matched no option
    Unrecognized,
}

impl Command {
    /// Main menu choice from the first digit in `input`
    pub fn parse_main(input: &str) -> Self {
        match first_choice(input) {
            Some(1) => Self::Play,
            Some(2) => Self::Leaderboard,
            Some(3) => Self::Credits,
            Some(4) => Self::Exit,
            _ => Self::Unrecognized,
        }
    }

    /// Answer to "Try again?": anything containing a `y` retries
    pub fn parse_play_again(input: &str) -> Self {
        if input.to_lowercase().contains('y') {
            Self::Retry
        } else {
            Self::Back
        }
    }
}

/// Difficulty from the first digit in `input`, Easy when none matches
pub fn parse_difficulty(input: &str) -> Difficulty {
    first_choice(input)
        .and_then(Difficulty::from_choice)
        .unwrap_or_default()
}

/// Next screen after `command` is issued on `screen`.
///
/// Commands that make no sense on a screen leave it unchanged, so
/// unrecognized main menu input simply shows the menu again.
pub fn transition(screen: Screen, command: Command) -> Screen {
    match (screen, command) {
        (Screen::Exit, _) => Screen::Exit,
        (Screen::MainMenu, Command::Play) => Screen::Entrance,
        (Screen::MainMenu, Command::Leaderboard) => Screen::Leaderboard,
        (Screen::MainMenu, Command::Credits) => Screen::Credits,
        (Screen::MainMenu, Command::Exit) => Screen::Exit,
        (Screen::Entrance, Command::Start) => Screen::Round,
        (Screen::Round, Command::Retry) => Screen::Round,
        (Screen::Entrance | Screen::Round | Screen::Leaderboard | Screen::Credits, Command::Back) => {
            Screen::MainMenu
        }
        (screen, _) => screen,
    }
}
