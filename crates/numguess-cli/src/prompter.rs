//! Terminal implementation of GamePrompter

use std::io::{self, BufRead, Write};

use numguess_core::{Feedback, GamePrompter};
use owo_colors::OwoColorize;

/// Prompter reading from stdin and writing to stdout
pub struct CliPrompter;

impl GamePrompter for CliPrompter {
    fn prompt_line(&self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn display_message(&self, message: &str) {
        println!("{}", message);
    }

    fn display_feedback(&self, feedback: Feedback) {
        match feedback {
            Feedback::TooLow => println!("{}", feedback.cyan()),
            Feedback::TooHigh => println!("{}", feedback.yellow()),
            Feedback::Correct => println!("{}", feedback.green()),
        }
    }
}
