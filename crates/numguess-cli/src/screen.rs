//! Terminal screen helpers

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

/// Clear the terminal and move the cursor home.
///
/// Failures are ignored; the next screen is simply drawn below the last.
pub fn clear() {
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
        debug!("Failed to clear screen: {}", e);
    }
    stdout.flush().ok();
}
