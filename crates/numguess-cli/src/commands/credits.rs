//! Credits command.

use numguess_core::{GamePrompter, Result};

const RULE: &str = "*****************************************************";

/// Credits box, one line per entry
fn credits_lines() -> Vec<String> {
    let version = format!("** Version: {:<39}**", env!("CARGO_PKG_VERSION"));
    vec![
        RULE.to_string(),
        "**                   Credits                       **".to_string(),
        RULE.to_string(),
        "** Developed by: Esteban Cabarcas                  **".to_string(),
        "** GitHub user: escahe                             **".to_string(),
        "** Date: 24-05-2023                                **".to_string(),
        "** Summary: Game developed as a practical exercise **".to_string(),
        "**          during the Top Gun Lab program powered **".to_string(),
        "**          by Team International                  **".to_string(),
        version,
        RULE.to_string(),
    ]
}

/// Show the program credits and wait for Enter
pub fn run<P>(prompter: &P) -> Result<()>
where
    P: GamePrompter + ?Sized,
{
    prompter.display_message(&credits_lines().join("\n"));

    prompter.prompt_line("press enter to go back to main menu: ")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_box_is_aligned() {
        let lines = credits_lines();
        assert!(lines.iter().all(|line| line.chars().count() == RULE.len()));
    }

    #[test]
    fn test_credits_attribution() {
        let text = credits_lines().join("\n");
        assert!(text.contains("Developed by: Esteban Cabarcas"));
        assert!(text.contains("GitHub user: escahe"));
        assert!(text.contains("Date: 24-05-2023"));
        assert!(text.contains("Top Gun Lab"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
