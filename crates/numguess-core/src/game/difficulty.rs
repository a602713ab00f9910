use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Difficulty {
    #[default]
    #[strum(serialize = "EASY")]
    Easy,
    #[strum(serialize = "MEDIUM")]
    Medium,
    #[strum(serialize = "HARD")]
    Hard,
}

impl Difficulty {
    /// Inclusive upper limit of the secret number range
    pub fn bound(&self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 20,
            Self::Hard => 30,
        }
    }

    /// Number of decimal digits in the bound, which caps how many digits
    /// of a guess are read.
    pub fn digit_count(&self) -> usize {
        self.bound().to_string().len()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Map a difficulty menu digit (1=Easy, 2=Medium, 3=Hard)
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}
