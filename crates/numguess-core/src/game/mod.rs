mod difficulty;
pub mod input;
mod player;
mod round;
mod score;
mod session;

pub use difficulty::*;
pub use player::*;
pub use round::*;
pub use score::*;
pub use session::*;
