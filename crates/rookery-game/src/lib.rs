//! Game orchestration on top of the rules in `rookery-core`.

pub mod config;
pub mod error;
pub mod game;
pub mod status;

pub use config::GameConfig;
pub use error::GameError;
pub use game::Game;
pub use status::{GameStatus, Outcome};
