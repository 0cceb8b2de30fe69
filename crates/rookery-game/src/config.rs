//! Game options.

use rookery_core::{NotationStyle, Position, STARTING_FEN, decode};

use crate::error::GameError;

/// Options fixed when a game is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// FEN piece placement the game starts from. White moves first.
    pub starting_position: String,
    /// How move notation is rendered for display.
    pub notation: NotationStyle,
}

impl GameConfig {
    /// Decode and validate the starting position.
    pub fn position(&self) -> Result<Position, GameError> {
        let position = decode(&self.starting_position)?;
        position.validate()?;
        Ok(position)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_position: STARTING_FEN.to_string(),
            notation: NotationStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;
    use crate::error::GameError;
    use rookery_core::{BoardError, Color, NotationStyle, Position};

    #[test]
    fn default_is_standard_start() {
        let config = GameConfig::default();
        assert_eq!(config.position().unwrap(), Position::starting());
        assert_eq!(config.notation, NotationStyle::Figurine);
    }

    #[test]
    fn rejects_kingless_position() {
        let config = GameConfig {
            starting_position: "8/8/8/8/8/8/8/4K3".to_string(),
            ..GameConfig::default()
        };
        assert_eq!(
            config.position().unwrap_err(),
            GameError::Board(BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0
            })
        );
    }

    #[test]
    fn rejects_bad_fen() {
        let config = GameConfig {
            starting_position: "not a fen".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(config.position(), Err(GameError::Fen(_))));
    }
}
