use std::path::PathBuf;

use crate::game::{MoveError, Player};

/// Errors that can occur while driving a match between agents.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} ({player:?}) returned no move on a board with empty cells")]
    NoMove { agent: String, player: Player },

    #[error("{agent} ({player:?}) chose an illegal move: {source}")]
    IllegalMove {
        agent: String,
        player: Player,
        source: MoveError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalMove {
            agent: "Random".to_string(),
            player: Player::O,
            source: MoveError::Occupied { row: 1, col: 2 },
        };
        assert_eq!(
            err.to_string(),
            "Random (O) chose an illegal move: position (1, 2) is already taken"
        );
    }

    #[test]
    fn test_no_move_display() {
        let err = MatchError::NoMove {
            agent: "Hard".to_string(),
            player: Player::X,
        };
        assert_eq!(
            err.to_string(),
            "Hard (X) returned no move on a board with empty cells"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.board_size must be in [3, 6]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.board_size must be in [3, 6]"
        );
    }
}
