use std::path::Path;

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::{win_condition_for_size, Board, Player, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Who sits on each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans sharing the terminal
    Pvp,
    /// Human against the engine
    #[default]
    Pva,
    /// Engine against itself
    Ava,
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "pva" => Ok(GameMode::Pva),
            "ava" => Ok(GameMode::Ava),
            other => Err(format!("unknown mode '{other}' (expected 'pvp', 'pva', or 'ava')")),
        }
    }
}

/// Board and seating settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    /// Overrides the standard run length for `board_size`
    pub win_condition: Option<usize>,
    pub mode: GameMode,
    /// Mark played by the human in `pva` mode. X always moves first.
    pub human_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_condition: None,
            mode: GameMode::default(),
            human_player: Player::X,
        }
    }
}

impl GameConfig {
    pub fn effective_win_condition(&self) -> usize {
        self.win_condition
            .unwrap_or_else(|| win_condition_for_size(self.board_size))
    }

    /// An empty board with the configured dimensions
    pub fn board(&self) -> Board {
        Board::new(self.board_size, self.effective_win_condition())
    }
}

/// Computer-player settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.game.board_size;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be in [{MIN_BOARD_SIZE}, {MAX_BOARD_SIZE}], got {size}"
            )));
        }
        if let Some(win) = self.game.win_condition {
            if win == 0 || win > size {
                return Err(ConfigError::Validation(format!(
                    "game.win_condition must be in [1, {size}], got {win}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
