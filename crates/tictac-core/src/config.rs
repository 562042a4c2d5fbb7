//! Game configuration (initial player names).
//!
//! JSON shape, every field optional:
//!
//! ```json
//! { "players": { "X": "Alice", "O": "Bob" } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{PlayerRegistry, Symbol};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("player name for {0} must not be blank")]
    EmptyName(Symbol),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Names the registry starts with; restarts keep whatever is current.
    #[serde(default)]
    pub players: PlayerRegistry,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Replaces a name when `name` is `Some`.
    pub fn with_player_name(mut self, symbol: Symbol, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.players = self.players.with_name(symbol, name);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (symbol, name) in self.players.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName(symbol));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_default_names() {
        let config = GameConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.players.name(Symbol::X), "Player 1");
    }

    #[test]
    fn partial_players_fill_in_defaults() {
        let config = GameConfig::from_json_str(r#"{"players":{"X":"Alice"}}"#).unwrap();
        assert_eq!(config.players.name(Symbol::X), "Alice");
        assert_eq!(config.players.name(Symbol::O), "Player 2");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GameConfig::from_json_str("{players").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn blank_names_fail_validation() {
        let config = GameConfig::default().with_player_name(Symbol::O, Some("   ".into()));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyName(Symbol::O))
        ));
    }

    #[test]
    fn overrides_apply_only_when_present() {
        let config = GameConfig::default()
            .with_player_name(Symbol::X, None)
            .with_player_name(Symbol::O, Some("Bob".into()));
        assert_eq!(config.players.name(Symbol::X), "Player 1");
        assert_eq!(config.players.name(Symbol::O), "Bob");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        match err {
            ConfigError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
