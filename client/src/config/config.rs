use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::TicTacToeSessionSettings;

use super::{ConfigManager, FileContentConfigProvider, GameConfig, PlayersConfig, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub players: PlayersConfig,
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.players.validate()?;
        self.game.validate()?;
        Ok(())
    }
}

impl Config {
    pub fn to_session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.game.mode,
            difficulty: self.game.difficulty,
            player_x_name: self.players.x_name.trim().to_string(),
            player_o_name: self.players.o_name.trim().to_string(),
        }
    }
}
