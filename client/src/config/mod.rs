mod config;
mod game_config;
mod players_config;

pub(crate) use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
};

pub use config::{CONFIG_FILE, Config, get_config_manager};
pub use game_config::GameConfig;
pub use players_config::PlayersConfig;
