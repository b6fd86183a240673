use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{
    DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, validate_player_name,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayersConfig {
    pub x_name: String,
    pub o_name: String,
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        validate_player_name(&self.x_name).map_err(|e| format!("x_name: {}", e))?;
        validate_player_name(&self.o_name).map_err(|e| format!("o_name: {}", e))?;
        Ok(())
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x_name: DEFAULT_PLAYER_X_NAME.to_string(),
            o_name: DEFAULT_PLAYER_O_NAME.to_string(),
        }
    }
}
