use super::types::{Difficulty, GameMode, Mark};

pub const DEFAULT_PLAYER_X_NAME: &str = "Player X";
pub const DEFAULT_PLAYER_O_NAME: &str = "Player O";
pub const MAX_PLAYER_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player_x_name: String,
    pub player_o_name: String,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Medium,
            player_x_name: DEFAULT_PLAYER_X_NAME.to_string(),
            player_o_name: DEFAULT_PLAYER_O_NAME.to_string(),
        }
    }
}

impl TicTacToeSessionSettings {
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.player_o_name,
            _ => &self.player_x_name,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_player_name(&self.player_x_name)?;
        validate_player_name(&self.player_o_name)?;
        Ok(())
    }
}

/// Checks the name as it will be shown, without surrounding whitespace.
pub fn validate_player_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Player name must not be empty".to_string());
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "Player name must not exceed {} characters",
            MAX_PLAYER_NAME_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TicTacToeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let settings = TicTacToeSessionSettings {
            player_o_name: "   ".to_string(),
            ..TicTacToeSessionSettings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_long_name_is_rejected() {
        assert!(validate_player_name(&"x".repeat(MAX_PLAYER_NAME_LEN)).is_ok());
        assert!(validate_player_name(&"x".repeat(MAX_PLAYER_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count_toward_length() {
        let padded = format!("  {}  ", "x".repeat(MAX_PLAYER_NAME_LEN));

        assert!(validate_player_name(&padded).is_ok());
    }

    #[test]
    fn test_player_name_by_mark() {
        let settings = TicTacToeSessionSettings::default();

        assert_eq!(settings.player_name(Mark::X), DEFAULT_PLAYER_X_NAME);
        assert_eq!(settings.player_name(Mark::O), DEFAULT_PLAYER_O_NAME);
    }
}
