mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod timer;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotInput, BotType, MAX_SEARCH_DEPTH, calculate_minimax_move, calculate_move,
    calculate_random_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use session::{AI_MARK, Scoreboard, TicTacToeSession};
pub use settings::{
    DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, MAX_PLAYER_NAME_LEN, TicTacToeSessionSettings,
    validate_player_name,
};
pub use timer::{GameTimer, format_time};
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, is_draw};
