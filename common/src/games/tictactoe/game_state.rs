use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Mark::X)
    }

    pub fn from_board(board: Board, current_mark: Mark) -> Self {
        let mut state = Self {
            board,
            current_mark,
            status: GameStatus::InProgress,
            last_move: None,
        };
        state.check_game_over();
        state
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.board.get(index).is_none() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_valid_move(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board = self.board.with_mark(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.mark {
                Mark::O => GameStatus::OWon,
                _ => GameStatus::XWon,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if matches!(self.status, GameStatus::XWon | GameStatus::OWon) {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new();

        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = TicTacToeGameState::new();

        state.place_mark(4).unwrap();

        assert_eq!(state.board.get(4), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_place_mark_on_marked_cell_fails() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(4).unwrap();

        let result = state.place_mark(4);

        assert!(result.is_err());
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_place_mark_out_of_bounds_fails() {
        let mut state = TicTacToeGameState::new();

        assert!(state.place_mark(9).is_err());
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_to_move() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.winning_line(), Some(WinningLine::new(Mark::X, [0, 1, 2])));
        assert!(state.place_mark(8).is_err());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_from_board_detects_finished_game() {
        let board = Board::new()
            .with_mark(2, Mark::O)
            .with_mark(4, Mark::O)
            .with_mark(6, Mark::O);

        let state = TicTacToeGameState::from_board(board, Mark::X);

        assert_eq!(state.status, GameStatus::OWon);
    }
}
