use crate::debug_log;
use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// Plies past the candidate move after which an unresolved position
/// scores as neutral.
pub const MAX_SEARCH_DEPTH: usize = 5;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
    /// Coin flip between `Minimax` and `Random` on every move.
    Blended,
}

impl From<Difficulty> for BotType {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BotType::Random,
            Difficulty::Medium => BotType::Blended,
            Difficulty::Hard => BotType::Minimax,
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub player_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, player_mark: Mark) -> Option<Self> {
        let opponent_mark = player_mark.opponent()?;
        Some(Self {
            board,
            player_mark,
            opponent_mark,
        })
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        Self::new(state.board, state.current_mark)
    }
}

pub fn calculate_move(bot_type: BotType, input: BotInput, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(&input, rng),
        BotType::Minimax => calculate_minimax_move(&input),
        BotType::Blended => {
            if rng.random_bool() {
                calculate_minimax_move(&input)
            } else {
                calculate_random_move(&input, rng)
            }
        }
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    rng.choose(&available_moves).copied()
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&input.board) {
        let board = input.board.with_mark(index, input.player_mark);
        let score = minimax(&board, 0, false, input.player_mark, input.opponent_mark);

        // Strict comparison keeps the lowest index among equal scores.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    if let Some(index) = best_move {
        debug_log!("minimax for {}: cell {} scored {}", input.player_mark, index, best_score);
    }

    best_move
}

/// Scores `board` from `player_mark`'s side. Faster wins and slower losses
/// score higher.
pub fn minimax(
    board: &Board,
    depth: usize,
    is_maximizing: bool,
    player_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = check_win(board) {
        if winner == player_mark {
            return WIN_SCORE - depth as i32;
        }
        if winner == opponent_mark {
            return depth as i32 - WIN_SCORE;
        }
    }

    if board.is_full() {
        return 0;
    }

    if depth > MAX_SEARCH_DEPTH {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        moves
            .into_iter()
            .map(|index| {
                let next = board.with_mark(index, player_mark);
                minimax(&next, depth + 1, false, player_mark, opponent_mark)
            })
            .max()
            .unwrap_or(0)
    } else {
        moves
            .into_iter()
            .map(|index| {
                let next = board.with_mark(index, opponent_mark);
                minimax(&next, depth + 1, true, player_mark, opponent_mark)
            })
            .min()
            .unwrap_or(0)
    }
}
