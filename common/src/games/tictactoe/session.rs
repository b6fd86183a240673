use crate::games::SessionRng;
use crate::{debug_log, log, warn_log};
use super::board::Board;
use super::bot_controller::{BotInput, BotType, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::{TicTacToeSessionSettings, validate_player_name};
use super::timer::{GameTimer, format_time};
use super::types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};

/// Mark played by the computer in `GameMode::HumanVsAi`. The human is X and
/// always opens.
pub const AI_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Local game session: board history, turn order, scores and the clock.
/// The rules and the bot are called into, never the other way round.
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    /// `history[k]` is the board after `k` moves.
    history: Vec<Board>,
    current_step: usize,
    scores: Scoreboard,
    timer: GameTimer,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        log!(
            "New session: {:?}, difficulty {:?}, seed {}",
            settings.mode,
            settings.difficulty,
            rng.seed()
        );
        Self {
            settings,
            history: vec![Board::new()],
            current_step: 0,
            scores: Scoreboard::default(),
            timer: GameTimer::start(),
            rng,
        }
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn board(&self) -> Board {
        self.history[self.current_step]
    }

    pub fn state(&self) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::from_board(self.board(), mark_for_step(self.current_step));
        if self.current_step > 0 {
            let previous = self.history[self.current_step - 1];
            state.last_move = (0..previous.cells().len())
                .find(|&index| previous.get(index) != state.board.get(index));
        }
        state
    }

    pub fn status(&self) -> GameStatus {
        self.state().status
    }

    pub fn current_mark(&self) -> Mark {
        mark_for_step(self.current_step)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state().winning_line()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.settings.mode == GameMode::HumanVsAi
            && self.current_mark() == AI_MARK
            && self.status() == GameStatus::InProgress
    }

    /// Human move. Rejected while the AI is to move.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, String> {
        if self.is_ai_turn() {
            return Err("Wait for the AI to move".to_string());
        }
        self.apply_move(index)
    }

    /// Lets the AI move if it is its turn. Returns the cell it played.
    pub fn play_bot_turn(&mut self) -> Option<usize> {
        if !self.is_ai_turn() {
            return None;
        }

        let input = BotInput::new(self.board(), AI_MARK)?;
        let bot_type: BotType = self.settings.difficulty.into();
        let index = calculate_move(bot_type, input, &mut self.rng)?;

        match self.apply_move(index) {
            Ok(_) => {
                debug_log!("AI ({:?}) played cell {}", bot_type, index);
                Some(index)
            }
            Err(e) => {
                warn_log!("AI failed to place mark at {}: {}", index, e);
                None
            }
        }
    }

    fn apply_move(&mut self, index: usize) -> Result<GameStatus, String> {
        let mut state = self.state();
        state.place_mark(index)?;

        // Playing from an earlier step drops the moves after it.
        self.history.truncate(self.current_step + 1);
        self.history.push(state.board);
        self.current_step += 1;

        if state.status.is_over() {
            self.scores.record(state.status);
            self.timer.stop();
            log!("Game over: {}", self.status_text());
        }

        Ok(state.status)
    }

    /// Steps back one move, or against the AI back to the latest step where
    /// the human is to move. The undone moves are discarded.
    pub fn undo(&mut self) -> Result<(), String> {
        if self.status().is_over() {
            return Err("Cannot undo a finished game".to_string());
        }

        let steps = match self.settings.mode {
            GameMode::HumanVsHuman => 1,
            // Odd steps leave the AI to move; one step back is enough there.
            GameMode::HumanVsAi if self.current_step % 2 == 1 => 1,
            GameMode::HumanVsAi => 2,
        };
        if self.current_step < steps {
            return Err("Nothing to undo".to_string());
        }

        self.current_step -= steps;
        self.history.truncate(self.current_step + 1);
        Ok(())
    }

    /// Shows the board after `step` moves without discarding later ones.
    pub fn jump_to(&mut self, step: usize) -> Result<(), String> {
        if step >= self.history.len() {
            return Err(format!(
                "No move #{} in history (last is #{})",
                step,
                self.history.len() - 1
            ));
        }

        self.current_step = step;
        if self.status().is_over() {
            self.timer.stop();
        } else {
            self.timer.resume();
        }
        Ok(())
    }

    pub fn restart(&mut self) {
        self.history = vec![Board::new()];
        self.current_step = 0;
        self.timer = GameTimer::start();
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }

    /// Switching modes starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.restart();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn set_player_name(&mut self, mark: Mark, name: &str) -> Result<(), String> {
        let name = name.trim();
        validate_player_name(name)?;
        match mark {
            Mark::X => self.settings.player_x_name = name.to_string(),
            Mark::O => self.settings.player_o_name = name.to_string(),
            Mark::Empty => return Err("Empty cells have no player".to_string()),
        }
        Ok(())
    }

    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::XWon => format!("Winner: {}", self.settings.player_name(Mark::X)),
            GameStatus::OWon => format!("Winner: {}", self.settings.player_name(Mark::O)),
            GameStatus::Draw => "It's a Draw!".to_string(),
            GameStatus::InProgress => {
                format!("Next Turn: {}", self.settings.player_name(self.current_mark()))
            }
        }
    }

    pub fn history_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|step| {
                if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                }
            })
            .collect()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.elapsed_seconds())
    }
}

fn mark_for_step(step: usize) -> Mark {
    if step % 2 == 0 { Mark::X } else { Mark::O }
}
