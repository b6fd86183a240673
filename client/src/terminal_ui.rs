use std::io::{self, BufRead, Write};

use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Difficulty, GameMode, Mark, TicTacToeSession,
};
use tictactoe_common::log;

use crate::command::{Command, HELP, parse_command};

/// Line-oriented front end: reads commands, drives the session and prints
/// the board after every command.
#[derive(Default)]
pub struct TerminalUi {
    show_history: bool,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        session: &mut TicTacToeSession,
        input: R,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "Tic-Tac-Toe. Type 'help' for commands.")?;
        self.render(session, out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(session, command, out)?,
                Err(e) => writeln!(out, "{}", e)?,
            }

            if let Some(index) = session.play_bot_turn() {
                writeln!(out, "AI plays {}", index + 1)?;
            }

            self.render(session, out)?;
        }

        Ok(())
    }

    fn apply<W: Write>(
        &mut self,
        session: &mut TicTacToeSession,
        command: Command,
        out: &mut W,
    ) -> io::Result<()> {
        let result = match command {
            Command::Place(index) => session.place_mark(index).map(|_| ()),
            Command::Undo => session.undo(),
            Command::Jump(step) => session.jump_to(step),
            Command::Name(mark, name) => session.set_player_name(mark, &name),
            Command::Restart => {
                session.restart();
                Ok(())
            }
            Command::ResetScores => {
                session.reset_scores();
                Ok(())
            }
            Command::Mode(mode) => {
                session.set_mode(mode);
                log!("Mode switched to {:?}", mode);
                Ok(())
            }
            Command::Difficulty(difficulty) => {
                session.set_difficulty(difficulty);
                Ok(())
            }
            Command::ToggleHistory => {
                self.show_history = !self.show_history;
                Ok(())
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            Command::Quit => Ok(()),
        };

        if let Err(e) = result {
            writeln!(out, "{}", e)?;
        }
        Ok(())
    }

    pub fn render<W: Write>(&self, session: &TicTacToeSession, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        write_board(session, out)?;
        writeln!(out)?;

        let settings = session.settings();
        writeln!(out, "Mode: {}", mode_label(settings.mode, settings.difficulty))?;
        writeln!(out, "Time: {}", session.formatted_time())?;
        writeln!(out, "{}", session.status_text())?;

        let scores = session.scores();
        writeln!(
            out,
            "Scoreboard: {} {} | {} {} | Draws {}",
            settings.player_name(Mark::X),
            scores.x_wins,
            settings.player_name(Mark::O),
            scores.o_wins,
            scores.draws
        )?;

        if self.show_history {
            writeln!(out, "Game History:")?;
            for (step, label) in session.history_labels().iter().enumerate() {
                let marker = if step == session.current_step() { '>' } else { ' ' };
                writeln!(out, " {} {}. {}", marker, step, label)?;
            }
        }

        write!(out, "> ")?;
        out.flush()
    }
}

/// Empty cells show their input number, winning cells are bracketed.
fn write_board<W: Write>(session: &TicTacToeSession, out: &mut W) -> io::Result<()> {
    let board = session.board();
    let winning_line = session.winning_line();

    for (y, row) in board.cells().chunks(BOARD_SIZE).enumerate() {
        if y > 0 {
            writeln!(out, "---+---+---")?;
        }
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(x, mark)| {
                let index = y * BOARD_SIZE + x;
                let symbol = match mark {
                    Mark::Empty => char::from_digit((index + 1) as u32, 10).unwrap_or(' '),
                    mark => mark.symbol(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        writeln!(out, "{}", cells.join("|"))?;
    }
    Ok(())
}

fn mode_label(mode: GameMode, difficulty: Difficulty) -> String {
    match mode {
        GameMode::HumanVsHuman => "Human vs Human".to_string(),
        GameMode::HumanVsAi => format!("Human vs AI ({:?})", difficulty),
    }
}
