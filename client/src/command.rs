use tictactoe_common::games::tictactoe::{CELL_COUNT, Difficulty, GameMode, Mark};

pub const HELP: &str = "\
Commands:
  1-9                      place a mark (cells numbered left to right, top to bottom)
  undo                     take back the last move (back to your turn against the AI)
  restart                  start a new game
  reset                    reset the scoreboard
  history                  show or hide the move history
  jump <n>                 go to move #n (0 is the game start)
  mode human|ai            switch game mode (restarts the game)
  difficulty easy|medium|hard
  name x|o <name>          rename a player
  help                     show this text
  quit                     leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Undo,
    Restart,
    ResetScores,
    ToggleHistory,
    Jump(usize),
    Mode(GameMode),
    Difficulty(Difficulty),
    Name(Mark, String),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "undo" | "u" => Command::Undo,
        "restart" | "r" => Command::Restart,
        "reset" => Command::ResetScores,
        "history" | "h" => Command::ToggleHistory,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "jump" | "j" => Command::Jump(
            rest.parse()
                .map_err(|_| format!("Expected a move number, got '{}'", rest))?,
        ),
        "mode" => Command::Mode(parse_mode(rest)?),
        "difficulty" | "d" => Command::Difficulty(parse_difficulty(rest)?),
        "name" => {
            let (mark, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "Usage: name x|o <name>".to_string())?;
            Command::Name(parse_mark(mark)?, name.trim().to_string())
        }
        cell => Command::Place(parse_cell(cell)?),
    };

    Ok(command)
}

/// Cells are numbered 1-9 for the player, 0-8 internally.
fn parse_cell(word: &str) -> Result<usize, String> {
    match word.parse::<usize>() {
        Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(number - 1),
        Ok(number) => Err(format!("Cell {} is out of range 1-{}", number, CELL_COUNT)),
        Err(_) => Err(format!("Unknown command '{}', type 'help'", word)),
    }
}

pub fn parse_mode(value: &str) -> Result<GameMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "human" | "pvp" => Ok(GameMode::HumanVsHuman),
        "ai" | "cpu" => Ok(GameMode::HumanVsAi),
        other => Err(format!("Unknown mode '{}', expected human or ai", other)),
    }
}

pub fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!(
            "Unknown difficulty '{}', expected easy, medium or hard",
            other
        )),
    }
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    match value.to_ascii_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        other => Err(format!("Unknown player '{}', expected x or o", other)),
    }
}
