mod command;
mod config;
mod terminal_ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, TicTacToeSession};
use tictactoe_common::{log, logger};

use command::{parse_difficulty, parse_mode};
use terminal_ui::TerminalUi;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe in the terminal, against a friend or the computer")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// human or ai
    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer player's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log search decisions.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = config::get_config_manager(&args.config).get_config()?;
    log!("Loaded config from {}", args.config.display());

    let mut settings = config.to_session_settings();
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = TicTacToeSession::new(settings, rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    TerminalUi::new().run(&mut session, stdin.lock(), &mut stdout)?;

    let scores = session.scores();
    log!(
        "Session finished: X {} / O {} / draws {}",
        scores.x_wins,
        scores.o_wins,
        scores.draws
    );
    Ok(())
}
