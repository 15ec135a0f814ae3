use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::info;

use crate::config::{AppConfig, Overrides};
use crate::core::diagrams::Diagrams;
use crate::core::engine::Engine;
use crate::core::words::WordList;
use crate::games::hangman::{ConsolePresenter, HangmanGame, Tally};
use crate::logging::{init_logging, LogTarget};

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman for the terminal")]
#[command(version)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the full-screen terminal UI
    Play(RoundArgs),
    /// Play line by line on stdin/stdout
    Console(RoundArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct RoundArgs {
    /// Word list, one word per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Diagram file made of 8-line drawings
    #[arg(short, long)]
    pub diagrams: Option<PathBuf>,

    /// Incorrect guesses allowed per round
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_guesses: Option<u32>,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl From<RoundArgs> for Overrides {
    fn from(args: RoundArgs) -> Self {
        Overrides {
            max_guesses: args.max_guesses,
            words_file: args.words,
            diagrams_file: args.diagrams,
            log_file: args.log_file,
        }
    }
}

enum Mode {
    Screen,
    Console,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let base = AppConfig::load(cli.config.as_deref())?;

    let (mode, args) = match cli.command {
        Some(Commands::Play(args)) => (Mode::Screen, args),
        Some(Commands::Console(args)) => (Mode::Console, args),
        None => match select_mode()? {
            Some(mode) => (mode, RoundArgs::default()),
            None => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        },
    };
    let config = base.apply(args.into());

    let target = match (&mode, config.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Mode::Console, None) => LogTarget::Stderr,
        (Mode::Screen, None) => LogTarget::Off,
    };
    init_logging(cli.verbose, target)?;

    let words = match &config.words_file {
        Some(path) => WordList::from_path(path)?,
        None => WordList::builtin(),
    };
    let diagrams = match &config.diagrams_file {
        Some(path) => Diagrams::from_path(path)?,
        None => Diagrams::builtin(),
    };

    let tally = match mode {
        Mode::Screen => play_screen(words, diagrams, config.max_guesses).await?,
        Mode::Console => {
            let stdin = io::stdin();
            ConsolePresenter::new(stdin.lock(), io::stdout(), words, diagrams, config.max_guesses)
                .run()?
        }
    };

    info!(won = tally.won, lost = tally.lost, "session over");
    println!("🏁 Rounds won: {}, rounds lost: {}", tally.won, tally.lost);
    Ok(())
}

async fn play_screen(words: WordList, diagrams: Diagrams, max_guesses: u32) -> Result<Tally> {
    let game = HangmanGame::new(words, diagrams, max_guesses).context("starting hangman")?;

    let mut terminal = ratatui::init();
    let result = Engine::new(game).run(&mut terminal).await;
    ratatui::restore();

    Ok(result?.tally())
}

fn select_mode() -> Result<Option<Mode>> {
    println!("🎩 Welcome to hangterm!");
    println!();

    let options = ["🖥️  Play in full screen", "⌨️  Play line by line", "🚪 Exit"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("How would you like to play?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Some(Mode::Screen),
        1 => Some(Mode::Console),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_console_flags() {
        let cli = Cli::parse_from([
            "hangterm", "-vv", "console", "--words", "w.txt", "--max-guesses", "4",
        ]);
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Console(args)) = cli.command else {
            panic!("expected console subcommand");
        };
        assert_eq!(args.words, Some(PathBuf::from("w.txt")));
        assert_eq!(args.max_guesses, Some(4));
    }

    #[test]
    fn zero_guesses_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["hangterm", "play", "--max-guesses", "0"]).is_err());
    }
}
