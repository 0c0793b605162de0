use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use donkdle_engine::PuzzleMode;

use crate::{game::GameOptions, store::Store};

mod check;
mod play;
mod share;
mod stats;

const DEFAULT_LOCATIONS: &str = "./data/locations.json";
const DEFAULT_STATE_DIR: &str = "./data/state/";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to do (plays a game when omitted)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play(#[clap(flatten)] play::PlayArg),
    /// Show player statistics
    Stats(#[clap(flatten)] stats::StatsArg),
    /// Print the result of today's finished daily game
    Share(#[clap(flatten)] share::ShareArg),
    /// Compare a guess with a target and print the feedback as JSON
    Check(#[clap(flatten)] check::CheckArg),
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Location catalog (JSON array of location records)
    #[clap(long, default_value = DEFAULT_LOCATIONS)]
    locations: PathBuf,
}

impl Default for CatalogArg {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.into(),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StoreArg {
    /// Directory holding saved games and statistics
    #[clap(long, default_value = DEFAULT_STATE_DIR)]
    state_dir: PathBuf,
}

impl Default for StoreArg {
    fn default() -> Self {
        Self {
            state_dir: DEFAULT_STATE_DIR.into(),
        }
    }
}

impl StoreArg {
    fn open(&self) -> Store {
        Store::new(&self.state_dir)
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PuzzleArg {
    /// Puzzle of the day, or a random location (daily, random)
    #[clap(long, default_value = "daily")]
    mode: PuzzleMode,
    /// Seed for random mode
    #[clap(long)]
    seed: Option<u64>,
    /// End the game as lost after this many guesses (unlimited when omitted)
    #[clap(long)]
    max_guesses: Option<usize>,
    /// Play the puzzle of another day (YYYY-MM-DD, defaults to today)
    #[clap(long)]
    date: Option<NaiveDate>,
}

impl PuzzleArg {
    fn options(&self) -> GameOptions {
        GameOptions {
            mode: self.mode,
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            seed: self.seed,
            max_guesses: self.max_guesses,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(play::PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Stats(arg) => stats::run(&arg)?,
        Mode::Share(arg) => share::run(&arg)?,
        Mode::Check(arg) => check::run(&arg)?,
    }
    Ok(())
}
