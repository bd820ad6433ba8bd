//! Terminal front end: draft a squad and battle the computer, or manage the creature roster.

mod art;
mod config;
mod editor;
mod terminal;

use std::{
    io,
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{
    Context,
    Result,
};
use brawl::{
    BattleController,
    Creature,
    RosterStore,
};
use brawl_roster::LocalRosterStore;
use clap::{
    Parser,
    Subcommand,
};
use log::info;
use tracing_core::Level;

use crate::{
    config::CliConfig,
    editor::{
        RosterEditor,
        write_roster,
    },
    terminal::{
        TerminalDisplay,
        TerminalInput,
    },
};

/// Turn-based creature battles against the computer
#[derive(Parser, Debug)]
#[command(name = "brawl")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster file (default: roster.json)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// JSON config file with pick_limit, difficulty, seed, and roster
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Draft a squad and battle the computer (default)
    Battle {
        /// Creatures per squad (1-3)
        #[arg(short, long)]
        picks: Option<usize>,

        /// Opponent difficulty (1-5)
        #[arg(short, long)]
        difficulty: Option<u8>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Add, view, edit, and delete roster creatures
    Roster,

    /// List roster creatures
    List,
}

impl Default for Command {
    fn default() -> Self {
        Self::Battle {
            picks: None,
            difficulty: None,
            seed: None,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// The roster used when the roster file is missing or empty.
fn starter_roster() -> Result<Vec<Creature>> {
    serde_json::from_str(include_str!("../data/roster.json")).context("starter roster is invalid")
}

fn battle(
    config: &CliConfig,
    store: &LocalRosterStore,
    picks: Option<usize>,
    difficulty: Option<u8>,
    seed: Option<u64>,
) -> Result<()> {
    let settings = config.battle_settings(picks, difficulty)?;
    let options = config.engine_options(seed);

    let starter;
    let roster: &dyn RosterStore = if store.creatures().is_empty() {
        info!(
            "Roster {} is empty, using starter roster",
            store.path().display()
        );
        starter = starter_roster()?;
        &starter
    } else {
        store
    };

    let mut display = TerminalDisplay::new(io::stdout());
    let mut input = TerminalInput::new(io::stdin().lock(), io::stdout());
    display.banner();
    BattleController::new(settings, options, &mut input, &mut display).run(roster)?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::load_optional(args.config.as_deref())?;
    let roster_path = config.roster_path(args.roster);
    let mut store = LocalRosterStore::open(&roster_path)?;

    match args.command.unwrap_or_default() {
        Command::Battle {
            picks,
            difficulty,
            seed,
        } => battle(&config, &store, picks, difficulty, seed),
        Command::Roster => {
            RosterEditor::new(&mut store, io::stdin().lock(), io::stdout()).run()
        }
        Command::List => write_roster(&mut io::stdout(), store.creatures()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
