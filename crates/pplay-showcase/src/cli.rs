use std::io::{self, Write};

use clap::{Parser, Subcommand};
use pplay_catalog::Catalog;
use pplay_demos::Registry;

use crate::browse::{ListArgs, ShowArgs, run_list, run_show, run_types};
use crate::config::ShowcaseConfig;
use crate::error::Result;
use crate::logging;
use crate::play::{PlayArgs, run_play};

#[derive(Debug, Parser)]
#[command(
    name = "pplay",
    about = "Browse design patterns and play their interactive demos",
    version
)]
pub struct Cli {
    /// Seed for randomized demos (overrides PPLAY_SEED).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pin the seed when none is given (same as PPLAY_DETERMINISTIC=1).
    #[arg(long, global = true)]
    pub deterministic: bool,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List catalog patterns.
    List(ListArgs),

    /// Print a pattern's detail page and its demo's initial surface.
    Show(ShowArgs),

    /// Print every registered demo type and the fallback.
    Types,

    /// Mount a pattern's demo and play it.
    Play(PlayArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let config = ShowcaseConfig::from_env().with_overrides(cli.seed, cli.deterministic);
    logging::init(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &config, &mut out)
}

/// Run a parsed command line. `--seed` and `--deterministic` take precedence
/// over `config`.
pub fn run<W: Write>(cli: Cli, config: &ShowcaseConfig, out: &mut W) -> Result<()> {
    let config = config.clone().with_overrides(cli.seed, cli.deterministic);
    let catalog = Catalog::builtin()?;
    let settings = config.demo_settings();
    tracing::info!(
        seed = settings.seed,
        deterministic = config.deterministic,
        patterns = catalog.len(),
        "showcase starting"
    );
    match cli.command {
        Commands::List(args) => run_list(out, &catalog, &args, cli.json),
        Commands::Show(args) => run_show(out, &catalog, settings, &args, cli.json),
        Commands::Types => run_types(out, &Registry::builtin(), cli.json),
        Commands::Play(args) => run_play(out, &catalog, settings, &args, cli.json),
    }
}
