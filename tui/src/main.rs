use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use termsweeper_core::App;

use crate::terminal::TerminalSession;

mod keys;
mod render;
mod terminal;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// File receiving the log, the terminal itself belongs to the game
    #[arg(long, default_value_os_t = default_log_file())]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("termsweeper.log")
}

fn init_logging(args: &Args) -> Result<()> {
    let file = File::create(&args.log_file)
        .with_context(|| format!("Could not create log file {}", args.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn run(session: &mut TerminalSession, app: &mut App) -> Result<()> {
    loop {
        session.draw(app)?;

        let input = loop {
            if let Some(input) = keys::read_input()? {
                break input;
            }
        };
        log::trace!("input: {:?}", input);

        if app.handle(input).is_break() {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    log::debug!("seed: {}", seed);
    let mut app = App::new(seed);

    let mut session = TerminalSession::start().context("Could not set up the terminal")?;
    log::info!("App started");
    run(&mut session, &mut app)?;
    log::info!("App terminated");
    Ok(())
}
