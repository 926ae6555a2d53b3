//! `yap` command line entry point.
//!
//! Resolves the vault and journal mode, sets up tracing, and hands control to
//! the terminal event loop.
//!
//! # Precedence
//!
//! - Journal mode: `--mode` > config `mode` > `all`
//! - Vault: `VAULT_DIR` argument > config `vault_dir` > `~/.YapPad`
//! - Editor: `$EDITOR` > config `editor` > `nvim`

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use yappad::app::keys;
use yappad::config::Config;
use yappad::domain::Clock;
use yappad::infrastructure::default_vault_dir;
use yappad::observability::init_tracing;
use yappad::vault::Vault;
use yappad::{JournalMode, Result, YapError};

#[derive(Parser, Debug)]
#[command(name = "yap")]
#[command(about = "A terminal journal for your Markdown notes", long_about = None)]
#[command(version)]
#[command(after_long_help = keys::long_help())]
struct Cli {
    /// Journal to open: all, daily, weekly, monthly, yearly (or 0-4)
    #[arg(long, short, value_parser = parse_mode)]
    mode: Option<JournalMode>,

    /// Vault directory (default: ~/.YapPad)
    vault_dir: Option<PathBuf>,
}

fn parse_mode(raw: &str) -> std::result::Result<JournalMode, String> {
    raw.parse().map_err(|e: YapError| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config);

    let journal = match cli.mode {
        Some(mode) => mode,
        None => config.journal_mode()?.unwrap_or_default(),
    };

    let vault_dir = match cli.vault_dir.or_else(|| config.vault_dir()) {
        Some(dir) => dir,
        None => default_vault_dir()?,
    };

    let span = tracing::info_span!("yap", vault = %vault_dir.display(), %journal);
    let _enter = span.enter();

    let vault = Vault::new(vault_dir);
    vault.bootstrap()?;

    let state = yappad::initialize(&config, vault, journal, Clock::System);
    yappad::terminal::run(state, &config)
}
