//! Test Command Builder - a terminal form for test runner commands
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use tcb_app::config;
use tcb_core::prelude::*;
use test_command_builder::{prepare_state, print_command, run_tui, LoadSource};

/// Test Command Builder - build `testcase_runner.py` commands in the terminal
#[derive(Parser, Debug)]
#[command(name = "tcb")]
#[command(about = "A terminal form builder for test runner commands", long_about = None)]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the form from a saved command (`-` reads stdin)
    #[arg(long, value_name = "FILE")]
    load: Option<String>,

    /// Print the command to stdout and exit, without starting the TUI
    #[arg(long)]
    print: bool,

    /// Pretty-print the JSON payload (with --print)
    #[arg(long, requires = "print")]
    pretty: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            return Err(Error::config("No config directory on this platform"));
        };
        if config::init_config_file(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    // The TUI owns the terminal, so logs go to a file; print mode stays quiet
    if !args.print {
        tcb_core::logging::init()?;
    }

    let settings = config_path
        .as_deref()
        .map(config::load_settings)
        .unwrap_or_default();

    let load = args.load.as_deref().map(LoadSource::from_arg);
    let state = prepare_state(settings, load.as_ref())?;

    if args.print {
        let mut stdout = std::io::stdout().lock();
        return print_command(&state.codec, &state.document, args.pretty, &mut stdout);
    }

    run_tui(state).await
}
