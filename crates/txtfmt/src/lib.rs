//! The `txtfmt` command-line tool.
//!
//! Renders markup documents (`*.txtm`) into plain-text files (`*.txt`) with
//! [`txtfmt_markup`], and lists the tag catalog.

pub mod cli;
pub mod config;
pub mod process;
pub mod tags;

use std::io::{self, Write};
use std::sync::Once;

use anyhow::{Context as _, Result};

use crate::cli::{Cli, Command, RenderArgs};
use crate::config::Config;
use crate::process::{render_paths, RenderMode, Summary};

static TRACING_INIT: Once = Once::new();

/// Installs a log subscriber when `RUST_LOG` is set.
///
/// Logs go to stderr, e.g. `RUST_LOG=txtfmt_markup=debug` traces every
/// expanded tag.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Runs the render command with its config resolved.
pub fn render(args: &RenderArgs, out: &mut impl Write) -> Result<Summary> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let config = args.apply(config);
    tracing::debug!(?config, "loaded config");

    let mode = RenderMode {
        to_stdout: args.stdout,
        quiet: args.quiet,
    };
    render_paths(&args.paths, &config, mode, out)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(Command::Tags { name: None }) => tags::list(&mut out)?,
        Some(Command::Tags { name: Some(name) }) => tags::describe(&name, &mut out)?,
        Some(Command::Render(args)) => {
            render(&args, &mut out)?;
        }
        None => {
            render(&cli.render, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
