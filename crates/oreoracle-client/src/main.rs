//! # Ore Oracle
//!
//! Headless host for the ore HUD. Reads script instructions from stdin
//! and prints what the HUD and selector would show.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use oreoracle_client::script::{self, Instruction};
use oreoracle_client::{OracleClient, StoragePaths};
use oreoracle_core::layout::ScreenSize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Ore Oracle command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "oreoracle", version, about = "Ore probability HUD, headless")]
struct CliArgs {
    /// Directory holding the config and tracking files.
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Scaled screen size as WIDTHxHEIGHT.
    #[arg(long, default_value = "427x240", value_parser = parse_screen)]
    screen: ScreenSize,
}

fn parse_screen(raw: &str) -> Result<ScreenSize> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .context("expected WIDTHxHEIGHT")?;
    let width: i32 = w.trim().parse().context("invalid width")?;
    let height: i32 = h.trim().parse().context("invalid height")?;
    if width <= 0 || height <= 0 {
        bail!("screen size must be positive");
    }
    Ok(ScreenSize::new(width, height))
}

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("oreoracle=info".parse()?))
        .init();

    let args = CliArgs::parse();
    info!("Ore Oracle {}", env!("CARGO_PKG_VERSION"));

    let paths = args
        .config_dir
        .map_or_else(StoragePaths::platform_default, StoragePaths::new);
    let mut client = OracleClient::init(paths)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let instruction = match Instruction::parse(&line) {
            Ok(Some(instruction)) => instruction,
            Ok(None) => continue,
            Err(e) => {
                warn!("Ignoring '{line}': {e}");
                writeln!(stdout, "error: {e}")?;
                continue;
            },
        };
        if instruction == Instruction::Quit {
            break;
        }
        for out in script::run(&mut client, instruction, args.screen) {
            writeln!(stdout, "{out}")?;
        }
    }

    client.shutdown();
    Ok(())
}
