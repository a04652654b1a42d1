//! `artifex` - generate a city, terrain grid or weapon set and print it as JSON.
//!
//! ```text
//! artifex city --seed 42 > city.json
//! artifex --config world.toml terrain
//! artifex weapons --count 20 --level 15 --log-level debug
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use artifex::cli::{render, CliArgs};
use artifex::logging::init_logging;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref());

    info!(command = ?args.command, "generating");
    match render(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "generation failed");
            ExitCode::FAILURE
        }
    }
}
