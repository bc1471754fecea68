//! # Hall Ticket Runtime
//!
//! Entry point for the `ticket-runtime` binary. See the library crate for
//! the startup sequence.

use anyhow::Result;
use clap::Parser;
use shared_types::SystemClock;
use tracing::debug;

use ticket_runtime::container::{build_pipeline, load_config};
use ticket_runtime::logging::init_tracing;
use ticket_runtime::{execute, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration: defaults, env, then flags
    let mut config = load_config();
    args.apply(&mut config);

    init_tracing(&config.log)?;
    debug!("Runtime configuration: {:?}", config);

    let mut pipeline = build_pipeline(&config, SystemClock)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args.command, &config, &mut pipeline, &mut out)
}
