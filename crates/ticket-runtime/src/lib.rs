//! # Hall Ticket Runtime
//!
//! Wiring and command handling for the `ticket-runtime` binary.
//!
//! ## Modular Structure
//!
//! - `container/` - Runtime configuration and pipeline construction
//! - `cli` - Command-line arguments and command execution
//! - `logging` - Tracing subscriber setup
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration (defaults, then `HT_*` env, then CLI flags)
//! 3. Install the tracing subscriber
//! 4. Validate configuration
//! 5. Open the register (taking its lock) and build the pipeline
//! 6. Execute the command

pub mod cli;
pub mod container;
pub mod logging;

pub use cli::{execute, Args, Command, IssueArgs};
pub use container::{build_pipeline, load_config, ConfigError, RuntimeConfig, TicketPipeline};
