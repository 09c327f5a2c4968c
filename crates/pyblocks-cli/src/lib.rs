//! pyblocks CLI - command-line interface library
//!
//! This library provides the CLI functionality for pyblocks:
//! - Select: the logical block containing a line
//! - Statement: the multi-line statement containing a line
//! - Next / Prev: block header navigation targets
//! - Sanitize: a block prepared for REPL submission
//! - Config: the effective settings
//!
//! # Library Usage
//!
//! ```ignore
//! use pyblocks_cli::{run_cli, select_report};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or use individual commands programmatically
//! let report = select_report(&source, 3, true, true)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Select the block around line 12 of a file
//! pyblocks select script.py --line 12
//!
//! # As JSON, for editor integrations
//! pyblocks select script.py --line 12 --format json
//!
//! # Jump targets
//! pyblocks next script.py --line 12
//! pyblocks prev script.py --line 12
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{
    navigation_target, sanitize_report, select_report, statement_report, Direction, OutputFormat,
    SelectReport,
};
pub use app::run_cli;
pub use config::{Engine, Settings};
