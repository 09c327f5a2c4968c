//! CLI command implementations
//!
//! The CLI stands in for the editor collaborator: it owns configuration and
//! output formatting, calls the core analyzer, and applies the documented
//! fallbacks (plain line selection, no-op navigation).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use pyblocks_core::{block, navigate, sanitize, statement};
use pyblocks_core::{Document, LineSpan, Position, Range};

/// Output format for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Parser)]
#[command(
    name = "pyblocks",
    version,
    about = "Logical-block analysis for Python source files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select the logical block containing a line
    Select {
        /// Python source file
        file: PathBuf,
        /// 0-based cursor line
        #[arg(long)]
        line: usize,
        /// Force plain current-line selection instead of block selection
        #[arg(long)]
        plain: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Locate the multi-line statement containing a line
    Statement {
        file: PathBuf,
        #[arg(long)]
        line: usize,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the next block header position
    Next {
        file: PathBuf,
        #[arg(long)]
        line: usize,
    },
    /// Print the previous block header position
    Prev {
        file: PathBuf,
        #[arg(long)]
        line: usize,
    },
    /// Print the block containing a line, prepared for REPL submission
    Sanitize {
        file: PathBuf,
        #[arg(long)]
        line: usize,
    },
    /// Print the effective settings
    Config,
}

/// Result of a `select` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SelectReport {
    pub range: Range,
    pub text: String,
    /// Cursor target for "execute and step", when stepping is enabled.
    pub next_line: Option<usize>,
}

/// Run the pyblocks CLI: parse arguments and execute the subcommand.
pub fn run_cli() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(Path::new("."));

    match cli.command {
        Command::Select {
            file,
            line,
            plain,
            format,
        } => {
            let source = read_source(&file)?;
            let block_select = settings.block_select && !plain;
            let report = select_report(&source, line, block_select, settings.step)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => {
                    println!(
                        "{}:{}-{}:{}",
                        report.range.start.line,
                        report.range.start.character,
                        report.range.end.line,
                        report.range.end.character
                    );
                    println!("{}", report.text);
                }
            }
        }
        Command::Statement { file, line, format } => {
            let source = read_source(&file)?;
            let span = statement_report(&source, line)?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&span)?)
                }
                OutputFormat::Text => match span {
                    Some(span) => println!("lines {}-{}", span.start, span.end),
                    None => println!("no multi-line statement at line {line}"),
                },
            }
        }
        Command::Next { file, line } => {
            let source = read_source(&file)?;
            let target = navigation_target(&source, line, Direction::Next)?;
            println!("{}:{}", target.line, target.character);
        }
        Command::Prev { file, line } => {
            let source = read_source(&file)?;
            let target = navigation_target(&source, line, Direction::Previous)?;
            println!("{}:{}", target.line, target.character);
        }
        Command::Sanitize { file, line } => {
            let source = read_source(&file)?;
            println!("{}", sanitize_report(&source, line)?);
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Compute the smart-select result for a cursor line.
pub fn select_report(
    source: &str,
    line: usize,
    block_select: bool,
    step: bool,
) -> Result<SelectReport> {
    let doc = Document::new(source);
    let range = block::smart_select(&doc, &Range::cursor(line, 0), block_select)?;
    let text = doc.range_text(&range)?;
    let next_line = if step {
        Some(block::next_code_line(&doc, range.end.line))
    } else {
        None
    };
    Ok(SelectReport {
        range,
        text,
        next_line,
    })
}

/// The multi-line statement span containing `line`, if any.
pub fn statement_report(source: &str, line: usize) -> Result<Option<LineSpan>> {
    let doc = Document::new(source);
    Ok(statement::locate_enclosing_statement(&doc, line)?)
}

/// The navigation target for a cursor at column 0 of `line`.
pub fn navigation_target(source: &str, line: usize, direction: Direction) -> Result<Position> {
    let doc = Document::new(source);
    let position = Position::new(line, 0);
    let target = match direction {
        Direction::Next => navigate::next_block_header(&doc, position)?,
        Direction::Previous => navigate::previous_block_header(&doc, position)?,
    };
    Ok(target)
}

/// The block containing `line`, dedented and padded for a REPL.
pub fn sanitize_report(source: &str, line: usize) -> Result<String> {
    let doc = Document::new(source);
    let span = block::find_block_span(&doc, line)?;
    let text = doc.span_text(span)?;
    Ok(sanitize::sanitize_selection(&text))
}
