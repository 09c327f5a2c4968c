//! Block-boundary analysis for indentation-sensitive Python source
//!
//! This library determines the contiguous line range that forms one logical
//! unit of Python code, given a cursor line inside a document:
//! - A statement plus its bracket-continuation lines
//! - A function or class definition plus its decorators and body
//! - A control construct plus its dependent branches (elif/else/except/finally)
//!
//! It powers smart selection ("select the block under the cursor"), block
//! navigation ("jump to the next block header") and REPL submission
//! preparation. It is a line scanner, not a parser: all analysis is based on
//! indentation and bracket balance, with string and comment content stripped
//! before brackets are counted.
//!
//! # Example
//!
//! ```
//! use pyblocks_core::{block, Document};
//!
//! let doc = Document::new("@timer\ndef greet(name):\n    print(name)\n\nx = 1\n");
//! let span = block::find_block_span(&doc, 1)?;
//! assert_eq!((span.start, span.end), (0, 2));
//! # Ok::<(), pyblocks_core::AnalyzerError>(())
//! ```

pub mod block;
pub mod brackets;
pub mod classify;
pub mod document;
pub mod error;
pub mod navigate;
pub mod sanitize;
pub mod statement;

// Re-export commonly used types
pub use document::{Document, LineSpan, Position, Range};
pub use error::{AnalyzerError, Result};
