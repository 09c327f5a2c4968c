//! Configuration
//!
//! Settings for the selection and execution behavior, loaded from
//! `pyblocks.toml` in the working directory:
//!
//! ```toml
//! engine = "jupyter"
//! block_select = true
//! step = true
//! delay_ms = 200
//! ```
//!
//! All keys are optional; missing keys take their defaults. The core
//! analyzer never reads configuration itself — the values are threaded in
//! as plain arguments.

mod settings;


pub use settings::{Engine, Settings};
