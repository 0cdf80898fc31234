//! # schemata-cli — schemata Command-Line Interface
//!
//! ## Subcommands
//!
//! - `check`: validate a document against a schema descriptor
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers.
//! - Handlers delegate to the `schemata` crate; no validation logic here.
//! - Exit status: 0 valid, 1 invalid, 2 load or configuration failure
//!   (`check::exit_code`).

pub mod check;
