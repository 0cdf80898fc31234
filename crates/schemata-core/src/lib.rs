//! # schemata-core — Foundational Types for schemata
//!
//! This crate is the leaf of the schemata workspace. It defines the
//! vocabulary every validator speaks: what a validation failure looks like,
//! how a validation outcome is reported, and how builder misuse is signalled.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Three error kinds, closed.** `ErrorKind` has exactly `Required`,
//!    `TypeMismatch` and `RuleViolation`. Exhaustive `match` everywhere.
//!
//! 2. **One message template.** Every `ValidationError` message is rendered
//!    by [`build_error`] as `required: {expected}, received: {received}`.
//!    Downstream consumers compare these strings verbatim.
//!
//! 3. **Failures are values.** Data validation never returns `Err` and never
//!    panics; it returns a [`ValidationResult`]. Only configuration misuse
//!    ([`SchemaConfigError`]) is an error in the Rust sense.
//!
//! 4. **Paths are always present.** A `ValidationError` owns a `Vec<String>`
//!    path, empty at the root, grown outside-in by enclosing objects.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemata*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod presence;
pub mod result;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{build_error, ErrorKind, SchemaConfigError, ValidationError, ValidationErrors};
pub use presence::Presence;
pub use result::ValidationResult;
pub use value::{type_name, MISSING};
