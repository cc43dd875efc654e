//! # CLI
//!
//! An inspection client for the storefront library: feed it a variant payload as
//! exported from the commerce backend and it prints the badges the product page
//! would show. It also prints brand strings so a store's `brand.json` can be
//! checked without building the site.
//!
//! This is the only place that knows about stdout, stderr, exit codes and logging
//! setup.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers

mod commands;
pub mod setup;

pub use commands::run;
