//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Two Ways In
//!
//! - **Subcommands**: `shelf add`, `shelf delete`, `shelf search`, `shelf list`,
//!   `shelf status` run one operation and exit. A failed operation exits 1.
//! - **Menu**: `shelf menu`, or `shelf` with no arguments, runs the numbered
//!   interactive loop. A failed operation prints its message and the loop
//!   continues; only `6` or end of input leaves it.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging, dispatch of subcommands
//! - `menu`: The interactive loop
//! - `render`: Output formatting (tables, messages, errors)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod menu;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
