//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/shelfapp/`: Library with the catalog store and operations
//! - `crates/shelf/`: This CLI, depends on `shelfapp`
//!
//! Everything from `shelfapp::api` inward is UI agnostic. The CLI owns argument
//! parsing, logging setup, the interactive menu, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: command logic against `InMemoryStore`, storage against temp dirs.
//! - **CLI**: argument parsing and rendering as unit tests, the menu against
//!   scripted input, and the binary end-to-end with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
