//! # CLI Layer
//!
//! Context setup and dispatch. Parses the arguments, installs logging,
//! resolves the catalog file, builds the API over a [`FileStore`], then either
//! runs a single subcommand or hands over to the menu.

use super::menu;
use super::render;
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use shelfapp::api::ShelfApi;
use shelfapp::commands::CmdResult;
use shelfapp::config::{default_config_path, ShelfConfig};
use shelfapp::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ShelfApi<FileStore>,
    data_file: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => print_result(&ctx, ctx.api.add_book(&title, &author, &year), false),
        Some(Commands::Delete { id }) => print_result(&ctx, ctx.api.delete_book(&id), false),
        Some(Commands::Search { field, query, json }) => {
            print_result(&ctx, ctx.api.search_books(&query, &field), json)
        }
        Some(Commands::List { json }) => print_result(&ctx, ctx.api.list_books(), json),
        Some(Commands::Status { id, status }) => {
            print_result(&ctx, ctx.api.change_status(&id, &status), false)
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run(&ctx.api, &ctx.data_file, &mut stdin.lock(), &mut stdout.lock())
                .context("interactive session failed")
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `-v` selects debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_path = default_config_path();
    let config = ShelfConfig::load(config_path.as_deref())?;
    let data_file = config.resolve_data_file(cli.file.clone())?;
    debug!(path = %data_file.display(), "using catalog file");

    let api = ShelfApi::new(FileStore::new(&data_file));
    Ok(AppContext { api, data_file })
}

fn print_result(
    ctx: &AppContext,
    result: shelfapp::error::Result<CmdResult>,
    json: bool,
) -> Result<()> {
    match result {
        Ok(result) => {
            if json {
                print!("{}", render::render_json(&result.listed_books));
                return Ok(());
            }
            print!("{}", render::render_messages(&result.messages));
            if !result.listed_books.is_empty() {
                print!("{}", render::render_books(&result.listed_books));
            }
            Ok(())
        }
        Err(e) if e.is_persistence() => {
            Err(e).with_context(|| format!("catalog file {}", ctx.data_file.display()))
        }
        Err(e) => Err(e.into()),
    }
}
