mod cli;
mod config;
mod render;
mod session;
mod tracing_setup;

use std::io;

use anyhow::{Context, Result};
use catalog_core::{Catalog, FilterAction, FilterState, UserId};
use clap::Parser;
use tracing::{debug, warn};

use crate::cli::{Cli, Command, ListArgs};
use crate::config::Config;
use crate::tracing_setup::TracingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(&cli);

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        default_level: config.log_level.clone(),
    })?;
    debug!(config_path = ?config.config_path, data_dir = ?config.data_dir, "configuration loaded");

    let catalog = load_catalog(&config)?;
    for reference in catalog.unresolved_references() {
        warn!(%reference, "unresolved reference in catalog");
    }
    let products = catalog.enriched_products();

    match cli.command {
        Command::List(args) => {
            let state = list_state(args);
            let mut out = io::stdout().lock();
            render::render(&mut out, catalog.users(), &state, &state.filter(&products))?;
        }
        Command::Browse => {
            session::run(io::stdin().lock(), io::stdout().lock(), &catalog, &products)?;
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.data_dir {
        Some(dir) => Catalog::load_dir(dir)
            .with_context(|| format!("failed to load catalog from {}", dir.display())),
        None => Catalog::builtin().context("the built-in catalog is invalid"),
    }
}

// Each --user flag acts like a click on that user's tab.
fn list_state(args: ListArgs) -> FilterState {
    args.users
        .into_iter()
        .fold(FilterState::new(), |state, id| state.apply(FilterAction::ToggleUser(UserId(id))))
        .apply(FilterAction::EditSearch(args.search))
}
