use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse the product catalog, filtered by user and product name.")]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing users.json, categories.json and products.json.
    /// Defaults to the built-in catalog.
    #[arg(long = "data", value_name = "DIR", global = true, env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the filtered product table once.
    List(ListArgs),
    /// Filter the product table interactively, one command per line.
    Browse,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Toggle the filter for this user ID. Giving the same ID twice clears it.
    #[arg(long = "user", value_name = "ID")]
    pub users: Vec<u64>,

    /// Only show products whose name contains this text, ignoring case.
    #[arg(long, default_value = "")]
    pub search: String,
}
