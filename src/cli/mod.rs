use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

pub mod browse;
pub mod list;
pub mod table;
pub mod ui;

pub use browse::run_browse;
pub use list::{run_cities, run_list};

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Browse a remote people directory from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the directory interactively (default)
    Browse,
    /// Print the directory as a table
    List(ListArgs),
    /// Print the distinct cities
    Cities,
}

#[derive(Args, Default)]
pub struct SourceArgs {
    /// Users endpoint [env: USERDIR_ENDPOINT]
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,
    /// Read users from a JSON file instead of the endpoint
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Quiet period before the name filter applies [env: USERDIR_DEBOUNCE_MS]
    #[arg(long, global = true, value_name = "MS")]
    pub debounce_ms: Option<u64>,
    /// Log file for the interactive browser [env: USERDIR_LOG]
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl SourceArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            file: self.file.clone(),
            debounce_ms: self.debounce_ms,
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Case-insensitive substring of first or last name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Exact city
    #[arg(short, long)]
    pub city: Option<String>,
    /// Mark the oldest person in each city
    #[arg(short = 'o', long)]
    pub highlight: bool,
}
