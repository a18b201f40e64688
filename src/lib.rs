pub mod cities;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod oldest;
pub mod source;
pub mod state;

pub use config::Config;
pub use error::{ConfigError, FetchError};
pub use state::{Directory, DirectoryEvent};
