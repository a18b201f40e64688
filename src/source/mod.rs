//! Where the directory comes from
//!
//! The directory is fetched once at startup. A failed fetch is logged and
//! the session continues with an empty collection; there is no retry.

mod file;
mod http;
mod provider;

pub use file::FileSource;
pub use http::HttpSource;
pub use provider::UserSource;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::models::Person;

/// Build the source named by the configuration
pub fn open(config: &SourceConfig) -> Result<Box<dyn UserSource>, FetchError> {
    match config {
        SourceConfig::Http(url) => Ok(Box::new(HttpSource::new(url.clone())?)),
        SourceConfig::File(path) => Ok(Box::new(FileSource::new(path.clone()))),
    }
}

/// Fetch the directory once. Failures are logged and swallowed.
pub fn load_users(source: &dyn UserSource) -> Vec<Person> {
    match source.fetch_users() {
        Ok(users) => {
            info!(source = source.name(), count = users.len(), "loaded users");
            users
        }
        Err(err) => {
            error!(source = source.name(), error = %err, "error fetching users");
            Vec::new()
        }
    }
}

/// Decode the `{"users": [...]}` envelope.
///
/// A body that is not JSON is an error. JSON without a usable `users` array
/// counts as an empty directory.
pub(crate) fn parse_users(body: &str) -> Result<Vec<Person>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let Some(users) = value.get("users") else {
        warn!("response has no users field");
        return Ok(Vec::new());
    };

    match Vec::<Person>::deserialize(users) {
        Ok(users) => Ok(users),
        Err(err) => {
            warn!(error = %err, "users field has unexpected shape");
            Ok(Vec::new())
        }
    }
}
