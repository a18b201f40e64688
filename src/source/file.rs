//! Local JSON file source, same envelope as the endpoint

use std::path::{Path, PathBuf};

use super::{parse_users, provider::UserSource};
use crate::error::FetchError;
use crate::models::Person;

pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserSource for FileSource {
    fn fetch_users(&self) -> Result<Vec<Person>, FetchError> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_users(&body)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
