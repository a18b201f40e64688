//! HTTP directory source
//!
//! One blocking GET against the users endpoint.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{parse_users, provider::UserSource};
use crate::error::FetchError;
use crate::models::Person;

/// Overall request timeout handed to the HTTP client
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(endpoint: Url) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("userdir/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(endpoint, client))
    }

    pub fn with_client(endpoint: Url, client: Client) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl UserSource for HttpSource {
    fn fetch_users(&self) -> Result<Vec<Person>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching users");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        parse_users(&body)
    }

    fn name(&self) -> &str {
        self.endpoint.as_str()
    }
}
