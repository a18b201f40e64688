use serde::{Deserialize, Serialize};

/// Residence of a directory entry. Only the city is consumed; the endpoint
/// sends more fields, which are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

impl Address {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}
