use serde::{Deserialize, Serialize};

use super::{Address, BirthDate};

/// One directory entry, as served by the users endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: BirthDate,
    pub address: Address,
}

impl Person {
    pub fn new(id: u64, first_name: &str, last_name: &str, birth_date: &str, city: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: BirthDate::parse(birth_date),
            address: Address::new(city),
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn city(&self) -> &str {
        &self.address.city
    }
}
