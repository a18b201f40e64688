use std::collections::BTreeSet;

use crate::models::Person;

/// Distinct city names in ascending order, for the city picker
pub fn city_index(records: &[Person]) -> Vec<String> {
    records
        .iter()
        .map(|p| p.city())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
