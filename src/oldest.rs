//! Oldest person per city
//!
//! Always evaluated against the full directory, never the filtered view, so a
//! row keeps its highlight no matter which filters are active.

use std::collections::{HashMap, HashSet};

use crate::models::Person;

/// Earliest-born member of `city`. On equal birth dates the record that
/// comes first in the collection wins.
pub fn oldest_in_city<'a>(all: &'a [Person], city: &str) -> Option<&'a Person> {
    all.iter()
        .filter(|p| p.city() == city)
        .fold(None, |champion: Option<&Person>, candidate| match champion {
            Some(current) if !candidate.birth_date.is_before(&current.birth_date) => Some(current),
            _ => Some(candidate),
        })
}

/// Whether `person` is the oldest in its city. Always false when disabled.
pub fn is_oldest_in_city(person: &Person, all: &[Person], enabled: bool) -> bool {
    if !enabled {
        return false;
    }
    oldest_in_city(all, person.city())
        .map(|oldest| oldest.id == person.id)
        .unwrap_or(false)
}

/// Ids of every city's oldest member, computed in one pass
pub fn oldest_ids(all: &[Person]) -> HashSet<u64> {
    let mut champions: HashMap<&str, &Person> = HashMap::new();
    for person in all {
        champions
            .entry(person.city())
            .and_modify(|current| {
                if person.birth_date.is_before(&current.birth_date) {
                    *current = person;
                }
            })
            .or_insert(person);
    }
    champions.values().map(|p| p.id).collect()
}
