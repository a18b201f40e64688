//! Directory session state
//!
//! All mutable session state lives in one `Directory`. Every operator action
//! arrives as a `DirectoryEvent`; `apply` mutates the state and then
//! recomputes whichever derived views depend on what changed.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cities::city_index;
use crate::debounce::Debouncer;
use crate::filter::{matches_city, matches_name};
use crate::models::Person;
use crate::oldest::is_oldest_in_city;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEvent {
    /// The one-time fetch finished (empty on failure)
    UsersLoaded(Vec<Person>),
    /// The raw name query now reads this
    QueryEdited(String),
    /// City picker changed; `None` clears the selection
    CitySelected(Option<String>),
    HighlightToggled,
    /// Clock advanced; lets the debounce timer fire
    Tick,
}

/// Operator-owned filter inputs
#[derive(Debug, Clone)]
pub struct FilterState {
    raw_query: String,
    query: Debouncer<String>,
    city: Option<String>,
    highlight: bool,
}

impl FilterState {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw_query: String::new(),
            query: Debouncer::new(String::new(), delay),
            city: None,
            highlight: false,
        }
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn settled_query(&self) -> &str {
        self.query.settled()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// True while a typed query is waiting out the quiet period
    pub fn is_settling(&self) -> bool {
        self.query.pending().is_some()
    }
}

/// One table row ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    pub person: &'a Person,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<Person>,
    filters: FilterState,
    cities: Vec<String>,
    visible: Vec<usize>,
}

impl Directory {
    pub fn new(delay: Duration) -> Self {
        Self {
            records: Vec::new(),
            filters: FilterState::new(delay),
            cities: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Convenience for callers that already hold the records
    pub fn with_records(records: Vec<Person>, delay: Duration) -> Self {
        let mut dir = Self::new(delay);
        dir.apply(DirectoryEvent::UsersLoaded(records), Instant::now());
        dir
    }

    /// Handle one event. Returns true when anything on screen may have changed.
    pub fn apply(&mut self, event: DirectoryEvent, now: Instant) -> bool {
        match event {
            DirectoryEvent::UsersLoaded(records) => {
                self.records = records;
                self.recompute_cities();
                self.recompute_visible();
                true
            }
            DirectoryEvent::QueryEdited(query) => {
                if query == self.filters.raw_query {
                    return false;
                }
                self.filters.query.set(query.clone(), now);
                self.filters.raw_query = query;
                true
            }
            DirectoryEvent::CitySelected(city) => {
                let city = city.filter(|c| !c.is_empty());
                if city == self.filters.city {
                    return false;
                }
                debug!(city = ?city, "city filter changed");
                self.filters.city = city;
                self.recompute_visible();
                true
            }
            DirectoryEvent::HighlightToggled => {
                self.filters.highlight = !self.filters.highlight;
                true
            }
            DirectoryEvent::Tick => {
                if self.filters.query.poll(now) {
                    debug!(query = self.filters.settled_query(), "name filter settled");
                    self.recompute_visible();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn recompute_cities(&mut self) {
        self.cities = city_index(&self.records);
    }

    fn recompute_visible(&mut self) {
        let query = self.filters.settled_query();
        let city = self.filters.city();
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, p)| matches_name(p, query) && matches_city(p, city))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn records(&self) -> &[Person] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn visible(&self) -> Vec<&Person> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Oldest-in-city decision, always against the full directory
    pub fn is_highlighted(&self, person: &Person) -> bool {
        is_oldest_in_city(person, &self.records, self.filters.highlight)
    }

    pub fn rows(&self) -> Vec<Row<'_>> {
        self.visible
            .iter()
            .map(|&i| {
                let person = &self.records[i];
                Row {
                    person,
                    highlighted: self.is_highlighted(person),
                }
            })
            .collect()
    }

    /// When the event loop must wake up next to deliver a `Tick`
    pub fn next_deadline(&self) -> Option<Instant> {
        self.filters.query.deadline()
    }
}
