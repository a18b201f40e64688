//! Name and city filtering over the loaded directory

use crate::models::Person;

/// True if the query is a case-insensitive substring of the first or last name.
/// A query that is blank after trimming matches everyone.
pub fn matches_name(person: &Person, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    person.first_name.to_lowercase().contains(&needle)
        || person.last_name.to_lowercase().contains(&needle)
}

/// Exact, case-sensitive city match. No selection matches everyone.
pub fn matches_city(person: &Person, city: Option<&str>) -> bool {
    match city {
        Some(c) if !c.is_empty() => person.city() == c,
        _ => true,
    }
}

/// Records passing both filters, in their original order
pub fn visible<'a>(records: &'a [Person], query: &str, city: Option<&str>) -> Vec<&'a Person> {
    records
        .iter()
        .filter(|p| matches_name(p, query) && matches_city(p, city))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_records() -> Vec<Person> {
        vec![
            Person::new(1, "John", "Smith", "1980-01-01", "Austin"),
            Person::new(2, "Jane", "Doe", "1985-02-02", "Boston"),
            Person::new(3, "Alice", "Johnson", "1990-03-03", "Austin"),
            Person::new(4, "Bob", "Smithers", "1975-04-04", "austin"),
            Person::new(5, "Carol", "White", "1970-05-05", "Chicago"),
        ]
    }

    fn ids(people: &[&Person]) -> Vec<u64> {
        people.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let records = setup_records();
        assert_eq!(ids(&visible(&records, "", None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let records = setup_records();
        assert_eq!(visible(&records, "   ", None).len(), 5);
    }

    #[test]
    fn test_name_matches_first_or_last() {
        let records = setup_records();
        // "john" hits John Smith (first) and Alice Johnson (last)
        assert_eq!(ids(&visible(&records, "john", None)), vec![1, 3]);
    }

    #[test]
    fn test_name_case_insensitive() {
        let records = setup_records();
        assert_eq!(ids(&visible(&records, "SMITH", None)), vec![1, 4]);
    }

    #[test]
    fn test_name_no_match() {
        let records = setup_records();
        assert!(visible(&records, "zelda", None).is_empty());
    }

    #[test]
    fn test_city_exact_and_case_sensitive() {
        let records = setup_records();
        assert_eq!(ids(&visible(&records, "", Some("Austin"))), vec![1, 3]);
        assert_eq!(ids(&visible(&records, "", Some("austin"))), vec![4]);
        // Not a substring match
        assert!(visible(&records, "", Some("Aus")).is_empty());
    }

    #[test]
    fn test_empty_city_is_no_selection() {
        let records = setup_records();
        assert_eq!(visible(&records, "", Some("")).len(), 5);
    }

    #[test]
    fn test_filters_compose() {
        let records = setup_records();
        assert_eq!(ids(&visible(&records, "smith", Some("Austin"))), vec![1]);
    }

    #[test]
    fn test_idempotent() {
        let records = setup_records();
        let once: Vec<Person> = visible(&records, "o", Some("Austin"))
            .into_iter()
            .cloned()
            .collect();
        let twice = visible(&once, "o", Some("Austin"));
        assert_eq!(ids(&twice), once.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_composition_is_subset_of_each_filter() {
        let records = setup_records();
        for q in ["j", "smith", "o", "e"] {
            for c in ["Austin", "Boston", "Chicago", "austin"] {
                let both = ids(&visible(&records, q, Some(c)));
                let by_name = ids(&visible(&records, q, None));
                let by_city = ids(&visible(&records, "", Some(c)));
                for id in &both {
                    assert!(by_name.contains(id), "{} missing from name filter {}", id, q);
                    assert!(by_city.contains(id), "{} missing from city filter {}", id, c);
                }
            }
        }
    }
}
