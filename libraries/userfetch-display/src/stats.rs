//! Per-city statistics over a set of records.

use serde::Serialize;
use userfetch_client::UserRecord;

/// City label used when a record has no city.
const UNKNOWN_CITY: &str = "Unknown";

/// Summary of a fetched user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub unique_cities: usize,
    /// Prefix the `cities_with_prefix` count was computed for
    pub prefix: String,
    /// Distinct cities starting with `prefix`, ignoring case
    pub cities_with_prefix: usize,
    /// Most frequent city and its count; ties go to the first seen
    pub most_common_city: Option<(String, usize)>,
}

impl Statistics {
    pub fn collect(records: &[UserRecord], prefix: &str) -> Self {
        // Insertion order matters for tie-breaking
        let mut counts: Vec<(Option<&str>, usize)> = Vec::new();
        for record in records {
            let city = record.city_opt();
            match counts.iter_mut().find(|(seen, _)| *seen == city) {
                Some((_, count)) => *count += 1,
                None => counts.push((city, 1)),
            }
        }

        let lowered = prefix.to_lowercase();
        let cities_with_prefix = counts
            .iter()
            .filter_map(|(city, _)| *city)
            .filter(|city| city.to_lowercase().starts_with(&lowered))
            .count();

        let most_common_city = counts
            .iter()
            .fold(None::<(Option<&str>, usize)>, |best, &(city, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((city, count)),
            })
            .map(|(city, count)| (city.unwrap_or(UNKNOWN_CITY).to_string(), count));

        Self {
            total: records.len(),
            unique_cities: counts.len(),
            prefix: prefix.to_string(),
            cities_with_prefix,
            most_common_city,
        }
    }
}
