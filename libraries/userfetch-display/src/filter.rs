//! City prefix filter and field search.

use std::fmt;
use std::str::FromStr;
use userfetch_client::UserRecord;

/// Whether the record's city starts with `prefix`, ignoring case.
///
/// Records without a city never match.
pub fn city_starts_with(record: &UserRecord, prefix: &str) -> bool {
    record
        .city_opt()
        .is_some_and(|city| city.to_lowercase().starts_with(&prefix.to_lowercase()))
}

/// Records whose city starts with `prefix`, in input order.
pub fn filter_by_city_prefix<'a>(
    records: &'a [UserRecord],
    prefix: &str,
) -> Vec<&'a UserRecord> {
    records
        .iter()
        .filter(|record| city_starts_with(record, prefix))
        .collect()
}

/// Field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Name,
    Username,
    Email,
    City,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Username => "username",
            SearchField::Email => "email",
            SearchField::City => "city",
        }
    }

    fn value_of<'a>(&self, record: &'a UserRecord) -> Option<&'a str> {
        match self {
            SearchField::Name => record.name_opt(),
            SearchField::Username => record.username_opt(),
            SearchField::Email => record.email_opt(),
            SearchField::City => record.city_opt(),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "username" => Ok(SearchField::Username),
            "email" => Ok(SearchField::Email),
            "city" => Ok(SearchField::City),
            other => Err(format!(
                "unknown search field '{}' (expected name, username, email or city)",
                other
            )),
        }
    }
}

/// Records whose `field` contains `query`, ignoring case.
///
/// Absent fields count as empty.
pub fn search_users(records: &[UserRecord], query: &str, field: SearchField) -> Vec<UserRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            field
                .value_of(record)
                .unwrap_or_default()
                .to_lowercase()
                .contains(&query)
        })
        .cloned()
        .collect()
}
