//! User record as returned by the users endpoint.

use serde::Deserialize;
use serde_json::Value;

/// Literal substituted for any absent field.
pub const PLACEHOLDER: &str = "N/A";

/// One decoded user entry.
///
/// Decoding never fails on a single element: each field is extracted on its
/// own and left empty when it is missing or has the wrong shape, so an array
/// element like `42` or `{}` still yields a displayable record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct UserRecord {
    name: Option<String>,
    username: Option<String>,
    email: Option<String>,
    /// `address.city` in the payload
    city: Option<String>,
    phone: Option<String>,
    /// `company.name` in the payload
    company: Option<String>,
}

impl UserRecord {
    /// Build a record from already-known field values.
    pub fn new(
        name: Option<String>,
        username: Option<String>,
        email: Option<String>,
        city: Option<String>,
    ) -> Self {
        Self {
            name,
            username,
            email,
            city,
            phone: None,
            company: None,
        }
    }

    /// Attach phone and company name.
    #[must_use]
    pub fn with_contact(mut self, phone: Option<String>, company: Option<String>) -> Self {
        self.phone = phone;
        self.company = company;
        self
    }

    /// Display name, or [`PLACEHOLDER`].
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Login name, or [`PLACEHOLDER`].
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Email address, or [`PLACEHOLDER`].
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// City from the nested address, or [`PLACEHOLDER`] when the address is
    /// missing or malformed.
    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Phone number, or [`PLACEHOLDER`].
    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Company name, or [`PLACEHOLDER`].
    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn name_opt(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn username_opt(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email_opt(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// City only when the payload actually carried one.
    pub fn city_opt(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self {
            name: string_at(&value, &["name"]),
            username: string_at(&value, &["username"]),
            email: string_at(&value, &["email"]),
            city: string_at(&value, &["address", "city"]),
            phone: string_at(&value, &["phone"]),
            company: string_at(&value, &["company", "name"]),
        }
    }
}

/// Walk `path` through nested objects and return the string found there.
fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    path.iter()
        .try_fold(value, |current, key| current.get(key))
        .and_then(Value::as_str)
        .map(str::to_owned)
}
