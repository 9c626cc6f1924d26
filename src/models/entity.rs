//! Entity trait shared by every store

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidateEmail, ValidationError};

/// Record identifier as returned by the API.
///
/// `0` and the empty string mean the record has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    pub fn is_unset(&self) -> bool {
        match self {
            EntityId::Number(n) => *n == 0,
            EntityId::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

/// A record type managed by an entity store.
///
/// `Default` is the empty form shape; the `Validate` rules are the fields
/// that must be filled before a submit reaches the network.
pub trait Entity:
    Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// Resource name on the remote API, e.g. `Book` for `/Book`
    const RESOURCE: &'static str;

    /// Human readable name used in notices
    const LABEL: &'static str;

    fn id(&self) -> EntityId;

    /// Strip time and timezone parts from date fields before editing
    fn normalize_dates(&mut self) {}
}

/// Email rule for optional form fields: a cleared field is not an error
pub fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some("Invalid email format".into());
    Err(error)
}
