use crate::error::{CrmError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar format of `registeredDate` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque, unique customer identifier (e.g. `CUST001`).
///
/// Used as the lookup key of the directory, as a sort key, and as the
/// routing key of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerStatus::Active => f.write_str("Active"),
            CustomerStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum ContactMethod {
    Phone,
    Email,
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactMethod::Phone => f.write_str("Phone"),
            ContactMethod::Email => f.write_str("Email"),
        }
    }
}

/// A customer record.
///
/// Only `id`, `name`, `email`, `registered_date` and `status` take part in
/// filtering and sorting; the remaining fields are carried for display.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Registration date as stored, `YYYY-MM-DD`.
    pub registered_date: String,
    pub status: CustomerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact_method: Option<ContactMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Customer {
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
        registered_date: impl Into<String>,
        status: CustomerStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            registered_date: registered_date.into(),
            status,
            ..Self::default()
        }
    }

    /// Parses the registration date. `None` when the stored value is not a
    /// valid `YYYY-MM-DD` calendar date.
    pub fn registered_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.registered_date, DATE_FORMAT).ok()
    }

    /// Case-insensitive containment test against name, email and id.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.id.as_str().to_lowercase().contains(needle)
    }

    /// Checks the record invariants enforced at load time.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(CrmError::ValidationError(
                "Customer id must not be empty".to_string(),
            ));
        }
        if self.registered_on().is_none() {
            return Err(CrmError::ValidationError(format!(
                "Customer {} has an invalid registeredDate '{}'",
                self.id, self.registered_date
            )));
        }
        Ok(())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
