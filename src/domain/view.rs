use crate::domain::customer::Customer;
use crate::error::CrmError;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Columns the customer list can be ordered by.
///
/// Each key maps to a typed accessor in [`SortKey::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Id,
    Email,
    RegisteredDate,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Id,
        SortKey::Email,
        SortKey::RegisteredDate,
        SortKey::Status,
    ];

    /// Column name as used by the dataset headers.
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Id => "id",
            SortKey::Email => "email",
            SortKey::RegisteredDate => "registeredDate",
            SortKey::Status => "status",
        }
    }

    /// Lenient lookup by column name. Accepts the dataset header as well as
    /// kebab and snake case spellings, ignoring ASCII case.
    pub fn from_column(column: &str) -> Option<SortKey> {
        let normalized: String = column
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.column().to_ascii_lowercase() == normalized)
    }

    /// Ascending comparison of two customers by this key.
    ///
    /// Dates compare chronologically; everything else compares the stored
    /// value case-sensitively.
    pub fn compare(&self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::RegisteredDate => compare_dates(a.registered_on(), b.registered_on()),
        }
    }
}

// Unparsable dates go after every valid date.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SortKey {
    type Err = CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::from_column(s)
            .ok_or_else(|| CrmError::ValidationError(format!("Unknown sort column '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> char {
        match self {
            SortDirection::Ascending => '↑',
            SortDirection::Descending => '↓',
        }
    }
}

impl FromStr for SortDirection {
    type Err = CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(CrmError::ValidationError(format!(
                "Unknown sort direction '{other}'"
            ))),
        }
    }
}

/// How the computed list is presented. Has no effect on the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" | "cards" => Ok(ViewMode::Grid),
            "list" | "table" => Ok(ViewMode::List),
            other => Err(CrmError::ValidationError(format!(
                "Unknown view mode '{other}'"
            ))),
        }
    }
}

/// The parameters driving the derived customer list.
///
/// `sort_key` is `None` when the caller asked for a column that does not
/// exist; the list then keeps its input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    pub query: String,
    pub sort_key: Option<SortKey>,
    pub direction: SortDirection,
    pub view_mode: ViewMode,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: Some(SortKey::Name),
            direction: SortDirection::Ascending,
            view_mode: ViewMode::Grid,
        }
    }
}
