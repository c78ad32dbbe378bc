use crate::domain::customer::Customer;
use crate::domain::view::{SortDirection, SortKey, ViewMode, ViewParams};
use tracing::{debug, warn};

/// Derives the displayed list from a customer collection.
///
/// Keeps the records whose name, email or id contains `query`
/// (case-insensitive; an empty query keeps everything), then orders them by
/// `sort_key` in `direction`. Equal keys fall back to ascending `id`. With no
/// sort key the filtered records keep their input order.
///
/// The input slice is never modified.
pub fn compute_view(
    customers: &[Customer],
    query: &str,
    sort_key: Option<SortKey>,
    direction: SortDirection,
) -> Vec<Customer> {
    let needle = query.to_lowercase();
    let mut view: Vec<Customer> = customers
        .iter()
        .filter(|customer| needle.is_empty() || customer.matches_lowercase(&needle))
        .cloned()
        .collect();

    if let Some(key) = sort_key {
        if key == SortKey::RegisteredDate {
            for customer in view.iter().filter(|c| c.registered_on().is_none()) {
                warn!(
                    id = %customer.id,
                    registered_date = %customer.registered_date,
                    "unparsable registration date, ordering it last"
                );
            }
        }
        view.sort_by(|a, b| {
            direction
                .apply(key.compare(a, b))
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    view
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    revision: u64,
    query: String,
    sort_key: Option<SortKey>,
    direction: SortDirection,
}

/// Stateful customer list: the collection, the view parameters, and a
/// memoized derived view.
///
/// The view is recomputed only when the collection, the query, the sort key
/// or the direction differs from the last computation.
#[derive(Debug, Default)]
pub struct CustomerList {
    customers: Vec<Customer>,
    revision: u64,
    params: ViewParams,
    memo: Option<(MemoKey, Vec<Customer>)>,
    computations: usize,
}

impl CustomerList {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            ..Self::default()
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn view_mode(&self) -> ViewMode {
        self.params.view_mode
    }

    /// Number of times the derived view has been computed.
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn set_customers(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
        self.revision += 1;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.params.view_mode = view_mode;
    }

    /// Sets key and direction directly, bypassing the toggle rule.
    pub fn set_sort(&mut self, sort_key: Option<SortKey>, direction: SortDirection) {
        self.params.sort_key = sort_key;
        self.params.direction = direction;
    }

    /// Column-header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.params.sort_key == Some(key) {
            self.params.direction = self.params.direction.reversed();
        } else {
            self.params.sort_key = Some(key);
            self.params.direction = SortDirection::Ascending;
        }
    }

    /// Like [`CustomerList::sort_by`], addressed by column name. Unknown
    /// columns clear the sort key so the list keeps its input order.
    pub fn sort_by_column(&mut self, column: &str) {
        match SortKey::from_column(column) {
            Some(key) => self.sort_by(key),
            None => {
                warn!(column, "unknown sort column, keeping input order");
                self.params.sort_key = None;
                self.params.direction = SortDirection::Ascending;
            }
        }
    }

    pub fn toggle_direction(&mut self) {
        self.params.direction = self.params.direction.reversed();
    }

    /// Current direction if `key` is the active sort column.
    pub fn sort_indicator(&self, key: SortKey) -> Option<SortDirection> {
        (self.params.sort_key == Some(key)).then_some(self.params.direction)
    }

    /// The derived list for the current parameters.
    pub fn view(&mut self) -> &[Customer] {
        let key = MemoKey {
            revision: self.revision,
            query: self.params.query.clone(),
            sort_key: self.params.sort_key,
            direction: self.params.direction,
        };

        let stale = !matches!(&self.memo, Some((cached, _)) if *cached == key);
        if stale {
            let rows = compute_view(&self.customers, &key.query, key.sort_key, key.direction);
            self.computations += 1;
            debug!(
                query = %key.query,
                sort_key = ?key.sort_key,
                direction = ?key.direction,
                rows = rows.len(),
                "recomputed customer view"
            );
            self.memo = Some((key, rows));
        }

        match &self.memo {
            Some((_, rows)) => rows.as_slice(),
            None => &[],
        }
    }
}
