use crate::domain::customer::{Customer, CustomerId};
use crate::domain::ports::CustomerDirectory;
use crate::error::{CrmError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    ordered: Vec<Customer>,
    index: HashMap<CustomerId, usize>,
}

impl Records {
    fn insert(&mut self, customer: Customer) -> Result<()> {
        if self.index.contains_key(&customer.id) {
            return Err(CrmError::DuplicateCustomer(customer.id));
        }
        self.index.insert(customer.id.clone(), self.ordered.len());
        self.ordered.push(customer);
        Ok(())
    }
}

/// A thread-safe in-memory customer directory.
///
/// Uses `Arc<RwLock<..>>` to allow shared concurrent access. Records keep
/// their insertion order and an id index serves lookups.
#[derive(Default, Clone)]
pub struct InMemoryCustomerDirectory {
    records: Arc<RwLock<Records>>,
}

impl InMemoryCustomerDirectory {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-loaded with `customers`, failing on the first
    /// duplicate id.
    pub fn from_customers(customers: impl IntoIterator<Item = Customer>) -> Result<Self> {
        let mut records = Records::default();
        for customer in customers {
            records.insert(customer)?;
        }
        Ok(Self {
            records: Arc::new(RwLock::new(records)),
        })
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerDirectory {
    async fn insert(&self, customer: Customer) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(customer)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>> {
        let records = self.records.read().await;
        Ok(records
            .index
            .get(id)
            .map(|&position| records.ordered[position].clone()))
    }

    async fn all(&self) -> Result<Vec<Customer>> {
        let records = self.records.read().await;
        Ok(records.ordered.clone())
    }
}
