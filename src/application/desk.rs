use crate::application::list_engine::CustomerList;
use crate::domain::credentials::Credentials;
use crate::domain::customer::{Customer, CustomerId};
use crate::domain::ports::{AuthenticatorBox, CustomerDirectoryBox, Session};
use crate::error::{AuthError, Result};
use tracing::{debug, info};

/// What the detail view shows for a requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerDetail {
    Found(Box<Customer>),
    NotFound(CustomerId),
}

/// The main entry point of the application.
///
/// `CustomerDesk` owns the customer directory and the authenticator, and
/// hands out list, detail and sign-in results built on top of them.
pub struct CustomerDesk {
    directory: CustomerDirectoryBox,
    authenticator: AuthenticatorBox,
}

impl CustomerDesk {
    /// Creates a new `CustomerDesk` instance.
    ///
    /// # Arguments
    ///
    /// * `directory` - The source of customer records.
    /// * `authenticator` - Checks credentials on sign-in.
    pub fn new(directory: CustomerDirectoryBox, authenticator: AuthenticatorBox) -> Self {
        Self {
            directory,
            authenticator,
        }
    }

    /// Loads the whole collection into a fresh [`CustomerList`] with default
    /// view parameters.
    pub async fn open_list(&self) -> Result<CustomerList> {
        let customers = self.directory.all().await?;
        debug!(count = customers.len(), "opened customer list");
        Ok(CustomerList::new(customers))
    }

    /// Looks up one customer. A miss is a normal result, not an error.
    pub async fn detail(&self, id: &CustomerId) -> Result<CustomerDetail> {
        Ok(match self.directory.find_by_id(id).await? {
            Some(customer) => CustomerDetail::Found(Box::new(customer)),
            None => {
                debug!(%id, "customer not found");
                CustomerDetail::NotFound(id.clone())
            }
        })
    }

    /// Validates the form fields, then asks the authenticator.
    ///
    /// Invalid fields are reported without contacting the authenticator.
    pub async fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<Session, AuthError> {
        credentials.validate().map_err(AuthError::InvalidFields)?;
        let session = self.authenticator.sign_in(credentials).await?;
        info!(email = %session.email, "signed in");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryCustomerDirectory;
    use crate::infrastructure::seed::initial_customers;
    use crate::infrastructure::simulated_auth::SimulatedAuthenticator;
    use std::time::Duration;

    fn desk() -> CustomerDesk {
        CustomerDesk::new(
            Box::new(InMemoryCustomerDirectory::from_customers(initial_customers()).unwrap()),
            Box::new(SimulatedAuthenticator::new(Duration::ZERO)),
        )
    }

    #[tokio::test]
    async fn test_open_list_uses_whole_collection() {
        let mut list = desk().open_list().await.unwrap();
        assert_eq!(list.customers().len(), 6);
        // Default ordering is by name ascending.
        let first = list.view()[0].name.clone();
        assert_eq!(first, "Dhakoju Parvathi");
    }

    #[tokio::test]
    async fn test_detail_found_and_not_found() {
        let desk = desk();
        match desk.detail(&CustomerId::new("CUST001")).await.unwrap() {
            CustomerDetail::Found(customer) => assert_eq!(customer.name, "Kommoju Kalavathi"),
            other => panic!("expected a customer, got {other:?}"),
        }

        assert_eq!(
            desk.detail(&CustomerId::new("CUST999")).await.unwrap(),
            CustomerDetail::NotFound(CustomerId::new("CUST999"))
        );
    }

    #[tokio::test]
    async fn test_sign_in_validates_before_authenticating() {
        let desk = desk();
        let result = desk.sign_in(&Credentials::new("bad", "123")).await;
        assert!(matches!(result, Err(AuthError::InvalidFields(_))));

        let session = desk
            .sign_in(&Credentials::new("test@example.com", "password123"))
            .await
            .unwrap();
        assert_eq!(session.message, "Login successful!");
    }
}
