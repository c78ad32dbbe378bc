use super::credentials::Credentials;
use super::customer::{Customer, CustomerId};
use crate::error::{AuthError, Result};
use async_trait::async_trait;

/// Read access to the customer collection, plus loading at start-up.
///
/// Implementations keep insertion order for [`CustomerDirectory::all`].
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn insert(&self, customer: Customer) -> Result<()>;
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>>;
    async fn all(&self) -> Result<Vec<Customer>>;
}

/// Outcome of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub message: String,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> std::result::Result<Session, AuthError>;
}

pub type CustomerDirectoryBox = Box<dyn CustomerDirectory>;
pub type AuthenticatorBox = Box<dyn Authenticator>;
