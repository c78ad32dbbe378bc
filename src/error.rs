use crate::domain::credentials::FieldErrors;
use crate::domain::customer::CustomerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Duplicate customer id: {0}")]
    DuplicateCustomer(CustomerId),
}

pub type Result<T> = std::result::Result<T, CrmError>;

/// Sign-in failures, carrying the message shown to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    InvalidFields(FieldErrors),
    #[error("Incorrect email or password. Please double-check your credentials.")]
    CredentialsRejected,
    #[error("No account found with this email. Please sign up.")]
    UserNotFound,
    #[error("An unexpected error occurred. Please try again.")]
    Unexpected,
}
