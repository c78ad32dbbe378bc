use crate::domain::credentials::Credentials;
use crate::domain::ports::{Authenticator, Session};
use crate::error::AuthError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

const DEMO_EMAIL: &str = "test@example.com";
const DEMO_PASSWORD: &str = "password123";
const KNOWN_EMAIL: &str = "user@example.com";
const UNKNOWN_EMAIL: &str = "new@example.com";

/// Stand-in authenticator with a fixed set of accounts and an artificial
/// round-trip delay.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulating sign-in round trip");
        sleep(self.delay).await;

        let email = credentials.email.as_str();
        let password = credentials.password.as_str();
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            Ok(Session {
                email: email.to_string(),
                message: "Login successful!".to_string(),
            })
        } else if email == KNOWN_EMAIL && password != DEMO_PASSWORD {
            Err(AuthError::CredentialsRejected)
        } else if email == UNKNOWN_EMAIL {
            Err(AuthError::UserNotFound)
        } else {
            Err(AuthError::Unexpected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn attempt(email: &str, password: &str) -> Result<Session, AuthError> {
        SimulatedAuthenticator::new(Duration::ZERO)
            .sign_in(&Credentials::new(email, password))
            .await
    }

    #[tokio::test]
    async fn test_demo_account_signs_in() {
        let session = attempt("test@example.com", "password123").await.unwrap();
        assert_eq!(session.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_failure_outcomes() {
        assert_eq!(
            attempt("user@example.com", "wrongpass").await,
            Err(AuthError::CredentialsRejected)
        );
        assert_eq!(
            attempt("new@example.com", "whatever").await,
            Err(AuthError::UserNotFound)
        );
        assert_eq!(
            attempt("user@example.com", "password123").await,
            Err(AuthError::Unexpected)
        );
        assert_eq!(
            attempt("test@example.com", "password124").await,
            Err(AuthError::Unexpected)
        );
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let delay = Duration::from_millis(20);
        let authenticator = SimulatedAuthenticator::new(delay);
        let started = std::time::Instant::now();
        let _ = authenticator
            .sign_in(&Credentials::new("test@example.com", "password123"))
            .await;
        assert!(started.elapsed() >= delay);
    }
}
