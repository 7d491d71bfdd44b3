// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Utc;

use quill_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use quill_core::application::error::{ApplicationError, ApplicationResult};
use quill_core::application::ports::security::{PasswordHasher, TokenManager};

/// Reversible stand-in for argon2 so credential flows stay observable.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Token manager whose tokens are just the username, for asserting on what
/// was issued without real cryptography.
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        Ok(AuthTokenDto {
            token: format!("token-for:{}", subject.username),
            issued_at,
            expires_at: issued_at + chrono::Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized(format!(
            "dummy manager cannot authenticate '{token}'"
        )))
    }
}
