//! User service — registration and credential checks
//!
//! HTTP or CLI front ends should be thin wrappers that delegate here.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface};

pub const USER_NOT_FOUND: &str = "user not found for the given email";
pub const INVALID_PASSWORD: &str = "invalid password";
pub const EMAIL_TAKEN: &str = "a user is already registered with this email";

/// User service — orchestrates identity use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check an email/password pair and return the full user record.
    ///
    /// Passwords are compared as stored; matching credentials succeed.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            warn!(email, "Authentication failed: unknown email");
            return Err(DomainError::Unauthorized(USER_NOT_FOUND.into()));
        };

        if user.password != password {
            warn!(user_id = user.id, "Authentication failed: wrong password");
            return Err(DomainError::Unauthorized(INVALID_PASSWORD.into()));
        }

        Ok(user)
    }

    // ── Registration ────────────────────────────────────────────

    /// Fail if any user already has this email.
    pub async fn validate_email_available(&self, email: &str) -> DomainResult<()> {
        if self.repo.exists_by_email(email).await? {
            return Err(DomainError::Conflict(EMAIL_TAKEN.into()));
        }
        Ok(())
    }

    /// Register a new user after checking email availability.
    pub async fn register(&self, dto: CreateUserDto) -> DomainResult<User> {
        self.validate_email_available(&dto.email).await?;

        let user = self.repo.save(dto).await?;
        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn find_user_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryUserRepository;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    async fn seeded() -> (UserService<InMemoryUserRepository>, User) {
        let svc = service();
        let user = svc
            .register(CreateUserDto::new("user", "user@email.com", "123"))
            .await
            .unwrap();
        (svc, user)
    }

    #[tokio::test]
    async fn email_available_on_empty_store() {
        let svc = service();
        assert!(svc.validate_email_available("a@a.com").await.is_ok());
    }

    #[tokio::test]
    async fn email_taken_is_business_error() {
        let svc = service();
        svc.register(CreateUserDto::new("a", "a@a.com", "pw")).await.unwrap();

        let err = svc.validate_email_available("a@a.com").await.unwrap_err();
        assert_eq!(err, DomainError::Conflict(EMAIL_TAKEN.into()));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let (svc, _) = seeded().await;
        let err = svc
            .register(CreateUserDto::new("other", "user@email.com", "456"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict(EMAIL_TAKEN.into()));
    }

    #[tokio::test]
    async fn matching_credentials_authenticate() {
        let (svc, user) = seeded().await;
        let authed = svc.authenticate("user@email.com", "123").await.unwrap();
        assert_eq!(authed, user);
        // No redaction at this layer
        assert_eq!(authed.password, "123");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (svc, _) = seeded().await;
        let err = svc.authenticate("user@email.com", "124").await.unwrap_err();
        assert_eq!(err, DomainError::Unauthorized(INVALID_PASSWORD.into()));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let (svc, _) = seeded().await;
        let err = svc.authenticate("nobody@email.com", "123").await.unwrap_err();
        assert_eq!(err, DomainError::Unauthorized(USER_NOT_FOUND.into()));
    }

    #[tokio::test]
    async fn find_registered_user_by_id() {
        let (svc, user) = seeded().await;
        assert_eq!(svc.find_user_by_id(user.id).await.unwrap(), Some(user));
        assert_eq!(svc.find_user_by_id(999).await.unwrap(), None);
    }
}
