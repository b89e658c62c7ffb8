use async_trait::async_trait;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Persist a new user. Fails with `Conflict` if the email is taken.
    async fn save(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;
}
