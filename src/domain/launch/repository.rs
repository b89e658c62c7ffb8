//! Launch repository interface

use async_trait::async_trait;

use super::filter::LaunchFilter;
use super::model::Launch;
use crate::domain::DomainResult;

#[async_trait]
pub trait LaunchRepository: Send + Sync {
    /// Store a new launch and return it with its assigned id.
    async fn insert(&self, launch: Launch) -> DomainResult<Launch>;
    /// Replace the stored launch with the given id.
    async fn update_by_id(&self, id: i64, launch: Launch) -> DomainResult<Launch>;
    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Launch>>;
    async fn find_by_example(&self, filter: &LaunchFilter) -> DomainResult<Vec<Launch>>;
}
