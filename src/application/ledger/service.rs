//! Launch lifecycle service
//!
//! Every operation goes straight through the repository; nothing is cached
//! between calls.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info};

use crate::domain::launch::validate;
use crate::domain::{DomainError, Launch, LaunchFilter, LaunchRepository, LaunchStatus};
use crate::shared::errors::{AppResult, ContractViolation};

pub struct LaunchService<R: LaunchRepository> {
    repo: Arc<R>,
}

impl<R: LaunchRepository> LaunchService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and store a new launch. Status defaults to pending and the
    /// registration date to today.
    pub async fn create(&self, mut launch: Launch) -> AppResult<Launch> {
        if launch.is_persisted() {
            return Err(ContractViolation {
                operation: "create",
                reason: "launch already has an id",
            }
            .into());
        }

        validate(&launch).map_err(DomainError::from)?;

        launch.status.get_or_insert(LaunchStatus::Pending);
        launch
            .registered_on
            .get_or_insert_with(|| Local::now().date_naive());

        let stored = self.repo.insert(launch).await?;
        info!(launch_id = ?stored.id, user_id = ?stored.user_id, "Launch created");
        Ok(stored)
    }

    /// Validate and overwrite a persisted launch.
    pub async fn update(&self, launch: Launch) -> AppResult<Launch> {
        let id = require_id(&launch, "update")?;

        validate(&launch).map_err(DomainError::from)?;

        Ok(self.repo.update_by_id(id, launch).await?)
    }

    pub async fn delete(&self, launch: &Launch) -> AppResult<()> {
        let id = require_id(launch, "delete")?;

        self.repo.delete_by_id(id).await?;
        info!(launch_id = id, "Launch deleted");
        Ok(())
    }

    /// Move a launch to `status` and persist it through [`Self::update`].
    pub async fn change_status(&self, mut launch: Launch, status: LaunchStatus) -> AppResult<Launch> {
        debug!(launch_id = ?launch.id, from = ?launch.status, to = status.as_str(), "Changing launch status");
        launch.status = Some(status);
        self.update(launch).await
    }

    pub async fn search(&self, filter: &LaunchFilter) -> AppResult<Vec<Launch>> {
        Ok(self.repo.find_by_example(filter).await?)
    }

    /// Search using a partially filled launch as the example.
    pub async fn search_by_template(&self, template: &Launch) -> AppResult<Vec<Launch>> {
        self.search(&LaunchFilter::from(template)).await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Launch>> {
        Ok(self.repo.find_by_id(id).await?)
    }
}

fn require_id(launch: &Launch, operation: &'static str) -> Result<i64, ContractViolation> {
    launch.id.ok_or(ContractViolation {
        operation,
        reason: "launch has no id",
    })
}
