//! In-memory repository implementations

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, Launch, LaunchFilter, LaunchRepository, User,
    UserRepositoryInterface,
};

/// In-memory user store for development and testing
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    /// email -> user id, guards email uniqueness
    emails: DashMap<String, i64>,
    id_counter: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            id_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn save(&self, dto: CreateUserDto) -> DomainResult<User> {
        match self.emails.entry(dto.email.clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!(
                "Email {} already registered",
                dto.email
            ))),
            Entry::Vacant(slot) => {
                let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
                let user = User {
                    id,
                    name: dto.name,
                    email: dto.email,
                    password: dto.password,
                };
                // The email only resolves once the user row exists
                self.users.insert(id, user.clone());
                slot.insert(id);
                debug!(user_id = id, "User stored");
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let Some(id) = self.emails.get(email).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        Ok(self.emails.contains_key(email))
    }
}

/// In-memory launch store for development and testing
pub struct InMemoryLaunchRepository {
    launches: DashMap<i64, Launch>,
    id_counter: AtomicI64,
}

impl InMemoryLaunchRepository {
    pub fn new() -> Self {
        Self {
            launches: DashMap::new(),
            id_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryLaunchRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn launch_not_found(id: i64) -> DomainError {
    DomainError::NotFound {
        entity: "Launch",
        field: "id",
        value: id.to_string(),
    }
}

#[async_trait]
impl LaunchRepository for InMemoryLaunchRepository {
    async fn insert(&self, mut launch: Launch) -> DomainResult<Launch> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        launch.id = Some(id);
        self.launches.insert(id, launch.clone());
        debug!(launch_id = id, "Launch inserted");
        Ok(launch)
    }

    async fn update_by_id(&self, id: i64, mut launch: Launch) -> DomainResult<Launch> {
        let mut stored = self.launches.get_mut(&id).ok_or_else(|| launch_not_found(id))?;

        launch.id = Some(id);
        // Unset bookkeeping fields keep what was stored
        if launch.status.is_none() {
            launch.status = stored.status;
        }
        if launch.registered_on.is_none() {
            launch.registered_on = stored.registered_on;
        }

        *stored = launch.clone();
        debug!(launch_id = id, "Launch updated");
        Ok(launch)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.launches
            .remove(&id)
            .map(|_| debug!(launch_id = id, "Launch deleted"))
            .ok_or_else(|| launch_not_found(id))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Launch>> {
        Ok(self.launches.get(&id).map(|l| l.value().clone()))
    }

    async fn find_by_example(&self, filter: &LaunchFilter) -> DomainResult<Vec<Launch>> {
        let mut found: Vec<Launch> = self
            .launches
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by_key(|l| l.id);
        Ok(found)
    }
}
