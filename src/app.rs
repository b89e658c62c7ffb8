//! Application runtime context.
//!
//! [`AppContext`] wires repositories and services from an [`AppConfig`] so
//! front ends (the CLI, tests, an embedding service) do not repeat the
//! bootstrap.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::application::{LaunchService, UserService};
use crate::config::{AppConfig, LogFormat};
use crate::domain::{CreateUserDto, DomainError, User, UserRepositoryInterface};
use crate::infrastructure::{InMemoryLaunchRepository, InMemoryUserRepository};
use crate::shared::errors::AppResult;

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the application context.
pub struct AppOptions {
    pub config: AppConfig,
    /// Seed the configured default user (default: true).
    pub create_default_admin: bool,
}

impl AppOptions {
    /// Options backed by the config file at `path`, with seeding enabled.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        Ok(Self {
            config: AppConfig::load(path)?,
            create_default_admin: true,
        })
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            create_default_admin: true,
        }
    }
}

// ── AppContext ─────────────────────────────────────────────────────

pub struct AppContext {
    pub config: AppConfig,
    pub users: UserService<InMemoryUserRepository>,
    pub launches: LaunchService<InMemoryLaunchRepository>,
    /// The seeded default user, if one was created.
    pub admin: Option<User>,
}

impl AppContext {
    /// Build repositories and services, then seed the default user.
    pub async fn start(opts: AppOptions) -> AppResult<Self> {
        let config = opts.config;

        let user_repo = Arc::new(InMemoryUserRepository::new());
        let launch_repo = Arc::new(InMemoryLaunchRepository::new());

        let users = UserService::new(user_repo);
        let launches = LaunchService::new(launch_repo);

        let admin = if opts.create_default_admin && config.admin.enabled {
            create_default_admin(&users, &config).await?
        } else {
            None
        };

        info!("Finance ledger context ready");

        Ok(Self {
            config,
            users,
            launches,
            admin,
        })
    }
}

/// Register the configured default user unless its email is already taken.
async fn create_default_admin<R: UserRepositoryInterface>(
    users: &UserService<R>,
    config: &AppConfig,
) -> AppResult<Option<User>> {
    match users.validate_email_available(&config.admin.email).await {
        Ok(()) => {}
        Err(DomainError::Conflict(_)) => {
            info!("Default user {} already exists", config.admin.email);
            return Ok(None);
        }
        Err(e) => {
            error!("Failed to check default user email: {}", e);
            return Err(e.into());
        }
    }

    info!("Creating default user...");
    let dto = CreateUserDto::new(
        config.admin.name.clone(),
        config.admin.email.clone(),
        config.admin.password.clone(),
    );

    match users.register(dto).await {
        Ok(user) => {
            info!("Default user created: {}", user.email);
            Ok(Some(user))
        }
        Err(e) => {
            error!("Failed to create default user: {}", e);
            Err(e.into())
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{DomainResult, Launch, LaunchType};
    use crate::shared::errors::{AppError, ConfigError};

    /// A user store whose lookups always fail.
    struct UnreachableUsers;

    #[async_trait]
    impl UserRepositoryInterface for UnreachableUsers {
        async fn save(&self, _dto: CreateUserDto) -> DomainResult<User> {
            panic!("save must not be reached when the email lookup fails");
        }

        async fn find_by_email(&self, _email: &str) -> DomainResult<Option<User>> {
            Err(DomainError::Unauthorized("user store is locked".into()))
        }

        async fn find_by_id(&self, _id: i64) -> DomainResult<Option<User>> {
            Err(DomainError::Unauthorized("user store is locked".into()))
        }

        async fn exists_by_email(&self, _email: &str) -> DomainResult<bool> {
            Err(DomainError::Unauthorized("user store is locked".into()))
        }
    }

    #[tokio::test]
    async fn start_seeds_default_user() {
        let ctx = AppContext::start(AppOptions::default()).await.unwrap();
        let admin = ctx.admin.clone().unwrap();

        let authed = ctx
            .users
            .authenticate(&ctx.config.admin.email, &ctx.config.admin.password)
            .await
            .unwrap();
        assert_eq!(authed, admin);
    }

    #[tokio::test]
    async fn start_without_admin_leaves_store_empty() {
        let ctx = AppContext::start(AppOptions {
            config: AppConfig::default(),
            create_default_admin: false,
        })
        .await
        .unwrap();

        assert!(ctx.admin.is_none());
        assert!(ctx
            .users
            .validate_email_available(&ctx.config.admin.email)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn disabled_admin_section_skips_seeding() {
        let mut config = AppConfig::default();
        config.admin.enabled = false;

        let ctx = AppContext::start(AppOptions {
            config,
            create_default_admin: true,
        })
        .await
        .unwrap();
        assert!(ctx.admin.is_none());
    }

    #[tokio::test]
    async fn seeded_user_can_own_launches() {
        let ctx = AppContext::start(AppOptions::default()).await.unwrap();
        let admin = ctx.admin.unwrap();

        let launch = Launch::new("Salary", 1, 2022, admin.id, Decimal::from(10), LaunchType::Income);
        let stored = ctx.launches.create(launch).await.unwrap();
        assert_eq!(stored.user_id, Some(admin.id));
    }

    #[tokio::test]
    async fn existing_default_user_is_not_seeded_twice() {
        let config = AppConfig::default();
        let users = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let first = create_default_admin(&users, &config).await.unwrap();
        assert!(first.is_some());

        let second = create_default_admin(&users, &config).await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn store_failure_during_seeding_is_propagated() {
        let users = UserService::new(Arc::new(UnreachableUsers));

        let err = create_default_admin(&users, &AppConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Unauthorized(_))));
    }

    #[test]
    fn options_from_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("finance-ledger-no-such-dir/config.toml");
        let err = match AppOptions::from_file(&path) {
            Ok(_) => panic!("missing config file must fail"),
            Err(e) => e,
        };
        assert!(matches!(err, AppError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn options_from_file_enable_seeding() {
        let path = std::env::temp_dir().join(format!(
            "finance-ledger-options-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[admin]\nemail = \"owner@example.com\"\n").unwrap();

        let opts = AppOptions::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(opts.create_default_admin);
        assert_eq!(opts.config.admin.email, "owner@example.com");
    }
}
