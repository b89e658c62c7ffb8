use thiserror::Error;

use crate::domain::launch::ValidationError;

/// Recoverable business-rule violations. The message is meant for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    InvalidLaunch(#[from] ValidationError),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A caller broke an operation's precondition, e.g. updating a launch that
/// was never persisted. Never converted into a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Contract violation in {operation}: {reason}")]
pub struct ContractViolation {
    pub operation: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything an application entry point can fail with. A
/// [`ContractViolation`] is a programming error, not a business outcome.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;
