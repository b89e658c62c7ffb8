pub mod launch;
pub mod user;

// Re-export commonly used types
pub use launch::{Launch, LaunchFilter, LaunchRepository, LaunchStatus, LaunchType, ValidationError};
pub use user::{CreateUserDto, User, UserRepositoryInterface};

pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
