//! Infrastructure layer - repository implementations

pub mod storage;

pub use storage::{InMemoryLaunchRepository, InMemoryUserRepository};
