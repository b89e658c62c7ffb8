pub mod memory;

pub use memory::{InMemoryLaunchRepository, InMemoryUserRepository};
