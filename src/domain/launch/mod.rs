//! Launch aggregate
//!
//! Contains the Launch entity, its required-field rules, search criteria
//! and the repository interface.

pub mod filter;
pub mod model;
pub mod repository;
pub mod validation;

pub use filter::LaunchFilter;
pub use model::{Launch, LaunchStatus, LaunchType};
pub use repository::LaunchRepository;
pub use validation::{validate, ValidationError};
