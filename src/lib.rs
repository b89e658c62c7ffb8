//! # Finance Ledger
//!
//! Personal finance tracking core: income and expense launches with a
//! pending / confirmed / cancelled workflow, plus user credential checks.
//!
//! ## Architecture
//!
//! - **domain**: Launch and User entities, launch validation rules, search
//!   criteria and repository traits
//! - **application**: `LaunchService` (launch lifecycle) and `UserService`
//!   (registration and authentication)
//! - **infrastructure**: in-memory repository implementations
//! - **shared**: error types
//! - **app**: runtime context and tracing setup

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::{init_tracing, AppContext, AppOptions};
pub use config::{default_config_path, AppConfig};
pub use shared::errors::{AppError, AppResult, ContractViolation, DomainError};
