//! Ledger module — launch lifecycle
//!
//! `LaunchService` validates launches and drives create, update, delete,
//! status changes and search through a `LaunchRepository`.

pub mod service;

pub use service::LaunchService;
