//! Identity module — user registration & authentication
//!
//! Contains the `UserService` which checks credentials and email
//! availability and registers users.

pub mod service;

pub use service::UserService;
