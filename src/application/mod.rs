pub mod identity;
pub mod ledger;

// Re-export key types for convenience
pub use identity::UserService;
pub use ledger::LaunchService;
