use serde::{Deserialize, Serialize};

/// User model
///
/// The password is kept exactly as entered; there is no hashing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across all users
    pub email: String,
    pub password: String,
}
