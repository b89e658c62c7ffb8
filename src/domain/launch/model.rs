//! Launch domain entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a launch adds to or takes from the owner's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchType {
    Income,
    Expense,
}

impl LaunchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// Launch workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchStatus {
    /// Recorded but not yet settled
    #[default]
    Pending,
    /// Settled
    Confirmed,
    /// Voided by the owner
    Cancelled,
}

impl LaunchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A single income or expense record.
///
/// Every field is optional: the same shape carries unsaved launches,
/// persisted launches and partially filled search templates. The validator
/// decides whether a launch is complete enough to persist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Launch {
    /// Assigned by the repository on first insert
    pub id: Option<i64>,
    pub description: Option<String>,
    /// 1..=12
    pub month: Option<u32>,
    /// Four-digit year
    pub year: Option<i32>,
    /// Owning user
    pub user_id: Option<i64>,
    pub value: Option<Decimal>,
    #[serde(rename = "type")]
    pub launch_type: Option<LaunchType>,
    pub status: Option<LaunchStatus>,
    pub registered_on: Option<NaiveDate>,
}

impl Launch {
    /// Build an unsaved launch with every required field set.
    pub fn new(
        description: impl Into<String>,
        month: u32,
        year: i32,
        user_id: i64,
        value: Decimal,
        launch_type: LaunchType,
    ) -> Self {
        Self {
            id: None,
            description: Some(description.into()),
            month: Some(month),
            year: Some(year),
            user_id: Some(user_id),
            value: Some(value),
            launch_type: Some(launch_type),
            status: None,
            registered_on: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
