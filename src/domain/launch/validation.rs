//! Required-field rules for launches

use rust_decimal::Decimal;
use thiserror::Error;

use super::model::Launch;

/// The first required field a launch fails on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid description")]
    InvalidDescription,
    #[error("invalid month")]
    InvalidMonth,
    #[error("invalid year")]
    InvalidYear,
    #[error("missing user")]
    MissingUser,
    #[error("invalid value")]
    InvalidValue,
    #[error("missing launch type")]
    MissingLaunchType,
}

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

/// Check a launch's required fields.
///
/// Fields are checked in a fixed order (description, month, year, user,
/// value, type) and the first failure is returned.
pub fn validate(launch: &Launch) -> Result<(), ValidationError> {
    if launch
        .description
        .as_deref()
        .map_or(true, |d| d.trim().is_empty())
    {
        return Err(ValidationError::InvalidDescription);
    }

    if !matches!(launch.month, Some(1..=12)) {
        return Err(ValidationError::InvalidMonth);
    }

    if !matches!(launch.year, Some(MIN_YEAR..=MAX_YEAR)) {
        return Err(ValidationError::InvalidYear);
    }

    if launch.user_id.is_none() {
        return Err(ValidationError::MissingUser);
    }

    if launch.value.map_or(true, |v| v <= Decimal::ZERO) {
        return Err(ValidationError::InvalidValue);
    }

    if launch.launch_type.is_none() {
        return Err(ValidationError::MissingLaunchType);
    }

    Ok(())
}
