//! The module contains the errors the engine can throw.
//!
//! Every variant except [`Database`] describes a condition the caller can fix
//! by correcting its input. The `Display` output of each variant is the
//! message shown to API clients.
//!
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Names of the absent fields are kept for logging only.
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),
    #[error("Missing required parameters. Please provide id, year, and month.")]
    MissingParameters,
    #[error("Invalid category")]
    InvalidCategory(String),
    #[error("Sum must not be negative")]
    NegativeSum(f64),
    #[error("Invalid sum: {0}")]
    InvalidAmount(String),
    #[error("Invalid year or month format")]
    InvalidPeriod(String),
    #[error("User not found")]
    UserNotFound(String),
    #[error("User ID already exists")]
    ExistingUser(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// `true` for every error caused by the request itself.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::MissingFields(_)
            | Self::MissingParameters
            | Self::InvalidCategory(_)
            | Self::NegativeSum(_)
            | Self::InvalidAmount(_)
            | Self::InvalidPeriod(_)
            | Self::ExistingUser(_) => true,
            Self::UserNotFound(_) | Self::Database(_) => false,
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingFields(a), Self::MissingFields(b)) => a == b,
            (Self::MissingParameters, Self::MissingParameters) => true,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::NegativeSum(a), Self::NegativeSum(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidPeriod(a), Self::InvalidPeriod(b)) => a == b,
            (Self::UserNotFound(a), Self::UserNotFound(b)) => a == b,
            (Self::ExistingUser(a), Self::ExistingUser(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_api_contract() {
        assert_eq!(
            EngineError::MissingFields(vec!["sum"]).to_string(),
            "Missing required fields"
        );
        assert_eq!(
            EngineError::InvalidCategory("cars".to_string()).to_string(),
            "Invalid category"
        );
        assert_eq!(
            EngineError::UserNotFound("1".to_string()).to_string(),
            "User not found"
        );
    }

    #[test]
    fn not_found_and_database_are_not_validation() {
        assert!(EngineError::NegativeSum(-1.0).is_validation());
        assert!(EngineError::MissingParameters.is_validation());
        assert!(EngineError::ExistingUser("1".to_string()).is_validation());
        assert!(EngineError::InvalidPeriod("month 13".to_string()).is_validation());
        assert!(!EngineError::UserNotFound("1".to_string()).is_validation());
        assert!(!EngineError::Database(DbErr::Custom("boom".to_string())).is_validation());
    }
}
