//! Statement generation error types.

use chrono::NaiveDate;
use statera_shared::types::AccountId;
use thiserror::Error;

use crate::account::AccountCategory;

/// Errors that can occur during statement generation.
#[derive(Debug, Error)]
pub enum StatementError {
    /// An account's category has no entry in the classification map.
    ///
    /// Raised per account during classification; callers normally log and
    /// skip rather than abort.
    #[error("Account {account_id} has unmapped category '{category}'")]
    UnmappedCategory {
        /// The offending account.
        account_id: AccountId,
        /// The category with no classification entry.
        category: AccountCategory,
    },

    /// Accounts exist but none could be classified.
    #[error("No accounts could be classified; check account type definitions")]
    NoClassifiableAccounts,

    /// Balance or activity retrieval failed for an account.
    ///
    /// Aborts the whole report; partial figures are unsafe.
    #[error("Balance retrieval failed for account {account_id}: {message}")]
    Retrieval {
        /// The account whose balance could not be fetched.
        account_id: AccountId,
        /// Description of the underlying failure.
        message: String,
    },

    /// Account or account-type listing failed.
    #[error("Directory lookup failed: {0}")]
    Directory(String),

    /// Invalid date range (start after end).
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl StatementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnmappedCategory { .. } => "UNMAPPED_CATEGORY",
            Self::NoClassifiableAccounts => "NO_CLASSIFIABLE_ACCOUNTS",
            Self::Retrieval { .. } => "RETRIEVAL_FAILED",
            Self::Directory(_) => "DIRECTORY_FAILED",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
        }
    }

    /// Returns true if the error is a configuration problem rather than a
    /// retrieval failure.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnmappedCategory { .. } | Self::NoClassifiableAccounts
        )
    }
}

impl From<StatementError> for statera_shared::AppError {
    fn from(err: StatementError) -> Self {
        match &err {
            StatementError::UnmappedCategory { .. } | StatementError::NoClassifiableAccounts => {
                Self::Configuration(err.to_string())
            }
            StatementError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
            StatementError::Retrieval { .. } | StatementError::Directory(_) => {
                Self::ExternalService(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StatementError::NoClassifiableAccounts.error_code(),
            "NO_CLASSIFIABLE_ACCOUNTS"
        );
        assert_eq!(
            StatementError::Directory("down".into()).error_code(),
            "DIRECTORY_FAILED"
        );
        assert_eq!(
            StatementError::InvalidDateRange {
                start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            }
            .error_code(),
            "INVALID_DATE_RANGE"
        );
    }

    #[test]
    fn test_configuration_classification() {
        assert!(StatementError::NoClassifiableAccounts.is_configuration());
        assert!(StatementError::UnmappedCategory {
            account_id: AccountId::new(),
            category: AccountCategory::Asset,
        }
        .is_configuration());
        assert!(!StatementError::Directory("down".into()).is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = StatementError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: start 2024-02-01 is after end 2024-01-01"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        use statera_shared::AppError;

        let err: AppError = StatementError::NoClassifiableAccounts.into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");

        let err: AppError = StatementError::Retrieval {
            account_id: AccountId::new(),
            message: "timeout".into(),
        }
        .into();
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");

        let err: AppError = StatementError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
